use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use flavorshare_core::model::Recipe;

use crate::app::App;

pub struct RecipeCard;

impl RecipeCard {
    pub fn render(app: Arc<App>, recipe: Recipe) -> Dom {
        let id = recipe.id;

        html!("div", {
            .class(["card", "bg-base-100", "shadow-md", "hover:shadow-xl", "transition-shadow", "cursor-pointer"])
            .event(clone!(app => move |_: events::Click| {
                app.controller.select_recipe(id);
            }))
            .children(&mut [
                html!("figure", {
                    .class(["relative", "h-48", "overflow-hidden"])
                    .children(&mut [
                        html!("img", {
                            .class(["w-full", "h-full", "object-cover"])
                            .attr("src", &recipe.image_url)
                            .attr("alt", &recipe.title)
                        }),
                        html!("span", {
                            .class(["badge", "badge-primary", "absolute", "top-2", "left-2"])
                            .text(recipe.category.label())
                        }),
                        html!("button", {
                            .class(["btn", "btn-circle", "btn-sm", "absolute", "top-2", "right-2"])
                            .attr("type", "button")
                            .text(if recipe.liked { "♥" } else { "♡" })
                            .event(clone!(app => move |e: events::Click| {
                                e.stop_propagation();
                                app.controller.toggle_like(id);
                            }))
                        }),
                    ])
                }),
                html!("div", {
                    .class(["card-body", "p-4"])
                    .children(&mut [
                        html!("h3", {
                            .class(["card-title", "text-lg"])
                            .text(&recipe.title)
                        }),
                        html!("p", {
                            .class(["text-sm", "text-stone-600", "line-clamp-2"])
                            .text(&recipe.description)
                        }),
                        html!("div", {
                            .class(["flex", "justify-between", "text-sm", "text-stone-500", "mt-2"])
                            .children(&mut [
                                html!("span", { .text(&format!("⏱ {} min", recipe.cook_time)) }),
                                html!("span", { .text(&format!("👥 {}", recipe.servings)) }),
                                html!("span", { .text(recipe.difficulty.label()) }),
                            ])
                        }),
                        html!("div", {
                            .class(["flex", "justify-between", "text-sm", "mt-2"])
                            .children(&mut [
                                html!("span", {
                                    .class(["text-amber-500"])
                                    .text(&format!("★ {:.1} ({})", recipe.rating, recipe.review_count))
                                }),
                                html!("span", {
                                    .class(["text-stone-500"])
                                    .text(&format!("by {}", recipe.author_display_name))
                                }),
                            ])
                        }),
                    ])
                }),
            ])
        })
    }
}
