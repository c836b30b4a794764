use std::sync::Arc;

use dominator::{clone, events, html, with_node, Dom};
use flavorshare_core::model::{Comment, Recipe, RecipeId};
use flavorshare_core::Controller;
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;

use crate::app::{confirm, App};
use crate::components::loading::{busy_text, disabled_when};

pub struct DetailPage;

impl DetailPage {
    pub fn render(app: Arc<App>) -> Dom {
        html!("section", {
            .class(["max-w-4xl", "mx-auto", "space-y-6"])
            .child(html!("button", {
                .class(["btn", "btn-ghost", "btn-sm"])
                .text("← Back to recipes")
                .event(clone!(app => move |_: events::Click| {
                    app.controller.back();
                }))
            }))
            .child_signal(app.controller.selected.signal_cloned().map(clone!(app => move |recipe| {
                recipe.map(|recipe| Self::render_recipe(app.clone(), recipe))
            })))
        })
    }

    fn render_recipe(app: Arc<App>, recipe: Recipe) -> Dom {
        html!("article", {
            .class(["card", "bg-base-100", "shadow-lg", "overflow-hidden"])
            .children(&mut [
                html!("img", {
                    .class(["w-full", "h-80", "object-cover"])
                    .attr("src", &recipe.image_url)
                    .attr("alt", &recipe.title)
                }),
                html!("div", {
                    .class(["card-body", "space-y-4"])
                    .children(&mut [
                        Self::render_heading(app.clone(), &recipe),
                        Self::render_facts(&recipe),
                        Self::render_list("Ingredients", "ul", &recipe.ingredients),
                        Self::render_list("Instructions", "ol", &recipe.instructions),
                        Self::render_comments(app, &recipe),
                    ])
                }),
            ])
        })
    }

    fn render_heading(app: Arc<App>, recipe: &Recipe) -> Dom {
        let controller = app.controller.clone();
        let id = recipe.id;

        html!("div", {
            .class(["flex", "flex-wrap", "items-start", "justify-between", "gap-4"])
            .children(&mut [
                html!("div", {
                    .children(&mut [
                        html!("span", {
                            .class(["badge", "badge-primary"])
                            .text(recipe.category.label())
                        }),
                        html!("h1", {
                            .class(["text-3xl", "font-bold", "mt-2"])
                            .text(&recipe.title)
                        }),
                        html!("p", {
                            .class(["text-stone-500"])
                            .text(&format!("by {}", recipe.author_display_name))
                        }),
                    ])
                }),
                html!("div", {
                    .class(["flex", "gap-2"])
                    .child(html!("button", {
                        .class(["btn", "btn-outline", "btn-sm"])
                        .text(if recipe.liked { "♥ Liked" } else { "♡ Like" })
                        .event(clone!(controller => move |_: events::Click| {
                            controller.toggle_like(id);
                        }))
                    }))
                    .child_signal(controller.owns_selected_signal().map(clone!(controller => move |owned| {
                        owned.then(|| Self::render_owner_actions(controller.clone(), id))
                    })))
                }),
            ])
        })
    }

    fn render_owner_actions(controller: Arc<Controller>, id: RecipeId) -> Dom {
        html!("div", {
            .class(["flex", "gap-2"])
            .children(&mut [
                html!("button", {
                    .class(["btn", "btn-secondary", "btn-sm"])
                    .text("Edit")
                    .event(clone!(controller => move |_: events::Click| {
                        controller.begin_edit(id);
                    }))
                }),
                html!("button", {
                    .class(["btn", "btn-error", "btn-sm"])
                    .attr_signal("disabled", disabled_when(controller.busy.signal()))
                    .text_signal(busy_text(controller.busy.signal(), "Delete", "Deleting..."))
                    .event(clone!(controller => move |_: events::Click| {
                        if !confirm("Are you sure you want to delete this recipe?") {
                            return;
                        }
                        spawn_local(clone!(controller => async move {
                            controller.delete_recipe(id).await;
                        }));
                    }))
                }),
            ])
        })
    }

    fn render_facts(recipe: &Recipe) -> Dom {
        let fact = |label: &str, value: String| {
            html!("div", {
                .class(["stat", "p-2"])
                .children(&mut [
                    html!("div", { .class(["stat-title"]).text(label) }),
                    html!("div", { .class(["stat-value", "text-lg"]).text(&value) }),
                ])
            })
        };

        html!("div", {
            .children(&mut [
                html!("p", {
                    .class(["text-stone-700"])
                    .text(&recipe.description)
                }),
                html!("div", {
                    .class(["stats", "stats-vertical", "md:stats-horizontal", "shadow", "w-full", "mt-4"])
                    .children(&mut [
                        fact("Cook time", format!("{} min", recipe.cook_time)),
                        fact("Servings", recipe.servings.to_string()),
                        fact("Difficulty", recipe.difficulty.label().to_string()),
                        fact("Rating", format!("★ {:.1} ({} reviews)", recipe.rating, recipe.review_count)),
                        fact("Likes", recipe.like_count.to_string()),
                    ])
                }),
            ])
        })
    }

    fn render_list(heading: &str, tag: &str, items: &[String]) -> Dom {
        html!("div", {
            .children(&mut [
                html!("h2", {
                    .class(["text-xl", "font-semibold", "mb-2"])
                    .text(heading)
                }),
                html!(tag, {
                    .class(["list-inside", "space-y-1", if tag == "ol" { "list-decimal" } else { "list-disc" }])
                    .children(items.iter().map(|item| html!("li", { .text(item) })))
                }),
            ])
        })
    }

    fn render_comments(app: Arc<App>, recipe: &Recipe) -> Dom {
        let controller = app.controller.clone();
        let draft = Mutable::new(String::new());
        let id = recipe.id;

        html!("div", {
            .class(["space-y-3"])
            .children(&mut [
                html!("h2", {
                    .class(["text-xl", "font-semibold"])
                    .text(&format!("Comments ({})", recipe.comments.len()))
                }),
                html!("div", {
                    .class(["flex", "gap-2"])
                    .children(&mut [
                        html!("textarea" => HtmlTextAreaElement, {
                            .class(["textarea", "textarea-bordered", "flex-1"])
                            .attr("placeholder", "Share your thoughts...")
                            .prop_signal("value", draft.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(draft => move |_: events::Input| {
                                    draft.set_neq(input.value());
                                }))
                            })
                        }),
                        html!("button", {
                            .class(["btn", "btn-primary"])
                            .text("Post")
                            .event(clone!(controller, draft => move |_: events::Click| {
                                if controller.add_comment(id, &draft.get_cloned()) {
                                    draft.set(String::new());
                                }
                            }))
                        }),
                    ])
                }),
            ])
            .children(recipe.comments.iter().map(render_comment))
        })
    }
}

fn render_comment(comment: &Comment) -> Dom {
    html!("div", {
        .class(["bg-stone-100", "rounded-lg", "p-3"])
        .children(&mut [
            html!("div", {
                .class(["flex", "justify-between", "text-sm"])
                .children(&mut [
                    html!("span", { .class(["font-semibold"]).text(&comment.author_username) }),
                    html!("span", { .class(["text-stone-400"]).text(&comment.timestamp) }),
                ])
            }),
            html!("p", {
                .class(["mt-1"])
                .text(&comment.text)
            }),
        ])
    })
}
