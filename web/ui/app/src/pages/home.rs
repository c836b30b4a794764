use std::sync::Arc;

use dominator::{clone, events, html, with_node, Dom};
use flavorshare_core::model::CategoryFilter;
use flavorshare_core::store::FetchState;
use futures_signals::map_ref;
use futures_signals::signal::{Signal, SignalExt};
use futures_signals::signal_vec::SignalVecExt;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::app::App;
use crate::components::loading::loading_indicator;
use crate::components::recipe_card::RecipeCard;

pub struct HomePage;

impl HomePage {
    pub fn render(app: Arc<App>) -> Dom {
        html!("section", {
            .class(["space-y-6"])
            .children(&mut [
                Self::render_hero(),
                Self::render_filters(app.clone()),
                Self::render_fetch_state(app.clone()),
                Self::render_grid(app),
            ])
        })
    }

    fn render_hero() -> Dom {
        html!("div", {
            .class(["text-center", "py-6"])
            .children(&mut [
                html!("h1", {
                    .class(["text-4xl", "font-bold", "text-stone-800"])
                    .text("Discover Delicious Recipes")
                }),
                html!("p", {
                    .class(["text-stone-500", "mt-2"])
                    .text("Share your favourite dishes and find your next meal")
                }),
            ])
        })
    }

    fn render_filters(app: Arc<App>) -> Dom {
        let controller = app.controller.clone();

        html!("div", {
            .class(["flex", "flex-col", "md:flex-row", "gap-4"])
            .children(&mut [
                html!("input" => HtmlInputElement, {
                    .class(["input", "input-bordered", "flex-1"])
                    .attr("type", "search")
                    .attr("placeholder", "Search recipes...")
                    .prop_signal("value", controller.search_term.signal_cloned())
                    .with_node!(input => {
                        .event(clone!(controller => move |_: events::Input| {
                            controller.search_term.set_neq(input.value());
                        }))
                    })
                }),
                html!("select" => HtmlSelectElement, {
                    .class(["select", "select-bordered"])
                    .children(CategoryFilter::options().map(|option| {
                        html!("option", {
                            .attr("value", option.value())
                            .text(option.label())
                        })
                    }))
                    .prop_signal("value", controller.category.signal().map(|category| category.value()))
                    .with_node!(select => {
                        .event(clone!(controller => move |_: events::Change| {
                            controller.category.set_neq(CategoryFilter::from_value(&select.value()));
                        }))
                    })
                }),
                html!("button", {
                    .class(["btn", "btn-primary"])
                    .text("+ Add Recipe")
                    .event(clone!(controller => move |_: events::Click| {
                        controller.open_add_recipe();
                    }))
                }),
            ])
        })
    }

    fn render_fetch_state(app: Arc<App>) -> Dom {
        let controller = app.controller.clone();

        html!("div", {
            .child(html!("div", {
                .class(["flex", "justify-center"])
                .child(loading_indicator(controller.store.fetch_state.signal_ref(|state| *state == FetchState::Loading)))
            }))
            .child_signal(controller.store.fetch_state.signal_cloned().map(clone!(controller => move |state| {
                match state {
                    FetchState::Failed(message) => Some(html!("div", {
                        .class(["alert", "alert-error", "flex", "justify-between"])
                        .children(&mut [
                            html!("span", {
                                .text(&format!("Failed to load recipes: {}", message))
                            }),
                            html!("button", {
                                .class(["btn", "btn-sm"])
                                .text("Retry")
                                .event(clone!(controller => move |_: events::Click| {
                                    spawn_local(clone!(controller => async move {
                                        controller.refresh().await;
                                    }));
                                }))
                            }),
                        ])
                    })),
                    _ => None,
                }
            })))
        })
    }

    fn render_grid(app: Arc<App>) -> Dom {
        let controller = app.controller.clone();

        html!("div", {
            .children(&mut [
                html!("div", {
                    .class(["grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-6"])
                    .children_signal_vec(controller.filtered_recipes_signal().to_signal_vec().map(clone!(app => move |recipe| {
                        RecipeCard::render(app.clone(), recipe)
                    })))
                }),
            ])
            .child_signal(empty_notice(app))
        })
    }
}

fn empty_notice(app: Arc<App>) -> impl Signal<Item = Option<Dom>> {
    let controller = app.controller.clone();
    map_ref! {
        let recipes = controller.filtered_recipes_signal(),
        let state = controller.store.fetch_state.signal_cloned() =>
        if recipes.is_empty() && *state == FetchState::Ready {
            Some(html!("p", {
                .class(["text-center", "text-stone-500", "py-12"])
                .text("No recipes found. Try a different search or category.")
            }))
        } else {
            None
        }
    }
}
