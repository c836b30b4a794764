use std::sync::Arc;

use dominator::{clone, events, html, with_node, Dom};
use flavorshare_core::model::{Category, Difficulty, RecipeDraft};
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};

use super::state::RecipeFormState;
use crate::app::App;
use crate::components::form::{LineList, TextInput};
use crate::components::loading::{busy_text, disabled_when};
use crate::components::modal::modal_shell;

pub struct RecipeFormModal;

impl RecipeFormModal {
    pub fn render_add_slot(app: Arc<App>) -> Dom {
        html!("div", {
            .child_signal(app.controller.add_recipe_open.signal().map(clone!(app => move |open| {
                open.then(|| Self::render(RecipeFormState::new(app.clone(), None, RecipeDraft::default())))
            })))
        })
    }

    pub fn render_edit_slot(app: Arc<App>) -> Dom {
        html!("div", {
            .child_signal(app.controller.editing.signal_cloned().map(clone!(app => move |session| {
                session.map(|session| Self::render(RecipeFormState::new(app.clone(), Some(session.id), session.draft)))
            })))
        })
    }

    fn render(state: Arc<RecipeFormState>) -> Dom {
        let title = if state.editing.is_some() { "Edit Recipe" } else { "Share a Recipe" };

        let body = html!("div", {
            .class(["space-y-4"])
            .children(&mut [
                TextInput::new(state.title.clone(), "Title", "Grandma's apple pie").render(),
                render_description(state.description.clone()),
                html!("div", {
                    .class(["grid", "grid-cols-2", "gap-4"])
                    .children(&mut [
                        TextInput::with_type(state.cook_time.clone(), "Cook time (minutes)", "30", "number").render(),
                        TextInput::with_type(state.servings.clone(), "Servings", "2", "number").render(),
                        render_select(
                            "Difficulty",
                            Difficulty::ALL.iter().map(|d| (d.server_value(), d.label())).collect(),
                            state.difficulty.clone(),
                            |d| d.server_value(),
                            Difficulty::from_server_value,
                        ),
                        render_select(
                            "Category",
                            Category::ALL.iter().map(|c| (c.server_value(), c.label())).collect(),
                            state.category.clone(),
                            |c| c.server_value(),
                            Category::from_server_value,
                        ),
                    ])
                }),
                TextInput::with_type(state.image.clone(), "Image URL", "https://...", "url").render(),
                LineList::render(state.ingredients.clone(), "Ingredients", "e.g. 2 cups flour", "+ Add Ingredient"),
                LineList::render(state.instructions.clone(), "Instructions", "Describe this step", "+ Add Step"),
                Self::render_actions(state.clone()),
            ])
        });

        modal_shell(title, body, clone!(state => move || state.close()))
    }

    fn render_actions(state: Arc<RecipeFormState>) -> Dom {
        let busy = state.app.controller.busy.clone();
        let (idle, working) = if state.editing.is_some() {
            ("Save Changes", "Saving...")
        } else {
            ("Publish Recipe", "Publishing...")
        };

        html!("div", {
            .class(["flex", "justify-end", "gap-2", "pt-4"])
            .children(&mut [
                html!("button", {
                    .class(["btn", "btn-ghost"])
                    .attr("type", "button")
                    .text("Cancel")
                    .event(clone!(state => move |_: events::Click| state.close()))
                }),
                html!("button", {
                    .class(["btn", "btn-primary"])
                    .attr("type", "button")
                    .attr_signal("disabled", disabled_when(busy.signal()))
                    .text_signal(busy_text(busy.signal(), idle, working))
                    .event(clone!(state => move |_: events::Click| {
                        let draft = state.draft();
                        let controller = state.app.controller.clone();
                        let editing = state.editing;
                        spawn_local(async move {
                            match editing {
                                Some(id) => controller.update_recipe(id, &draft).await,
                                None => controller.create_recipe(&draft).await,
                            };
                        });
                    }))
                }),
            ])
        })
    }
}

fn render_description(description: Mutable<String>) -> Dom {
    html!("div", {
        .class(["form-control", "w-full"])
        .children(&mut [
            html!("label", {
                .class(["label"])
                .child(html!("span", {
                    .class(["label-text"])
                    .text("Description")
                }))
            }),
            html!("textarea" => HtmlTextAreaElement, {
                .class(["textarea", "textarea-bordered", "w-full", "h-24"])
                .attr("placeholder", "What makes this dish special?")
                .prop_signal("value", description.signal_cloned())
                .with_node!(input => {
                    .event(clone!(description => move |_: events::Input| {
                        description.set_neq(input.value());
                    }))
                })
            }),
        ])
    })
}

fn render_select<T, V, P>(label: &str, options: Vec<(&'static str, &'static str)>, selected: Mutable<T>, value_of: V, parse: P) -> Dom
where
    T: Copy + PartialEq + 'static,
    V: Fn(T) -> &'static str + 'static,
    P: Fn(&str) -> Option<T> + 'static,
{
    html!("div", {
        .class(["form-control", "w-full", "mt-2"])
        .children(&mut [
            html!("label", {
                .class(["label"])
                .child(html!("span", {
                    .class(["label-text"])
                    .text(label)
                }))
            }),
            html!("select" => HtmlSelectElement, {
                .class(["select", "select-bordered", "w-full"])
                .children(options.into_iter().map(|(value, text)| {
                    html!("option", {
                        .attr("value", value)
                        .text(text)
                    })
                }))
                .prop_signal("value", selected.signal().map(value_of))
                .with_node!(select => {
                    .event(clone!(selected => move |_: events::Change| {
                        if let Some(value) = parse(&select.value()) {
                            selected.set_neq(value);
                        }
                    }))
                })
            }),
        ])
    })
}
