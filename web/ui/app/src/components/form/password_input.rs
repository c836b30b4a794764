use std::sync::Arc;

use dominator::{clone, events, html, with_node, Dom};
use flavorshare_core::validation;
use futures_signals::signal::{Mutable, SignalExt};
use web_sys::HtmlInputElement;

pub struct PasswordInput {
    pub password: Mutable<String>,
    pub visible: Mutable<bool>,
    /// Signup shows the strength checklist; login does not.
    pub show_requirements: bool,
}

impl PasswordInput {
    pub fn new(password: Mutable<String>, show_requirements: bool) -> Arc<Self> {
        Arc::new(Self {
            password,
            visible: Mutable::new(false),
            show_requirements,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.clone();

        html!("div", {
            .class(["form-control", "w-full", "mt-2"])
            .children(&mut [
                html!("label", {
                    .class(["label"])
                    .child(html!("span", {
                        .class(["label-text"])
                        .text("Password")
                    }))
                }),
                html!("div", {
                    .class(["relative"])
                    .children(&mut [
                        html!("input" => HtmlInputElement, {
                            .class(["input", "input-bordered", "w-full", "pr-16"])
                            .attr_signal("type", state.visible.signal().map(|visible| if visible { "text" } else { "password" }))
                            .attr("placeholder", "Enter your password")
                            .prop_signal("value", state.password.signal_cloned())
                            .with_node!(input => {
                                .event(clone!(state => move |_: events::Input| {
                                    state.password.set_neq(input.value());
                                }))
                            })
                        }),
                        html!("button", {
                            .class(["btn", "btn-ghost", "btn-xs", "absolute", "right-2", "top-3"])
                            .attr("type", "button")
                            .text_signal(state.visible.signal().map(|visible| if visible { "Hide" } else { "Show" }))
                            .event(clone!(state => move |_: events::Click| {
                                state.visible.replace_with(|visible| !*visible);
                            }))
                        }),
                    ])
                }),
            ])
            .apply_if(state.show_requirements, |dom| dom.child(Self::render_requirements(state.clone())))
        })
    }

    fn render_requirements(state: Arc<Self>) -> Dom {
        html!("div", {
            .class(["mt-2", "space-y-1"])
            .child_signal(state.password.signal_ref(|password| {
                if password.is_empty() || validation::is_strong_password(password) {
                    return None;
                }
                let rule = |ok: bool, text: &'static str| {
                    html!("div", {
                        .class(["text-xs", "text-error"])
                        .text(text)
                        .style("display", if ok { "none" } else { "block" })
                    })
                };
                Some(html!("div", {
                    .class(["space-y-1"])
                    .children(&mut [
                        rule(validation::has_minimum_length(password), "• Minimum 8 characters"),
                        rule(validation::has_lowercase(password), "• At least one lowercase letter"),
                        rule(validation::has_uppercase(password), "• At least one uppercase letter"),
                        rule(validation::has_number(password), "• At least one number"),
                        rule(validation::has_symbol(password), "• At least one of @$!%*?&"),
                        rule(validation::has_allowed_chars_only(password), "• Only letters, numbers and @$!%*?&"),
                    ])
                }))
            }))
        })
    }
}
