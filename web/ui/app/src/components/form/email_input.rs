use std::sync::Arc;

use dominator::{events, html, with_node, Dom};
use flavorshare_core::validation;
use futures_signals::signal::Mutable;
use web_sys::HtmlInputElement;

pub struct EmailInput {
    pub email: Mutable<String>,
    pub on_enter: Option<Box<dyn Fn()>>,
}

impl EmailInput {
    pub fn new(email: Mutable<String>, on_enter: Option<Box<dyn Fn()>>) -> Arc<Self> {
        Arc::new(Self { email, on_enter })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.clone();
        let state_for_keydown = state.clone();
        let email = state.email.clone();

        html!("div", {
            .class(["form-control", "w-full"])
            .children(&mut [
                html!("label", {
                    .class(["label"])
                    .child(html!("span", {
                        .class(["label-text"])
                        .text("Email address")
                    }))
                }),
                html!("input" => HtmlInputElement, {
                    .class(["input", "input-bordered", "w-full"])
                    .class_signal("input-error", state.email.signal_ref(|email| {
                        !email.is_empty() && !validation::is_valid_email(email)
                    }))
                    .attr("type", "email")
                    .attr("placeholder", "you@example.com")
                    .prop_signal("value", state.email.signal_cloned())
                    .with_node!(input => {
                        .event(move |_: events::Input| {
                            email.set_neq(input.value());
                        })
                        .event(move |e: events::KeyDown| {
                            if e.key() == "Enter" && validation::is_valid_email(&state_for_keydown.email.get_cloned()) {
                                if let Some(callback) = &state_for_keydown.on_enter {
                                    callback();
                                }
                            }
                        })
                    })
                })
            ])
        })
    }
}
