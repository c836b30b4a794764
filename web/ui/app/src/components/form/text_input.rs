use std::sync::Arc;

use dominator::{events, html, with_node, Dom};
use futures_signals::signal::Mutable;
use web_sys::HtmlInputElement;

/// Labelled single-line input bound to a `Mutable<String>`.
pub struct TextInput {
    pub value: Mutable<String>,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
}

impl TextInput {
    pub fn new(value: Mutable<String>, label: &'static str, placeholder: &'static str) -> Arc<Self> {
        Arc::new(Self {
            value,
            label,
            placeholder,
            input_type: "text",
        })
    }

    pub fn with_type(value: Mutable<String>, label: &'static str, placeholder: &'static str, input_type: &'static str) -> Arc<Self> {
        Arc::new(Self {
            value,
            label,
            placeholder,
            input_type,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let value = self.value.clone();

        html!("div", {
            .class(["form-control", "w-full", "mt-2"])
            .children(&mut [
                html!("label", {
                    .class(["label"])
                    .child(html!("span", {
                        .class(["label-text"])
                        .text(self.label)
                    }))
                }),
                html!("input" => HtmlInputElement, {
                    .class(["input", "input-bordered", "w-full"])
                    .attr("type", self.input_type)
                    .attr("placeholder", self.placeholder)
                    .prop_signal("value", self.value.signal_cloned())
                    .with_node!(input => {
                        .event(move |_: events::Input| {
                            value.set_neq(input.value());
                        })
                    })
                })
            ])
        })
    }
}
