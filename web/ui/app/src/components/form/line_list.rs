use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use web_sys::HtmlInputElement;

/// Editable ordered list of text lines (ingredients, instructions).
pub struct LineList;

impl LineList {
    pub fn render(lines: MutableVec<Mutable<String>>, heading: &'static str, placeholder: &'static str, add_label: &'static str) -> Dom {
        html!("div", {
            .class(["space-y-2"])
            .children(&mut [
                html!("h3", {
                    .class(["font-semibold", "text-stone-700"])
                    .text(heading)
                }),
                html!("div", {
                    .class(["space-y-2"])
                    .children_signal_vec(lines.signal_vec_cloned().enumerate().map(clone!(lines => move |(index, line)| {
                        html!("div", {
                            .class(["flex", "gap-2"])
                            .children(&mut [
                                html!("span", {
                                    .class(["text-sm", "text-stone-400", "w-6", "pt-3"])
                                    .text_signal(index.signal().map(|i| i.map(|i| format!("{}.", i + 1)).unwrap_or_default()))
                                }),
                                html!("input" => HtmlInputElement, {
                                    .class(["input", "input-bordered", "flex-1"])
                                    .attr("type", "text")
                                    .attr("placeholder", placeholder)
                                    .prop_signal("value", line.signal_cloned())
                                    .with_node!(input => {
                                        .event(clone!(line => move |_: events::Input| {
                                            line.set_neq(input.value());
                                        }))
                                    })
                                }),
                                html!("button", {
                                    .class(["btn", "btn-ghost", "btn-sm"])
                                    .attr("type", "button")
                                    .text("✕")
                                    .event(clone!(lines, index => move |_: events::Click| {
                                        let mut lines = lines.lock_mut();
                                        // Keep at least one row to type into.
                                        if lines.len() > 1 {
                                            if let Some(i) = index.get() {
                                                lines.remove(i);
                                            }
                                        }
                                    }))
                                }),
                            ])
                        })
                    })))
                }),
                html!("button", {
                    .class(["btn", "btn-outline", "btn-sm"])
                    .attr("type", "button")
                    .text(add_label)
                    .event(clone!(lines => move |_: events::Click| {
                        lines.lock_mut().push_cloned(Mutable::new(String::new()));
                    }))
                }),
            ])
        })
    }

    pub fn from_lines(lines: &[String]) -> MutableVec<Mutable<String>> {
        MutableVec::new_with_values(lines.iter().cloned().map(Mutable::new).collect())
    }

    pub fn to_lines(lines: &MutableVec<Mutable<String>>) -> Vec<String> {
        lines.lock_ref().iter().map(|line| line.get_cloned()).collect()
    }
}
