use dominator::{events, html, Dom};

/// Overlay with a centred card. Clicking the backdrop or the close button
/// calls `on_close`.
pub fn modal_shell<F>(title: &str, body: Dom, on_close: F) -> Dom
where
    F: Fn() + Clone + 'static,
{
    let close_button = on_close.clone();

    html!("div", {
        .class(["fixed", "inset-0", "z-50", "flex", "items-center", "justify-center", "bg-black/50", "p-4"])
        .event(move |_: events::Click| on_close())
        .child(html!("div", {
            .class(["card", "bg-base-100", "w-full", "max-w-2xl", "max-h-[90vh]", "overflow-y-auto", "shadow-xl"])
            .event(|e: events::Click| e.stop_propagation())
            .child(html!("div", {
                .class(["card-body"])
                .children(&mut [
                    html!("div", {
                        .class(["flex", "items-center", "justify-between", "mb-4"])
                        .children(&mut [
                            html!("h2", {
                                .class(["card-title", "text-2xl"])
                                .text(title)
                            }),
                            html!("button", {
                                .class(["btn", "btn-ghost", "btn-sm", "btn-circle"])
                                .attr("type", "button")
                                .text("✕")
                                .event(move |e: events::Click| {
                                    e.stop_propagation();
                                    close_button();
                                })
                            }),
                        ])
                    }),
                    body,
                ])
            }))
        }))
    })
}
