use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

pub fn loading_indicator<S>(is_loading: S) -> Dom
where
    S: Signal<Item = bool> + 'static,
{
    html!("div", {
        .class("loading loading-spinner loading-lg")
        .class_signal("hidden", is_loading.map(|loading| !loading))
    })
}

/// Label for a submit button that flips while `busy` is set.
pub fn busy_text<S>(busy: S, idle: &'static str, working: &'static str) -> impl Signal<Item = &'static str>
where
    S: Signal<Item = bool>,
{
    busy.map(move |busy| if busy { working } else { idle })
}

pub fn disabled_when<S>(busy: S) -> impl Signal<Item = Option<&'static str>>
where
    S: Signal<Item = bool>,
{
    busy.map(|busy| if busy { Some("true") } else { None })
}
