use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use flavorshare_core::controller::{AuthMode, View};
use futures_signals::signal::SignalExt;

use crate::app::App;

pub struct Header;

impl Header {
    pub fn render(app: Arc<App>) -> Dom {
        let controller = app.controller.clone();

        html!("header", {
            .class(["navbar", "bg-base-100", "shadow-sm", "sticky", "top-0", "z-40"])
            .children(&mut [
                html!("div", {
                    .class(["flex-1"])
                    .child(html!("a", {
                        .class(["btn", "btn-ghost", "text-xl", "font-bold", "text-orange-600"])
                        .text("FlavorShare")
                        .event(clone!(controller => move |_: events::Click| {
                            controller.show_home();
                        }))
                    }))
                }),
                html!("nav", {
                    .class(["flex-none", "gap-2"])
                    .children(&mut [
                        Self::nav_button(app.clone(), "Home", View::Home),
                        Self::nav_button(app.clone(), "Profile", View::Profile),
                        html!("button", {
                            .class(["btn", "btn-primary", "btn-sm"])
                            .text("+ Add Recipe")
                            .event(clone!(controller => move |_: events::Click| {
                                controller.open_add_recipe();
                            }))
                        }),
                    ])
                    .child_signal(controller.store.current_user.signal_cloned().map(clone!(controller => move |user| {
                        Some(match user {
                            Some(user) => html!("div", {
                                .class(["flex", "items-center", "gap-2"])
                                .children(&mut [
                                    html!("span", {
                                        .class(["text-sm", "text-stone-600"])
                                        .text(&format!("Hi, {}", user.username))
                                    }),
                                    html!("button", {
                                        .class(["btn", "btn-ghost", "btn-sm"])
                                        .text("Logout")
                                        .event(clone!(controller => move |_: events::Click| {
                                            controller.logout();
                                        }))
                                    }),
                                ])
                            }),
                            None => html!("div", {
                                .class(["flex", "gap-2"])
                                .children(&mut [
                                    html!("button", {
                                        .class(["btn", "btn-ghost", "btn-sm"])
                                        .text("Login")
                                        .event(clone!(controller => move |_: events::Click| {
                                            controller.open_auth(AuthMode::Login);
                                        }))
                                    }),
                                    html!("button", {
                                        .class(["btn", "btn-outline", "btn-sm"])
                                        .text("Sign Up")
                                        .event(clone!(controller => move |_: events::Click| {
                                            controller.open_auth(AuthMode::Signup);
                                        }))
                                    }),
                                ])
                            }),
                        })
                    })))
                }),
            ])
        })
    }

    fn nav_button(app: Arc<App>, label: &'static str, target: View) -> Dom {
        let controller = app.controller.clone();

        html!("button", {
            .class(["btn", "btn-sm"])
            .class_signal("btn-active", controller.view.signal().map(move |view| view == target))
            .class_signal("btn-ghost", controller.view.signal().map(move |view| view != target))
            .text(label)
            .event(clone!(controller => move |_: events::Click| {
                match target {
                    View::Profile => controller.show_profile(),
                    _ => controller.show_home(),
                }
            }))
        })
    }
}
