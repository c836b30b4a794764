use std::sync::Arc;

use dominator::{clone, html, Dom};
use flavorshare_core::auth::InMemoryUserRepository;
use flavorshare_core::controller::{AlertKind, View};
use flavorshare_core::gateway::HttpRecipeApi;
use flavorshare_core::Controller;
use futures_signals::signal::SignalExt;
use wasm_bindgen_futures::spawn_local;

use crate::components::header::Header;
use crate::config::CONFIG;
use crate::delay::TimeoutDelay;
use crate::modals::auth::AuthModal;
use crate::modals::recipe_form::RecipeFormModal;
use crate::pages::{DetailPage, HomePage, ProfilePage};
use crate::router::Router;
use crate::storage::LocalStorage;

pub struct App {
    pub controller: Arc<Controller>,
    pub router: Arc<Router>,
}

impl App {
    pub fn new() -> Arc<Self> {
        let controller = Controller::new(
            &CONFIG,
            Arc::new(HttpRecipeApi::from_config(&CONFIG)),
            Arc::new(InMemoryUserRepository::with_demo_roster()),
            Arc::new(LocalStorage),
            Arc::new(TimeoutDelay),
        );
        let router = Router::new(controller.clone());
        Arc::new(Self { controller, router })
    }

    /// Loads the session and recipes, then starts the alert loop.
    pub fn start(app: &Arc<Self>) {
        spawn_local(clone!(app => async move {
            app.controller.init().await;
            app.router.resync();
            app.router.follow_view();
        }));

        spawn_local(clone!(app => async move {
            app.controller
                .alert
                .signal_cloned()
                .for_each(clone!(app => move |alert| {
                    if let Some(alert) = alert {
                        show_alert(alert.kind, &alert.message);
                        app.controller.dismiss_alert();
                    }
                    async {}
                }))
                .await;
        }));
    }

    pub fn render(app: Arc<Self>) -> Dom {
        html!("div", {
            .class(["min-h-screen", "bg-stone-50"])
            .children(&mut [
                Header::render(app.clone()),
                html!("main", {
                    .class(["max-w-7xl", "mx-auto", "px-4", "py-8"])
                    .child_signal(app.controller.view.signal().map(clone!(app => move |view| {
                        Some(match view {
                            View::Home => HomePage::render(app.clone()),
                            View::Detail(_) => DetailPage::render(app.clone()),
                            View::Profile => ProfilePage::render(app.clone()),
                        })
                    })))
                }),
                AuthModal::render_slot(app.clone()),
                RecipeFormModal::render_add_slot(app.clone()),
                RecipeFormModal::render_edit_slot(app),
            ])
        })
    }
}

fn show_alert(kind: AlertKind, message: &str) {
    if kind == AlertKind::Error {
        log::error!("{}", message);
    }
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Browser confirmation dialog; `false` when unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
