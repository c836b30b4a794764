use std::sync::Arc;

use dominator::routing;
use flavorshare_core::controller::View;
use flavorshare_core::model::RecipeId;
use flavorshare_core::Controller;
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Home,
    Recipe(RecipeId),
    Profile,
    NotFound,
}

impl Route {
    pub fn from_view(view: View) -> Self {
        match view {
            View::Home => Route::Home,
            View::Detail(id) => Route::Recipe(id),
            View::Profile => Route::Profile,
        }
    }

    pub fn path(self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::Recipe(id) => format!("/recipes/{}", id),
            Route::Profile => "/profile".to_string(),
        }
    }
}

/// Keeps the address bar and the controller's view in step, in both
/// directions.
pub struct Router {
    pub current_route: Mutable<Route>,
    controller: Arc<Controller>,
}

impl Router {
    pub fn new(controller: Arc<Controller>) -> Arc<Self> {
        let router = Arc::new(Self {
            current_route: Mutable::new(Route::Home),
            controller,
        });

        // Address bar -> view
        {
            let router_ref = router.clone();
            let router_ref2 = router.clone();

            spawn_local(async move {
                routing::url()
                    .signal_ref(move |url| {
                        log::debug!("URL signal received: {}", url);
                        router_ref.url_to_route(url)
                    })
                    .for_each(move |route| {
                        router_ref2.current_route.set_neq(route);
                        router_ref2.apply(route);
                        async {}
                    })
                    .await;
            });
        }

        router
    }

    /// Starts mirroring view changes into the address bar. Called after the
    /// first load so a deep link is not overwritten while recipes are still
    /// missing.
    pub fn follow_view(self: &Arc<Self>) {
        let router_ref = self.clone();

        spawn_local(async move {
            let controller = router_ref.controller.clone();
            controller
                .view
                .signal()
                .for_each(move |view| {
                    let route = Route::from_view(view);
                    if router_ref.current_route.get() != route {
                        router_ref.push(route);
                    }
                    async {}
                })
                .await;
        });
    }

    /// Re-applies the current address, e.g. once the recipe list is loaded so
    /// a deep link to a recipe can resolve.
    pub fn resync(&self) {
        self.apply(self.current_route.get());
    }

    fn apply(&self, route: Route) {
        if Route::from_view(self.controller.view.get()) == route {
            return;
        }
        log::debug!("Route changed to: {:?}", route);
        match route {
            Route::Home | Route::NotFound => self.controller.show_home(),
            Route::Recipe(id) => self.controller.select_recipe(id),
            Route::Profile => self.controller.show_profile(),
        }
    }

    pub fn push(&self, route: Route) {
        let path = route.path();
        log::debug!("Pushing route: {}", path);
        self.current_route.set_neq(route);
        routing::go_to_url(&path);
    }

    fn url_to_route(&self, url: &str) -> Route {
        let path = if let Ok(parsed_url) = url::Url::parse(url) {
            parsed_url.path().to_string()
        } else {
            url.split('?').next().unwrap_or(url).to_string()
        };

        let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Route::Home,
            ["profile"] => Route::Profile,
            ["recipes", id] => id.parse().map(Route::Recipe).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        };

        log::debug!("Mapped URL {} to route {:?}", url, route);
        route
    }
}
