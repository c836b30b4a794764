use std::sync::Arc;

use dominator::{clone, events, html, Dom};

use crate::app::App;

/// "Don't have an account? Sign up" footer under the auth forms.
pub struct AuthSwitch {
    pub app: Arc<App>,
    pub text: &'static str,
    pub link_text: &'static str,
}

impl AuthSwitch {
    pub fn render(&self) -> Dom {
        let app = self.app.clone();

        html!("p", {
            .class(["text-sm", "text-center", "mt-6"])
            .children(&mut [
                html!("span", {
                    .text(self.text)
                }),
                html!("a", {
                    .class(["link", "link-primary"])
                    .text(self.link_text)
                    .event(clone!(app => move |_: events::Click| {
                        app.controller.toggle_auth_mode();
                    }))
                })
            ])
        })
    }
}
