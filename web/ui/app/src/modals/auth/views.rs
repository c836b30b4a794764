use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use flavorshare_core::controller::AuthMode;
use futures_signals::signal::SignalExt;
use wasm_bindgen_futures::spawn_local;

use super::state::AuthState;
use crate::app::App;
use crate::components::auth_switch::AuthSwitch;
use crate::components::form::{EmailInput, PasswordInput, TextInput};
use crate::components::loading::{busy_text, disabled_when};
use crate::components::modal::modal_shell;

pub struct AuthModal;

impl AuthModal {
    /// Empty until the controller opens the auth modal.
    pub fn render_slot(app: Arc<App>) -> Dom {
        let state = AuthState::new(app.clone());

        html!("div", {
            .child_signal(app.controller.auth_modal.signal().map(clone!(state => move |mode| {
                mode.map(|mode| Self::render(state.clone(), mode))
            })))
        })
    }

    fn render(state: Arc<AuthState>, mode: AuthMode) -> Dom {
        let body = match mode {
            AuthMode::Login => LoginView::render(state.clone()),
            AuthMode::Signup => SignupView::render(state.clone()),
        };

        modal_shell(AuthState::title(mode), body, clone!(state => move || {
            state.reset_state();
            state.app.controller.close_auth();
        }))
    }
}

fn submit(state: Arc<AuthState>, mode: AuthMode) {
    spawn_local(async move {
        let controller = state.app.controller.clone();
        let signed_in = match mode {
            AuthMode::Login => controller.login(&state.login_form()).await,
            AuthMode::Signup => controller.signup(&state.signup_form()).await,
        };
        if signed_in {
            state.reset_state();
        }
    });
}

fn submit_button(state: Arc<AuthState>, mode: AuthMode) -> Dom {
    let busy = state.app.controller.busy.clone();
    let (idle, working) = match mode {
        AuthMode::Login => ("Login", "Logging in..."),
        AuthMode::Signup => ("Create Account", "Creating account..."),
    };

    html!("button", {
        .class(["btn", "btn-primary", "w-full", "mt-6"])
        .attr_signal("disabled", disabled_when(busy.signal()))
        .text_signal(busy_text(busy.signal(), idle, working))
        .event(clone!(state => move |_: events::Click| {
            submit(state.clone(), mode);
        }))
    })
}

struct LoginView;

impl LoginView {
    fn render(state: Arc<AuthState>) -> Dom {
        html!("div", {
            .children(&mut [
                EmailInput::new(
                    state.email.clone(),
                    Some(Box::new(clone!(state => move || {
                        submit(state.clone(), AuthMode::Login);
                    }))),
                ).render(),
                PasswordInput::new(state.password.clone(), false).render(),
                submit_button(state.clone(), AuthMode::Login),
                html!("p", {
                    .class(["text-xs", "text-stone-400", "mt-4", "text-center"])
                    .text("Demo: sarah@example.com / SecurePass123!")
                }),
                AuthSwitch {
                    app: state.app.clone(),
                    text: "Don't have an account? ",
                    link_text: "Sign up",
                }.render(),
            ])
        })
    }
}

struct SignupView;

impl SignupView {
    fn render(state: Arc<AuthState>) -> Dom {
        html!("div", {
            .children(&mut [
                TextInput::new(state.full_name.clone(), "Full name", "Jane Doe").render(),
                TextInput::new(state.username.clone(), "Username", "chef_jane").render(),
                EmailInput::new(state.email.clone(), None).render(),
                PasswordInput::new(state.password.clone(), true).render(),
                submit_button(state.clone(), AuthMode::Signup),
                AuthSwitch {
                    app: state.app.clone(),
                    text: "Already have an account? ",
                    link_text: "Login",
                }.render(),
            ])
        })
    }
}
