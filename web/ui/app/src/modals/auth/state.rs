use std::sync::Arc;

use flavorshare_core::auth::{LoginForm, SignupForm};
use flavorshare_core::controller::AuthMode;
use futures_signals::signal::Mutable;

use crate::app::App;

#[derive(Clone)]
pub struct AuthState {
    pub app: Arc<App>,
    pub email: Mutable<String>,
    pub password: Mutable<String>,
    pub username: Mutable<String>,
    pub full_name: Mutable<String>,
}

impl AuthState {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            app,
            email: Mutable::new(String::new()),
            password: Mutable::new(String::new()),
            username: Mutable::new(String::new()),
            full_name: Mutable::new(String::new()),
        })
    }

    pub fn title(mode: AuthMode) -> &'static str {
        match mode {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Join FlavorShare",
        }
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm {
            email: self.email.get_cloned().trim().to_string(),
            password: self.password.get_cloned(),
        }
    }

    pub fn signup_form(&self) -> SignupForm {
        SignupForm {
            username: self.username.get_cloned().trim().to_string(),
            email: self.email.get_cloned().trim().to_string(),
            password: self.password.get_cloned(),
            full_name: self.full_name.get_cloned().trim().to_string(),
        }
    }

    pub fn reset_state(&self) {
        self.email.set_neq(String::new());
        self.password.set_neq(String::new());
        self.username.set_neq(String::new());
        self.full_name.set_neq(String::new());
    }
}
