//! Prototype credential check against an in-memory roster. There is no
//! hashing and no token; a real deployment authenticates server-side.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::User;
use crate::validation;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[async_trait(?Send)]
pub trait UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn create(&self, user: NewUser) -> Result<User>;
}

/// Awaitable pause. Browser builds back this with `setTimeout`.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, millis: u32);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateDelay;

#[async_trait(?Send)]
impl Delay for ImmediateDelay {
    async fn sleep(&self, _millis: u32) {}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: Mutex::new(users) }
    }

    /// The demo accounts shipped with the prototype.
    pub fn with_demo_roster() -> Self {
        let user = |id, username: &str, email: &str, full_name: &str, password: &str| User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            password: password.to_string(),
        };
        Self::new(vec![
            user(1, "chef_sarah", "sarah@example.com", "Chef Sarah", "SecurePass123!"),
            user(2, "baker_mike", "mike@example.com", "Baker Mike", "BakeLife456@"),
            user(3, "chef_giovanni", "giovanni@example.com", "Chef Giovanni", "PastaLover789#"),
        ])
    }

    fn users(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>> {
        self.users.lock().map_err(|e| Error::Storage(e.to_string()))
    }
}

#[async_trait(?Send)]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users()?.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users()?;
        let user = User {
            id: users.len() as i64 + 1,
            username: new_user.username,
            email: new_user.email,
            full_name: new_user.full_name,
            password: new_user.password,
        };
        users.push(user.clone());
        Ok(user)
    }
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    delay: Arc<dyn Delay>,
    login_delay_ms: u32,
    signup_delay_ms: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, delay: Arc<dyn Delay>, config: &Config) -> Self {
        Self {
            users,
            delay,
            login_delay_ms: config.login_delay_ms,
            signup_delay_ms: config.signup_delay_ms,
        }
    }

    /// Exact email and password match. The error never says which one was
    /// wrong.
    pub async fn login(&self, form: &LoginForm) -> Result<User> {
        if !validation::is_valid_email(&form.email) {
            return Err(Error::Validation("Please enter a valid email address".into()));
        }

        self.delay.sleep(self.login_delay_ms).await;

        match self.users.find_by_email(&form.email).await? {
            Some(user) if user.password == form.password => {
                log::info!("User {} logged in", user.username);
                Ok(user)
            }
            _ => {
                log::debug!("Rejected login attempt");
                Err(Error::Unauthorized(INVALID_CREDENTIALS.into()))
            }
        }
    }

    pub fn validate_signup(form: &SignupForm) -> Result<()> {
        if form.username.is_empty() || form.email.is_empty() || form.password.is_empty() || form.full_name.is_empty() {
            return Err(Error::Validation("Please fill all fields".into()));
        }
        if !validation::is_valid_email(&form.email) {
            return Err(Error::Validation("Please enter a valid email".into()));
        }
        if !validation::is_strong_password(&form.password) {
            return Err(Error::Validation(
                "Password must be 8+ chars and include upper/lower/number/special.".into(),
            ));
        }
        Ok(())
    }

    pub async fn signup(&self, form: &SignupForm) -> Result<User> {
        Self::validate_signup(form)?;
        if self.users.find_by_email(&form.email).await?.is_some() {
            return Err(Error::Validation("Email already exists".into()));
        }

        self.delay.sleep(self.signup_delay_ms).await;

        let user = self
            .users
            .create(NewUser {
                username: form.username.clone(),
                email: form.email.clone(),
                password: form.password.clone(),
                full_name: form.full_name.clone(),
            })
            .await?;
        log::info!("Registered user {}", user.username);
        Ok(user)
    }
}
