use crate::model::{RecipeDraft, RecipeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Detail(RecipeId),
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Recipe currently open in the edit modal.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub id: RecipeId,
    pub draft: RecipeDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Blocking message for the user; presentation shows it and clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: AlertKind::Success, message: message.into() }
    }
}
