mod state;
mod views;

pub use views::AuthModal;
