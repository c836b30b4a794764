pub mod auth_switch;
pub mod form;
pub mod header;
pub mod loading;
pub mod modal;
pub mod recipe_card;
