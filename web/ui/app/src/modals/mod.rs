pub mod auth;
pub mod recipe_form;
