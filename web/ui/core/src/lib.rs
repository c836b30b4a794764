pub mod adapter;
pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod model;
pub mod storage;
pub mod store;
pub mod validation;

pub use config::Config;
pub use controller::Controller;
pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;
