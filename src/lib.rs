// src/lib.rs
pub mod config;
pub mod inference;
pub mod parser;
pub mod prompt;
pub mod services;
pub mod store;
pub mod utils;
pub mod web;

pub use config::ConfigManager;
pub use inference::{Completion, ModelInvoker};
pub use web::start_web_server;
