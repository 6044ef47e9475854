// src/application/mod.rs
pub mod commands;
pub mod dto;
pub mod error;
pub mod hooks;
pub mod ports;
pub mod queries;
pub mod services;
pub mod stop_words;

pub use error::ApplicationResult;
