// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod articles;
pub mod settings;
