// src/application/ports/mod.rs
pub mod nonce;
pub mod settings;
pub mod time;
pub mod util;
