// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, hyphen-delimited slug for arbitrary input.
    fn slugify(&self, input: &str) -> String;
}
