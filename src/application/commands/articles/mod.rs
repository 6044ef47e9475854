// src/application/commands/articles/mod.rs
mod create;
mod host;
mod quick_edit;
mod save;
mod service;

pub use create::CreateArticleCommand;
pub use quick_edit::QuickEditCommand;
pub use save::SaveArticleCommand;
pub use service::ArticleCommandService;
