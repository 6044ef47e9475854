// src/application/dto/settings.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The stored stop-word option, exactly as saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StopWordsSettingsDto {
    #[schema(example = "a,about,above,after,again,against")]
    pub words: String,
}
