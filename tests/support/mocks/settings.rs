// tests/support/mocks/settings.rs
use async_trait::async_trait;
use permalink_stop_words::application::{
    ApplicationResult, error::ApplicationError, ports::settings::SettingsStore,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Option storage kept in memory.
#[derive(Default)]
pub struct InMemorySettingsStore {
    options: Mutex<HashMap<String, String>>,
}

impl InMemorySettingsStore {
    pub fn with_option(name: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .options
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        store
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get_option(&self, name: &str) -> ApplicationResult<Option<String>> {
        Ok(self.options.lock().unwrap().get(name).cloned())
    }

    async fn update_option(&self, name: &str, value: &str) -> ApplicationResult<()> {
        self.options
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings backend that is always down.
pub struct FailingSettingsStore;

#[async_trait]
impl SettingsStore for FailingSettingsStore {
    async fn get_option(&self, _name: &str) -> ApplicationResult<Option<String>> {
        Err(ApplicationError::infrastructure("settings backend unavailable"))
    }

    async fn update_option(&self, _name: &str, _value: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("settings backend unavailable"))
    }
}
