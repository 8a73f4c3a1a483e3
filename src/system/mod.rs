//! System-level stores: user settings and internal tool state.

pub mod models;
pub mod storage;

pub use models::{
    GeminiConfig, InternalState, Language, ModelProvider, OpenAIConfig, SystemSettings,
    TARGET_LANGUAGES,
};
pub use storage::{InternalStateStore, SystemSettingsStore};
