//! Settings and internal-state documents.

use serde::{Deserialize, Serialize};

/// Sentinel name keying the single document each system store holds.
pub(crate) const DEFAULT_DOC_NAME: &str = "default";

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProvider {
    OpenAI,
    Gemini,
    Anthropic,
}

impl ModelProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Gemini => "gemini",
            Self::Anthropic => "anthropic",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "openai" => Some(Self::OpenAI),
            "gemini" => Some(Self::Gemini),
            "anthropic" => Some(Self::Anthropic),
            _ => None,
        }
    }
}

/// A translation target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages the vocabulary can be built toward. The first entry is the
/// fallback when no target language has been configured.
pub const TARGET_LANGUAGES: &[Language] = &[
    Language { code: "zh-Hans", name: "Simplified Chinese" },
    Language { code: "zh-Hant", name: "Traditional Chinese" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "ru", name: "Russian" },
    Language { code: "es", name: "Spanish" },
    Language { code: "pt", name: "Portuguese" },
];

/// Look up a target language by its code.
pub fn language_by_code(code: &str) -> Option<&'static Language> {
    TARGET_LANGUAGES.iter().find(|l| l.code == code)
}

/// Credentials and model choice for the OpenAI provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_host: String,
    #[serde(default)]
    pub model: String,
}

/// Credentials and model choice for the Gemini provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_host: String,
    #[serde(default)]
    pub model: String,
}

/// User configuration: which model provider to use, how to reach it, and
/// the language the vocabulary is built toward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    #[serde(default)]
    pub model_provider: String,
    /// Target language code, e.g. "de". Empty means not configured.
    #[serde(default)]
    pub target_language: String,
    #[serde(default)]
    pub openai_config: OpenAIConfig,
    #[serde(default)]
    pub gemini_config: GeminiConfig,
}

impl SystemSettings {
    pub fn provider(&self) -> Option<ModelProvider> {
        ModelProvider::parse(&self.model_provider)
    }

    /// Display name of the configured target language, falling back to
    /// Simplified Chinese when unset or unknown.
    pub fn target_language_name(&self) -> &'static str {
        language_by_code(&self.target_language)
            .unwrap_or(&TARGET_LANGUAGES[0])
            .name
    }
}

/// Process bookkeeping the tool keeps between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalState {
    pub name: String,
    /// Last time a remote version check ran, Unix seconds. -1 means never.
    pub last_ver_checking_ts: f64,
    /// Latest released version reported by that check.
    #[serde(default)]
    pub server_latest_version: Option<String>,
}

impl Default for InternalState {
    fn default() -> Self {
        Self {
            name: DEFAULT_DOC_NAME.to_string(),
            last_ver_checking_ts: -1.0,
            server_latest_version: None,
        }
    }
}
