//! The persisted application state object.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Program;

/// Storage key the state object is persisted under.
pub const STATE_KEY: &str = "rfit4";

/// UI language.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    Fr,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// English name of the language, as used in coach instructions.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Ar => "Arabic",
            Language::Fr => "French",
            Language::En => "English",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Ar),
            "fr" | "french" => Ok(Language::Fr),
            "en" | "english" => Ok(Language::En),
            _ => Err(format!("Invalid language: {s}")),
        }
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One message of a coach conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// The full state object stored under [`STATE_KEY`].
///
/// Only the fields this crate owns are typed. Everything else the host
/// application keeps in the object is carried through `host` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    #[serde(flatten)]
    pub program: Program,

    #[serde(default)]
    pub language: Language,

    #[serde(rename = "chatHistory", default)]
    pub chat_history: Vec<ChatMessage>,

    #[serde(rename = "aiCoachEnabled", default = "default_true")]
    pub ai_coach_enabled: bool,

    /// Host-owned fields
    #[serde(flatten)]
    pub host: Map<String, Value>,
}

fn default_true() -> bool {
    true
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            program: Program::default(),
            language: Language::default(),
            chat_history: Vec::new(),
            ai_coach_enabled: true,
            host: Map::new(),
        }
    }
}

impl AppState {
    /// Number of days the host application has recorded as completed.
    pub fn completed_days(&self) -> usize {
        self.host
            .get("completedDays")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
