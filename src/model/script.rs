use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::model::language::Language;

/// One entry of the durable file. Field order matches what gets written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    pub code: String,
    pub language: Language,
}

impl Script {
    pub fn new(name: impl Into<String>, language: Language, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            language,
        }
    }

    /// The records a fresh store starts with before any file is loaded.
    pub fn seeds() -> Vec<Script> {
        vec![
            Script::new(
                "Hello World",
                Language::Python,
                "print(\"Hello from Script Runner!\")",
            ),
            Script::new(
                "Test Script",
                Language::Python,
                "for i in range(5):\n    print(i)",
            ),
        ]
    }

    /// First `max_chars` characters of the code, always followed by `...`.
    pub fn preview(&self, max_chars: usize) -> String {
        let head: String = self.code.chars().take(max_chars).collect();
        format!("{head}...")
    }
}

/// Opaque handle for a record held by a store. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptId(Uuid);

impl ScriptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRecord {
    pub id: ScriptId,
    pub script: Script,
}

impl ScriptRecord {
    pub fn new(script: Script) -> Self {
        Self {
            id: ScriptId::generate(),
            script,
        }
    }
}
