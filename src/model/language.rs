use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag of a script. Tags outside the built-in set are kept
/// verbatim so they survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    Python,
    Javascript,
    Bash,
    Ruby,
    Other(String),
}

impl Language {
    pub const BUILTIN: [Language; 4] = [
        Language::Python,
        Language::Javascript,
        Language::Bash,
        Language::Ruby,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Bash => "bash",
            Self::Ruby => "ruby",
            Self::Other(s) => s,
        }
    }

    pub fn from_tag(s: &str) -> Self {
        match s {
            "python" => Self::Python,
            "javascript" => Self::Javascript,
            "bash" => Self::Bash,
            "ruby" => Self::Ruby,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        match Self::from_tag(&s) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        match lang {
            Language::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
