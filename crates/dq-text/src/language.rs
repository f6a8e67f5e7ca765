//! Supported display languages.

use serde::Serialize;

/// A display language the catalog carries text for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Language {
    /// German ("DE").
    German,
    /// English ("EN").
    English,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 2] = [Self::German, Self::English];

    /// Parse a language from the code the player types at the language prompt.
    ///
    /// Matching is exact: only `DE` and `EN` are accepted.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "DE" => Some(Self::German),
            "EN" => Some(Self::English),
            _ => None,
        }
    }

    /// The two-letter code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::German => "DE",
            Self::English => "EN",
        }
    }

    /// Human-readable name, in the language itself.
    pub fn name(self) -> &'static str {
        match self {
            Self::German => "Deutsch",
            Self::English => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
