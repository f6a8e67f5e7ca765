//! Localized text catalog for Dicequest.
//!
//! Holds the fixed German and English strings the game prints, and a
//! [`TextBook`] that resolves keys against the language the player picked.
//! Missing text never fails: the lookup returns a placeholder naming the key.

/// Catalog lookup bound to a selected language.
pub mod book;
/// The immutable per-language text table.
pub mod catalog;
/// Supported display languages.
pub mod language;

pub use book::{TextBook, missing_text};
pub use catalog::{Catalog, KeyCoverage, keys};
pub use language::Language;
