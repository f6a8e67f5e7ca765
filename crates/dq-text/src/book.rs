//! Catalog lookup bound to the player's chosen language.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::language::Language;

/// A [`Catalog`] plus the language selected for the current session.
///
/// Lookups never fail: when no language is selected or the key is missing,
/// the returned text names the key instead.
#[derive(Debug, Clone)]
pub struct TextBook {
    catalog: Catalog,
    selected: Option<Language>,
}

impl TextBook {
    /// Create a text book with no language selected.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: None,
        }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The currently selected language, if any.
    pub fn selected(&self) -> Option<Language> {
        self.selected
    }

    /// Select a display language. Always succeeds for a [`Language`] value.
    pub fn select(&mut self, language: Language) -> bool {
        debug!(language = language.code(), "language selected");
        self.selected = Some(language);
        true
    }

    /// Select a language by its code (`DE` or `EN`).
    ///
    /// Unknown codes return `false` and leave the current selection alone.
    pub fn select_code(&mut self, code: &str) -> bool {
        match Language::parse(code) {
            Some(language) => self.select(language),
            None => {
                debug!(code, "rejected language code");
                false
            }
        }
    }

    /// Text for `key` in the selected language.
    pub fn lookup(&self, key: &str) -> String {
        match self
            .selected
            .and_then(|language| self.catalog.lookup(language, key))
        {
            Some(text) => text.to_string(),
            None => {
                warn!(key, language = ?self.selected, "missing text");
                missing_text(key)
            }
        }
    }
}

impl Default for TextBook {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Placeholder shown in place of a missing string.
pub fn missing_text(key: &str) -> String {
    format!("Failed to find text_name: {key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys;
    use proptest::prelude::*;

    #[test]
    fn nothing_selected_initially() {
        let book = TextBook::default();
        assert_eq!(book.selected(), None);
    }

    #[test]
    fn lookup_without_selection_names_key() {
        let book = TextBook::default();
        assert_eq!(
            book.lookup(keys::GREETING),
            "Failed to find text_name: greeting"
        );
    }

    #[test]
    fn select_affects_lookup_immediately() {
        let mut book = TextBook::default();
        assert!(book.select(Language::English));
        assert_eq!(book.lookup(keys::START_GAME), "Do you want to Start the Game? Y/N \n");

        assert!(book.select(Language::German));
        assert_eq!(book.lookup(keys::START_GAME), "Willst du das Spiel starten? J/N \n");
    }

    #[test]
    fn select_code_rejects_unknown() {
        let mut book = TextBook::default();
        assert!(!book.select_code("FR"));
        assert_eq!(book.selected(), None);

        assert!(book.select_code("EN"));
        assert!(!book.select_code("xx"));
        assert_eq!(book.selected(), Some(Language::English));
    }

    #[test]
    fn key_missing_in_selected_language_only() {
        const DE: &[(&str, &str)] = &[("only_de", "nur deutsch")];
        const EN: &[(&str, &str)] = &[];
        let mut book = TextBook::new(Catalog::from_entries([
            (Language::German, DE),
            (Language::English, EN),
        ]));

        book.select(Language::English);
        assert_eq!(book.lookup("only_de"), missing_text("only_de"));
        book.select(Language::German);
        assert_eq!(book.lookup("only_de"), "nur deutsch");
    }

    fn any_selection() -> impl Strategy<Value = Option<Language>> {
        prop_oneof![
            Just(None),
            Just(Some(Language::German)),
            Just(Some(Language::English)),
        ]
    }

    proptest! {
        #[test]
        fn absent_key_is_named(key in "[a-z_]{1,24}", selection in any_selection()) {
            let catalog = Catalog::builtin();
            prop_assume!(Language::ALL.iter().all(|&l| !catalog.contains(l, &key)));

            let mut book = TextBook::new(catalog);
            if let Some(language) = selection {
                book.select(language);
            }
            prop_assert!(book.lookup(&key).contains(key.as_str()));
        }

        #[test]
        fn present_key_returns_exact_value(index in 0usize..64, english in any::<bool>()) {
            let language = if english { Language::English } else { Language::German };
            let mut book = TextBook::default();
            book.select(language);

            let coverage = book.catalog().coverage();
            let entry = &coverage[index % coverage.len()];
            let expected = book.catalog().lookup(language, entry.key);
            prop_assume!(expected.is_some());
            prop_assert_eq!(book.lookup(entry.key), expected.unwrap_or_default());
        }

        #[test]
        fn unsupported_code_keeps_selection(code in "[A-Za-z]{0,4}", selection in any_selection()) {
            prop_assume!(code != "DE" && code != "EN");
            let mut book = TextBook::default();
            if let Some(language) = selection {
                book.select(language);
            }
            prop_assert!(!book.select_code(&code));
            prop_assert_eq!(book.selected(), selection);
        }
    }
}
