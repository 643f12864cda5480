//! Language-keyed string tables.
//!
//! Each page owns a typed table (`LandingText`, `AnalysisText`) and registers
//! one entry per language in a [`Catalog`]. Pages hold only the active
//! language code; everything else is looked up here.

pub mod analysis;
pub mod landing;

/// One language registered in a [`Catalog`].
pub struct LocaleEntry<T: 'static> {
    pub code: &'static str,
    pub native_name: &'static str,
    pub text: T,
}

/// Ordered registry of languages. The first entry is the default and is
/// returned for any unknown code.
pub struct Catalog<T: 'static> {
    entries: &'static [LocaleEntry<T>],
}

impl<T> Catalog<T> {
    pub const fn new(entries: &'static [LocaleEntry<T>]) -> Self {
        assert!(!entries.is_empty(), "catalog needs at least one language");
        Self { entries }
    }

    pub fn default_code(&self) -> &'static str {
        self.entries[0].code
    }

    pub fn entries(&self) -> &'static [LocaleEntry<T>] {
        self.entries
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    pub fn entry(&self, code: &str) -> &'static LocaleEntry<T> {
        let entries = self.entries;
        entries
            .iter()
            .find(|entry| entry.code == code)
            .unwrap_or(&entries[0])
    }

    pub fn text(&self, code: &str) -> &'static T {
        &self.entry(code).text
    }

    /// Code of the language after `code`, wrapping around. The landing page
    /// globe button steps through languages with it.
    pub fn next(&self, code: &str) -> &'static str {
        let entries = self.entries;
        match entries.iter().position(|entry| entry.code == code) {
            Some(index) => entries[(index + 1) % entries.len()].code,
            None => entries[0].code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GREETINGS: Catalog<&'static str> = Catalog::new(&[
        LocaleEntry { code: "en", native_name: "English", text: "Hello" },
        LocaleEntry { code: "fi", native_name: "Suomi", text: "Hei" },
        LocaleEntry { code: "sv", native_name: "Svenska", text: "Hej" },
    ]);

    #[test]
    fn lookup_by_code() {
        assert_eq!(*GREETINGS.text("fi"), "Hei");
        assert_eq!(GREETINGS.entry("sv").native_name, "Svenska");
        assert!(GREETINGS.contains("en"));
        assert!(!GREETINGS.contains("de"));
    }

    #[test]
    fn unknown_code_falls_back_to_default() {
        assert_eq!(GREETINGS.default_code(), "en");
        assert_eq!(*GREETINGS.text("xx"), "Hello");
    }

    #[test]
    fn next_cycles_through_registry() {
        assert_eq!(GREETINGS.next("en"), "fi");
        assert_eq!(GREETINGS.next("fi"), "sv");
        assert_eq!(GREETINGS.next("sv"), "en");
        assert_eq!(GREETINGS.next("unknown"), "en");
    }

    #[test]
    fn every_page_catalog_has_the_default_language() {
        assert_eq!(landing::LANDING.default_code(), "en");
        assert_eq!(analysis::ANALYSIS.default_code(), "en");
        assert_eq!(landing::LANDING.next("en"), "de");
        assert!(analysis::ANALYSIS.contains("es"));
    }
}
