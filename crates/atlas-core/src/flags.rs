// crates/atlas-core/src/flags.rs

//! Country-name to ISO-3166 alpha-2 table used for flag images.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static COUNTRY_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Włochy", "it"),
        ("Francja", "fr"),
        ("Hiszpania", "es"),
        ("Indie", "in"),
        ("Grecja", "gr"),
        ("Egipt", "eg"),
        ("USA", "us"),
        ("Stany Zjednoczone", "us"),
        ("Wielka Brytania", "gb"),
        ("Niemcy", "de"),
        ("Polska", "pl"),
        ("Chiny", "cn"),
        ("Japonia", "jp"),
        ("Brazylia", "br"),
        ("Australia", "au"),
        ("Kanada", "ca"),
        ("Meksyk", "mx"),
        ("Rosja", "ru"),
        ("Turcja", "tr"),
        ("Tajlandia", "th"),
        ("Portugalia", "pt"),
        ("Holandia", "nl"),
        ("Belgia", "be"),
        ("Szwajcaria", "ch"),
        ("Austria", "at"),
        ("Szwecja", "se"),
        ("Norwegia", "no"),
        ("Dania", "dk"),
        ("Finlandia", "fi"),
        ("Irlandia", "ie"),
        ("Czechy", "cz"),
        ("Węgry", "hu"),
        ("Rumunia", "ro"),
        ("Bułgaria", "bg"),
        ("Chorwacja", "hr"),
        ("Słowacja", "sk"),
        ("Słowenia", "si"),
    ])
});

/// ISO code for a Polish country name, if known.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(name.trim()).copied()
}

/// Flag image URL at the default `w40` size.
pub fn flag_url(name: &str) -> Option<String> {
    flag_url_sized(name, "w40")
}

/// Flag image URL; `size` is a flagcdn size token such as `w20` or `w80`.
pub fn flag_url_sized(name: &str, size: &str) -> Option<String> {
    country_code(name).map(|code| format!("https://flagcdn.com/{size}/{code}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_names() {
        assert_eq!(flag_url("Włochy").as_deref(), Some("https://flagcdn.com/w40/it.png"));
        assert_eq!(country_code(" Stany Zjednoczone "), Some("us"));
        assert_eq!(flag_url("Atlantyda"), None);
    }
}
