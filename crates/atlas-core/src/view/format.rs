// crates/atlas-core/src/view/format.rs

//! Display formatting shared by every renderer.

/// Compact number with a Polish magnitude suffix.
///
/// Missing values and zero render as `N/A`.
///
/// ```rust
/// use atlas_core::view::format::format_number;
///
/// assert_eq!(format_number(Some(59_110_000.0)), "59.1 mln");
/// assert_eq!(format_number(Some(2_100_000_000_000.0)), "2100.0 mld");
/// assert_eq!(format_number(Some(950.0)), "950");
/// assert_eq!(format_number(None), "N/A");
/// ```
pub fn format_number(n: Option<f64>) -> String {
    let Some(n) = n.filter(|n| *n != 0.0 && n.is_finite()) else {
        return "N/A".to_owned();
    };
    let abs = n.abs();
    if abs >= 1e9 {
        format!("{:.1} mld", n / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1} mln", n / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1} tys", n / 1e3)
    } else {
        format_plain(n)
    }
}

/// Number without a trailing `.0` (`330` rather than `330.0`).
pub fn format_plain(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// `Some("<n> <unit>")` for a known number, `None` otherwise.
pub fn with_unit(n: Option<f64>, unit: &str) -> Option<String> {
    n.map(|n| format!("{} {unit}", format_plain(n)))
}

/// Turns a source key into a label: underscores become spaces and the first
/// letter is upper-cased (`godziny_otwarcia` -> `Godziny otwarcia`).
pub fn format_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins non-empty parts with `", "`.
pub fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let parts: Vec<&str> = parts
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_suffixes() {
        assert_eq!(format_number(Some(0.0)), "N/A");
        assert_eq!(format_number(Some(1_500.0)), "1.5 tys");
        assert_eq!(format_number(Some(8_000_000_000.0)), "8.0 mld");
        assert_eq!(format_number(Some(12.5)), "12.5");
    }

    #[test]
    fn keys_are_prettified() {
        assert_eq!(format_key("godziny_otwarcia"), "Godziny otwarcia");
        assert_eq!(format_key("ulgowy"), "Ulgowy");
        assert_eq!(format_key("łódź_kaliska"), "Łódź kaliska");
        assert_eq!(format_key(""), "");
    }

    #[test]
    fn join_skips_gaps() {
        assert_eq!(
            join_present([Some("Rzym"), None, Some(""), Some("Włochy")]).as_deref(),
            Some("Rzym, Włochy")
        );
        assert_eq!(join_present([None, None]), None);
    }
}
