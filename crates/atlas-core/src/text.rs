// crates/atlas-core/src/text.rs

//! String helpers shared by the filter engine and the renderers.

use std::cmp::Ordering;

/// Minimum query length for name-field searches. Shorter queries are treated
/// as "no search".
pub const MIN_SEARCH_LEN: usize = 2;

/// Letters of the Polish alphabet in order. Each accented letter is a
/// letter of its own that sorts after its base (`l` < `ł` < `m`).
const POLISH_ALPHABET: &str = "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzźż";

/// Offset that puts letters after ASCII punctuation and digits.
const LETTER_BASE: u32 = 0x80;

fn weight(c: char) -> u32 {
    match POLISH_ALPHABET.chars().position(|p| p == c) {
        Some(pos) => LETTER_BASE + pos as u32,
        None => c as u32,
    }
}

/// Primary collation key of a display name in Polish alphabetical order.
///
/// Case is ignored. Letters outside the Polish alphabet are transliterated
/// first (`é` -> `e`, `ß` -> `ss`), so foreign names sort next to their base
/// letters.
///
/// # Examples
///
/// ```rust
/// use atlas_core::text::sort_key;
///
/// assert!(sort_key("Lwów") < sort_key("Łazienki"));
/// assert!(sort_key("Łódź") < sort_key("Madryt"));
/// assert_eq!(sort_key("Émile"), sort_key("emile"));
/// ```
pub fn sort_key(s: &str) -> Vec<u32> {
    let mut key = Vec::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for c in s.chars().flat_map(char::to_lowercase) {
        if POLISH_ALPHABET.contains(c) || c.is_ascii() {
            key.push(weight(c));
            continue;
        }
        let folded = deunicode::deunicode(c.encode_utf8(&mut buf));
        key.extend(folded.chars().flat_map(char::to_lowercase).map(weight));
    }
    key
}

/// Case-insensitive substring match. `needle` must already be lower-cased.
///
/// Diacritics are significant here: `"wieża"` does not match `"wieza"`.
#[inline]
pub fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Normalizes a raw search input: trims it and lower-cases it.
///
/// Returns `None` when the trimmed query is shorter than `min_len` characters,
/// meaning the search predicate is inactive.
pub fn normalize_query(raw: &str, min_len: usize) -> Option<String> {
    let q = raw.trim();
    if q.is_empty() || q.chars().count() < min_len {
        return None;
    }
    Some(q.to_lowercase())
}

/// Polish-locale comparison of two display names.
///
/// Names compare on [`sort_key`] first. Ties (names that differ only in
/// foreign accents or in case) fall back to the lower-cased original, then to
/// the original.
pub fn collate(a: &str, b: &str) -> Ordering {
    sort_key(a)
        .cmp(&sort_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
