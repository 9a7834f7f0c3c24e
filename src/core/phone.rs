//! Phone number normalization to country-prefixed digits.

/// Country assumed when a client has no phone country.
pub const DEFAULT_PHONE_COUNTRY: &str = "PY";

const PY_PREFIX: &str = "595";

/// Normalize a locally formatted phone number.
///
/// Whitespace, hyphens and parentheses are removed, as is a leading `+`.
/// Paraguayan numbers get the `595` prefix, replacing a trunk `0`. Numbers
/// for other countries are only cleaned. The country is matched ignoring
/// case and surrounding whitespace, so `"py"` and `" PY "` count as Paraguay.
///
/// ```
/// use ekuatia::core::normalize_phone;
/// assert_eq!(normalize_phone("0981 123-456", "PY"), "595981123456");
/// assert_eq!(normalize_phone("021 123456", "PY"), "59521123456");
/// ```
pub fn normalize_phone(phone: &str, country: &str) -> String {
    if phone.trim().is_empty() {
        return String::new();
    }

    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    if !country.trim().eq_ignore_ascii_case(DEFAULT_PHONE_COUNTRY) {
        return cleaned.to_string();
    }

    if cleaned.starts_with(PY_PREFIX) {
        cleaned.to_string()
    } else if let Some(local) = cleaned.strip_prefix('0') {
        format!("{PY_PREFIX}{local}")
    } else {
        format!("{PY_PREFIX}{cleaned}")
    }
}
