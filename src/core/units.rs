//! SET unit-of-measure codes.
//!
//! Line items arrive with free-text units ("Kilogramo", "metro cúbico") or
//! short codes ("KG"). They are first reduced to a short code and then to
//! the numeric code of the SET unit table.

/// Short code used when nothing else matches.
pub const DEFAULT_UNIT: &str = "UNI";

/// Short codes accepted verbatim (case-insensitive) from the UI.
const UI_UNIT_CODES: &[&str] = &["UNI", "KG", "L", "M", "M2", "M3"];

/// Short code → SET numeric unit code. Sorted by short code for binary search.
pub const SET_UNIT_CODES: &[(&str, u16)] = &[
    ("CM", 91),   // Centímetro
    ("GR", 86),   // Gramo
    ("HR", 100),  // Hora
    ("KG", 83),   // Kilogramo
    ("KM", 625),  // Kilómetro
    ("L", 89),    // Litro
    ("M", 87),    // Metro
    ("M2", 109),  // Metro cuadrado
    ("M3", 110),  // Metro cúbico
    ("MIN", 101), // Minuto
    ("MM", 95),   // Milímetro
    ("SEG", 666), // Segundo
    ("UNI", 77),  // Unidad
];

/// Reduce a free-text unit to one of the UI short codes.
///
/// ```
/// use ekuatia::core::units::to_short_code;
/// assert_eq!(to_short_code(Some("Kilogramo")), "KG");
/// assert_eq!(to_short_code(Some("Metro cuadrado")), "M2");
/// assert_eq!(to_short_code(None), "UNI");
/// ```
pub fn to_short_code(input: Option<&str>) -> &'static str {
    let Some(unit) = input.filter(|u| !u.is_empty()) else {
        return DEFAULT_UNIT;
    };

    let upper = unit.to_uppercase();
    if let Some(code) = UI_UNIT_CODES.iter().copied().find(|c| *c == upper) {
        return code;
    }

    let lower = unit.to_lowercase();
    if lower.contains("unidad") {
        "UNI"
    } else if lower.contains("kilo") {
        "KG"
    } else if lower.contains("litro") {
        "L"
    } else if lower.contains("metro") {
        if lower.contains("cuadrado") {
            "M2"
        } else if lower.contains("cúbico") || lower.contains("cubico") {
            "M3"
        } else {
            "M"
        }
    } else {
        tracing::debug!(unit, "unrecognized unit, defaulting to {DEFAULT_UNIT}");
        DEFAULT_UNIT
    }
}

/// Map a short code to its SET numeric unit code. Unknown codes map to UNI.
pub fn to_numeric_code(short_code: &str) -> u16 {
    let upper = short_code.to_uppercase();
    match lookup(&upper) {
        Some(code) => code,
        None => {
            tracing::debug!(short_code, "unknown unit code, defaulting to {DEFAULT_UNIT}");
            lookup(DEFAULT_UNIT).unwrap_or(77)
        }
    }
}

/// Check whether `short_code` is in the SET unit table.
pub fn is_known_unit_code(short_code: &str) -> bool {
    lookup(short_code).is_some()
}

/// Free text → SET numeric unit code in one step.
pub fn unit_code_for(input: Option<&str>) -> u16 {
    to_numeric_code(to_short_code(input))
}

fn lookup(short_code: &str) -> Option<u16> {
    SET_UNIT_CODES
        .binary_search_by(|(code, _)| (*code).cmp(short_code))
        .ok()
        .map(|i| SET_UNIT_CODES[i].1)
}
