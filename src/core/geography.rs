//! SET geography codes (departamento / distrito / ciudad).
//!
//! Lookups return `None` for ids with no known name; callers decide whether
//! to use a name of their own or fail. Nothing here substitutes the default
//! names for unknown ids.

/// Default department: Alto Paraná.
pub const DEFAULT_DEPARTMENT: u32 = 11;
/// Default district: Ciudad del Este.
pub const DEFAULT_DISTRICT: u32 = 173;
/// Default city: Ciudad del Este.
pub const DEFAULT_CITY: u32 = 4278;

static DEPARTMENTS: &[(u32, &str)] = &[
    (1, "CAPITAL"),
    (2, "CONCEPCION"),
    (3, "SAN PEDRO"),
    (4, "CORDILLERA"),
    (5, "GUAIRA"),
    (6, "CAAGUAZU"),
    (7, "CAAZAPA"),
    (8, "ITAPUA"),
    (9, "MISIONES"),
    (10, "PARAGUARI"),
    (11, "ALTO PARANA"),
    (12, "CENTRAL"),
    (13, "ÑEEMBUCU"),
    (14, "AMAMBAY"),
    (15, "CANINDEYU"),
    (16, "PRESIDENTE HAYES"),
    (17, "BOQUERON"),
    (18, "ALTO PARAGUAY"),
];

static DISTRICTS: &[(u32, &str)] = &[(DEFAULT_DISTRICT, "CIUDAD DEL ESTE")];

static CITIES: &[(u32, &str)] = &[(DEFAULT_CITY, "CIUDAD DEL ESTE")];

/// Name of a department, if known.
pub fn department_name(id: u32) -> Option<&'static str> {
    find(DEPARTMENTS, id)
}

/// Name of a district, if known.
pub fn district_name(id: u32) -> Option<&'static str> {
    find(DISTRICTS, id)
}

/// Name of a city, if known.
pub fn city_name(id: u32) -> Option<&'static str> {
    find(CITIES, id)
}

fn find(table: &[(u32, &'static str)], id: u32) -> Option<&'static str> {
    table
        .binary_search_by_key(&id, |(k, _)| *k)
        .ok()
        .map(|i| table[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_named() {
        assert_eq!(department_name(DEFAULT_DEPARTMENT), Some("ALTO PARANA"));
        assert_eq!(district_name(DEFAULT_DISTRICT), Some("CIUDAD DEL ESTE"));
        assert_eq!(city_name(DEFAULT_CITY), Some("CIUDAD DEL ESTE"));
    }

    #[test]
    fn all_departments() {
        assert_eq!(department_name(1), Some("CAPITAL"));
        assert_eq!(department_name(12), Some("CENTRAL"));
        assert_eq!(department_name(18), Some("ALTO PARAGUAY"));
        assert_eq!(DEPARTMENTS.len(), 18);
    }

    #[test]
    fn unknown_ids_are_none() {
        assert_eq!(department_name(0), None);
        assert_eq!(department_name(19), None);
        assert_eq!(district_name(1), None);
        assert_eq!(city_name(1), None);
    }

    #[test]
    fn tables_sorted() {
        for table in [DEPARTMENTS, DISTRICTS, CITIES] {
            for w in table.windows(2) {
                assert!(w[0].0 < w[1].0);
            }
        }
    }
}
