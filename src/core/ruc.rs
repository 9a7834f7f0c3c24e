//! RUC (Registro Único del Contribuyente) check digit and format validation.
//!
//! A RUC is written `base-dv`: a 7–8 digit base number followed by a single
//! modulo-11 check digit.

use std::fmt;

use thiserror::Error;

/// Cyclic weights applied from the least-significant digit of the base.
const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Shortest base that `format_ruc` will rebuild.
const MIN_BASE_DIGITS: usize = 7;

/// Why a RUC failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RucError {
    #[error("RUC is required")]
    Empty,

    #[error("RUC must include the check digit, format XXXXXXXX-Y")]
    MissingCheckDigit,

    #[error("RUC format is incorrect, use XXXXXXXX-Y")]
    MalformedSeparator,

    #[error("RUC base must contain 7 or 8 digits")]
    InvalidBase,

    #[error("RUC check digit must be a single digit between 0 and 9")]
    InvalidCheckDigit,

    #[error("RUC check digit is incorrect, the correct digit is {expected}")]
    CheckDigitMismatch { expected: u8, found: u8 },
}

/// Compute the modulo-11 check digit for a RUC base.
///
/// Non-digit characters are ignored. Remainders 0 and 1 yield 0 and 1;
/// every other remainder `r` yields `11 - r`.
///
/// ```
/// use ekuatia::core::ruc_check_digit;
/// assert_eq!(ruc_check_digit("80016096"), 7);
/// ```
pub fn ruc_check_digit(base: &str) -> u8 {
    let sum: u32 = base
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect::<Vec<_>>()
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| d * WEIGHTS[i % WEIGHTS.len()])
        .sum();

    match sum % 11 {
        0 => 0,
        1 => 1,
        r => (11 - r) as u8,
    }
}

/// Validate a full RUC string (`XXXXXXXX-Y`).
pub fn validate_ruc(ruc: &str) -> Result<(), RucError> {
    let ruc = ruc.trim();
    if ruc.is_empty() {
        return Err(RucError::Empty);
    }
    if !ruc.contains('-') {
        return Err(RucError::MissingCheckDigit);
    }

    let parts: Vec<&str> = ruc.split('-').collect();
    let [base, dv] = parts.as_slice() else {
        return Err(RucError::MalformedSeparator);
    };

    if !(7..=8).contains(&base.len()) || !base.chars().all(|c| c.is_ascii_digit()) {
        return Err(RucError::InvalidBase);
    }

    let mut dv_chars = dv.chars();
    let found = match (dv_chars.next().and_then(|c| c.to_digit(10)), dv_chars.next()) {
        (Some(d), None) => d as u8,
        _ => return Err(RucError::InvalidCheckDigit),
    };

    let expected = ruc_check_digit(base);
    if expected != found {
        return Err(RucError::CheckDigitMismatch { expected, found });
    }

    Ok(())
}

/// Best-effort repair of a RUC into `base-dv` form.
///
/// Valid input is returned unchanged. A RUC with a wrong or malformed check
/// digit is rebuilt from the digits before the first `-`; a bare base is
/// completed with its check digit. Inputs with fewer than 7 digits are
/// returned as-is.
pub fn format_ruc(ruc: &str) -> String {
    let trimmed = ruc.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.contains('-') {
        if validate_ruc(trimmed).is_ok() {
            return trimmed.to_string();
        }
        let head = trimmed.split('-').next().unwrap_or_default();
        if let Some(rebuilt) = rebuild(head) {
            return rebuilt;
        }
    }

    rebuild(trimmed).unwrap_or_else(|| ruc.to_string())
}

fn rebuild(raw: &str) -> Option<String> {
    let base: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if base.len() < MIN_BASE_DIGITS {
        return None;
    }
    let dv = ruc_check_digit(&base);
    Some(format!("{base}-{dv}"))
}

/// A validated RUC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ruc {
    base: String,
    check_digit: u8,
}

impl Ruc {
    /// Parse and validate a RUC in `XXXXXXXX-Y` form.
    pub fn parse(ruc: &str) -> Result<Self, RucError> {
        validate_ruc(ruc)?;
        let ruc = ruc.trim();
        let (base, _) = ruc.split_once('-').ok_or(RucError::MissingCheckDigit)?;
        Ok(Self {
            check_digit: ruc_check_digit(base),
            base: base.to_string(),
        })
    }

    /// Build a RUC from its base, computing the check digit.
    pub fn from_base(base: &str) -> Result<Self, RucError> {
        if !(7..=8).contains(&base.len()) || !base.chars().all(|c| c.is_ascii_digit()) {
            return Err(RucError::InvalidBase);
        }
        Ok(Self {
            check_digit: ruc_check_digit(base),
            base: base.to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// All digits of the RUC, check digit included (e.g. "800160967").
    pub fn digits(&self) -> String {
        format!("{}{}", self.base, self.check_digit)
    }
}

impl fmt::Display for Ruc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.check_digit)
    }
}
