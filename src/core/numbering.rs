use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::FacturaError;

/// Largest sequence number that fits the 7-digit document number field.
pub const MAX_SEQUENCE: u64 = 9_999_999;

/// Establishment / point-of-sale / sequence triple identifying a document.
///
/// Displayed in the SET form `EEE-PPP-NNNNNNN`, e.g. "001-001-0000042".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentNumber {
    /// Establishment code, 3 digits.
    pub establishment: String,
    /// Point of sale (punto de expedición) code, 3 digits.
    pub point: String,
    /// Sequence number within the establishment and point.
    pub number: u64,
}

impl DocumentNumber {
    pub fn new(
        establishment: impl Into<String>,
        point: impl Into<String>,
        number: u64,
    ) -> Result<Self, FacturaError> {
        let establishment = establishment.into();
        let point = point.into();
        check_code("establishment", &establishment)?;
        check_code("point", &point)?;
        if number == 0 || number > MAX_SEQUENCE {
            return Err(FacturaError::Numbering(format!(
                "sequence number {number} out of range 1..={MAX_SEQUENCE}"
            )));
        }
        Ok(Self {
            establishment,
            point,
            number,
        })
    }

    /// Parse `EEE-PPP-NNNNNNN`.
    pub fn parse(s: &str) -> Result<Self, FacturaError> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [establishment, point, number] = parts.as_slice() else {
            return Err(FacturaError::Numbering(format!(
                "'{s}' is not in EEE-PPP-NNNNNNN form"
            )));
        };
        if number.len() != 7 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(FacturaError::Numbering(format!(
                "'{number}' is not a 7-digit sequence number"
            )));
        }
        let number: u64 = number
            .parse()
            .map_err(|e| FacturaError::Numbering(format!("invalid sequence number: {e}")))?;
        Self::new(*establishment, *point, number)
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:07}", self.establishment, self.point, self.number)
    }
}

fn check_code(kind: &str, code: &str) -> Result<(), FacturaError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(FacturaError::Numbering(format!(
            "{kind} code '{code}' must be 3 digits"
        )));
    }
    Ok(())
}

/// Consecutive document numbers for one establishment and point of sale.
#[derive(Debug, Clone)]
pub struct DocumentNumberSequence {
    establishment: String,
    point: String,
    next_number: u64,
}

impl DocumentNumberSequence {
    /// Create a sequence starting at 1.
    pub fn new(
        establishment: impl Into<String>,
        point: impl Into<String>,
    ) -> Result<Self, FacturaError> {
        Self::starting_at(establishment, point, 1)
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(
        establishment: impl Into<String>,
        point: impl Into<String>,
        next_number: u64,
    ) -> Result<Self, FacturaError> {
        let first = DocumentNumber::new(establishment, point, next_number)?;
        Ok(Self {
            establishment: first.establishment,
            point: first.point,
            next_number,
        })
    }

    /// Issue the next document number.
    pub fn next_number(&mut self) -> Result<DocumentNumber, FacturaError> {
        let number = self.peek()?;
        self.next_number += 1;
        Ok(number)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> Result<DocumentNumber, FacturaError> {
        DocumentNumber::new(
            self.establishment.clone(),
            self.point.clone(),
            self.next_number,
        )
    }

    /// The next sequence value that will be issued.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }
}
