//! IVA buckets and SET tax-type codes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// IVA bucket a line item is taxed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxBucket {
    /// Exempt (0%).
    #[serde(rename = "exentas")]
    Exempt,
    /// IVA 5%.
    #[serde(rename = "iva5")]
    Tax5,
    /// IVA 10%.
    #[serde(rename = "iva10")]
    Tax10,
}

/// SET `ivaTipo` code per bucket. The single place to correct if the
/// receiving backend changes its table.
pub const IVA_TYPE_CODES: [(TaxBucket, u8); 3] = [
    (TaxBucket::Tax10, 1),
    (TaxBucket::Tax5, 2),
    (TaxBucket::Exempt, 3),
];

impl TaxBucket {
    /// IVA percentage of the bucket (0, 5 or 10).
    pub fn percentage(&self) -> u8 {
        match self {
            Self::Exempt => 0,
            Self::Tax5 => 5,
            Self::Tax10 => 10,
        }
    }

    /// Bucket for an IVA percentage. Anything other than 0 or 5 is 10%.
    pub fn from_percentage(pct: Decimal) -> Self {
        if pct.is_zero() {
            Self::Exempt
        } else if pct == Decimal::from(5) {
            Self::Tax5
        } else {
            if pct != Decimal::from(10) {
                tracing::debug!(%pct, "unusual IVA percentage, treating as 10%");
            }
            Self::Tax10
        }
    }

    /// SET numeric `ivaTipo` code.
    pub fn set_code(&self) -> u8 {
        IVA_TYPE_CODES
            .iter()
            .find(|(bucket, _)| bucket == self)
            .map(|(_, code)| *code)
            .unwrap_or(1)
    }

    /// UI label ("exentas", "iva5", "iva10").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exempt => "exentas",
            Self::Tax5 => "iva5",
            Self::Tax10 => "iva10",
        }
    }

    /// Parse a UI label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "exentas" => Some(Self::Exempt),
            "iva5" => Some(Self::Tax5),
            "iva10" => Some(Self::Tax10),
            _ => None,
        }
    }
}

/// IVA percentage → bucket.
pub fn percentage_to_bucket(pct: Decimal) -> TaxBucket {
    TaxBucket::from_percentage(pct)
}

/// IVA percentage → SET `ivaTipo` code, via the bucket.
pub fn iva_type_code(pct: Decimal) -> u8 {
    TaxBucket::from_percentage(pct).set_code()
}
