//! Core invoice types, validation, and submission assembly.
//!
//! This module turns an in-progress invoice into the body accepted by the
//! SET e-invoicing backend: RUC check digits, unit and IVA code mapping,
//! phone and date normalization, totals, and the final assembly.

mod assembler;
mod builder;
mod date;
mod error;
pub mod geography;
mod numbering;
mod phone;
mod ruc;
mod submission;
mod tax;
mod totals;
mod types;
pub mod units;
mod validation;

pub use assembler::*;
pub use builder::*;
pub use date::{format_for_submission, submission_timestamp};
pub use error::*;
pub use numbering::*;
pub use phone::{DEFAULT_PHONE_COUNTRY, normalize_phone};
pub use ruc::{Ruc, RucError, format_ruc, ruc_check_digit, validate_ruc};
pub use submission::*;
pub use tax::{IVA_TYPE_CODES, TaxBucket, iva_type_code, percentage_to_bucket};
pub use totals::InvoiceTotals;
pub use types::*;
pub use units::{is_known_unit_code, unit_code_for};
pub use validation::*;
