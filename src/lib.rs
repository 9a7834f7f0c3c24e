//! # ekuatia
//!
//! Client-side core for Paraguayan electronic invoicing (SIFEN / e-Kuatia):
//! RUC validation, SET code mapping, and assembly of the submission body
//! sent to an e-invoicing backend.
//!
//! All monetary values use [`rust_decimal::Decimal`]. Amounts are written to
//! JSON as numbers because the backend expects them that way.
//!
//! ## Quick Start
//!
//! ```rust
//! use ekuatia::core::*;
//! use rust_decimal_macros::dec;
//!
//! let draft = InvoiceDraftBuilder::new()
//!     .client(ClientBuilder::legal("Comercial Guaraní S.A.", "80016096-7").build())
//!     .add_item(LineItemBuilder::new("Consultoría", dec!(2), dec!(50000)).build())
//!     .build();
//!
//! assert!(validate_draft(&draft).is_empty());
//!
//! let meta = SubmissionMetadata::new(1, Issuer::new("4567890", "Ana Gómez"));
//! let body = assemble(&draft, &meta).unwrap();
//!
//! assert_eq!(body.cliente.documento_numero, "800160967");
//! assert_eq!(body.items[0].iva_tipo, 1);
//! assert_eq!(body.condicion.entregas[0].monto, dec!(100000));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, RUC, code mapping, validation, assembly |
//! | `api` | Async HTTP client for the e-invoicing backend |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "api")]
pub mod api;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
