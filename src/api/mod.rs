//! Async client for the e-invoicing backend.
//!
//! Submits assembled invoices, lists issued documents and requests
//! cancellation events. HTTP failures are translated into messages suitable
//! for showing to the person operating the point of sale.
//!
//! # Example
//!
//! ```ignore
//! use ekuatia::api::*;
//!
//! let client = ApiClient::new(ApiConfig::from_env()?)?;
//! let created = client.submit_document(&submission).await?;
//!
//! let page = client
//!     .list_documents(&ListDocumentsParams::new().status(DocumentStatus::Aprobado))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod messages;
mod types;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_TIMEOUT, ENV_API_URL, ENV_AUTH_TOKEN, ENV_USER_TOKEN};
pub use error::ApiError;
pub use messages::{ApiAction, NETWORK_MESSAGE, friendly_message};
pub use types::*;
