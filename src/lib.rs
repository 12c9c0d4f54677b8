//! DNS record management against the Porkbun API behind a provider-agnostic
//! record model.
//!
//! ```no_run
//! use porkbun_dns::{ApiCredentials, Config, DNSProvider, PorkbunProvider, Record};
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = PorkbunProvider::new(ApiCredentials::new("pk1_...", "sk1_..."), Config::default())?;
//! let created = provider
//!     .append_records("example.com.", &[Record::new("www", "A", "1.2.3.4", Duration::from_secs(600))])
//!     .await?;
//! provider.delete_records("example.com.", &created).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod error;
pub mod providers;

pub use auth::credentials::{ApiCredentials, CredentialManager, EnvCredentialManager};
pub use config::Config;
pub use crate::core::provider::DNSProvider;
pub use crate::core::record::Record;
pub use crate::core::registry::ProviderRegistry;
pub use error::Error;
pub use providers::porkbun::{BatchOutcome, PorkbunProvider, PorkbunProviderError};
