//! Porkbun provider implementation

pub mod client;
pub mod error;
pub mod types;


pub use client::{BatchOutcome, PorkbunProvider, RecordFailure};
pub use error::PorkbunProviderError;
pub use types::PorkbunRecord;

// --- DNSProvider trait implementation for PorkbunProvider ---
use crate::core::provider::DNSProvider;
use crate::core::record::Record;
use crate::error::Error;
use async_trait::async_trait;
use error::map_error;

#[async_trait]
impl DNSProvider for PorkbunProvider {
    fn name(&self) -> &'static str {
        "porkbun"
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error> {
        self.get_records(zone).await.map_err(map_error)
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error> {
        Ok(self.append_records_detailed(zone, records).await.records)
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error> {
        Ok(self.set_records_detailed(zone, records).await.records)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error> {
        Ok(self.delete_records_detailed(zone, records).await.records)
    }
}
