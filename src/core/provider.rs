use crate::core::record::Record;
use crate::error::Error;
use async_trait::async_trait;

/// Record management capability implemented by every DNS provider.
///
/// The bulk operations return the records that were actually applied. A record
/// that fails is left out of the result instead of failing the whole call, so
/// callers detect partial failure by comparing input and output.
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lists every record in `zone`, in the order the provider returns them.
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>, Error>;

    /// Creates each record and returns them with their new IDs.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error>;

    /// Updates records that carry an ID and creates the ones that don't.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error>;

    /// Deletes records by ID. Records without an ID are ignored.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>, Error>;
}
