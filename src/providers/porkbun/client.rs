use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::credentials::ApiCredentials;
use crate::config::Config;
use crate::core::record::Record;
use crate::core::zone::normalize_zone;
use crate::providers::porkbun::error::PorkbunProviderError;
use crate::providers::porkbun::types::*;

pub struct PorkbunProvider {
    config: Config,
    client: Client,
    credentials: ApiCredentials,
}

/// A record a bulk operation could not apply.
#[derive(Debug)]
pub struct RecordFailure {
    /// Position of the record in the input slice.
    pub index: usize,
    pub record: Record,
    pub error: PorkbunProviderError,
}

/// Result of a bulk operation: what was applied and what was skipped.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<Record>,
    pub failures: Vec<RecordFailure>,
}

impl BatchOutcome {
    fn skip(&mut self, op: &str, index: usize, record: &Record, error: PorkbunProviderError) {
        log::warn!(
            "{op} skipped record {} {} (id {:?}): {error}",
            record.name,
            record.record_type,
            record.id
        );
        self.failures.push(RecordFailure {
            index,
            record: record.clone(),
            error,
        });
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl PorkbunProvider {
    pub fn new(credentials: ApiCredentials, config: Config) -> Result<Self, PorkbunProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            client,
            credentials,
        })
    }

    /// Sends one request and gates the response on the status sentinel.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, PorkbunProviderError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.api_url, path);
        log::debug!("POST {path}");

        let response = self.client.post(url).json(body).send().await?;
        let http_status = response.status();
        log::debug!("POST {path} -> {http_status}");

        let text = response.text().await?;
        let envelope: StatusEnvelope = serde_json::from_str(&text).inspect_err(|e| {
            log::error!("Failed to decode response for {path} ({http_status}): {e}");
        })?;

        if envelope.status != SUCCESS {
            return Err(PorkbunProviderError::ApiStatus {
                status: envelope.status,
                message: envelope.message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    pub async fn retrieve(&self, zone: &str) -> Result<Vec<PorkbunRecord>, PorkbunProviderError> {
        let path = format!("/dns/retrieve/{}", normalize_zone(zone));
        let resp: RetrieveResponse = self
            .post(&path, &AuthRequest::from(&self.credentials))
            .await?;
        Ok(resp.records)
    }

    /// Returns the ID the provider assigned to the new record.
    pub async fn create(&self, zone: &str, record: &Record) -> Result<String, PorkbunProviderError> {
        let path = format!("/dns/create/{}", normalize_zone(zone));
        let resp: CreateResponse = self
            .post(&path, &to_porkbun_record(&self.credentials, record))
            .await?;
        resp.id
            .filter(|id| !id.is_empty())
            .ok_or(PorkbunProviderError::MissingId)
    }

    pub async fn edit(&self, zone: &str, record: &Record) -> Result<(), PorkbunProviderError> {
        let path = format!("/dns/edit/{}/{}", normalize_zone(zone), record.id);
        let _: EmptyResponse = self
            .post(&path, &to_porkbun_record(&self.credentials, record))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, zone: &str, id: &str) -> Result<(), PorkbunProviderError> {
        let path = format!("/dns/delete/{}/{}", normalize_zone(zone), id);
        let _: EmptyResponse = self
            .post(&path, &AuthRequest::from(&self.credentials))
            .await?;
        Ok(())
    }

    pub async fn get_records(&self, zone: &str) -> Result<Vec<Record>, PorkbunProviderError> {
        self.retrieve(zone)
            .await?
            .iter()
            .map(|r| to_dns_record(r, zone))
            .collect()
    }

    async fn create_one(&self, zone: &str, record: &Record) -> Result<Record, PorkbunProviderError> {
        let id = self.create(zone, record).await?;
        Ok(record.clone().with_id(id))
    }

    pub async fn append_records_detailed(&self, zone: &str, records: &[Record]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for (index, record) in records.iter().enumerate() {
            match self.create_one(zone, record).await {
                Ok(created) => outcome.records.push(created),
                Err(e) => outcome.skip("append", index, record, e),
            }
        }
        outcome
    }

    pub async fn set_records_detailed(&self, zone: &str, records: &[Record]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for (index, record) in records.iter().enumerate() {
            let result = if record.has_id() {
                self.edit(zone, record).await.map(|()| record.clone())
            } else {
                self.create_one(zone, record).await
            };
            match result {
                Ok(applied) => outcome.records.push(applied),
                Err(e) => outcome.skip("set", index, record, e),
            }
        }
        outcome
    }

    pub async fn delete_records_detailed(&self, zone: &str, records: &[Record]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for (index, record) in records.iter().enumerate() {
            if !record.has_id() {
                continue;
            }
            match self.delete(zone, &record.id).await {
                Ok(()) => outcome.records.push(record.clone()),
                Err(e) => outcome.skip("delete", index, record, e),
            }
        }
        outcome
    }
}
