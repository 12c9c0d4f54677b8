use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

use crate::auth::credentials::ApiCredentials;
use crate::core::record::Record;
use crate::core::zone::relative_name;
use crate::providers::porkbun::error::PorkbunProviderError;

/// Status value Porkbun returns when a call succeeded.
pub const SUCCESS: &str = "SUCCESS";

#[derive(Serialize, Debug)]
pub struct AuthRequest<'a> {
    pub apikey: &'a str,
    pub secretapikey: &'a str,
}

impl<'a> From<&'a ApiCredentials> for AuthRequest<'a> {
    fn from(creds: &'a ApiCredentials) -> Self {
        AuthRequest {
            apikey: creds.api_key(),
            secretapikey: creds.secret_api_key(),
        }
    }
}

/// Body of both the create and the edit call.
#[derive(Serialize, Debug)]
pub struct RecordRequest<'a> {
    #[serde(flatten)]
    pub auth: AuthRequest<'a>,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
}

/// Every response carries at least these two fields.
#[derive(Deserialize, Debug)]
pub struct StatusEnvelope {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RetrieveResponse {
    #[serde(default)]
    pub records: Vec<PorkbunRecord>,
}

#[derive(Deserialize, Debug)]
pub struct CreateResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct EmptyResponse {}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PorkbunRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub ttl: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub prio: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

// IDs come back as strings from retrieve but as numbers from create.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}

// --- TTL, name and priority codec ---

/// Zero means "let the provider pick", so no field is sent.
pub fn encode_ttl(ttl: Duration) -> Option<String> {
    match ttl.as_secs() {
        0 => None,
        secs => Some(secs.to_string()),
    }
}

pub fn decode_ttl(raw: Option<&str>) -> Result<Duration, PorkbunProviderError> {
    match raw {
        None => Ok(Duration::ZERO),
        Some(s) => s
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| PorkbunProviderError::InvalidTtl(s.to_string())),
    }
}

/// Porkbun addresses the apex with an empty subdomain.
pub fn encode_name(name: &str) -> &str {
    match name {
        "@" => "",
        other => other,
    }
}

pub fn encode_priority(priority: Option<u32>) -> Option<String> {
    priority.map(|p| p.to_string())
}

/// `"0"` is what Porkbun reports for types without a priority.
pub fn decode_priority(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p != 0)
}

pub fn to_dns_record(pr: &PorkbunRecord, zone: &str) -> Result<Record, PorkbunProviderError> {
    Ok(Record {
        id: pr.id.clone(),
        name: relative_name(&pr.name, zone),
        record_type: pr.record_type.clone(),
        value: pr.content.clone(),
        ttl: decode_ttl(pr.ttl.as_deref())?,
        priority: decode_priority(pr.prio.as_deref()),
    })
}

pub fn to_porkbun_record<'a>(creds: &'a ApiCredentials, rec: &'a Record) -> RecordRequest<'a> {
    RecordRequest {
        auth: AuthRequest::from(creds),
        name: encode_name(&rec.name),
        record_type: &rec.record_type,
        content: &rec.value,
        ttl: encode_ttl(rec.ttl),
        prio: encode_priority(rec.priority),
    }
}
