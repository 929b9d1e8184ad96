//! Read-only client for the hosted city document.
//!
//! One GET, one document: `{ "record": [...], "metadata": {...} }`. There is
//! no retry, caching or pagination; every call is a fresh round trip.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::capabilities::http::{ACCESS_KEY_HEADER, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};
use crate::capabilities::Capabilities;
use crate::config::StoreConfig;
use crate::error::FetchError;
use crate::event::Event;
use crate::model::City;

/// One element of `record` as the store sends it.
///
/// Field names vary between document revisions (`titulo`/`title`, ...).
/// Nothing is validated: missing or non-string values become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,

    #[serde(default, alias = "titulo", deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, alias = "descripcion", deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(
        default,
        rename = "imageUrl",
        alias = "imagen",
        alias = "image_url",
        deserialize_with = "lenient_string"
    )]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDocument {
    pub record: Vec<CityRecord>,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
}

/// Issues the GET; the outcome comes back as [`Event::CitiesFetched`]
/// tagged with `request_seq`.
pub fn fetch_cities(caps: &Capabilities, config: &StoreConfig, request_seq: u64) {
    debug!(request_seq, host = config.endpoint().host(), "fetching cities");

    caps.http
        .get(config.endpoint().as_str())
        .header(ACCESS_KEY_HEADER, config.access_key())
        .header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE)
        .expect_json::<CityDocument>()
        .send(move |result| Event::CitiesFetched {
            request_seq,
            result: into_outcome(result),
        });
}

fn into_outcome(
    result: crux_http::Result<crux_http::Response<CityDocument>>,
) -> Result<Vec<City>, FetchError> {
    let outcome = match result {
        Ok(mut response) => {
            let status = u16::from(response.status());
            decode_response(status, response.take_body())
        }
        Err(e) => Err(fetch_error(e)),
    };

    if let Err(e) = &outcome {
        warn!(error = %e, "error fetching cities");
    }
    outcome
}

/// crux_http reports 4xx/5xx as `Error::Http` before the body is decoded,
/// so the status has to be recovered here.
fn fetch_error(error: crux_http::Error) -> FetchError {
    match error {
        crux_http::Error::Http(e) => FetchError::Status {
            status: u16::from(e.code),
        },
        crux_http::Error::Json(reason) => FetchError::decode(reason),
        other => FetchError::transport(other.to_string()),
    }
}

/// Maps a finished response onto the city list.
pub fn decode_response(status: u16, body: Option<CityDocument>) -> Result<Vec<City>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { status });
    }

    let document = body.ok_or_else(|| FetchError::decode("response body is empty"))?;

    if let Some(meta) = &document.metadata {
        debug!(
            document_id = meta.id.as_deref().unwrap_or_default(),
            records = document.record.len(),
            "city document received"
        );
    }

    Ok(City::ingest(document.record))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
