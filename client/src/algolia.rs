//! Algolia-compatible REST adapter.
//!
//! Bulk writes go through the index `batch` endpoint; the full snapshot is
//! read by following `browse` cursors until the server stops returning one.

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use docsync_engine::{AdapterError, IndexAdapter, IndexConfig, ObjectId, Record};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

const APPLICATION_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";

/// HTTP handle to one remote index.
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
    http: Client,
    base_url: String,
    index_name: String,
}

impl AlgoliaClient {
    /// Create a client for the index named in `config`.
    ///
    /// Credentials are sent as default headers on every request.
    pub fn new(config: &IndexConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            APPLICATION_ID_HEADER,
            HeaderValue::from_str(&config.application_id)
                .map_err(|_| ClientError::InvalidCredentials)?,
        );
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| ClientError::InvalidCredentials)?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: format!("https://{}.algolia.net", config.application_id),
            index_name: config.name.clone(),
        })
    }

    /// Point the client at a different host (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the remote index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/1/indexes/{}/{}",
            self.base_url,
            urlencoding::encode(&self.index_name),
            action
        )
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.post(self.endpoint(action)).json(body).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Send one batch of write requests.
    pub async fn batch(&self, requests: Vec<BatchRequest>) -> Result<BatchResponse> {
        let count = requests.len();
        let response: BatchResponse = self.post("batch", &json!({ "requests": requests })).await?;
        debug!(
            index = %self.index_name,
            requests = count,
            task_id = response.task_id,
            "batch accepted"
        );
        Ok(response)
    }

    /// Read every record of the index, following cursors.
    pub async fn browse_all(&self) -> Result<Vec<Record>> {
        let mut hits = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page: BrowsePage = self
                .post("browse", &BrowseParams { cursor: cursor.as_deref() })
                .await?;
            pages += 1;
            hits.extend(page.hits);

            match page.cursor {
                Some(next) if cursor.as_deref() == Some(next.as_str()) => {
                    warn!(
                        index = %self.index_name,
                        cursor = %next,
                        "browse cursor did not advance"
                    );
                    break;
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(index = %self.index_name, pages, records = hits.len(), "browsed index");
        Ok(hits)
    }
}

#[async_trait]
impl IndexAdapter for AlgoliaClient {
    async fn add_objects(&self, records: &[Record]) -> std::result::Result<(), AdapterError> {
        let requests = records.iter().cloned().map(BatchRequest::save).collect();
        self.batch(requests).await?;
        Ok(())
    }

    async fn browse(&self) -> std::result::Result<Vec<Record>, AdapterError> {
        Ok(self.browse_all().await?)
    }

    async fn delete_objects(
        &self,
        object_ids: &[ObjectId],
    ) -> std::result::Result<(), AdapterError> {
        let requests = object_ids
            .iter()
            .map(String::as_str)
            .map(BatchRequest::delete)
            .collect();
        self.batch(requests).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    warn!(status = status.as_u16(), %message, "search API request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// One write inside a batch call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    pub action: BatchAction,
    pub body: serde_json::Value,
}

impl BatchRequest {
    /// Upsert a record: replace by `objectID` when it has one, otherwise
    /// let the server assign an identifier.
    pub fn save(record: Record) -> Self {
        let action = if record.object_id().is_some() {
            BatchAction::UpdateObject
        } else {
            BatchAction::AddObject
        };
        Self {
            action,
            body: record.into(),
        }
    }

    /// Delete a record by identifier.
    pub fn delete(object_id: &str) -> Self {
        Self {
            action: BatchAction::DeleteObject,
            body: json!({ "objectID": object_id }),
        }
    }
}

/// Batch write actions understood by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchAction {
    AddObject,
    UpdateObject,
    DeleteObject,
}

/// Response of the batch endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchResponse {
    #[serde(rename = "taskID")]
    pub task_id: u64,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Vec<ObjectId>,
}

#[derive(Serialize)]
struct BrowseParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<&'a str>,
}

#[derive(Deserialize)]
struct BrowsePage {
    #[serde(default)]
    hits: Vec<Record>,
    cursor: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}
