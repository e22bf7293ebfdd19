// web_app/api/analytics/appwrite.rs - Search counts in an Appwrite collection
//
// Uses the Appwrite REST API directly:
// - list documents filtered with `equal("searchTerm")`
// - create a document with a server-generated id
// - bump `count` with the server-side increment endpoint
//
// The collection is expected to carry a unique index on `searchTerm`.
// Creation then fails with 409 when another request created the record
// first, and the upsert falls back to an increment.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{AnalyticsError, SearchAnalytics};
use crate::web_app::api::config::AppwriteConfig;
use crate::web_app::model::{SearchCountRecord, SearchHit};

const SEARCH_TERM_ATTRIBUTE: &str = "searchTerm";
const COUNT_ATTRIBUTE: &str = "count";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Appwrite query: attribute equals value
pub fn query_equal(attribute: &str, value: &str) -> String {
    json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

/// Appwrite query: sort by attribute, descending
pub fn query_order_desc(attribute: &str) -> String {
    json!({ "method": "orderDesc", "attribute": attribute }).to_string()
}

/// Appwrite query: cap the number of returned documents
pub fn query_limit(limit: usize) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<SearchDocument>,
}

#[derive(Debug, Deserialize)]
struct SearchDocument {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "searchTerm")]
    search_term: String,
    #[serde(default)]
    count: i64,
    #[serde(default)]
    movie_id: i64,
    #[serde(default)]
    poster_url: String,
}

impl From<SearchDocument> for SearchCountRecord {
    fn from(doc: SearchDocument) -> Self {
        SearchCountRecord {
            id: doc.id,
            search_term: doc.search_term,
            count: doc.count,
            movie_id: doc.movie_id,
            poster_url: doc.poster_url,
        }
    }
}

pub struct AppwriteSearchAnalytics {
    client: Client,
    config: AppwriteConfig,
}

impl AppwriteSearchAnalytics {
    pub fn new(config: AppwriteConfig) -> Result<Self, AnalyticsError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AnalyticsError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            urlencoding::encode(&self.config.database_id),
            urlencoding::encode(&self.config.collection_id),
        )
    }

    fn document_url(&self, document_id: &str) -> String {
        format!("{}/{}", self.documents_url(), urlencoding::encode(document_id))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header(ACCEPT, "application/json")
            .header("X-Appwrite-Project", &self.config.project_id);
        match &self.config.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    async fn list(&self, queries: &[String]) -> Result<Vec<SearchDocument>, AnalyticsError> {
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let response = self
            .authorize(self.client.get(self.documents_url()))
            .query(&params)
            .send()
            .await
            .map_err(transport)?;

        let list: DocumentList = expect_success(response)
            .await?
            .json()
            .await
            .map_err(|e| AnalyticsError::Decode(e.to_string()))?;
        Ok(list.documents)
    }

    async fn find_by_term(&self, search_term: &str) -> Result<Option<SearchDocument>, AnalyticsError> {
        let documents = self
            .list(&[query_equal(SEARCH_TERM_ATTRIBUTE, search_term), query_limit(1)])
            .await?;
        Ok(documents.into_iter().next())
    }

    async fn increment(&self, document_id: &str) -> Result<SearchCountRecord, AnalyticsError> {
        let url = format!("{}/{}/increment", self.document_url(document_id), COUNT_ATTRIBUTE);
        let response = self
            .authorize(self.client.patch(url))
            .json(&json!({ "value": 1 }))
            .send()
            .await
            .map_err(transport)?;

        decode_document(expect_success(response).await?).await
    }

    /// `Ok(None)` when the term already exists
    async fn create(&self, hit: &SearchHit) -> Result<Option<SearchCountRecord>, AnalyticsError> {
        let body = json!({
            "documentId": "unique()",
            "data": {
                "searchTerm": hit.search_term,
                "count": 1,
                "movie_id": hit.movie_id,
                "poster_url": hit.poster_url,
            },
        });
        let response = self
            .authorize(self.client.post(self.documents_url()))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        if response.status() == StatusCode::CONFLICT {
            debug!(term = %hit.search_term, "Search term created concurrently");
            return Ok(None);
        }
        decode_document(expect_success(response).await?).await.map(Some)
    }
}

fn transport(e: reqwest::Error) -> AnalyticsError {
    AnalyticsError::Transport(e.to_string())
}

async fn expect_success(response: Response) -> Result<Response, AnalyticsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AnalyticsError::Status {
        status: status.as_u16(),
        body: body.chars().take(200).collect(),
    })
}

async fn decode_document(response: Response) -> Result<SearchCountRecord, AnalyticsError> {
    response
        .json::<SearchDocument>()
        .await
        .map(SearchCountRecord::from)
        .map_err(|e| AnalyticsError::Decode(e.to_string()))
}

#[async_trait]
impl SearchAnalytics for AppwriteSearchAnalytics {
    fn name(&self) -> &str {
        "appwrite"
    }

    async fn record_search(&self, hit: &SearchHit) -> Result<SearchCountRecord, AnalyticsError> {
        if let Some(existing) = self.find_by_term(&hit.search_term).await? {
            return self.increment(&existing.id).await;
        }
        if let Some(created) = self.create(hit).await? {
            return Ok(created);
        }

        let existing = self.find_by_term(&hit.search_term).await?.ok_or_else(|| {
            AnalyticsError::Decode(format!(
                "document for {:?} conflicted on create but cannot be found",
                hit.search_term
            ))
        })?;
        self.increment(&existing.id).await
    }

    async fn top_trending(&self, limit: usize) -> Result<Vec<SearchCountRecord>, AnalyticsError> {
        let documents = self
            .list(&[query_order_desc(COUNT_ATTRIBUTE), query_limit(limit)])
            .await?;
        Ok(documents.into_iter().map(SearchCountRecord::from).collect())
    }
}
