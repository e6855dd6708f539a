use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{Apartment, Envelope, Itinerary, Ship, Story};
use crate::query::Query;

/// Where the content store lives. Passed in explicitly; nothing in this
/// crate reads the environment or keeps process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    pub base_url: String,
}

impl ContentConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[derive(Debug)]
pub enum ContentError {
    /// The store answered with a non-success HTTP status. Distinct from
    /// a successful response with zero results, which is not an error.
    Status { status: u16, reason: String },
    Transport(String),
    Decode(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Status { status, reason } => {
                write!(f, "content store error: {status} {reason}")
            }
            ContentError::Transport(msg) => write!(f, "content store unreachable: {msg}"),
            ContentError::Decode(msg) => write!(f, "content response malformed: {msg}"),
        }
    }
}

impl std::error::Error for ContentError {}

/// Read-only client over the content store's JSON API.
///
/// Every operation is a single GET with no retries, caching or writes; a
/// superseded call is simply discarded by its caller. Missing records
/// come back as `None` or an empty collection, never as an error.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentConfig,
}

impl ContentClient {
    pub fn new(config: ContentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Share an existing connection pool across clients.
    pub fn with_http(http: reqwest::Client, config: ContentConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &Query,
    ) -> Result<T, ContentError> {
        let url = format!(
            "{}/api{}{}",
            self.config.base_url,
            resource,
            query.to_suffix()
        );
        debug!(%url, "content fetch");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;
        // Pagination meta is decoded for completeness but discarded.
        Ok(envelope.data)
    }

    pub async fn ships(&self) -> Result<Vec<Ship>, ContentError> {
        let query = Query::new()
            .populate("operator")
            .populate("apartments")
            .populate("itineraries.stops")
            .populate("heroImage")
            .populate("gallery")
            .sort("id:asc");
        self.fetch("/ships", &query).await
    }

    pub async fn ship(&self, slug: &str) -> Result<Option<Ship>, ContentError> {
        let query = Query::new()
            .filter_eq(&["slug"], slug)
            .populate("operator")
            .populate("apartments")
            .populate("itineraries.stops")
            .populate("heroImage")
            .populate("gallery")
            .populate("stories");
        let ships: Vec<Ship> = self.fetch("/ships", &query).await?;
        Ok(ships.into_iter().next())
    }

    pub async fn apartments(&self, ship_document_id: &str) -> Result<Vec<Apartment>, ContentError> {
        let query = Query::new()
            .filter_eq(&["ship", "documentId"], ship_document_id)
            .populate("ship");
        self.fetch("/apartments", &query).await
    }

    pub async fn itineraries(&self, ship_document_id: &str) -> Result<Vec<Itinerary>, ContentError> {
        let query = Query::new()
            .filter_eq(&["ship", "documentId"], ship_document_id)
            .populate("stops");
        self.fetch("/itineraries", &query).await
    }

    pub async fn stories(&self) -> Result<Vec<Story>, ContentError> {
        let query = Query::new()
            .populate("coverImage")
            .populate("ship")
            .sort("createdAt:desc");
        self.fetch("/stories", &query).await
    }

    pub async fn story(&self, slug: &str) -> Result<Option<Story>, ContentError> {
        let query = Query::new()
            .filter_eq(&["slug"], slug)
            .populate("coverImage")
            .populate("ship");
        let stories: Vec<Story> = self.fetch("/stories", &query).await?;
        Ok(stories.into_iter().next())
    }
}
