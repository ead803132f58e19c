//! Where the projects section gets its catalog from.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::catalog::{Category, Project};
use folio_core::fixtures;
use folio_core::pagination::{Page, MAX_PER_PAGE};

use crate::http::{read_json, HttpError};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Everything the projects section shows.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    /// In display order.
    pub projects: Vec<Project>,
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog, SourceError>;
}

/// The built-in demo content, served after a simulated delay.
#[derive(Debug, Default)]
pub struct FixtureCatalog {
    delay: Duration,
}

impl FixtureCatalog {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn load(&self) -> Result<Catalog, SourceError> {
        tokio::time::sleep(self.delay).await;
        Ok(Catalog {
            categories: fixtures::categories(),
            projects: fixtures::projects()
                .into_iter()
                .filter(|p| p.is_published)
                .collect(),
        })
    }
}

/// Catalog read from the folio API.
pub struct HttpCatalog {
    client: reqwest::Client,
    api_url: String,
}

impl HttpCatalog {
    /// * `api_url` - Base URL, e.g. `http://localhost:3000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let response = self
            .client
            .get(format!("{}/api/v1{path}", self.api_url))
            .send()
            .await?;
        read_json(response).await
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Catalog, SourceError> {
        let categories: Vec<Category> = self.get("/categories").await?;

        let mut projects = Vec::new();
        let mut page = 1;
        loop {
            let batch: Page<Project> = self
                .get(&format!("/projects?page={page}&per_page={MAX_PER_PAGE}"))
                .await?;
            projects.extend(batch.items);
            if !batch.has_next {
                break;
            }
            page += 1;
        }

        tracing::debug!(
            categories = categories.len(),
            projects = projects.len(),
            "Catalog loaded from API"
        );
        Ok(Catalog {
            categories,
            projects,
        })
    }
}
