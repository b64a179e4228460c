//! Book store seam: the four remote calls the catalog screen depends on.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{BookId, BookRecord},
    protocol::{
        delete_book_route, insert_book_route, list_books_route, update_book_route, BookFields,
    },
};
use tracing::debug;

use crate::error::{StoreOp, TransportError};

#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> Result<Vec<BookRecord>, TransportError>;
    async fn create(&self, fields: &BookFields) -> Result<BookRecord, TransportError>;
    async fn update(&self, id: &BookId, fields: &BookFields) -> Result<(), TransportError>;
    async fn delete(&self, id: &BookId) -> Result<(), TransportError>;
}

/// `BookStore` backed by the catalog REST API. Every call is a single
/// request; timeouts are whatever the underlying client defaults to.
#[derive(Clone)]
pub struct HttpBookStore {
    http: Client,
    api_base_url: String,
}

impl HttpBookStore {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_base_url)
    }

    pub fn with_client(http: Client, api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self { http, api_base_url }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{route}", self.api_base_url)
    }

    async fn check_status(op: StoreOp, response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(TransportError::from_status(op, status, &body))
    }

    async fn decode<T: DeserializeOwned>(
        op: StoreOp,
        response: Response,
    ) -> Result<T, TransportError> {
        let response = Self::check_status(op, response).await?;
        response
            .json()
            .await
            .map_err(|err| TransportError::new(op, format!("invalid response payload: {err}")))
    }
}

#[async_trait]
impl BookStore for HttpBookStore {
    async fn list(&self) -> Result<Vec<BookRecord>, TransportError> {
        let url = self.endpoint(list_books_route());
        debug!(%url, "fetching book list");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(StoreOp::List, err))?;
        Self::decode(StoreOp::List, response).await
    }

    async fn create(&self, fields: &BookFields) -> Result<BookRecord, TransportError> {
        let response = self
            .http
            .post(self.endpoint(insert_book_route()))
            .json(fields)
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(StoreOp::Create, err))?;
        Self::decode(StoreOp::Create, response).await
    }

    async fn update(&self, id: &BookId, fields: &BookFields) -> Result<(), TransportError> {
        let response = self
            .http
            .put(self.endpoint(&update_book_route(id)))
            .json(fields)
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(StoreOp::Update, err))?;
        Self::check_status(StoreOp::Update, response).await?;
        Ok(())
    }

    async fn delete(&self, id: &BookId) -> Result<(), TransportError> {
        let response = self
            .http
            .delete(self.endpoint(&delete_book_route(id)))
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(StoreOp::Delete, err))?;
        Self::check_status(StoreOp::Delete, response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
