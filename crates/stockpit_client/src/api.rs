//! HTTP transport for the inventory service.

use async_trait::async_trait;
use futures_lite::FutureExt;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use crate::error::ApiError;
use crate::types::{NewProduct, Product, ProductId};

/// How long the health probe waits before reporting the service down.
///
/// Data operations carry no client-side deadline; only the probe is bounded.
pub const HEALTH_PROBE_TIMEOUT_MS: u32 = 5_000;

/// Transport boundary for the inventory service.
///
/// Each operation is a single request/response round trip with no retry.
/// The returned futures are not `Send`; drive them on the thread that
/// created them, e.g. with `spawn_local`.
#[async_trait(?Send)]
pub trait InventoryApi: Send + Sync {
    /// One-shot liveness probe, bounded by [`HEALTH_PROBE_TIMEOUT_MS`].
    async fn probe_health(&self) -> Result<(), ApiError>;

    /// Fetch the whole product collection in server order.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Create a product. The created record in the response body is
    /// ignored; callers refetch the collection to observe it.
    async fn create_product(&self, product: NewProduct) -> Result<(), ApiError>;

    /// Delete the product with the given id.
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;
}

/// [`InventoryApi`] over the browser's fetch API.
///
/// Routes follow the service layout: `GET {base}/health`, `GET` and `POST`
/// on `{base}/products`, `DELETE {base}/products/{id}`.
#[derive(Clone, Debug)]
pub struct HttpInventoryApi {
    base_url: String,
}

impl HttpInventoryApi {
    /// Client for the service rooted at `base_url`, e.g.
    /// `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryApi {
    async fn probe_health(&self) -> Result<(), ApiError> {
        let probe = async {
            let response = Request::get(&self.endpoint("/health"))
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            check_status(&response)
        };
        let deadline = async {
            TimeoutFuture::new(HEALTH_PROBE_TIMEOUT_MS).await;
            Err(ApiError::Timeout)
        };

        probe.or(deadline).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = Request::get(&self.endpoint("/products"))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check_status(&response)?;

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn create_product(&self, product: NewProduct) -> Result<(), ApiError> {
        let response = Request::post(&self.endpoint("/products"))
            .json(&product)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check_status(&response)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let response = Request::delete(&self.endpoint(&format!("/products/{0}", id)))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check_status(&response)
    }
}
