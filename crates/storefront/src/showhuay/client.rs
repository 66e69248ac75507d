//! HTTP client for the ShowHuay commerce backend.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use showhuay_core::{CartLine, ProductId, UserId};

use crate::config::ShowHuayApiConfig;
use crate::showhuay::ShowHuayError;
use crate::showhuay::types::{CartsResponse, ProductRecord, ProductResponse, RemoveFromCartRequest};

/// Catalog cache time-to-live.
const PRODUCT_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Catalog cache capacity.
const PRODUCT_CACHE_CAPACITY: u64 = 1000;

/// Client for the ShowHuay commerce backend.
///
/// Provides access to the cart service and the product catalog. Catalog
/// lookups are cached for 5 minutes; cart reads never are.
#[derive(Clone)]
pub struct ShowHuayClient {
    inner: Arc<ShowHuayClientInner>,
}

struct ShowHuayClientInner {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    product_cache: Cache<ProductId, ProductRecord>,
}

impl ShowHuayClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &ShowHuayApiConfig) -> Self {
        let product_cache = Cache::builder()
            .max_capacity(PRODUCT_CACHE_CAPACITY)
            .time_to_live(PRODUCT_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ShowHuayClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                api_token: config
                    .api_token
                    .as_ref()
                    .map(|token| token.expose_secret().to_string()),
                product_cache,
            }),
        }
    }

    /// Attach the bearer token when the backend requires one.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.inner.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // =========================================================================
    // Cart Methods (not cached - mutable state)
    // =========================================================================

    /// Get a user's cart lines.
    ///
    /// An empty cart is reported by the backend as HTTP 204 and yields an
    /// empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be parsed.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_cart(&self, user_id: UserId) -> Result<Vec<CartLine>, ShowHuayError> {
        let url = format!("{}/cart/getCart/{user_id}", self.inner.base_url);

        let response = self.authorize(self.inner.client.get(&url)).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NO_CONTENT {
            debug!("Cart is empty");
            return Ok(Vec::new());
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ShowHuayError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let parsed: CartsResponse = serde_json::from_str(&body)?;
        Ok(parsed.carts.into_iter().map(CartLine::from).collect())
    }

    /// Remove one line from a user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// deletion.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn remove_from_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), ShowHuayError> {
        let url = format!("{}/cart/removeFromCart", self.inner.base_url);
        let body = RemoveFromCartRequest {
            user_id,
            product_id,
        };

        let response = self
            .authorize(self.inner.client.delete(&url))
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ShowHuayError::Api {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        Ok(())
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Get catalog detail for one product.
    ///
    /// The backend wraps the product in a one-element array; the first
    /// element is used. Results are cached for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the backend has no such product, or an error if
    /// the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<ProductRecord, ShowHuayError> {
        // Check cache
        if let Some(record) = self.inner.product_cache.get(&product_id).await {
            debug!("Cache hit for product");
            return Ok(record);
        }

        let url = format!("{}/product/{product_id}", self.inner.base_url);

        let response = self.authorize(self.inner.client.get(&url)).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ShowHuayError::NotFound(format!(
                "Product not found: {product_id}"
            )));
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ShowHuayError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let parsed: ProductResponse = serde_json::from_str(&body)?;
        let record = parsed.product.into_iter().next().ok_or_else(|| {
            ShowHuayError::NotFound(format!("Product not found: {product_id}"))
        })?;

        // Cache the result
        self.inner
            .product_cache
            .insert(product_id, record.clone())
            .await;

        Ok(record)
    }
}
