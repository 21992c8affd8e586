//! REST implementations of the collaborator traits.
//!
//! Base URLs come from configuration; no endpoint is assembled ad hoc at a
//! call site. Every outbound call carries the configured timeout, and every
//! transport failure is classified at this boundary: a 4xx answer is a
//! confirmed miss, everything else that is not a success becomes
//! [`ServiceUnavailable`].

use std::time::Duration;

use async_trait::async_trait;
use common::{CustomerEmail, ProductId};
use domain::CartMutationRequest;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::ServiceUnavailable;

use super::cart_store::{CartStore, StoreAck};
use super::catalog::{ProductCatalog, ProductRecord};
use super::directory::{CustomerDirectory, CustomerRecord};

/// Where the collaborators live and how long to wait for each of them.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Customer directory base URL.
    pub directory_url: String,
    /// Product catalog base URL.
    pub catalog_url: String,
    /// Cart store base URL.
    pub cart_store_url: String,
    /// Timeout applied to every outbound call.
    pub timeout: Duration,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            directory_url: "http://localhost:8081".to_string(),
            catalog_url: "http://localhost:8082".to_string(),
            cart_store_url: "http://localhost:8083".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl RestConfig {
    /// Builds the three REST collaborators over one shared connection pool.
    pub fn build(
        &self,
    ) -> Result<(RestCustomerDirectory, RestProductCatalog, RestCartStore), reqwest::Error> {
        let client = Client::builder().timeout(self.timeout).build()?;
        Ok((
            RestCustomerDirectory::new(client.clone(), &self.directory_url),
            RestProductCatalog::new(client.clone(), &self.catalog_url),
            RestCartStore::new(client, &self.cart_store_url),
        ))
    }
}

fn describe(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else {
        error.to_string()
    }
}

fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Customer directory over HTTP.
#[derive(Debug, Clone)]
pub struct RestCustomerDirectory {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CustomerPayload {
    email: CustomerEmail,
    #[serde(default)]
    name: String,
}

impl RestCustomerDirectory {
    /// Creates a directory client against the given base URL.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }
}

#[async_trait]
impl CustomerDirectory for RestCustomerDirectory {
    async fn lookup(
        &self,
        email: &CustomerEmail,
    ) -> Result<Option<CustomerRecord>, ServiceUnavailable> {
        let url = format!("{}/customers/{}", self.base_url, email);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceUnavailable::new("customer directory", describe(&e)))?;

        match response.status() {
            status if status.is_success() => {
                let payload: CustomerPayload = response
                    .json()
                    .await
                    .map_err(|e| ServiceUnavailable::new("customer directory", describe(&e)))?;
                Ok(Some(CustomerRecord {
                    email: payload.email,
                    name: payload.name,
                }))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(ServiceUnavailable::new(
                "customer directory",
                format!("unexpected status {status}"),
            )),
        }
    }
}

/// Product catalog over HTTP.
#[derive(Debug, Clone)]
pub struct RestProductCatalog {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ProductPayload {
    product_id: ProductId,
    #[serde(default)]
    name: String,
    #[serde(default = "default_available")]
    available: bool,
}

fn default_available() -> bool {
    true
}

impl RestProductCatalog {
    /// Creates a catalog client against the given base URL.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }
}

#[async_trait]
impl ProductCatalog for RestProductCatalog {
    async fn product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRecord>, ServiceUnavailable> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceUnavailable::new("product catalog", describe(&e)))?;

        let status = response.status();
        if status.is_success() {
            let payload: ProductPayload = response
                .json()
                .await
                .map_err(|e| ServiceUnavailable::new("product catalog", describe(&e)))?;
            return Ok(Some(ProductRecord {
                product_id: payload.product_id,
                name: payload.name,
                available: payload.available,
            }));
        }
        // Any 4xx is the catalog answering "no such product"; only server
        // errors and transport failures count as unavailability.
        if status.is_client_error() {
            return Ok(None);
        }
        Err(ServiceUnavailable::new(
            "product catalog",
            format!("unexpected status {status}"),
        ))
    }
}

/// Cart store over HTTP.
#[derive(Debug, Clone)]
pub struct RestCartStore {
    client: Client,
    base_url: String,
}

impl RestCartStore {
    /// Creates a cart store client against the given base URL.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
        }
    }
}

#[async_trait]
impl CartStore for RestCartStore {
    async fn add_products(
        &self,
        request: &CartMutationRequest,
    ) -> Result<StoreAck, ServiceUnavailable> {
        let url = format!("{}/carts/products", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceUnavailable::new("cart store", describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceUnavailable::new(
                "cart store",
                format!("rejected with status {status}"),
            ));
        }
        // The response body is the store's acknowledgment text, passed
        // through to the caller unchanged.
        let message = response
            .text()
            .await
            .map_err(|e| ServiceUnavailable::new("cart store", describe(&e)))?;
        Ok(StoreAck { message })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::{Json, Path, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};

    use super::*;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Reserves a port with nothing listening on it.
    async fn dead_endpoint() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    fn client() -> Client {
        Client::builder()
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap()
    }

    fn email(raw: &str) -> CustomerEmail {
        CustomerEmail::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_directory_resolves_customer() {
        let router = Router::new().route(
            "/customers/{email}",
            get(|Path(email): Path<String>| async move {
                Json(serde_json::json!({ "email": email, "name": "Jane" }))
            }),
        );
        let base = serve(router).await;

        let directory = RestCustomerDirectory::new(client(), &base);
        let record = directory
            .lookup(&email("jane@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.email.as_str(), "jane@example.com");
        assert_eq!(record.name, "Jane");
    }

    #[tokio::test]
    async fn test_directory_maps_404_to_none() {
        let router = Router::new().route(
            "/customers/{email}",
            get(|| async { StatusCode::NOT_FOUND }),
        );
        let base = serve(router).await;

        let directory = RestCustomerDirectory::new(client(), &base);
        let found = directory.lookup(&email("ghost@x.com")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_directory_connection_failure_is_unavailable() {
        let base = dead_endpoint().await;

        let directory = RestCustomerDirectory::new(client(), &base);
        let err = directory.lookup(&email("jane@example.com")).await.unwrap_err();
        assert_eq!(err.service, "customer directory");
    }

    #[tokio::test]
    async fn test_catalog_resolves_product() {
        let router = Router::new().route(
            "/products/{id}",
            get(|Path(id): Path<u32>| async move {
                Json(serde_json::json!({ "product_id": id, "name": "Widget", "available": true }))
            }),
        );
        let base = serve(router).await;

        let catalog = RestProductCatalog::new(client(), &base);
        let record = catalog.product(ProductId::new(7)).await.unwrap().unwrap();
        assert_eq!(record.product_id, ProductId::new(7));
        assert!(record.available);
    }

    #[tokio::test]
    async fn test_catalog_availability_defaults_to_orderable() {
        let router = Router::new().route(
            "/products/{id}",
            get(|Path(id): Path<u32>| async move {
                Json(serde_json::json!({ "product_id": id }))
            }),
        );
        let base = serve(router).await;

        let catalog = RestProductCatalog::new(client(), &base);
        let record = catalog.product(ProductId::new(7)).await.unwrap().unwrap();
        assert!(record.available);
    }

    #[tokio::test]
    async fn test_catalog_maps_4xx_to_none() {
        let router = Router::new()
            .route("/products/{id}", get(|| async { StatusCode::NOT_FOUND }));
        let base = serve(router).await;

        let catalog = RestProductCatalog::new(client(), &base);
        let found = catalog.product(ProductId::new(99)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_catalog_maps_5xx_to_unavailable() {
        let router = Router::new().route(
            "/products/{id}",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;

        let catalog = RestProductCatalog::new(client(), &base);
        let err = catalog.product(ProductId::new(1)).await.unwrap_err();
        assert_eq!(err.service, "product catalog");
        assert!(err.reason.contains("500"));
    }

    #[tokio::test]
    async fn test_catalog_timeout_is_unavailable() {
        let router = Router::new().route(
            "/products/{id}",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        );
        let base = serve(router).await;

        let catalog = RestProductCatalog::new(client(), &base);
        let err = catalog.product(ProductId::new(1)).await.unwrap_err();
        assert!(err.reason.contains("timed out"));
    }

    #[tokio::test]
    async fn test_cart_store_posts_request_and_relays_body() {
        let seen: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
        let router = Router::new()
            .route(
                "/carts/products",
                post(
                    |State(seen): State<Arc<Mutex<Option<serde_json::Value>>>>,
                     Json(body): Json<serde_json::Value>| async move {
                        *seen.lock().unwrap() = Some(body);
                        "products added"
                    },
                ),
            )
            .with_state(Arc::clone(&seen));
        let base = serve(router).await;

        let store = RestCartStore::new(client(), &base);
        let request = CartMutationRequest::new(
            email("jane@example.com"),
            vec![domain::CartLine::new(1, 2)],
        )
        .unwrap();
        let ack = store.add_products(&request).await.unwrap();
        assert_eq!(ack.message, "products added");

        let body = seen.lock().unwrap().take().unwrap();
        assert_eq!(body["customer_email"], "jane@example.com");
        assert_eq!(body["lines"][0]["product_id"], 1);
        assert_eq!(body["lines"][0]["quantity"], 2);
    }

    #[tokio::test]
    async fn test_cart_store_5xx_is_unavailable() {
        let router = Router::new().route(
            "/carts/products",
            post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let base = serve(router).await;

        let store = RestCartStore::new(client(), &base);
        let request = CartMutationRequest::new(
            email("jane@example.com"),
            vec![domain::CartLine::new(1, 2)],
        )
        .unwrap();
        let err = store.add_products(&request).await.unwrap_err();
        assert_eq!(err.service, "cart store");
        assert!(err.reason.contains("503"));
    }

    #[tokio::test]
    async fn test_config_builds_all_three_collaborators() {
        let config = RestConfig::default();
        let built = config.build();
        assert!(built.is_ok());
    }
}
