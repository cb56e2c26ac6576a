//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client. The same REST endpoints are served by
//! Elasticsearch, so the client works against either engine.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials as TransportCredentials,
    http::request::JsonBody,
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    params::Refresh,
    BulkParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::bulk::{build_bulk_operations, parse_bulk_response};
use crate::types::BulkWriteSummary;
use index_seeder_shared::Document;

/// OpenSearch client implementation.
///
/// Building the client does not contact the cluster; the first request does.
///
/// # Example
///
/// ```ignore
/// use index_seeder_repository::{ConnectionConfig, OpenSearchClient, SearchIndexProvider};
///
/// let client = OpenSearchClient::new(&ConnectionConfig::from_env())?;
/// if !client.index_exists("alpha").await? {
///     client.create_index("alpha", &body).await?;
/// }
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the given connection configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Node URL and optional basic-auth credentials
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the transport cannot be built
    pub fn new(config: &ConnectionConfig) -> Result<Self, SearchIndexError> {
        let parsed_url = Url::parse(&config.node)
            .map_err(|e| SearchIndexError::connection(format!("{}: {}", config.node, e)))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        if let Some(credentials) = &config.credentials {
            builder = builder.auth(TransportCredentials::Basic(
                credentials.username.clone(),
                credentials.password.clone(),
            ));
        }

        let transport = builder
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        info!(
            node = %config.node,
            authenticated = config.credentials.is_some(),
            "Created OpenSearch client"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
        })
    }

    /// Read a failed response body for error reporting.
    async fn error_body(response: Response) -> String {
        response.text().await.unwrap_or_default()
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    /// Check index existence with a HEAD request.
    ///
    /// 200 means the index exists and 404 means it does not. Any other status
    /// is reported as an error.
    #[instrument(skip(self))]
    async fn index_exists(&self, index: &str) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::index_exists(e.to_string()))?;

        let status = response.status_code();
        match status.as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            _ => {
                error!(status = %status, "Index exists request failed");
                Err(SearchIndexError::index_exists(format!(
                    "Unexpected status {} checking index {}",
                    status, index
                )))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete_index(&self, index: &str) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::index_deletion(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Delete index request failed");
            return Err(SearchIndexError::index_deletion(format!(
                "Delete of {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, "Index deleted");
        Ok(())
    }

    #[instrument(skip(self, body))]
    async fn create_index(&self, index: &str, body: &Value) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(body.clone())
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(SearchIndexError::index_creation(format!(
                "Create of {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        debug!(index = %index, "Index created");
        Ok(())
    }

    /// Send one bulk request of `index` actions.
    ///
    /// The response is parsed item by item so that rejected documents are
    /// reported in the summary instead of failing the call.
    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn bulk_index(
        &self,
        index: &str,
        documents: &[Document],
        refresh: bool,
    ) -> Result<BulkWriteSummary, SearchIndexError> {
        if documents.is_empty() {
            return Ok(BulkWriteSummary::default());
        }

        let body: Vec<JsonBody<Value>> = build_bulk_operations(index, documents)?
            .into_iter()
            .map(JsonBody::from)
            .collect();

        let refresh = if refresh { Refresh::True } else { Refresh::False };

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .refresh(refresh)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::bulk_operation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchIndexError::bulk_operation(format!(
                "Bulk write to {} failed with status {}: {}",
                index, status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let summary = parse_bulk_response(&response_body, documents.len());
        debug!(
            index = %index,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Bulk request completed"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use index_seeder_shared::{Category, ExtraFields};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single HTTP request with `status` and `body`, returning the
    /// node URL and a handle resolving to the raw request.
    async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let node = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                request.extend_from_slice(&chunk[..n]);
                if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                if n == 0 {
                    break request.len();
                }
            };

            let content_length = String::from_utf8_lossy(&request[..header_end])
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);

            while request.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                reason(status),
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).into_owned()
        });

        (node, handle)
    }

    fn reason(status: u16) -> &'static str {
        match status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            _ => "Internal Server Error",
        }
    }

    fn client_for(node: &str) -> OpenSearchClient {
        OpenSearchClient::new(&ConnectionConfig {
            node: node.to_string(),
            credentials: None,
        })
        .unwrap()
    }

    fn header(request: &str, name: &str) -> Option<String> {
        request.split("\r\n\r\n").next()?.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }

    fn body(request: &str) -> &str {
        request.split_once("\r\n\r\n").map_or("", |(_, body)| body)
    }

    fn document(title: &str) -> Document {
        Document {
            title: title.to_string(),
            comments: vec![],
            published_at: "2024-05-01T12:00:00.000Z".to_string(),
            category: Category::Drug,
            extra: ExtraFields::new(),
        }
    }

    #[tokio::test]
    async fn test_index_exists_true_on_200() {
        let (node, server) = serve_once(200, "").await;

        let exists = client_for(&node).index_exists("alpha").await.unwrap();

        let request = server.await.unwrap();
        assert!(exists);
        assert!(request.starts_with("HEAD /alpha "), "{}", request);
        assert!(header(&request, "authorization").is_none());
    }

    #[tokio::test]
    async fn test_index_exists_false_on_404() {
        let (node, server) = serve_once(404, "").await;

        let exists = client_for(&node).index_exists("alpha").await.unwrap();

        server.await.unwrap();
        assert!(!exists);
    }

    #[tokio::test]
    async fn test_index_exists_errors_on_other_status() {
        let (node, server) = serve_once(500, "").await;

        let result = client_for(&node).index_exists("alpha").await;

        server.await.unwrap();
        assert!(matches!(result, Err(SearchIndexError::IndexExistsError(_))));
    }

    #[tokio::test]
    async fn test_create_index_sends_body() {
        let (node, server) = serve_once(200, r#"{"acknowledged":true}"#).await;
        let create_body = json!({
            "mappings": { "properties": { "title": { "type": "text" } } },
            "settings": { "index": { "number_of_shards": 1 } }
        });

        client_for(&node)
            .create_index("alpha", &create_body)
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("PUT /alpha "), "{}", request);
        let sent: Value = serde_json::from_str(body(&request)).unwrap();
        assert_eq!(sent, create_body);
    }

    #[tokio::test]
    async fn test_create_index_error_carries_body() {
        let (node, server) =
            serve_once(400, r#"{"error":{"type":"resource_already_exists_exception"}}"#).await;

        let result = client_for(&node).create_index("alpha", &json!({})).await;

        server.await.unwrap();
        match result {
            Err(SearchIndexError::IndexCreationError(message)) => {
                assert!(message.contains("resource_already_exists_exception"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_index_error_carries_body() {
        let (node, server) =
            serve_once(404, r#"{"error":{"type":"index_not_found_exception"}}"#).await;

        let result = client_for(&node).delete_index("alpha").await;

        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /alpha "), "{}", request);
        match result {
            Err(SearchIndexError::IndexDeletionError(message)) => {
                assert!(message.contains("index_not_found_exception"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bulk_index_sends_ndjson_with_refresh_and_auth() {
        let (node, server) = serve_once(
            200,
            r#"{"took":2,"errors":true,"items":[{"index":{"_index":"alpha","status":201}},{"index":{"_index":"alpha","status":400,"error":{"type":"mapper_parsing_exception"}}}]}"#,
        )
        .await;
        let config = ConnectionConfig {
            node,
            credentials: None,
        }
        .with_credentials("u", "p");
        let client = OpenSearchClient::new(&config).unwrap();

        let summary = client
            .bulk_index("alpha", &[document("First."), document("Second.")], true)
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(
            request.starts_with("POST /alpha/_bulk?refresh=true "),
            "{}",
            request
        );
        assert_eq!(header(&request, "authorization").as_deref(), Some("Basic dTpw"));

        let lines: Vec<Value> = body(&request)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], json!({ "index": { "_index": "alpha" } }));
        assert_eq!(lines[1]["title"], "First.");
        assert_eq!(lines[2], json!({ "index": { "_index": "alpha" } }));
        assert_eq!(lines[3]["title"], "Second.");

        assert_eq!(summary.total, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.item_errors[0].position, 1);
    }

    #[tokio::test]
    async fn test_bulk_index_without_refresh() {
        let (node, server) = serve_once(200, r#"{"errors":false,"items":[]}"#).await;

        client_for(&node)
            .bulk_index("alpha", &[document("Only.")], false)
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(
            request.starts_with("POST /alpha/_bulk?refresh=false "),
            "{}",
            request
        );
    }

    #[tokio::test]
    async fn test_bulk_index_errors_on_failed_request() {
        let (node, server) = serve_once(500, r#"{"error":"cluster unavailable"}"#).await;

        let result = client_for(&node)
            .bulk_index("alpha", &[document("Only.")], true)
            .await;

        server.await.unwrap();
        match result {
            Err(SearchIndexError::BulkOperationError(message)) => {
                assert!(message.contains("cluster unavailable"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_new_with_default_config() {
        assert!(OpenSearchClient::new(&ConnectionConfig::default()).is_ok());
    }

    #[test]
    fn test_new_with_credentials() {
        let config = ConnectionConfig::default().with_credentials("elastic", "changeme");
        assert!(OpenSearchClient::new(&config).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = ConnectionConfig {
            node: "not a url".to_string(),
            credentials: None,
        };

        let result = OpenSearchClient::new(&config);
        assert!(matches!(result, Err(SearchIndexError::ConnectionError(_))));
    }
}
