//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: classifies each request by its
//! (method, path) pair and dispatches to the matching response builder.

use crate::config::Config;
use crate::response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Outcome of classifying a (method, path) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Status,
    /// `GET /health`
    Health,
    /// Everything else, including wrong methods on known paths.
    NotFound,
}

/// Classify a request by method and exact path.
///
/// Headers, body and query string never influence the outcome; matching is
/// case-sensitive. Wrong methods on known paths fall through to
/// [`Route::NotFound`] rather than a 405.
pub fn match_route(method: &Method, path: &str) -> Route {
    match (method, path) {
        (&Method::GET, "/") => Route::Status,
        (&Method::GET, "/health") => Route::Health,
        _ => Route::NotFound,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = match match_route(req.method(), req.uri().path()) {
        Route::Status => response::build_status_response(&config),
        Route::Health => response::build_health_response(),
        Route::NotFound => response::build_404_response(),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MESSAGE;
    use http_body_util::BodyExt;

    fn request(method: Method, uri: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .expect("request should build")
    }

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            port: "8080".to_string(),
            app_message: "Welcome to SafeHarbor Demo App!".to_string(),
            app_version: "v1.0.0".to_string(),
            environment: "development".to_string(),
        })
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body should be valid JSON")
    }

    #[test]
    fn routing_table() {
        assert_eq!(match_route(&Method::GET, "/"), Route::Status);
        assert_eq!(match_route(&Method::GET, "/health"), Route::Health);
        assert_eq!(match_route(&Method::GET, "/unknown"), Route::NotFound);
        assert_eq!(match_route(&Method::POST, "/"), Route::NotFound);
        assert_eq!(match_route(&Method::HEAD, "/"), Route::NotFound);
        assert_eq!(match_route(&Method::DELETE, "/health"), Route::NotFound);
        // Case-sensitive match
        assert_eq!(match_route(&Method::GET, "/Health"), Route::NotFound);
    }

    #[tokio::test]
    async fn get_root_returns_status_payload() {
        let response = handle_request(request(Method::GET, "/"), test_config())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Welcome to SafeHarbor Demo App!");
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn query_string_does_not_affect_routing() {
        let response = handle_request(request(Method::GET, "/?debug=1"), test_config())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn get_health_returns_health_payload() {
        let response = handle_request(request(Method::GET, "/health"), test_config())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "healthy"})
        );
    }

    #[tokio::test]
    async fn unmatched_routes_return_not_found_payload() {
        for req in [
            request(Method::GET, "/unknown"),
            request(Method::POST, "/"),
            request(Method::GET, "/Health"),
        ] {
            let response = handle_request(req, test_config()).await.unwrap();
            assert_eq!(response.status(), 404);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "Not found"})
            );
        }
    }

    #[tokio::test]
    async fn status_echoes_configured_values_with_message_default() {
        let config = Arc::new(Config {
            port: "9000".to_string(),
            app_message: DEFAULT_MESSAGE.to_string(),
            app_version: "v2.3.1".to_string(),
            environment: "staging".to_string(),
        });

        let response = handle_request(request(Method::GET, "/"), config)
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body = body_json(response).await;
        assert_eq!(body["version"], "v2.3.1");
        assert_eq!(body["environment"], "staging");
        assert_eq!(body["message"], "Welcome to SafeHarbor Demo App!");
        assert_eq!(body["status"], "healthy");
    }
}
