use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const POD_NAME_HEADER: HeaderName = HeaderName::from_static("x-attending-pod-name");
pub const POD_IP_HEADER: HeaderName = HeaderName::from_static("x-attending-pod-ip");

pub const POD_NAME_ENV: &str = "POD_NAME";
pub const POD_IP_ENV: &str = "POD_IP";

const UNKNOWN: &str = "N/A";

/// Tag every response with the pod that served it.
///
/// Values come from `POD_NAME` / `POD_IP` (normally injected through the
/// Kubernetes downward API) and are read per request. Unset or non-header-safe
/// values are reported as `N/A`. Install this as the outermost layer so router
/// fallbacks and extractor rejections are tagged as well.
pub async fn pod_identity_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(POD_NAME_HEADER, env_header_value(POD_NAME_ENV));
    headers.insert(POD_IP_HEADER, env_header_value(POD_IP_ENV));

    response
}

fn env_header_value(key: &str) -> HeaderValue {
    std::env::var(key)
        .ok()
        .and_then(|v| HeaderValue::from_str(&v).ok())
        .unwrap_or_else(|| HeaderValue::from_static(UNKNOWN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn,
        routing::get,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(from_fn(pod_identity_middleware))
    }

    async fn call(uri: &str) -> Response {
        app()
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    // Single test so the environment is never mutated concurrently.
    #[tokio::test]
    async fn headers_follow_environment_and_default_to_na() {
        unsafe {
            std::env::remove_var(POD_NAME_ENV);
            std::env::remove_var(POD_IP_ENV);
        }

        let response = call("/").await;
        assert_eq!(response.headers()[POD_NAME_HEADER], "N/A");
        assert_eq!(response.headers()[POD_IP_HEADER], "N/A");

        // Unrouted paths still pass through the layer.
        let response = call("/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[POD_NAME_HEADER], "N/A");

        unsafe {
            std::env::set_var(POD_NAME_ENV, "clients-api-7d9f8-x2k4p");
            std::env::set_var(POD_IP_ENV, "10.42.0.17");
        }

        let response = call("/").await;
        assert_eq!(response.headers()[POD_NAME_HEADER], "clients-api-7d9f8-x2k4p");
        assert_eq!(response.headers()[POD_IP_HEADER], "10.42.0.17");

        unsafe {
            std::env::remove_var(POD_NAME_ENV);
            std::env::remove_var(POD_IP_ENV);
        }
    }
}
