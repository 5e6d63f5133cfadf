//! Integration tests for the static site fallback

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use crate::test_utils::{get, test_app};

    /// Tests non-API paths fall through to the static directory with
    /// caching disabled
    #[tokio::test]
    async fn it_serves_static_files_without_caching() {
        let app = test_app("http://127.0.0.1:9");

        let response = get(app, "/does-not-exist.html").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-cache"
        );
    }

    /// Tests unknown API paths are not swallowed by another resource
    #[tokio::test]
    async fn it_returns_404_for_unknown_api_paths() {
        let app = test_app("http://127.0.0.1:9");

        let response = get(app, "/api/guests/extra").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
