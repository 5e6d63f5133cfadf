//! Integration tests for the principal sponsor API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use mockito::Matcher;
    use serde_json::json;

    use crate::test_utils::{body_to_json, get, send_json, test_app};

    /// Tests sponsors are keyed by the male sponsor's name
    #[tokio::test]
    async fn it_returns_400_for_missing_male_sponsor() {
        let mut server = mockito::Server::new_async().await;
        let upstream = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let app = test_app(&server.url());

        let response = send_json(
            app,
            "POST",
            "/api/principal-sponsor",
            json!({"FemalePrincipalSponsor": "Mrs. Cruz"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_to_json(response.into_body()).await,
            json!({"error": "MalePrincipalSponsor is required"})
        );
        upstream.assert_async().await;
    }

    /// Tests creating a sponsor pair
    #[tokio::test]
    async fn it_creates_a_sponsor_pair() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/principal-sponsor")
            .match_body(Matcher::Json(json!({
                "MalePrincipalSponsor": "Mr. Cruz",
                "FemalePrincipalSponsor": "Mrs. Cruz",
            })))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;
        let app = test_app(&server.url());

        let response = send_json(
            app,
            "POST",
            "/api/principal-sponsor",
            json!({"MalePrincipalSponsor": "Mr. Cruz", "FemalePrincipalSponsor": "Mrs. Cruz"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        create.assert_async().await;
    }

    /// Tests a sponsor rename forwards the previous name as `originalName`
    #[tokio::test]
    async fn it_renames_a_sponsor_pair() {
        let mut server = mockito::Server::new_async().await;
        let update = server
            .mock("POST", "/principal-sponsor")
            .match_body(Matcher::Json(json!({
                "action": "update",
                "originalName": "Mr. Cruz",
                "MalePrincipalSponsor": "Mr. Santos",
                "FemalePrincipalSponsor": "Mrs. Santos",
            })))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;
        let app = test_app(&server.url());

        let response = send_json(
            app,
            "PUT",
            "/api/principal-sponsor",
            json!({
                "originalMalePrincipalSponsor": "Mr. Cruz",
                "MalePrincipalSponsor": "Mr. Santos",
                "FemalePrincipalSponsor": "Mrs. Santos",
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        update.assert_async().await;
    }

    /// Tests deleting a sponsor pair by the male sponsor's name
    #[tokio::test]
    async fn it_deletes_a_sponsor_pair() {
        let mut server = mockito::Server::new_async().await;
        let delete = server
            .mock("POST", "/principal-sponsor")
            .match_body(Matcher::Json(json!({"action": "delete", "MalePrincipalSponsor": "Mr. Cruz"})))
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;
        let app = test_app(&server.url());

        let response = send_json(
            app,
            "DELETE",
            "/api/principal-sponsor",
            json!({"MalePrincipalSponsor": "Mr. Cruz"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        delete.assert_async().await;
    }

    /// Tests a JSON object instead of an array reads as no sponsors
    #[tokio::test]
    async fn it_returns_empty_list_for_object_reply() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/principal-sponsor")
            .with_status(200)
            .with_body(r#"{"error": "Sheet not found"}"#)
            .create_async()
            .await;
        let app = test_app(&server.url());

        let response = get(app, "/api/principal-sponsor").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_to_json(response.into_body()).await, json!([]));
    }
}
