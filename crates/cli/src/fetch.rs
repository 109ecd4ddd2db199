//! HTTP collaborators: the release list and per-release API descriptions.

use std::time::Duration;

use flowgen_core::ApiDescription;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::USER_AGENT;

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// HTTP client with the user agent GitHub requires.
pub fn build_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|err| {
            warn!(error = %err, "Failed to build HTTP client.");
            format!("Failed to build HTTP client: {err}")
        })
}

/// Release tags in the order the endpoint lists them.
pub async fn fetch_releases(client: &reqwest::Client, url: &str) -> Result<Vec<String>, String> {
    debug!(%url, "Fetching electron releases.");
    let response = client.get(url).send().await.map_err(|err| {
        warn!(error = %err, %url, "Release request failed.");
        format!("Could not fetch electron releases from GitHub: {err}")
    })?;

    if response.status() != StatusCode::OK {
        return Err(format!(
            "Could not fetch electron releases from GitHub: status {}",
            response.status()
        ));
    }

    let releases: Vec<Release> = response.json().await.map_err(|err| {
        warn!(error = %err, "Failed to parse release list.");
        format!("Failed to parse electron release list: {err}")
    })?;

    debug!(count = releases.len(), "Received electron releases.");
    Ok(releases.into_iter().map(|r| r.tag_name).collect())
}

/// Download and parse the API description for `version`.
pub async fn fetch_api_description(
    client: &reqwest::Client,
    url: &str,
    version: &str,
) -> Result<ApiDescription, String> {
    debug!(%url, version, "Fetching API description.");
    let response = client.get(url).send().await.map_err(|err| {
        warn!(error = %err, %url, "API description request failed.");
        format!("Could not fetch API definition for electron {version}: {err}")
    })?;

    if response.status() != StatusCode::OK {
        debug!(status = %response.status(), "API description not available.");
        return Err(format!(
            "Could not find API definition for electron {version}."
        ));
    }

    let body = response.text().await.map_err(|err| {
        format!("Failed to read API definition for electron {version}: {err}")
    })?;
    ApiDescription::from_json(&body)
        .map_err(|err| format!("Invalid API definition for electron {version}: {err}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_releases_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/releases"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "tag_name": "v2.0.0", "name": "electron v2.0.0" },
                { "tag_name": "v1.8.4" }
            ])))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let tags = fetch_releases(&client, &format!("{}/releases", server.uri()))
            .await
            .unwrap();
        assert_eq!(tags, vec!["v2.0.0", "v1.8.4"]);
    }

    #[tokio::test]
    async fn test_fetch_releases_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let err = fetch_releases(&client, &server.uri()).await.unwrap_err();
        assert!(err.contains("Could not fetch electron releases"));
    }

    #[tokio::test]
    async fn test_fetch_api_description() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download/v1.8.4/electron-api.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "type": "Module", "name": "app" }
            ])))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/download/v1.8.4/electron-api.json", server.uri());
        let api = fetch_api_description(&client, &url, "v1.8.4").await.unwrap();
        assert_eq!(api.modules().count(), 1);
    }

    #[tokio::test]
    async fn test_missing_version_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let err = fetch_api_description(&client, &server.uri(), "v0.0.1")
            .await
            .unwrap_err();
        assert_eq!(err, "Could not find API definition for electron v0.0.1.");
    }

    #[tokio::test]
    async fn test_invalid_document_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let err = fetch_api_description(&client, &server.uri(), "v1.0.0")
            .await
            .unwrap_err();
        assert!(err.starts_with("Invalid API definition for electron v1.0.0"));
    }
}
