//! `releases`: list the release tags a libdef can be generated for.

use clap::Args;

use crate::common::{Status, run_cli_async, run_with_spinner_async};
use crate::config::DEFAULT_RELEASES_URL;
use crate::fetch::{build_client, fetch_releases};

/// Arguments of `electron-flowgen releases`.
#[derive(Args, Debug, Clone)]
pub struct ReleasesArgs {
    /// Endpoint listing Electron releases
    #[arg(long, value_name = "URL", default_value = DEFAULT_RELEASES_URL)]
    pub releases_url: String,
}

/// Print every release tag, one per line, and return the exit code.
pub async fn run(args: ReleasesArgs) -> i32 {
    run_cli_async(|| async move {
        for tag in list(&args).await? {
            println!("{tag}");
        }
        Ok(())
    })
    .await
}

/// Fetch the release tags, reporting progress on stderr so stdout stays
/// machine-readable.
pub async fn list(args: &ReleasesArgs) -> Result<Vec<String>, String> {
    let client = build_client()?;
    run_with_spinner_async(
        Status::new(true),
        "Fetching electron versions from GitHub...",
        "✅ Fetched electron versions",
        || fetch_releases(&client, &args.releases_url),
    )
    .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_releases() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "tag_name": "v1.8.4" }])),
            )
            .mount(&server)
            .await;

        let args = ReleasesArgs {
            releases_url: server.uri(),
        };
        assert_eq!(list(&args).await.unwrap(), vec!["v1.8.4"]);
        assert_eq!(run(args).await, 0);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_exits_nonzero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let args = ReleasesArgs {
            releases_url: server.uri(),
        };
        assert_eq!(run(args).await, 1);
    }
}
