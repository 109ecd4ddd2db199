//! Defaults for where releases and API descriptions are fetched from and
//! where libdefs are written.

/// GitHub releases endpoint listing Electron tags.
pub const DEFAULT_RELEASES_URL: &str = "https://api.github.com/repos/electron/electron/releases";

/// Download location of a release's API description. `{version}` is replaced
/// with the release tag.
#[allow(clippy::literal_string_with_formatting_args)]
pub const DEFAULT_API_URL_TEMPLATE: &str =
    "https://github.com/electron/electron/releases/download/{version}/electron-api.json";

/// Directory libdefs are written to.
pub const DEFAULT_OUT_DIR: &str = "flow-typed";

/// GitHub rejects API requests without a user agent.
pub const USER_AGENT: &str = concat!("electron-flowgen/", env!("CARGO_PKG_VERSION"));

#[allow(clippy::literal_string_with_formatting_args)]
const VERSION_PLACEHOLDER: &str = "{version}";

/// Expand an API-description URL template for `version`.
pub fn api_url(template: &str, version: &str) -> String {
    template.replace(VERSION_PLACEHOLDER, version)
}
