//! Server configuration.
//!
//! Every option can be given on the command line or through the environment;
//! a `.env` file next to the binary is loaded first.

use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(name = "backend")]
#[command(about = "Web front end and proxy for a workspace API")]
pub struct Args {
    /// Integration token for the workspace API
    #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
    pub notion_api_key: String,

    /// Base URL of the workspace API
    #[arg(long, env = "NOTION_API_URL", default_value = "https://api.notion.com")]
    pub notion_api_url: String,

    /// API version sent in the `Notion-Version` header
    #[arg(long, env = "NOTION_VERSION", default_value = "2022-06-28")]
    pub notion_version: String,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Timeout for each call to the workspace API, in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value = "30000")]
    pub request_timeout_ms: u64,

    /// Open the UI in the default browser once the server is up
    #[arg(long, env = "OPEN_BROWSER", default_value = "true", action = clap::ArgAction::Set)]
    pub open_browser: bool,
}

impl Args {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_the_key_is_given() {
        let args = Args::try_parse_from(["backend", "--notion-api-key", "secret_x"]).unwrap();
        assert_eq!(args.notion_api_key, "secret_x");
        assert_eq!(args.notion_version, "2022-06-28");
        assert_eq!(args.request_timeout(), Duration::from_secs(30));
        assert!(args.open_browser);
    }

    #[test]
    fn browser_can_be_disabled_and_port_overridden() {
        let args = Args::try_parse_from([
            "backend",
            "--notion-api-key",
            "k",
            "--open-browser",
            "false",
            "--port",
            "9000",
        ])
        .unwrap();
        assert!(!args.open_browser);
        assert_eq!(args.url(), "http://127.0.0.1:9000");
    }
}
