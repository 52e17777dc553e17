use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use llm::{CompletionClient, DEFAULT_BASE_URL, GroqClient};
use tone::{DEFAULT_MODEL, ToneConverter};
use tracing::{error, info, warn};

/// Command line and environment configuration.
///
/// Every flag falls back to an environment variable, so a `.env` file loaded
/// before parsing is enough to configure the server.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Address to bind the HTTP server
    #[arg(long, env = "BIZTONE_ADDR", default_value = "127.0.0.1:5000")]
    pub addr: SocketAddr,

    /// Groq API key; conversions fail with 503 when unset
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long, env = "GROQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model used for conversions
    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Timeout for a single completion request, in seconds
    #[arg(long, env = "BIZTONE_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Directory served for every path outside `/api`
    #[arg(long, env = "BIZTONE_STATIC_DIR", default_value = "frontend")]
    pub static_dir: PathBuf,
}

impl Config {
    /// The configured API key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Build the converter, without a client when no usable key is configured.
    pub fn converter(&self) -> ToneConverter {
        let client = match self.api_key() {
            Some(key) => {
                let timeout = Duration::from_secs(self.timeout_secs);
                match GroqClient::new(key, &self.base_url, timeout) {
                    Ok(client) => {
                        info!(
                            base_url = %self.base_url,
                            model = %self.model,
                            "completion client ready"
                        );
                        Some(Arc::new(client) as Arc<dyn CompletionClient>)
                    }
                    Err(e) => {
                        error!(error = %e, "failed to initialize completion client");
                        None
                    }
                }
            }
            None => {
                warn!("GROQ_API_KEY not set; conversions will be rejected");
                None
            }
        };
        ToneConverter::from_client(client).with_model(self.model.clone())
    }
}
