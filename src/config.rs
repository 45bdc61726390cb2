use serde::Deserialize;

use crate::clients::shields::{DEFAULT_SHIELDS_URL, LOCAL_SHIELDS_URL};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Salt mixed into every page hash.
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_shields_url")]
    pub shields_url: String,
}
fn default_port() -> u16 { 8080 }
fn default_key() -> String { "guess_what".into() }
fn default_shields_url() -> String { DEFAULT_SHIELDS_URL.into() }

impl Default for Config {
    fn default() -> Self {
        Self { port: default_port(), key: default_key(), debug: false, shields_url: default_shields_url() }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match var("PORT") {
            Some(v) => v.parse().map_err(|e| anyhow::anyhow!("invalid PORT `{v}`: {e}"))?,
            None => default_port(),
        };
        let key = var("KEY").unwrap_or_else(default_key);
        let debug = var("DEBUG").is_some_and(|v| enabled(&v));
        let shields_url = match var("SHIELDS_URL") {
            Some(url) if !url.is_empty() => url,
            _ if var("LOCAL_SHIELDS").is_some_and(|v| enabled(&v)) => LOCAL_SHIELDS_URL.into(),
            _ => default_shields_url(),
        };
        Ok(Self { port, key, debug, shields_url })
    }
}

fn enabled(v: &str) -> bool { v.eq_ignore_ascii_case("enabled") }
