use std::time::Duration;

use anyhow::Context;
use reqwest::Url;

use crate::domain::badge::BadgeOptions;
use crate::error::{AppError, Result};

pub const DEFAULT_SHIELDS_URL: &str = "https://img.shields.io";
pub const LOCAL_SHIELDS_URL: &str = "http://localhost:9090";

/// Client for a shields.io compatible badge renderer.
#[derive(Clone, Debug)]
pub struct ShieldsClient {
    http: reqwest::Client,
    base: Url,
}

impl ShieldsClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid shields url: `{base_url}`"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("shields url `{base_url}` cannot carry a path");
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("fail to build http client")?;
        Ok(Self { http, base })
    }

    pub fn badge_url(&self, opts: &BadgeOptions) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty().extend(["static", "v1"]);
        }
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("label", &opts.label)
                .append_pair("message", &opts.message)
                .append_pair("color", &opts.colour)
                .append_pair("labelColor", &opts.label_colour)
                .append_pair("style", &opts.style);
            if !opts.logo.is_empty() {
                q.append_pair("logo", &opts.logo).append_pair("logoColor", &opts.logo_colour);
            }
        }
        url
    }

    /// Fetches the rendered SVG.
    pub async fn render(&self, opts: &BadgeOptions) -> Result<Vec<u8>> {
        let url = self.badge_url(opts);
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request to `{url}` failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!("`{url}` answered {status}")));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("reading body from `{url}` failed: {e}")))?;
        Ok(body.to_vec())
    }
}
