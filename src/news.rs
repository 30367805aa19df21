//! # News Digest
//!
//! Fetches recent articles for a company name from the news provider's
//! search endpoint. The provider sorts by publish recency; that order is
//! authoritative and preserved here.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Articles kept per digest; the provider returns many more.
pub const MAX_ARTICLES: usize = 5;

/// One digest article, in the shape the rest of the pipeline uses.
/// Identity is the `url`; no deduplication beyond what the provider returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source_name: String,
    pub published_at: String,
}

/// Client for the news provider's search endpoint.
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch up to [`MAX_ARTICLES`] recent English-language articles for
    /// `company_name`, most recent first. An empty list is a valid result,
    /// not an error.
    pub async fn fetch_news(&self, company_name: &str) -> Result<Vec<NewsArticle>> {
        let url = format!("{}/v2/everything", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("q", company_name),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("requesting news")?
            .error_for_status()
            .context("news provider returned an error status")?;

        let envelope: Envelope = resp.json().await.context("decoding news response")?;
        Ok(digest(envelope))
    }
}

// Wire shapes. The provider occasionally ships null fields; those become
// empty strings rather than failing the whole response.

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    title: Option<String>,
    url: Option<String>,
    #[serde(default)]
    source: WireSource,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireSource {
    name: Option<String>,
}

fn digest(envelope: Envelope) -> Vec<NewsArticle> {
    envelope
        .articles
        .into_iter()
        .take(MAX_ARTICLES)
        .map(|a| NewsArticle {
            title: a.title.unwrap_or_default(),
            url: a.url.unwrap_or_default(),
            source_name: a.source.name.unwrap_or_default(),
            published_at: a.published_at.unwrap_or_default(),
        })
        .collect()
}
