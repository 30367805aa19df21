//! # Price History
//!
//! Fetches the quotes provider's daily delimited export for one symbol and
//! turns it into a chronological series of closing prices.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Closing price for one trading day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

/// Most recent trading days kept per series. The provider ships the full
/// history; older rows are dropped to bound payload size and rendering cost.
pub const MAX_POINTS: usize = 100;

/// Client for the quotes provider's delimited-export endpoint.
pub struct HistoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl HistoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the daily close series for `symbol`, oldest first, at most
    /// [`MAX_POINTS`] points. One upstream call, no retry.
    pub async fn fetch_history(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            bail!("symbol must not be empty");
        }

        // The provider is case-insensitive; normalize anyway.
        let url = format!("{}/q/d/l/", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("s", symbol.to_lowercase().as_str()), ("i", "d")])
            .send()
            .await
            .context("requesting quote history")?
            .error_for_status()
            .context("quote provider returned an error status")?;

        let body = resp.text().await.context("reading quote history body")?;
        parse_series(&body)
    }
}

/// Raw export row. The provider ships more columns; only these two matter.
#[derive(Debug, Deserialize)]
struct QuoteRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close")]
    close: String,
}

/// Parse the newest-first export into a chronological series.
///
/// A kept row whose `Close` does not parse to a finite number fails the
/// whole series; callers never see partial data.
fn parse_series(body: &str) -> Result<Vec<PricePoint>> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut points = Vec::with_capacity(MAX_POINTS);

    for row in reader.deserialize::<QuoteRow>().take(MAX_POINTS) {
        let row = row.context("malformed quote history row")?;
        let price: f64 = row
            .close
            .trim()
            .parse()
            .with_context(|| format!("unparseable Close '{}' on {}", row.close, row.date))?;
        if !price.is_finite() {
            bail!("non-finite Close '{}' on {}", row.close, row.date);
        }
        points.push(PricePoint {
            date: row.date,
            price,
        });
    }

    points.reverse();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_reverses_into_chronological_order() {
        let body = "Date,Open,High,Low,Close,Volume\n\
                    2024-01-03,104,106,103,105,1000\n\
                    2024-01-02,101,104,100,103,1200\n\
                    2024-01-01,99,101,98,100,900\n";
        let series = parse_series(body).unwrap();
        assert_eq!(
            series,
            vec![
                PricePoint { date: "2024-01-01".into(), price: 100.0 },
                PricePoint { date: "2024-01-02".into(), price: 103.0 },
                PricePoint { date: "2024-01-03".into(), price: 105.0 },
            ]
        );
    }

    #[test]
    fn keeps_only_the_most_recent_rows() {
        let mut body = String::from("Date,Close\n");
        // Newest first, like the provider: day 120 down to day 1.
        for day in (1..=120).rev() {
            body.push_str(&format!("2023-{:02}-{:02},{}\n", (day - 1) / 30 + 1, (day - 1) % 30 + 1, day));
        }
        let series = parse_series(&body).unwrap();
        assert_eq!(series.len(), MAX_POINTS);
        // The oldest of the kept window comes first, the newest row last.
        assert_eq!(series[0].price, 21.0);
        assert_eq!(series[MAX_POINTS - 1].price, 120.0);
    }

    #[test]
    fn ascending_dates_for_short_tables() {
        let body = "Date,Close\n2024-02-02,11\n2024-02-01,10\n";
        let series = parse_series(body).unwrap();
        assert_eq!(series.len(), 2);
        assert!(series[0].date < series[1].date);
    }

    #[test]
    fn unparseable_close_fails_the_whole_fetch() {
        let body = "Date,Close\n2024-01-02,103\n2024-01-01,N/D\n";
        let err = parse_series(body).unwrap_err();
        assert!(err.to_string().contains("unparseable Close"), "got {err:#}");
    }

    #[test]
    fn nan_close_is_rejected() {
        let body = "Date,Close\n2024-01-01,NaN\n";
        assert!(parse_series(body).is_err());
    }

    #[test]
    fn headers_only_yields_empty_series() {
        let series = parse_series("Date,Close\n").unwrap();
        assert!(series.is_empty());
    }
}
