//! # Trend Synthesis
//!
//! Per-request pipeline: news digest → prompt → model narrative. Stages run
//! in strict sequence and short-circuit on an empty digest; every entity is
//! request-scoped and discarded once the response is sent.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::PipelineError;
use crate::model::TrendModel;
use crate::news::{NewsArticle, NewsClient};
use crate::prompt;

/// Returned when the news stage finds nothing to analyze. Terminal success:
/// no prompt is built and the model is never called.
pub const NO_NEWS_MESSAGE: &str = "No recent news found to analyze.";

/// What the synthesis stage hands back to the HTTP layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// HTML-formatted narrative from the model (or [`NO_NEWS_MESSAGE`]).
    pub analysis: String,
    /// The digest the narrative was generated from, provider order.
    pub articles: Vec<NewsArticle>,
}

pub struct Synthesizer {
    news: Arc<NewsClient>,
    model: Arc<dyn TrendModel>,
}

impl Synthesizer {
    pub fn new(news: Arc<NewsClient>, model: Arc<dyn TrendModel>) -> Self {
        Self { news, model }
    }

    /// Run the full pipeline for one request.
    pub async fn synthesize(
        &self,
        symbol: &str,
        company_name: &str,
    ) -> Result<AnalysisResult, PipelineError> {
        let articles = self
            .news
            .fetch_news(company_name)
            .await
            .map_err(PipelineError::NewsFetch)?;

        if articles.is_empty() {
            return Ok(AnalysisResult {
                analysis: NO_NEWS_MESSAGE.to_string(),
                articles,
            });
        }

        let prompt = prompt::build_prompt(symbol, company_name, &articles);

        debug!(
            model = self.model.name(),
            articles = articles.len(),
            "generating trend analysis"
        );
        let analysis = self
            .model
            .generate(&prompt)
            .await
            .map_err(PipelineError::Synthesis)?;

        Ok(AnalysisResult { analysis, articles })
    }
}
