use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::analysis::Synthesizer;
use crate::config::AppConfig;
use crate::error::PipelineError;
use crate::history::{HistoryClient, PricePoint};
use crate::model::{GeminiClient, TrendModel};
use crate::news::NewsClient;
use crate::symbols::{StockEntry, SymbolDirectory};

#[derive(Clone)]
pub struct AppState {
    directory: Arc<SymbolDirectory>,
    history: Arc<HistoryClient>,
    synthesizer: Arc<Synthesizer>,
}

impl AppState {
    /// Wire the production clients from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let model: Arc<dyn TrendModel> = Arc::new(GeminiClient::new(
            &config.model_base_url,
            &config.model_api_key,
            &config.model_name,
        ));
        Self::with_model(config, model)
    }

    /// Same wiring with the model seam left open; tests inject a stub here.
    pub fn with_model(config: &AppConfig, model: Arc<dyn TrendModel>) -> Self {
        let news = Arc::new(NewsClient::new(&config.news_base_url, &config.news_api_key));
        Self {
            directory: Arc::new(SymbolDirectory::load_from_file(&config.symbols_path)),
            history: Arc::new(HistoryClient::new(&config.quotes_base_url)),
            synthesizer: Arc::new(Synthesizer::new(news, model)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/stocks", get(search_stocks))
        .route("/api/history/{symbol}", get(fetch_history))
        .route("/api/analyze", post(analyze))
        // Pre-built client assets; everything unmatched falls through here.
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

async fn search_stocks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<StockEntry>> {
    let q = params.q.unwrap_or_default();
    Json(state.directory.search(&q))
}

#[derive(serde::Serialize)]
struct HistoryResponse {
    symbol: String,
    data: Vec<PricePoint>,
}

async fn fetch_history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<HistoryResponse>, PipelineError> {
    let data = state
        .history
        .fetch_history(&symbol)
        .await
        .map_err(PipelineError::HistoryFetch)?;
    Ok(Json(HistoryResponse { symbol, data }))
}

#[derive(serde::Deserialize)]
struct AnalyzeRequest {
    symbol: String,
    name: String,
}

#[derive(serde::Serialize)]
struct ArticleOut {
    title: String,
    url: String,
    source: String,
    date: String,
}

#[derive(serde::Serialize)]
struct AnalyzeResponse {
    analysis: String,
    articles: Vec<ArticleOut>,
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, PipelineError> {
    let result = state
        .synthesizer
        .synthesize(&body.symbol, &body.name)
        .await?;

    let articles = result
        .articles
        .into_iter()
        .map(|a| ArticleOut {
            title: a.title,
            url: a.url,
            source: a.source_name,
            date: a.published_at,
        })
        .collect();

    Ok(Json(AnalyzeResponse {
        analysis: result.analysis,
        articles,
    }))
}
