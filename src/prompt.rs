//! Prompt construction for the trend synthesis stage. Pure string assembly,
//! no I/O.

use std::fmt::Write;

use crate::news::NewsArticle;

/// Always part of the rendered prompt: downstream consumers display the
/// model output directly to end users.
pub const DISCLAIMER_INSTRUCTION: &str =
    "Important: End with a clear disclaimer that this is not financial advice.";

/// Render the fixed analyst instruction for the given headlines.
/// One `- {title} ({source})` bullet per article, in input order.
pub fn build_prompt(symbol: &str, company_name: &str, articles: &[NewsArticle]) -> String {
    let mut headlines = String::new();
    for article in articles {
        let _ = writeln!(headlines, "- {} ({})", article.title, article.source_name);
    }

    format!(
        "You are a financial analyst AI. Analyze the following recent news headlines for {company_name} ({symbol}):\n\
         \n\
         {headlines}\
         \n\
         Based on this, provide a concise prediction of the stock trend (Bullish/Bearish/Neutral) and a brief reasoning.\n\
         Format your response as HTML (use <p>, <strong>, <ul>).\n\
         {DISCLAIMER_INSTRUCTION}\n"
    )
}
