//! Word count preview using the same counter the submit endpoints enforce.

use axum::extract::Query;
use axum::Json;
use contest_core::event::DEFAULT_MIN_WORDS;
use contest_core::words::{count_words, WordCountBand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountParams {
    #[serde(default)]
    pub text: String,
    pub min_words: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountResponse {
    pub word_count: usize,
    pub min_words: usize,
    pub band: WordCountBand,
}

/// GET /api/words/count?text=...&minWords=...
pub async fn count(Query(params): Query<WordCountParams>) -> Json<WordCountResponse> {
    let min_words = params
        .min_words
        .unwrap_or(DEFAULT_MIN_WORDS as usize);
    let word_count = count_words(&params.text);
    Json(WordCountResponse {
        word_count,
        min_words,
        band: WordCountBand::classify(word_count, min_words),
    })
}
