//! # Reviews de Filmes com Sentimento Anotado
//!
//! Fonte de documentos do sistema. Cada registro traz o texto da review e o
//! sentimento verdadeiro (`positive`/`negative`), usado apenas para avaliação.
//!
//! ## Fontes
//! - **CSV**: colunas `review` e `sentiment` (formato do dataset IMDB), via [`load_reviews`].
//! - **Embutidas**: [`demo_reviews`], para a interface web e para os testes.

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Uma review crua: texto e sentimento verdadeiro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// O texto da review (pode conter HTML).
    #[serde(rename = "review", alias = "text")]
    pub text: String,
    /// Sentimento anotado: "positive" ou "negative".
    #[serde(default)]
    pub sentiment: String,
}

impl ReviewRecord {
    pub fn new(text: impl Into<String>, sentiment: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentiment: sentiment.into(),
        }
    }
}

/// Lê reviews de um CSV com cabeçalho (`review`, `sentiment`).
///
/// `limit` restringe a quantidade de registros lidos (útil para datasets grandes).
pub fn load_reviews<R: Read>(reader: R, limit: Option<usize>) -> Result<Vec<ReviewRecord>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv.deserialize() {
        if limit.is_some_and(|max| records.len() >= max) {
            break;
        }
        let record: ReviewRecord = result?;
        records.push(record);
    }
    debug!("{} review(s) carregadas do CSV", records.len());
    Ok(records)
}

/// Reviews de demonstração para a interface web
pub fn demo_reviews() -> Vec<ReviewRecord> {
    vec![
        ReviewRecord::new(
            "One of the best films of the decade. The photography is beautiful, the cast is brilliant and the ending is wonderful.",
            "positive",
        ),
        ReviewRecord::new(
            "A boring, predictable plot.<br /><br />The dialogue is awful and the acting is not good at all. Disappointing.",
            "negative",
        ),
        ReviewRecord::new(
            "Not beautiful, not funny, just a stupid waste of two hours.",
            "negative",
        ),
        ReviewRecord::new(
            "The story is fascinating and the twist is surprising. An interesting, charming little movie.",
            "positive",
        ),
        ReviewRecord::new(
            "Terrifying atmosphere and scary visuals, but the script is weak and the characters are annoying.",
            "negative",
        ),
        ReviewRecord::new(
            "Nothing bad to say: no boring scenes, a fantastic soundtrack and a happy ending.",
            "positive",
        ),
        ReviewRecord::new(
            "I watched it in 2019 on a rainy Sunday.",
            "positive",
        ),
    ]
}
