//! # Avaliação contra o Sentimento Anotado
//!
//! Compara o sinal da polaridade calculada com o rótulo verdadeiro de cada
//! review. Serve apenas para relatório: o algoritmo nunca lê o rótulo.
//!
//! - polaridade `> 0` concorda com `positive`;
//! - polaridade `< 0` concorda com `negative`;
//! - polaridade `== 0` é **indecisa** e não conta como acerto nem erro;
//! - rótulos fora de `positive`/`negative` são ignorados.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::ReviewAnalysis;

/// Polaridade prevista a partir do sinal do score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictedSentiment {
    Positive,
    Negative,
    Undecided,
}

impl PredictedSentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            PredictedSentiment::Positive
        } else if polarity < 0.0 {
            PredictedSentiment::Negative
        } else {
            PredictedSentiment::Undecided
        }
    }

    /// Compara com o rótulo anotado. `None` se o rótulo não for avaliável.
    pub fn agrees_with(&self, label: &str) -> Option<bool> {
        let expected = match label.trim().to_lowercase().as_str() {
            "positive" => PredictedSentiment::Positive,
            "negative" => PredictedSentiment::Negative,
            _ => return None,
        };
        Some(*self == expected)
    }
}

/// Estatísticas de concordância de um lote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Reviews no lote (incluindo as que falharam).
    pub total: usize,
    /// Reviews que falharam na análise.
    pub failed: usize,
    /// Reviews com rótulo avaliável e polaridade decidida.
    pub evaluated: usize,
    /// Reviews com polaridade zero.
    pub undecided: usize,
    pub agreed: usize,
}

impl Evaluation {
    /// Fração de acertos entre as avaliadas (0.0 se nenhuma).
    pub fn accuracy(&self) -> f64 {
        if self.evaluated == 0 {
            0.0
        } else {
            self.agreed as f64 / self.evaluated as f64
        }
    }
}

/// Avalia os resultados de [`crate::EmotionPipeline::analyze_batch`].
pub fn evaluate(results: &[Result<ReviewAnalysis>]) -> Evaluation {
    let mut eval = Evaluation {
        total: results.len(),
        ..Default::default()
    };

    for result in results {
        let analysis = match result {
            Ok(analysis) => analysis,
            Err(_) => {
                eval.failed += 1;
                continue;
            }
        };
        let predicted = PredictedSentiment::from_polarity(analysis.polarity);
        if predicted == PredictedSentiment::Undecided {
            eval.undecided += 1;
            continue;
        }
        if let Some(agrees) = predicted.agrees_with(&analysis.sentiment) {
            eval.evaluated += 1;
            if agrees {
                eval.agreed += 1;
            }
        }
    }
    eval
}
