//! # Tipos de Erro
//!
//! Todas as operações falíveis do crate retornam [`Result<T>`], que usa
//! [`AnalysisError`] como tipo de erro.
//!
//! A política é simples: um documento malformado aborta apenas o próprio
//! processamento. Em lote, cada review recebe o seu `Result` individual e os
//! demais seguem normalmente.

use serde::Serialize;
use thiserror::Error;

/// Erros que podem ocorrer durante a análise de uma review.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Tokens e tags POS não estão alinhados.
    #[error("Tokens and tags are misaligned: {tokens} token(s) but {tags} tag(s)")]
    LengthMismatch {
        /// Quantidade de tokens do documento.
        tokens: usize,
        /// Quantidade de tags recebidas.
        tags: usize,
    },

    /// Uma chave dos mapas de emoção/polaridade aponta para fora dos tokens.
    #[error("Position {position} is out of range for a document with {len} token(s)")]
    PositionOutOfRange {
        /// A posição rejeitada.
        position: usize,
        /// Quantidade de tokens do documento.
        len: usize,
    },

    /// A emoção predominante foi pedida antes do cálculo da polaridade.
    #[error("Document polarity must be computed before the predominant emotion")]
    PolarityNotComputed,

    /// Falha ao ler ou decodificar o léxico.
    #[error("Failed to load lexicon: {reason}")]
    Lexicon {
        /// Motivo reportado pelo leitor.
        reason: String,
    },

    /// Uma entrada do léxico tem polaridade não finita (NaN ou infinito).
    #[error("Lexicon entry '{word}' has a non-finite polarity")]
    InvalidPolarity {
        /// Palavra com a polaridade inválida.
        word: String,
    },

    /// Falha ao ler reviews de uma fonte tabular.
    #[error("Failed to read reviews: {reason}")]
    Ingestion {
        /// Motivo reportado pelo leitor CSV.
        reason: String,
    },

    /// Padrão de normalização de texto inválido.
    #[error("Invalid text pattern: {reason}")]
    Pattern {
        /// Mensagem do compilador de regex.
        reason: String,
    },
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        AnalysisError::Ingestion {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Lexicon {
            reason: err.to_string(),
        }
    }
}

impl From<regex::Error> for AnalysisError {
    fn from(err: regex::Error) -> Self {
        AnalysisError::Pattern {
            reason: err.to_string(),
        }
    }
}

/// Atalho para `std::result::Result<T, AnalysisError>`.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::LengthMismatch { tokens: 3, tags: 2 };
        assert_eq!(
            err.to_string(),
            "Tokens and tags are misaligned: 3 token(s) but 2 tag(s)"
        );

        let err = AnalysisError::PositionOutOfRange { position: 7, len: 2 };
        assert!(err.to_string().contains("Position 7"));
    }

    #[test]
    fn test_json_error_becomes_lexicon_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: AnalysisError = json_err.into();
        assert!(matches!(err, AnalysisError::Lexicon { .. }));
    }
}
