//! # Detector de Negação
//!
//! Heurística de uma palavra para trás: um adjetivo está negado quando o token
//! imediatamente anterior é uma partícula de negação (`no`, `not`, `nor`).
//!
//! "not beautiful" → negado. "not very beautiful" → **não** negado (fora do
//! alcance da heurística, o que é intencional: não há resolução de escopo).

use crate::error::{AnalysisError, Result};

/// Partículas de negação, comparadas exatamente com tokens já em minúsculas.
pub const NEGATION_PARTICLES: &[&str] = &["no", "not", "nor"];

/// Detector de negação sobre os tokens de um documento.
#[derive(Debug, Clone, Copy)]
pub struct NegationDetector<'a> {
    tokens: &'a [String],
}

impl<'a> NegationDetector<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens }
    }

    /// Valida uma chave de mapa: só `0 <= position < len` aponta para um token.
    ///
    /// Mais estrita que [`NegationDetector::is_negated`], que tolera `len`.
    pub fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.tokens.len() {
            return Err(AnalysisError::PositionOutOfRange {
                position,
                len: self.tokens.len(),
            });
        }
        Ok(())
    }

    /// Indica se a posição é negada pelo token anterior.
    ///
    /// O limite superior aceita `position == tokens.len()`: só `position - 1`
    /// é acessado, e esse índice continua válido.
    pub fn is_negated(&self, position: Option<usize>) -> bool {
        match position {
            Some(p) if p > 0 && p <= self.tokens.len() => {
                NEGATION_PARTICLES.contains(&self.tokens[p - 1].as_str())
            }
            _ => false,
        }
    }
}
