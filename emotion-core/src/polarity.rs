//! # Agregador de Polaridade
//!
//! A polaridade do documento é a soma das polaridades dos adjetivos, com o
//! sinal invertido para os adjetivos negados:
//!
//! $$ P = \sum_{p} s_p \cdot (-1)^{neg(p)} $$
//!
//! Sem adjetivos conhecidos, a polaridade é exatamente `0.0`. Toda chave do
//! mapa precisa apontar para um token (`p < len`); qualquer outra aborta com
//! [`AnalysisError::PositionOutOfRange`](crate::error::AnalysisError).

use std::collections::BTreeMap;

use crate::error::Result;
use crate::negation::NegationDetector;

/// Contribuição de um adjetivo: `-score` se negado, `score` caso contrário.
pub fn signed_score(position: usize, score: f64, negation: &NegationDetector<'_>) -> f64 {
    if negation.is_negated(Some(position)) {
        -score
    } else {
        score
    }
}

/// Soma as contribuições de todo o mapa posição → polaridade.
pub fn compute_document_polarity(
    polarity_map: &BTreeMap<usize, f64>,
    negation: &NegationDetector<'_>,
) -> Result<f64> {
    polarity_map
        .iter()
        .try_fold(0.0, |acc, (&position, &score)| {
            negation.check_position(position)?;
            Ok(acc + signed_score(position, score, negation))
        })
}
