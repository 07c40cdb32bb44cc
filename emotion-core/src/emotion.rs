//! # Emoções Primitivas e Agregação de Votos
//!
//! Define o vocabulário fechado de emoções primitivas e o agregador que
//! escolhe a **emoção predominante** de uma review.
//!
//! ## Categorias
//!
//! | Emoção     | Oposta     |
//! |------------|------------|
//! | admiration | disgust    |
//! | anger      | fear       |
//! | interest   | surprise   |
//! | joy        | sadness    |
//! | neutral    | —          |
//!
//! `neutral` é sintética: recebe votos de rótulos desconhecidos e de negações
//! sem par na roda de emoções.
//!
//! ## Algoritmo
//!
//! 1. Cada adjetivo vota nas emoções que o léxico associa a ele.
//! 2. Sob negação ("not beautiful"), o voto vai para a emoção **oposta**.
//! 3. Vencem todas as categorias empatadas no maior número de votos, na ordem fixa.
//! 4. A polaridade do documento poda vencedoras incoerentes: polaridade negativa
//!    remove `admiration` e `joy`; positiva remove `disgust` e `sadness`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::negation::NegationDetector;

/// Rótulo usado quando não há nenhuma categoria para escolher.
pub const UNDEFINED_LABEL: &str = "UNDEFINED";

/// Separador entre categorias empatadas (ex: "admiration/joy").
pub const LABEL_SEPARATOR: &str = "/";

/// Emoções primitivas reconhecidas, mais a categoria sintética `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveEmotion {
    Admiration,
    Anger,
    Disgust,
    Fear,
    Interest,
    Joy,
    Sadness,
    Surprise,
    /// Categoria coringa: nunca vem do léxico diretamente.
    Neutral,
}

impl PrimitiveEmotion {
    /// Número total de categorias (incluindo `Neutral`).
    pub const COUNT: usize = 9;

    /// Todas as categorias na ordem fixa de desempate (`Neutral` por último).
    pub fn all() -> [PrimitiveEmotion; Self::COUNT] {
        [
            PrimitiveEmotion::Admiration,
            PrimitiveEmotion::Anger,
            PrimitiveEmotion::Disgust,
            PrimitiveEmotion::Fear,
            PrimitiveEmotion::Interest,
            PrimitiveEmotion::Joy,
            PrimitiveEmotion::Sadness,
            PrimitiveEmotion::Surprise,
            PrimitiveEmotion::Neutral,
        ]
    }

    /// Nome da categoria como aparece no léxico e nos rótulos
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveEmotion::Admiration => "admiration",
            PrimitiveEmotion::Anger => "anger",
            PrimitiveEmotion::Disgust => "disgust",
            PrimitiveEmotion::Fear => "fear",
            PrimitiveEmotion::Interest => "interest",
            PrimitiveEmotion::Joy => "joy",
            PrimitiveEmotion::Sadness => "sadness",
            PrimitiveEmotion::Surprise => "surprise",
            PrimitiveEmotion::Neutral => "neutral",
        }
    }

    /// Índice na ordem fixa (0..9), usado pelo contador de votos.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parseia o nome exato (ex: "joy" → Some(Joy))
    pub fn from_name(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|e| e.name() == s)
    }

    /// Converte um rótulo qualquer do léxico, caindo em `Neutral` se desconhecido.
    pub fn from_label_or_neutral(s: &str) -> Self {
        Self::from_name(s).unwrap_or(PrimitiveEmotion::Neutral)
    }

    /// Emoção oposta na roda de emoções. `Neutral` não tem par e fica `Neutral`.
    pub fn opposite(&self) -> Self {
        match self {
            PrimitiveEmotion::Joy => PrimitiveEmotion::Sadness,
            PrimitiveEmotion::Sadness => PrimitiveEmotion::Joy,
            PrimitiveEmotion::Admiration => PrimitiveEmotion::Disgust,
            PrimitiveEmotion::Disgust => PrimitiveEmotion::Admiration,
            PrimitiveEmotion::Anger => PrimitiveEmotion::Fear,
            PrimitiveEmotion::Fear => PrimitiveEmotion::Anger,
            PrimitiveEmotion::Interest => PrimitiveEmotion::Surprise,
            PrimitiveEmotion::Surprise => PrimitiveEmotion::Interest,
            PrimitiveEmotion::Neutral => PrimitiveEmotion::Neutral,
        }
    }

    /// Cor CSS para highlight na UI
    pub fn color(&self) -> &'static str {
        match self {
            PrimitiveEmotion::Admiration => "#10b981",
            PrimitiveEmotion::Anger => "#ef4444",
            PrimitiveEmotion::Disgust => "#84cc16",
            PrimitiveEmotion::Fear => "#8b5cf6",
            PrimitiveEmotion::Interest => "#f59e0b",
            PrimitiveEmotion::Joy => "#facc15",
            PrimitiveEmotion::Sadness => "#3b82f6",
            PrimitiveEmotion::Surprise => "#06b6d4",
            PrimitiveEmotion::Neutral => "#9ca3af",
        }
    }

    /// Emoções removidas do empate quando a polaridade tem o sinal dado.
    fn contradicted_by(polarity: f64) -> &'static [PrimitiveEmotion] {
        if polarity < 0.0 {
            &[PrimitiveEmotion::Admiration, PrimitiveEmotion::Joy]
        } else if polarity > 0.0 {
            &[PrimitiveEmotion::Disgust, PrimitiveEmotion::Sadness]
        } else {
            &[]
        }
    }
}

impl std::fmt::Display for PrimitiveEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Contador de votos por categoria, indexado por [`PrimitiveEmotion::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionTally {
    counts: [usize; PrimitiveEmotion::COUNT],
}

impl EmotionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vote(&mut self, emotion: PrimitiveEmotion) {
        self.counts[emotion.index()] += 1;
    }

    pub fn get(&self, emotion: PrimitiveEmotion) -> usize {
        self.counts[emotion.index()]
    }

    /// Maior contagem entre todas as categorias (incluindo `Neutral`).
    pub fn max_votes(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Categorias com a contagem máxima, na ordem fixa.
    pub fn leaders(&self) -> Vec<PrimitiveEmotion> {
        let max = self.max_votes();
        PrimitiveEmotion::all()
            .into_iter()
            .filter(|e| self.get(*e) == max)
            .collect()
    }

    /// Pares (emoção, votos) na ordem fixa, para serialização e UI.
    pub fn entries(&self) -> Vec<(PrimitiveEmotion, usize)> {
        PrimitiveEmotion::all()
            .into_iter()
            .map(|e| (e, self.get(e)))
            .collect()
    }
}

/// Resultado estruturado da agregação de emoções.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredominantEmotion {
    /// Votos por categoria, na ordem fixa.
    pub votes: Vec<(PrimitiveEmotion, usize)>,
    /// Maior contagem observada.
    pub max_votes: usize,
    /// Categorias empatadas no máximo, antes do ajuste pela polaridade.
    pub leaders: Vec<PrimitiveEmotion>,
    /// Categorias que sobreviveram ao ajuste pela polaridade.
    pub winners: Vec<PrimitiveEmotion>,
    /// Polaridade do documento usada no ajuste.
    pub polarity: f64,
}

impl PredominantEmotion {
    /// Rótulo final, com as vencedoras unidas por `/`.
    ///
    /// Vazio quando a polaridade removeu todas as vencedoras.
    pub fn label(&self) -> String {
        if self.leaders.is_empty() {
            return UNDEFINED_LABEL.to_string();
        }
        self.winners
            .iter()
            .map(PrimitiveEmotion::name)
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    }
}

/// Conta os votos de emoção de todos os adjetivos, aplicando a negação.
///
/// Rótulos fora do vocabulário contam como `Neutral`; sob negação, o voto vai
/// para a oposta (e `Neutral` continua `Neutral`). Uma chave fora dos tokens
/// aborta a contagem inteira.
pub fn tally_emotions(
    emotion_votes: &BTreeMap<usize, BTreeSet<String>>,
    negation: &NegationDetector<'_>,
) -> Result<EmotionTally> {
    let mut tally = EmotionTally::new();
    for (&position, emotions) in emotion_votes {
        negation.check_position(position)?;
        let negated = negation.is_negated(Some(position));
        for label in emotions {
            let emotion = PrimitiveEmotion::from_label_or_neutral(label);
            tally.vote(if negated { emotion.opposite() } else { emotion });
        }
    }
    Ok(tally)
}

/// Resolve o empate e ajusta as vencedoras pelo sinal da polaridade.
///
/// A poda acontece no conjunto de vencedoras **antes** de juntar os nomes,
/// então o rótulo nunca tem separadores duplicados ou nas pontas.
pub fn resolve_predominant(tally: &EmotionTally, polarity: f64) -> PredominantEmotion {
    let leaders = tally.leaders();
    let contradicted = PrimitiveEmotion::contradicted_by(polarity);
    let winners = leaders
        .iter()
        .copied()
        .filter(|e| !contradicted.contains(e))
        .collect();

    PredominantEmotion {
        votes: tally.entries(),
        max_votes: tally.max_votes(),
        leaders,
        winners,
        polarity,
    }
}

/// Calcula a emoção predominante a partir do mapa de votos e da polaridade.
pub fn compute_predominant_emotion(
    emotion_votes: &BTreeMap<usize, BTreeSet<String>>,
    negation: &NegationDetector<'_>,
    document_polarity: f64,
) -> Result<PredominantEmotion> {
    let tally = tally_emotions(emotion_votes, negation)?;
    Ok(resolve_predominant(&tally, document_polarity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn votes(entries: &[(usize, &[&str])]) -> BTreeMap<usize, BTreeSet<String>> {
        entries
            .iter()
            .map(|(p, es)| (*p, es.iter().map(|e| e.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_opposite_mapping_closure() {
        for emotion in PrimitiveEmotion::all() {
            if emotion == PrimitiveEmotion::Neutral {
                continue;
            }
            let toks = tokens(&["not", "word"]);
            let negation = NegationDetector::new(&toks);
            let tally = tally_emotions(&votes(&[(1, &[emotion.name()])]), &negation).unwrap();

            for other in PrimitiveEmotion::all() {
                let expected = if other == emotion.opposite() { 1 } else { 0 };
                assert_eq!(tally.get(other), expected, "negating {}", emotion);
            }
            assert_eq!(emotion.opposite().opposite(), emotion);
        }
    }

    #[test]
    fn test_tie_keeps_fixed_order() {
        let toks = tokens(&["a", "b", "c", "d"]);
        let negation = NegationDetector::new(&toks);
        let map = votes(&[(0, &["joy"]), (1, &["admiration"]), (2, &["joy", "admiration"])]);
        let result = compute_predominant_emotion(&map, &negation, 0.0).unwrap();
        assert_eq!(result.label(), "admiration/joy");
        assert_eq!(result.max_votes, 2);
    }

    #[test]
    fn test_negative_polarity_removes_positive_emotions() {
        let toks = tokens(&["a", "b"]);
        let negation = NegationDetector::new(&toks);
        let map = votes(&[(0, &["joy"]), (1, &["admiration"])]);
        let label = compute_predominant_emotion(&map, &negation, -1.5).unwrap().label();
        assert!(!label.contains("admiration"));
        assert!(!label.contains("joy"));
        assert!(!label.contains("//"));
        assert_eq!(label, "");
    }

    #[test]
    fn test_positive_polarity_removes_negative_emotions() {
        let toks = tokens(&["a", "b", "c"]);
        let negation = NegationDetector::new(&toks);
        let map = votes(&[(0, &["disgust"]), (1, &["fear"]), (2, &["sadness"])]);
        let result = compute_predominant_emotion(&map, &negation, 2.0).unwrap();
        assert_eq!(result.leaders.len(), 3);
        assert_eq!(result.label(), "fear");
    }

    #[test]
    fn test_empty_votes_tie_everything() {
        let toks: Vec<String> = vec![];
        let negation = NegationDetector::new(&toks);
        let result = compute_predominant_emotion(&BTreeMap::new(), &negation, 0.0).unwrap();
        assert_eq!(
            result.label(),
            "admiration/anger/disgust/fear/interest/joy/sadness/surprise/neutral"
        );
        assert_eq!(result.max_votes, 0);
    }

    #[test]
    fn test_empty_votes_with_negative_polarity() {
        let toks: Vec<String> = vec![];
        let negation = NegationDetector::new(&toks);
        let label = compute_predominant_emotion(&BTreeMap::new(), &negation, -0.5).unwrap().label();
        assert_eq!(label, "anger/disgust/fear/interest/sadness/surprise/neutral");
    }

    #[test]
    fn test_unknown_labels_count_as_neutral() {
        let toks = tokens(&["not", "odd", "odd"]);
        let negation = NegationDetector::new(&toks);
        let map = votes(&[(1, &["whimsy"]), (2, &["calm"])]);
        let tally = tally_emotions(&map, &negation).unwrap();
        assert_eq!(tally.get(PrimitiveEmotion::Neutral), 2);
        assert_eq!(resolve_predominant(&tally, 0.0).label(), "neutral");
    }

    #[test]
    fn test_deterministic() {
        let toks = tokens(&["not", "great", "sad"]);
        let negation = NegationDetector::new(&toks);
        let map = votes(&[(1, &["joy", "admiration"]), (2, &["sadness"])]);
        let first = compute_predominant_emotion(&map, &negation, -0.3).unwrap();
        let second = compute_predominant_emotion(&map, &negation, -0.3).unwrap();
        assert_eq!(first, second);
        // "great" negado: joy -> sadness, admiration -> disgust; "sad" soma mais um
        assert_eq!(first.label(), "sadness");
        assert_eq!(first.votes[PrimitiveEmotion::Disgust.index()].1, 1);
    }

    #[test]
    fn test_out_of_range_keys_rejected() {
        let toks = tokens(&["not"]);
        let negation = NegationDetector::new(&toks);

        // Chave igual a len: sem a checagem, "not" negaria admiration -> disgust
        let at_len = votes(&[(1, &["admiration"])]);
        assert_eq!(
            compute_predominant_emotion(&at_len, &negation, 4.0),
            Err(AnalysisError::PositionOutOfRange { position: 1, len: 1 })
        );

        let far = votes(&[(0, &["joy"]), (9, &["fear"])]);
        assert_eq!(
            tally_emotions(&far, &negation),
            Err(AnalysisError::PositionOutOfRange { position: 9, len: 1 })
        );
    }

    #[test]
    fn test_all_matches_count() {
        assert_eq!(PrimitiveEmotion::all().len(), PrimitiveEmotion::COUNT);
        for (i, emotion) in PrimitiveEmotion::all().into_iter().enumerate() {
            assert_eq!(emotion.index(), i);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PrimitiveEmotion::from_name("joy"), Some(PrimitiveEmotion::Joy));
        assert_eq!(PrimitiveEmotion::from_name("Joy"), None);
        assert_eq!(
            PrimitiveEmotion::from_label_or_neutral("bliss"),
            PrimitiveEmotion::Neutral
        );
    }
}
