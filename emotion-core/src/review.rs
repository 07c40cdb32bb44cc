//! # Documento de Review
//!
//! Uma [`Review`] carrega o texto bruto, o rótulo de sentimento verdadeiro
//! (usado apenas para relatório), os tokens e suas tags POS alinhadas, e os
//! dois mapas construídos a partir do léxico:
//!
//! - **votos de emoção**: posição do adjetivo → conjunto de emoções;
//! - **polaridades**: posição do adjetivo → score.
//!
//! ## Ciclo de Vida
//!
//! 1. `Review::new` valida o alinhamento tokens/tags.
//! 2. `annotate_adjectives` percorre os adjetivos uma única vez e preenche os mapas.
//! 3. `compute_polarity` soma as polaridades (com negação) e guarda o valor.
//! 4. `compute_predominant_emotion` usa os votos **e** a polaridade já calculada.
//!
//! Pedir a emoção antes da polaridade é erro ([`AnalysisError::PolarityNotComputed`]).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::emotion::{compute_predominant_emotion, PredominantEmotion};
use crate::error::{AnalysisError, Result};
use crate::lexicon::LexiconGateway;
use crate::negation::NegationDetector;
use crate::polarity::compute_document_polarity;
use crate::tagger::is_adjective_tag;

/// Um adjetivo encontrado no documento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveMention {
    pub word: String,
    /// Índice do token (0-based).
    pub position: usize,
}

/// O que o léxico e o detector de negação disseram sobre um adjetivo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjectiveAnnotation {
    pub word: String,
    pub position: usize,
    pub negated: bool,
    pub emotions: BTreeSet<String>,
    pub polarity: Option<f64>,
}

/// Seleciona, na ordem dos tokens, as posições etiquetadas como adjetivo.
///
/// Espera `tokens` e `tags` alinhados; posições além da menor sequência são ignoradas.
pub fn adjective_words(tokens: &[String], tags: &[String]) -> Vec<AdjectiveMention> {
    tokens
        .iter()
        .zip(tags)
        .enumerate()
        .filter(|(_, (_, tag))| is_adjective_tag(tag))
        .map(|(position, (word, _))| AdjectiveMention {
            word: word.clone(),
            position,
        })
        .collect()
}

/// Uma review com seus tokens, tags e mapas derivados do léxico.
///
/// Só é construída por [`Review::new`]: não implementa `Deserialize`, para
/// que o alinhamento e as chaves dos mapas passem sempre pelas validações.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    text: String,
    sentiment: String,
    tokens: Vec<String>,
    tags: Vec<String>,
    emotion_votes: BTreeMap<usize, BTreeSet<String>>,
    polarities: BTreeMap<usize, f64>,
    computed_polarity: Option<f64>,
}

impl Review {
    /// Cria a review validando `tokens.len() == tags.len()`.
    pub fn new(
        text: impl Into<String>,
        sentiment: impl Into<String>,
        tokens: Vec<String>,
        tags: Vec<String>,
    ) -> Result<Self> {
        if tokens.len() != tags.len() {
            return Err(AnalysisError::LengthMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }
        Ok(Self {
            text: text.into(),
            sentiment: sentiment.into(),
            tokens,
            tags,
            emotion_votes: BTreeMap::new(),
            polarities: BTreeMap::new(),
            computed_polarity: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sentimento verdadeiro (metadado opaco, nunca usado pelo algoritmo).
    pub fn sentiment(&self) -> &str {
        &self.sentiment
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn emotion_votes(&self) -> &BTreeMap<usize, BTreeSet<String>> {
        &self.emotion_votes
    }

    pub fn polarities(&self) -> &BTreeMap<usize, f64> {
        &self.polarities
    }

    /// Polaridade calculada por [`Review::compute_polarity`], se já houver.
    pub fn computed_polarity(&self) -> Option<f64> {
        self.computed_polarity
    }

    pub fn adjective_words(&self) -> Vec<AdjectiveMention> {
        adjective_words(&self.tokens, &self.tags)
    }

    pub fn negation(&self) -> NegationDetector<'_> {
        NegationDetector::new(&self.tokens)
    }

    pub fn is_word_negated(&self, position: Option<usize>) -> bool {
        self.negation().is_negated(position)
    }

    /// Registra uma emoção para o adjetivo na posição dada.
    pub fn add_emotion(&mut self, position: usize, emotion: &str) -> Result<()> {
        self.check_position(position)?;
        self.emotion_votes
            .entry(position)
            .or_default()
            .insert(emotion.to_string());
        Ok(())
    }

    /// Registra a polaridade do adjetivo na posição dada (a última vence).
    pub fn add_adjective_polarity(&mut self, position: usize, score: f64) -> Result<()> {
        self.check_position(position)?;
        self.polarities.insert(position, score);
        Ok(())
    }

    /// Consulta o léxico para cada adjetivo e preenche os dois mapas.
    ///
    /// Palavras desconhecidas não geram entradas, mas aparecem nas anotações.
    pub fn annotate_adjectives(&mut self, lexicon: &dyn LexiconGateway) -> Vec<AdjectiveAnnotation> {
        let mut annotations = Vec::new();
        for mention in self.adjective_words() {
            let entry = lexicon.lookup(&mention.word);
            // Posições vêm de adjective_words: sempre dentro dos tokens
            for emotion in &entry.emotions {
                self.emotion_votes
                    .entry(mention.position)
                    .or_default()
                    .insert(emotion.clone());
            }
            if let Some(score) = entry.polarity {
                self.polarities.insert(mention.position, score);
            }
            annotations.push(AdjectiveAnnotation {
                negated: self.is_word_negated(Some(mention.position)),
                word: mention.word,
                position: mention.position,
                emotions: entry.emotions,
                polarity: entry.polarity,
            });
        }
        annotations
    }

    /// Calcula (e guarda) a polaridade do documento.
    pub fn compute_polarity(&mut self) -> Result<f64> {
        let polarity = compute_document_polarity(&self.polarities, &self.negation())?;
        self.computed_polarity = Some(polarity);
        Ok(polarity)
    }

    /// Calcula a emoção predominante usando a polaridade já calculada.
    pub fn compute_predominant_emotion(&self) -> Result<PredominantEmotion> {
        let polarity = self
            .computed_polarity
            .ok_or(AnalysisError::PolarityNotComputed)?;
        compute_predominant_emotion(&self.emotion_votes, &self.negation(), polarity)
    }

    fn check_position(&self, position: usize) -> Result<()> {
        self.negation().check_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_length_mismatch() {
        let err = Review::new("x", "positive", strings(&["a", "b"]), strings(&["DT"])).unwrap_err();
        assert_eq!(err, AnalysisError::LengthMismatch { tokens: 2, tags: 1 });
    }

    #[test]
    fn test_adjective_extraction() {
        let tokens = strings(&["very", "good", "movie", "best", "ending"]);
        let tags = strings(&["RB", "JJ", "NN", "JJS", "VBG"]);
        let mentions = adjective_words(&tokens, &tags);
        assert_eq!(
            mentions,
            vec![
                AdjectiveMention { word: "good".into(), position: 1 },
                AdjectiveMention { word: "best".into(), position: 3 },
            ]
        );
        assert!(adjective_words(&[], &[]).is_empty());
    }

    #[test]
    fn test_out_of_range_keys_rejected() {
        let mut review = Review::new("", "", strings(&["good"]), strings(&["JJ"])).unwrap();
        assert!(review.add_emotion(0, "joy").is_ok());
        assert_eq!(
            review.add_emotion(1, "joy"),
            Err(AnalysisError::PositionOutOfRange { position: 1, len: 1 })
        );
        assert!(review.add_adjective_polarity(5, 0.3).is_err());
        assert!(review.polarities().is_empty());
    }

    #[test]
    fn test_polarity_last_write_wins() {
        let mut review = Review::new("", "", strings(&["good"]), strings(&["JJ"])).unwrap();
        review.add_adjective_polarity(0, 0.3).unwrap();
        review.add_adjective_polarity(0, 0.9).unwrap();
        assert_eq!(review.compute_polarity().unwrap(), 0.9);
    }

    #[test]
    fn test_serialized_review_keeps_validated_maps() {
        let mut review = Review::new("not", "", strings(&["not"]), strings(&["RB"])).unwrap();
        assert!(review.add_adjective_polarity(1, 4.0).is_err());
        assert!(review.add_emotion(9, "admiration").is_err());
        assert_eq!(review.compute_polarity().unwrap(), 0.0);

        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["tokens"], serde_json::json!(["not"]));
        assert_eq!(json["polarities"], serde_json::json!({}));
        assert_eq!(json["emotion_votes"], serde_json::json!({}));
    }

    #[test]
    fn test_emotion_requires_polarity() {
        let review = Review::new("", "", vec![], vec![]).unwrap();
        assert_eq!(
            review.compute_predominant_emotion(),
            Err(AnalysisError::PolarityNotComputed)
        );
    }

    #[test]
    fn test_empty_review_defaults() {
        let mut review = Review::new("", "negative", vec![], vec![]).unwrap();
        assert!(review.annotate_adjectives(&Lexicon::builtin()).is_empty());
        assert_eq!(review.compute_polarity().unwrap(), 0.0);
        let emotion = review.compute_predominant_emotion().unwrap();
        assert_eq!(
            emotion.label(),
            "admiration/anger/disgust/fear/interest/joy/sadness/surprise/neutral"
        );
    }

    #[test]
    fn test_not_beautiful_end_to_end() {
        let lexicon = Lexicon::builder()
            .entry("beautiful", &["admiration"], 4.0)
            .build()
            .unwrap();
        let mut review = Review::new(
            "not beautiful",
            "negative",
            strings(&["not", "beautiful"]),
            strings(&["RB", "JJ"]),
        )
        .unwrap();

        let annotations = review.annotate_adjectives(&lexicon);
        assert_eq!(annotations.len(), 1);
        assert!(annotations[0].negated);
        assert_eq!(annotations[0].position, 1);

        assert_eq!(review.compute_polarity().unwrap(), -4.0);
        let emotion = review.compute_predominant_emotion().unwrap();
        assert_eq!(emotion.label(), "disgust");
        assert_eq!(review.sentiment(), "negative");
    }

    #[test]
    fn test_unknown_adjectives_leave_maps_empty() {
        let mut review = Review::new(
            "",
            "",
            strings(&["cinematic", "popcorn"]),
            strings(&["JJ", "NN"]),
        )
        .unwrap();
        let annotations = review.annotate_adjectives(&Lexicon::builtin());
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].polarity, None);
        assert!(review.emotion_votes().is_empty());
        assert!(review.polarities().is_empty());
    }
}
