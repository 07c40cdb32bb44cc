//! # Pipeline de Emoções — Orquestrador com Eventos Observáveis
//!
//! O pipeline coordena todos os módulos (tokenizador, etiquetador POS, léxico,
//! negação, agregadores) e emite eventos em cada passo via um canal Rust
//! (`mpsc`), permitindo que o servidor WebSocket transmita o progresso em tempo
//! real para o cliente.
//!
//! ## Fluxo
//!
//! ```text
//! texto → tokens → tags POS → adjetivos → léxico → polaridade → emoção predominante
//! ```
//!
//! A polaridade é sempre calculada **antes** da emoção, porque o ajuste final da
//! emoção depende do sinal da polaridade.

use std::sync::mpsc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::corpus::ReviewRecord;
use crate::emotion::{PredominantEmotion, PrimitiveEmotion};
use crate::error::Result;
use crate::lexicon::{Lexicon, LexiconGateway};
use crate::polarity::signed_score;
use crate::review::{AdjectiveAnnotation, Review};
use crate::tagger::{HeuristicTagger, PosTagger};
use crate::tokenizer::{Token, Tokenizer, TokenizerConfig};

/// Eventos emitidos pelo pipeline durante o processamento.
///
/// Estes eventos permitem que a UI visualize o "raciocínio" passo a passo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: Tokenização concluída.
    TokenizationDone {
        tokens: Vec<Token>,
        total: usize,
    },
    /// **Passo 2**: Tags POS atribuídas (uma por token).
    TaggingDone {
        tags: Vec<String>,
    },
    /// **Passo 3**: Um adjetivo foi consultado no léxico.
    AdjectiveResolved {
        annotation: AdjectiveAnnotation,
    },
    /// **Passo 4**: Polaridade do documento, com a contribuição de cada posição.
    PolarityComputed {
        polarity: f64,
        contributions: Vec<(usize, f64)>,
    },
    /// **Passo 5**: Votos de emoção contados (após a negação).
    EmotionVotesCounted {
        votes: Vec<(PrimitiveEmotion, usize)>,
        max_votes: usize,
    },
    /// **Conclusão**: Resultado final da review.
    Done {
        analysis: ReviewAnalysis,
    },
    /// **Falha**: A review era malformada.
    Error {
        message: String,
    },
}

/// Resultado completo da análise de uma review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    pub text: String,
    /// Sentimento verdadeiro, repassado apenas para relatório.
    pub sentiment: String,
    pub tokens: Vec<Token>,
    pub tags: Vec<String>,
    pub adjectives: Vec<AdjectiveAnnotation>,
    pub polarity: f64,
    /// Rótulo da emoção predominante (ex: "admiration/joy").
    pub emotion: String,
    pub emotion_detail: PredominantEmotion,
    pub processing_ms: u64,
}

/// O pipeline de análise de emoções.
///
/// Os componentes são imutáveis depois da construção; o mesmo pipeline pode
/// analisar várias reviews em paralelo.
pub struct EmotionPipeline {
    tokenizer: Tokenizer,
    tagger: Box<dyn PosTagger>,
    lexicon: Box<dyn LexiconGateway>,
}

impl EmotionPipeline {
    /// Pipeline com tokenizador padrão e etiquetador alinhado ao vocabulário do léxico.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        let tagger = HeuristicTagger::new().with_adjectives(lexicon.words());
        Ok(Self::with_components(
            Tokenizer::new(&TokenizerConfig::default())?,
            Box::new(tagger),
            Box::new(lexicon),
        ))
    }

    /// Pipeline com o léxico embutido.
    pub fn builtin() -> Result<Self> {
        Self::new(Lexicon::builtin())
    }

    /// Monta o pipeline com componentes arbitrários.
    pub fn with_components(
        tokenizer: Tokenizer,
        tagger: Box<dyn PosTagger>,
        lexicon: Box<dyn LexiconGateway>,
    ) -> Self {
        Self {
            tokenizer,
            tagger,
            lexicon,
        }
    }

    /// Analisa um texto sem sentimento anotado.
    pub fn analyze(&self, text: &str) -> Result<ReviewAnalysis> {
        self.analyze_record(&ReviewRecord::new(text, ""))
    }

    /// Analisa uma review de forma síncrona e retorna o resultado final.
    pub fn analyze_record(&self, record: &ReviewRecord) -> Result<ReviewAnalysis> {
        self.run(record, &mut |_| {})
    }

    /// Executa o pipeline enviando eventos de progresso em tempo real.
    ///
    /// # Fluxo de Eventos
    /// 1. `TokenizationDone`
    /// 2. `TaggingDone`
    /// 3. `AdjectiveResolved` (um por adjetivo)
    /// 4. `PolarityComputed`
    /// 5. `EmotionVotesCounted`
    /// 6. `Done` ou `Error`
    pub fn analyze_streaming(&self, record: &ReviewRecord, tx: mpsc::Sender<PipelineEvent>) {
        let result = self.run(record, &mut |event| {
            let _ = tx.send(event);
        });
        if let Err(err) = result {
            let _ = tx.send(PipelineEvent::Error {
                message: err.to_string(),
            });
        }
    }

    /// Analisa várias reviews em paralelo. Uma review malformada não afeta as demais.
    pub fn analyze_batch(&self, records: &[ReviewRecord]) -> Vec<Result<ReviewAnalysis>> {
        info!("Analisando lote de {} review(s)", records.len());
        records
            .par_iter()
            .map(|record| self.analyze_record(record))
            .collect()
    }

    fn run(
        &self,
        record: &ReviewRecord,
        emit: &mut dyn FnMut(PipelineEvent),
    ) -> Result<ReviewAnalysis> {
        let start = Instant::now();

        // === Passo 1: Tokenização ===
        let tokens = self.tokenizer.tokenize(&record.text);
        emit(PipelineEvent::TokenizationDone {
            tokens: tokens.clone(),
            total: tokens.len(),
        });

        // === Passo 2: Etiquetagem POS ===
        let words: Vec<String> = tokens.iter().map(|t| t.text.clone()).collect();
        let tags = self.tagger.tag(&words);
        emit(PipelineEvent::TaggingDone { tags: tags.clone() });

        let mut review = match Review::new(&record.text, &record.sentiment, words, tags.clone()) {
            Ok(review) => review,
            Err(err) => {
                warn!("Review descartada: {}", err);
                return Err(err);
            }
        };

        // === Passo 3: Adjetivos + léxico ===
        let adjectives = review.annotate_adjectives(self.lexicon.as_ref());
        for annotation in &adjectives {
            emit(PipelineEvent::AdjectiveResolved {
                annotation: annotation.clone(),
            });
        }

        // === Passo 4: Polaridade (antes da emoção) ===
        let polarity = review.compute_polarity()?;
        let negation = review.negation();
        let contributions = review
            .polarities()
            .iter()
            .map(|(&p, &s)| (p, signed_score(p, s, &negation)))
            .collect();
        emit(PipelineEvent::PolarityComputed {
            polarity,
            contributions,
        });

        // === Passo 5: Emoção predominante ===
        let emotion_detail = review.compute_predominant_emotion()?;
        emit(PipelineEvent::EmotionVotesCounted {
            votes: emotion_detail.votes.clone(),
            max_votes: emotion_detail.max_votes,
        });

        let emotion = emotion_detail.label();
        debug!(
            "{} adjetivo(s), polaridade {:.3}, emoção '{}'",
            adjectives.len(),
            polarity,
            emotion
        );

        let analysis = ReviewAnalysis {
            text: record.text.clone(),
            sentiment: record.sentiment.clone(),
            tokens,
            tags,
            adjectives,
            polarity,
            emotion,
            emotion_detail,
            processing_ms: start.elapsed().as_millis() as u64,
        };
        emit(PipelineEvent::Done {
            analysis: analysis.clone(),
        });
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::demo_reviews;
    use crate::error::AnalysisError;

    /// Etiquetador quebrado: sempre devolve uma tag a menos.
    struct ShortTagger;

    impl PosTagger for ShortTagger {
        fn tag(&self, tokens: &[String]) -> Vec<String> {
            tokens.iter().skip(1).map(|_| "NN".to_string()).collect()
        }
    }

    #[test]
    fn test_pipeline_not_beautiful() {
        let pipeline = EmotionPipeline::builtin().unwrap();
        let analysis = pipeline.analyze("The photography is not beautiful.").unwrap();
        assert_eq!(analysis.adjectives.len(), 1);
        assert!(analysis.adjectives[0].negated);
        assert!(analysis.polarity < 0.0);
        assert_eq!(analysis.emotion, "disgust");
    }

    #[test]
    fn test_pipeline_positive_review() {
        let pipeline = EmotionPipeline::builtin().unwrap();
        let analysis = pipeline
            .analyze_record(&ReviewRecord::new("A beautiful and brilliant film.", "positive"))
            .unwrap();
        assert!(analysis.polarity > 0.0);
        assert_eq!(analysis.emotion, "admiration");
        assert_eq!(analysis.sentiment, "positive");
    }

    #[test]
    fn test_pipeline_empty() {
        let pipeline = EmotionPipeline::builtin().unwrap();
        let analysis = pipeline.analyze("").unwrap();
        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.polarity, 0.0);
        assert_eq!(analysis.emotion_detail.winners.len(), PrimitiveEmotion::COUNT);
    }

    #[test]
    fn test_pipeline_events_streaming() {
        let pipeline = EmotionPipeline::builtin().unwrap();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming(&ReviewRecord::new("Not funny, just stupid.", "negative"), tx);

        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        assert!(
            matches!(&events[0], PipelineEvent::TokenizationDone { .. }),
            "Primeiro evento deve ser TokenizationDone"
        );
        let adjectives = events
            .iter()
            .filter(|e| matches!(e, PipelineEvent::AdjectiveResolved { .. }))
            .count();
        assert_eq!(adjectives, 2);
        assert!(
            matches!(events.last(), Some(PipelineEvent::Done { .. })),
            "Último evento deve ser Done"
        );
    }

    #[test]
    fn test_misaligned_tagger_reports_error() {
        let pipeline = EmotionPipeline::with_components(
            Tokenizer::new(&TokenizerConfig::default()).unwrap(),
            Box::new(ShortTagger),
            Box::new(Lexicon::builtin()),
        );

        let err = pipeline.analyze("great movie").unwrap_err();
        assert_eq!(err, AnalysisError::LengthMismatch { tokens: 2, tags: 1 });

        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming(&ReviewRecord::new("great movie", "positive"), tx);
        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        assert!(matches!(events.last(), Some(PipelineEvent::Error { .. })));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let pipeline = EmotionPipeline::with_components(
            Tokenizer::new(&TokenizerConfig::default()).unwrap(),
            Box::new(ShortTagger),
            Box::new(Lexicon::builtin()),
        );
        // Sem tokens, o etiquetador quebrado não tem como errar
        let records = vec![
            ReviewRecord::new("great movie", "positive"),
            ReviewRecord::new("", "negative"),
        ];
        let results = pipeline.analyze_batch(&records);
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let pipeline = EmotionPipeline::builtin().unwrap();
        let records = demo_reviews();
        let batch = pipeline.analyze_batch(&records);
        assert_eq!(batch.len(), records.len());
        for (record, result) in records.iter().zip(&batch) {
            let sequential = pipeline.analyze_record(record).unwrap();
            let parallel = result.as_ref().unwrap();
            assert_eq!(parallel.polarity, sequential.polarity);
            assert_eq!(parallel.emotion, sequential.emotion);
        }
    }
}
