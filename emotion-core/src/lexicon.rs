//! # Léxico Emocional
//!
//! O léxico associa palavras a **emoções primitivas** e a um **score de
//! polaridade** (tipicamente em `[-1, 1]`), no estilo da OntoSenticNet.
//!
//! O núcleo da análise enxerga o léxico apenas pelo contrato [`LexiconGateway`]:
//! dada uma palavra, devolve suas emoções (possivelmente nenhuma) e sua
//! polaridade (possivelmente ausente). Emoção e polaridade são independentes.
//!
//! O [`Lexicon`] concreto é imutável depois de construído e pode ser
//! compartilhado entre threads sem travas. Ele pode vir de:
//! - [`Lexicon::builtin`]: vocabulário embutido de adjetivos comuns em reviews;
//! - [`Lexicon::from_json_reader`]: arquivo JSON `[{"word", "emotions", "polarity"}]`;
//! - [`LexiconBuilder`]: construção programática (testes, integrações).

use std::collections::{BTreeSet, HashMap};
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// O que o léxico sabe sobre uma palavra.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Rótulos de emoções primitivas (ex: "admiration", "joy").
    pub emotions: BTreeSet<String>,
    /// Score de polaridade, se conhecido.
    pub polarity: Option<f64>,
}

impl LexiconEntry {
    /// Palavra desconhecida: sem emoções e sem polaridade.
    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty() && self.polarity.is_none()
    }
}

/// Contrato de consulta ao léxico.
pub trait LexiconGateway: Send + Sync {
    /// Consulta uma palavra. Palavras desconhecidas retornam uma entrada vazia.
    fn lookup(&self, word: &str) -> LexiconEntry;
}

/// Registro do formato JSON de léxico.
#[derive(Debug, Deserialize)]
struct LexiconRecord {
    word: String,
    #[serde(default)]
    emotions: Vec<String>,
    #[serde(default)]
    polarity: Option<f64>,
}

/// Léxico em memória, indexado pela palavra em minúsculas.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Léxico embutido com adjetivos frequentes em reviews de filmes.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for (word, emotions, polarity) in BUILTIN_ENTRIES {
            entries.insert(
                word.to_string(),
                LexiconEntry {
                    emotions: emotions.iter().map(|e| e.to_string()).collect(),
                    polarity: Some(*polarity),
                },
            );
        }
        Self { entries }
    }

    /// Carrega um léxico a partir de um JSON `[{"word", "emotions", "polarity"}]`.
    ///
    /// Palavras repetidas acumulam emoções; a última polaridade vence.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<LexiconRecord> = serde_json::from_reader(reader)?;
        let mut builder = LexiconBuilder::default();
        for record in records {
            for emotion in &record.emotions {
                builder = builder.emotion(&record.word, emotion);
            }
            if let Some(score) = record.polarity {
                builder = builder.polarity(&record.word, score);
            }
        }
        builder.build()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_reader(json.as_bytes())
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(&word.to_lowercase())
    }

    /// Palavras conhecidas (ordem arbitrária).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexiconGateway for Lexicon {
    fn lookup(&self, word: &str) -> LexiconEntry {
        self.get(word).cloned().unwrap_or_default()
    }
}

/// Construtor incremental de [`Lexicon`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    entries: HashMap<String, LexiconEntry>,
}

impl LexiconBuilder {
    /// Associa uma emoção à palavra (acumula).
    pub fn emotion(mut self, word: &str, emotion: &str) -> Self {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .emotions
            .insert(emotion.to_string());
        self
    }

    /// Define a polaridade da palavra (a última vence).
    pub fn polarity(mut self, word: &str, score: f64) -> Self {
        self.entries.entry(word.to_lowercase()).or_default().polarity = Some(score);
        self
    }

    /// Atalho para emoções + polaridade de uma vez.
    pub fn entry(self, word: &str, emotions: &[&str], score: f64) -> Self {
        emotions
            .iter()
            .fold(self, |b, e| b.emotion(word, e))
            .polarity(word, score)
    }

    /// Valida e congela o léxico. Polaridades não finitas são rejeitadas.
    pub fn build(self) -> Result<Lexicon> {
        for (word, entry) in &self.entries {
            if let Some(score) = entry.polarity {
                if !score.is_finite() {
                    return Err(AnalysisError::InvalidPolarity { word: word.clone() });
                }
            }
        }
        Ok(Lexicon {
            entries: self.entries,
        })
    }
}

/// (palavra, emoções primitivas, polaridade)
const BUILTIN_ENTRIES: &[(&str, &[&str], f64)] = &[
    // Positivos
    ("good", &["joy"], 0.6),
    ("great", &["admiration", "joy"], 0.8),
    ("excellent", &["admiration"], 0.9),
    ("amazing", &["surprise", "admiration"], 0.85),
    ("wonderful", &["joy"], 0.87),
    ("beautiful", &["admiration"], 0.82),
    ("brilliant", &["admiration"], 0.84),
    ("perfect", &["admiration"], 0.9),
    ("best", &["admiration"], 0.9),
    ("superb", &["admiration"], 0.88),
    ("gorgeous", &["admiration"], 0.8),
    ("charming", &["admiration"], 0.65),
    ("funny", &["joy"], 0.6),
    ("fun", &["joy"], 0.7),
    ("happy", &["joy"], 0.8),
    ("lovely", &["joy"], 0.74),
    ("enjoyable", &["joy"], 0.7),
    ("fantastic", &["joy", "surprise"], 0.85),
    ("interesting", &["interest"], 0.55),
    ("fascinating", &["interest"], 0.76),
    ("curious", &["interest"], 0.3),
    ("surprising", &["surprise"], 0.3),
    ("unexpected", &["surprise"], 0.1),
    // Negativos
    ("bad", &["disgust"], -0.6),
    ("awful", &["disgust"], -0.8),
    ("terrible", &["disgust", "fear"], -0.85),
    ("horrible", &["disgust", "fear"], -0.85),
    ("worst", &["disgust"], -0.9),
    ("stupid", &["disgust"], -0.6),
    ("ugly", &["disgust"], -0.7),
    ("pathetic", &["disgust"], -0.75),
    ("boring", &["sadness"], -0.55),
    ("dull", &["sadness"], -0.5),
    ("sad", &["sadness"], -0.7),
    ("disappointing", &["sadness"], -0.65),
    ("predictable", &["sadness"], -0.3),
    ("mediocre", &["sadness"], -0.4),
    ("poor", &["sadness"], -0.55),
    ("weak", &["sadness"], -0.4),
    ("annoying", &["anger"], -0.6),
    ("angry", &["anger"], -0.7),
    ("ridiculous", &["anger"], -0.5),
    ("scary", &["fear"], -0.4),
    ("terrifying", &["fear"], -0.55),
    ("frightening", &["fear"], -0.5),
];
