//! # emotion-core — Emoção Predominante e Polaridade de Reviews
//!
//! Este crate atribui a uma review curta uma **emoção primitiva predominante**
//! e um **score de polaridade**, a partir das anotações de um léxico emocional
//! sobre os adjetivos do texto e de uma heurística simples de negação.
//!
//! ## Arquitetura do Sistema
//!
//! O sistema segue uma arquitetura de pipeline linear:
//!
//! 1.  **Entrada**: Texto bruto da review ([`corpus`]).
//! 2.  **Tokenização** ([`tokenizer`]): limpeza de HTML, pontuação, números e stop words.
//! 3.  **Etiquetagem POS** ([`tagger`]): tags Penn Treebank; adjetivos começam com `J`.
//! 4.  **Léxico** ([`lexicon`]): emoções primitivas e polaridade de cada adjetivo.
//! 5.  **Negação** ([`negation`]): "not beautiful" inverte sinal e emoção.
//! 6.  **Agregação**:
//!     *   **Polaridade** ([`polarity`]): soma com sinal.
//!     *   **Emoção** ([`emotion`]): votos, desempate e ajuste pela polaridade.
//! 7.  **Saída**: [`ReviewAnalysis`] (ex: polaridade `-0.82`, emoção `"disgust"`).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use emotion_core::EmotionPipeline;
//!
//! // 1. Instancia o pipeline com o léxico embutido
//! let pipeline = EmotionPipeline::builtin().unwrap();
//!
//! // 2. Analisa a review
//! let analysis = pipeline.analyze("The photography is not beautiful.").unwrap();
//!
//! // 3. "beautiful" (admiration) negado vira disgust
//! assert!(analysis.polarity < 0.0);
//! assert_eq!(analysis.emotion, "disgust");
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: Orquestrador principal que conecta todos os estágios.
//! - [`review`]: Documento com tokens, tags e mapas de votos/polaridades.
//! - [`emotion`]: Vocabulário de emoções e o agregador de votos.
//! - [`evaluation`]: Concordância com o sentimento anotado.

pub mod corpus;
pub mod emotion;
pub mod error;
pub mod evaluation;
pub mod lexicon;
pub mod negation;
pub mod pipeline;
pub mod polarity;
pub mod review;
pub mod tagger;
pub mod tokenizer;

pub use corpus::ReviewRecord;
pub use emotion::{PredominantEmotion, PrimitiveEmotion};
pub use error::{AnalysisError, Result};
pub use lexicon::{Lexicon, LexiconEntry, LexiconGateway};
pub use pipeline::{EmotionPipeline, PipelineEvent, ReviewAnalysis};
pub use review::Review;
pub use tagger::{HeuristicTagger, PosTagger};
pub use tokenizer::{Token, TokenizerConfig};
