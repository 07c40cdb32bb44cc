//! # Tokenizador para Reviews em Inglês
//!
//! Responsável por limpar o texto bruto de uma review e dividi-lo em tokens.
//! Cada token preserva sua posição original no texto (offset) para permitir
//! destacar adjetivos na interface web.
//!
//! ## Etapas de Limpeza
//!
//! 1. **Markup**: tags HTML (`<br />`) e entidades (`&amp;`) viram espaços do mesmo
//!    tamanho, preservando os offsets do texto original.
//! 2. **Pontuação**: qualquer caractere não alfanumérico separa tokens
//!    (ex: "don't" -> "don", "t").
//! 3. **Números**: palavras que contêm dígitos são descartadas ("2nd", "1080p").
//! 4. **Caixa**: tudo é convertido para minúsculas.
//! 5. **Stop words**: palavras funcionais são removidas. As partículas de negação
//!    `no`, `not` e `nor` nunca estão na lista, senão a negação jamais dispararia.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use emotion_core::tokenizer::{Tokenizer, TokenizerConfig};
//!
//! let tokenizer = Tokenizer::new(&TokenizerConfig::default()).unwrap();
//! let tokens = tokenizer.tokenize("The movie was <br />not beautiful!");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["movie", "not", "beautiful"]);
//! ```

use std::collections::HashSet;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// Um token extraído do texto original.
///
/// O `Token` é a unidade atômica de processamento do pipeline. O texto já vem
/// normalizado (minúsculas), mas `start` e `end` apontam para o trecho exato
/// no texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto normalizado do token (ex: "beautiful", "not").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Configuração do tokenizador.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Remove stop words após a normalização.
    pub remove_stop_words: bool,
    /// Lista de stop words personalizada. `None` usa [`STOP_WORDS`].
    pub stop_words: Option<Vec<String>>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            remove_stop_words: true,
            stop_words: None,
        }
    }
}

/// Stop words padrão do inglês (sem as partículas de negação).
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing",
    "down", "during", "each", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "my", "myself", "now", "of", "off", "on", "once", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "s", "same", "she", "should", "so",
    "some", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Tags HTML e entidades (`&amp;`, `&#39;`).
const MARKUP_PATTERN: &str = r"<[^>]*>|&(?:[a-zA-Z]+|#[0-9]+);";

/// Tokenizador com limpeza de markup e filtro de stop words.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    markup: Regex,
    stop_words: HashSet<String>,
    remove_stop_words: bool,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Result<Self> {
        let stop_words = match &config.stop_words {
            Some(custom) => custom.iter().map(|w| w.to_lowercase()).collect(),
            None => STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        Ok(Self {
            markup: Regex::new(MARKUP_PATTERN)?,
            stop_words,
            remove_stop_words: config.remove_stop_words,
        })
    }

    /// Limpa e tokeniza um texto, retornando tokens já indexados.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        // Markup vira espaço do mesmo tamanho: offsets continuam válidos
        let cleaned = self
            .markup
            .replace_all(text, |caps: &Captures| " ".repeat(caps[0].len()));

        let mut tokens = Vec::new();
        for (offset, segment) in cleaned.split_word_bound_indices() {
            for (start, end) in alphanumeric_runs(segment) {
                let word = &segment[start..end];
                if word.chars().any(char::is_numeric) {
                    continue;
                }
                let lower = word.to_lowercase();
                if self.remove_stop_words && self.stop_words.contains(&lower) {
                    continue;
                }
                tokens.push(Token {
                    text: lower,
                    start: offset + start,
                    end: offset + end,
                    index: 0,
                });
            }
        }

        // Re-indexa os tokens
        for (i, token) in tokens.iter_mut().enumerate() {
            token.index = i;
        }
        tokens
    }
}

/// Trechos alfanuméricos contíguos de um segmento, como pares de offsets.
fn alphanumeric_runs(segment: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut current: Option<usize> = None;

    for (i, ch) in segment.char_indices() {
        match (ch.is_alphanumeric(), current) {
            (true, None) => current = Some(i),
            (false, Some(start)) => {
                runs.push((start, i));
                current = None;
            }
            _ => {}
        }
    }
    if let Some(start) = current {
        runs.push((start, segment.len()));
    }
    runs
}
