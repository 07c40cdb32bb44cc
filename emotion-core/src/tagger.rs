//! # Etiquetador Morfossintático (POS) — Penn Treebank
//!
//! O núcleo da análise só precisa saber **quais posições são adjetivos**, mas
//! recebe as tags completas do Penn Treebank (`JJ`, `NN`, `RB`...). Qualquer
//! etiquetador que implemente [`PosTagger`] pode ser plugado no pipeline.
//!
//! ## Tags Relevantes
//!
//! | Tag | Significado              | Exemplos                   |
//! |-----|--------------------------|----------------------------|
//! | JJ  | Adjetivo                 | beautiful, boring          |
//! | JJR | Adjetivo comparativo     | better, worse              |
//! | JJS | Adjetivo superlativo     | best, greatest             |
//! | RB  | Advérbio                 | not, really, never         |
//! | NN  | Substantivo singular     | movie, plot                |
//! | VBG | Verbo no gerúndio        | watching                   |
//!
//! Todas as tags de adjetivo começam com [`ADJECTIVE_MARKER`].
//!
//! ## Etiquetador Heurístico
//!
//! O [`HeuristicTagger`] combina listas fechadas (determinantes, pronomes,
//! preposições), uma lista de adjetivos conhecidos e regras de sufixo.
//! Não é um modelo treinado: serve para reviews curtas e para demonstração.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Prefixo comum a todas as tags de adjetivo (`JJ`, `JJR`, `JJS`).
pub const ADJECTIVE_MARKER: &str = "J";

/// Verifica se uma tag marca um adjetivo.
pub fn is_adjective_tag(tag: &str) -> bool {
    tag.starts_with(ADJECTIVE_MARKER)
}

/// Contrato de um etiquetador POS.
///
/// Deve devolver exatamente uma tag por token, na mesma ordem.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<String>;
}

/// Subconjunto das tags Penn Treebank produzidas pelo [`HeuristicTagger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Conjunção coordenativa.
    Cc,
    /// Determinante.
    Dt,
    /// Preposição ou conjunção subordinativa.
    In,
    /// Adjetivo.
    Jj,
    /// Adjetivo comparativo.
    Jjr,
    /// Adjetivo superlativo.
    Jjs,
    /// Verbo modal.
    Md,
    /// Substantivo singular.
    Nn,
    /// Substantivo plural.
    Nns,
    /// Pronome pessoal.
    Prp,
    /// Advérbio.
    Rb,
    /// Verbo, forma base.
    Vb,
    /// Verbo no passado.
    Vbd,
    /// Verbo no gerúndio.
    Vbg,
    /// Interjeição.
    Uh,
}

impl PosTag {
    /// Representação textual da tag (ex: "JJ", "NNS")
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Cc => "CC",
            PosTag::Dt => "DT",
            PosTag::In => "IN",
            PosTag::Jj => "JJ",
            PosTag::Jjr => "JJR",
            PosTag::Jjs => "JJS",
            PosTag::Md => "MD",
            PosTag::Nn => "NN",
            PosTag::Nns => "NNS",
            PosTag::Prp => "PRP",
            PosTag::Rb => "RB",
            PosTag::Vb => "VB",
            PosTag::Vbd => "VBD",
            PosTag::Vbg => "VBG",
            PosTag::Uh => "UH",
        }
    }

    pub fn is_adjective(&self) -> bool {
        is_adjective_tag(self.label())
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "no", "every", "each",
    "any", "some", "all", "another", "either", "neither",
];
const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];
const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "from", "into", "than",
    "through", "during", "after", "before", "because", "while", "if", "like",
];
const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet"];
const MODALS: &[&str] = &["can", "could", "may", "might", "must", "shall", "should", "will", "would"];
const ADVERBS: &[&str] = &[
    "not", "never", "very", "really", "too", "so", "quite", "just", "also",
    "even", "still", "ever", "always", "again", "almost", "rather", "well",
];
const VERBS: &[&str] = &["is", "are", "was", "were", "be", "been", "am", "do", "does", "did", "have", "has", "had"];
const INTERJECTIONS: &[&str] = &["wow", "oh", "ugh", "meh", "yeah", "hey"];

/// Adjetivos frequentes em reviews que as regras de sufixo não capturam.
const KNOWN_ADJECTIVES: &[&str] = &[
    "good", "bad", "great", "awful", "nice", "poor", "fine", "sad", "happy",
    "funny", "boring", "amazing", "brilliant", "excellent", "perfect", "terrible",
    "horrible", "stupid", "dull", "bland", "silly", "weird", "strange", "scary",
    "interesting", "disappointing", "stunning", "annoying", "charming", "terrifying",
    "superb", "lovely", "pretty", "ugly", "cheap", "slow", "fast", "long", "short",
    "new", "old", "best", "worst", "better", "worse", "angry", "afraid", "evil",
    "decent", "mediocre", "gorgeous", "awesome", "fantastic", "smart", "dumb",
    "fresh", "flat", "weak", "strong", "cute", "dark", "lame", "sweet",
];

/// Sufixos típicos de adjetivos em inglês.
const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ic", "al", "ish"];

/// Etiquetador baseado em listas fechadas e regras de sufixo.
pub struct HeuristicTagger {
    adjectives: HashSet<String>,
}

impl HeuristicTagger {
    pub fn new() -> Self {
        Self {
            adjectives: KNOWN_ADJECTIVES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Acrescenta palavras que devem sempre ser etiquetadas como `JJ`.
    ///
    /// Útil para alinhar o etiquetador ao vocabulário do léxico.
    pub fn with_adjectives<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.adjectives
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Etiqueta uma única palavra (já em minúsculas).
    pub fn tag_word(&self, word: &str) -> PosTag {
        // 1. Classes fechadas
        if DETERMINERS.contains(&word) {
            return PosTag::Dt;
        }
        if CONJUNCTIONS.contains(&word) {
            return PosTag::Cc;
        }
        if PRONOUNS.contains(&word) {
            return PosTag::Prp;
        }
        if PREPOSITIONS.contains(&word) {
            return PosTag::In;
        }
        if MODALS.contains(&word) {
            return PosTag::Md;
        }
        if ADVERBS.contains(&word) {
            return PosTag::Rb;
        }
        if VERBS.contains(&word) {
            return PosTag::Vb;
        }
        if INTERJECTIONS.contains(&word) {
            return PosTag::Uh;
        }

        // 2. Adjetivos conhecidos
        if self.adjectives.contains(word) {
            return match word {
                "best" | "worst" => PosTag::Jjs,
                "better" | "worse" => PosTag::Jjr,
                _ => PosTag::Jj,
            };
        }

        // 3. Comparativos e superlativos de adjetivos conhecidos (greatest, nicer)
        if let Some(base) = word.strip_suffix("est") {
            if self.is_known_base(base) {
                return PosTag::Jjs;
            }
        }
        if let Some(base) = word.strip_suffix("er") {
            if self.is_known_base(base) {
                return PosTag::Jjr;
            }
        }

        // 4. Regras de sufixo
        if word.len() > 4 && word.ends_with("ly") {
            return PosTag::Rb;
        }
        if word.len() > 4 && word.ends_with("ing") {
            return PosTag::Vbg;
        }
        if word.len() > 3 && word.ends_with("ed") {
            return PosTag::Vbd;
        }
        if word.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Jj;
        }
        if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
            return PosTag::Nns;
        }
        PosTag::Nn
    }

    /// "nicer" -> "nic" + "e", "bigger" -> "big" + "g"
    fn is_known_base(&self, base: &str) -> bool {
        if base.is_empty() {
            return false;
        }
        if self.adjectives.contains(base) || self.adjectives.contains(&format!("{}e", base)) {
            return true;
        }
        let mut chars = base.chars();
        match (chars.next_back(), chars.next_back()) {
            (Some(a), Some(b)) if a == b => self.adjectives.contains(&base[..base.len() - a.len_utf8()]),
            _ => false,
        }
    }
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger for HeuristicTagger {
    fn tag(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| self.tag_word(&t.to_lowercase()).label().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tags_align_with_tokens() {
        let tagger = HeuristicTagger::new();
        let tokens = words(&["movie", "not", "beautiful", "acting", "wonderful"]);
        let tags = tagger.tag(&tokens);
        assert_eq!(tags.len(), tokens.len());
        assert_eq!(tags, vec!["NN", "RB", "JJ", "VBG", "JJ"]);
    }

    #[test]
    fn test_comparatives_and_superlatives() {
        let tagger = HeuristicTagger::new();
        assert_eq!(tagger.tag_word("greatest"), PosTag::Jjs);
        assert_eq!(tagger.tag_word("nicer"), PosTag::Jjr);
        assert_eq!(tagger.tag_word("bigger"), PosTag::Nn);
        assert_eq!(tagger.tag_word("best"), PosTag::Jjs);
    }

    #[test]
    fn test_negation_particles() {
        let tagger = HeuristicTagger::new();
        assert_eq!(tagger.tag_word("not"), PosTag::Rb);
        assert_eq!(tagger.tag_word("no"), PosTag::Dt);
        assert_eq!(tagger.tag_word("nor"), PosTag::Cc);
    }

    #[test]
    fn test_with_adjectives_overrides_suffix_rules() {
        let tagger = HeuristicTagger::new().with_adjectives(["Gripping"]);
        assert_eq!(tagger.tag_word("gripping"), PosTag::Jj);
        assert_eq!(HeuristicTagger::new().tag_word("gripping"), PosTag::Vbg);
    }

    #[test]
    fn test_adjective_marker() {
        assert!(is_adjective_tag("JJ"));
        assert!(is_adjective_tag("JJS"));
        assert!(!is_adjective_tag("NN"));
        assert!(PosTag::Jjr.is_adjective());
        assert!(!PosTag::Rb.is_adjective());
    }
}
