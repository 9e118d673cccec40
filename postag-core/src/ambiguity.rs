//! # Ambiguidade de Contextos Bigrama
//!
//! Quão ambíguo é o corpus para um etiquetador bigrama? Para cada par de
//! tokens adjacentes, o contexto é `(tag anterior, palavra atual)` e a
//! observação é a tag atual. Um contexto é **ambíguo** se aparece com mais de
//! uma tag distinta.
//!
//! A taxa ponderada
//!
//! $$ \frac{\sum_{c \in ambíguos} N(c)}{\sum_c N(c)} $$
//!
//! estima um limite inferior para o erro de qualquer etiquetador bigrama,
//! independente de treino. É uma estatística direta sobre tabelas de
//! frequência, sem passar pelo [`crate::tagger`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::corpus::TaggedSentence;
use crate::error::{Error, Result};

/// Resultado da contagem de ambiguidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguityStats {
    /// Contextos `(tag anterior, palavra)` distintos.
    pub contexts: usize,
    /// Contextos observados com mais de uma tag.
    pub ambiguous_contexts: usize,
    /// Ocorrências que caem em contextos ambíguos.
    pub ambiguous_tokens: usize,
    /// Total de bigramas observados.
    pub total: usize,
}

impl AmbiguityStats {
    /// Fração de ocorrências em contextos ambíguos, em `[0, 1]`.
    pub fn rate(&self) -> f64 {
        self.ambiguous_tokens as f64 / self.total as f64
    }
}

/// Conta a ambiguidade dos contextos bigrama de `sentences`.
///
/// O primeiro token de cada sentença não tem tag anterior e não forma
/// bigrama. Sem nenhum bigrama, falha com [`Error::NoBigrams`].
pub fn ambiguity(sentences: &[TaggedSentence]) -> Result<AmbiguityStats> {
    // (tag anterior, palavra) -> tag -> contagem
    let mut cfd: HashMap<(&str, &str), HashMap<&str, usize>> = HashMap::new();
    for sent in sentences {
        for pair in sent.tokens.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            *cfd.entry((prev.tag.as_str(), curr.word.as_str()))
                .or_default()
                .entry(curr.tag.as_str())
                .or_insert(0) += 1;
        }
    }

    let mut stats = AmbiguityStats {
        contexts: cfd.len(),
        ambiguous_contexts: 0,
        ambiguous_tokens: 0,
        total: 0,
    };
    for dist in cfd.values() {
        let n: usize = dist.values().sum();
        stats.total += n;
        if dist.len() > 1 {
            stats.ambiguous_contexts += 1;
            stats.ambiguous_tokens += n;
        }
    }

    if stats.total == 0 {
        return Err(Error::NoBigrams);
    }
    tracing::debug!(
        contexts = stats.contexts,
        ambiguous = stats.ambiguous_contexts,
        rate = stats.rate(),
        "bigram ambiguity"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Selection, TaggedCorpus};

    fn sent(pairs: &[(&str, &str)]) -> TaggedSentence {
        TaggedSentence::from_pairs(pairs)
    }

    #[test]
    fn test_unambiguous_corpus_has_zero_rate() {
        let sents = vec![
            sent(&[("the", "DET"), ("dog", "NOUN"), ("runs", "VERB")]),
            sent(&[("the", "DET"), ("dog", "NOUN"), ("runs", "VERB")]),
        ];
        let stats = ambiguity(&sents).unwrap();
        assert_eq!(stats.contexts, 2);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.rate(), 0.0);
    }

    #[test]
    fn test_weighted_rate() {
        // (VBD, that) aparece 3 vezes com CS e DT: ambíguo
        // (AT, dog) aparece 1 vez: não ambíguo
        let sents = vec![
            sent(&[("said", "VBD"), ("that", "CS")]),
            sent(&[("said", "VBD"), ("that", "CS")]),
            sent(&[("saw", "VBD"), ("that", "DT")]),
            sent(&[("a", "AT"), ("dog", "NN")]),
        ];
        let stats = ambiguity(&sents).unwrap();
        assert_eq!(stats.ambiguous_contexts, 1);
        assert_eq!(stats.ambiguous_tokens, 3);
        assert_eq!(stats.total, 4);
        assert!((stats.rate() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_first_token_is_not_a_context() {
        // "Fire" tem tags diferentes, mas só no início da sentença
        let sents = vec![sent(&[("Fire", "VB"), ("!", ".")]), sent(&[("Fire", "NN"), ("!", ".")])];
        let stats = ambiguity(&sents).unwrap();
        assert_eq!(stats.ambiguous_contexts, 0);
        assert_eq!(stats.contexts, 2);
    }

    #[test]
    fn test_no_bigrams() {
        let sents = vec![sent(&[("Yes", "UH")])];
        assert!(matches!(ambiguity(&sents), Err(Error::NoBigrams)));
        assert!(matches!(ambiguity(&[]), Err(Error::NoBigrams)));
    }

    #[test]
    fn test_sample_slices_are_ambiguous() {
        let corpus = TaggedCorpus::sample();
        let files = Selection::fileids(&["ca16", "ca17", "ca18"]);
        for sel in [Selection::All, Selection::category("news"), files] {
            let rate = ambiguity(&corpus.tagged_sents(&sel).unwrap()).unwrap().rate();
            assert!(rate > 0.0 && rate < 1.0, "rate = {rate}");
        }
    }
}
