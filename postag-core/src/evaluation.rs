//! Avaliação de um etiquetador contra um conjunto de teste anotado.

use serde::{Deserialize, Serialize};

use crate::corpus::TaggedSentence;
use crate::error::{Error, Result};
use crate::tagger::BackoffTagger;

/// De onde vem a tag anterior usada no contexto bigrama durante a avaliação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum History {
    /// Tag correta do token anterior (convenção usual de avaliação).
    #[default]
    Gold,
    /// Tag prevista para o token anterior, como ao etiquetar texto cru.
    Predicted,
}

/// Contagens de acerto por token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Tokens com tag prevista igual à correta.
    pub correct: usize,
    /// Total de tokens avaliados.
    pub total: usize,
}

impl Evaluation {
    /// Acumula uma sentença: tags corretas e previstas, alinhadas.
    pub fn accumulate<'a>(
        &mut self,
        gold: &[&str],
        predicted: impl IntoIterator<Item = &'a str>,
    ) {
        self.correct += gold.iter().zip(predicted).filter(|(g, p)| **g == *p).count();
        self.total += gold.len();
    }

    /// Fração de tokens corretos, em `[0, 1]`.
    #[inline]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Etiqueta cada sentença de `test` e compara com as tags corretas.
///
/// Falha com [`Error::EmptyTestSet`] se o teste não tiver nenhum token.
pub fn evaluate(
    tagger: &BackoffTagger,
    test: &[TaggedSentence],
    history: History,
) -> Result<Evaluation> {
    let mut eval = Evaluation::default();
    for sent in test {
        let mut prev: Option<&str> = None;
        let mut predicted = Vec::with_capacity(sent.len());
        for token in &sent.tokens {
            let tag = tagger.choose(&token.word, prev);
            predicted.push(tag);
            prev = Some(match history {
                History::Gold => token.tag.as_str(),
                History::Predicted => tag,
            });
        }
        eval.accumulate(&sent.tags(), predicted);
    }

    if eval.total == 0 {
        return Err(Error::EmptyTestSet);
    }
    tracing::trace!(correct = eval.correct, total = eval.total, "evaluated");
    Ok(eval)
}
