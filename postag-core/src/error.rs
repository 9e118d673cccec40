//! Erros do crate.
//!
//! Quase todas as falhas possíveis são de entrada inválida (divisões vazias,
//! número de folds impossível, linha de base zero). As demais são consultas
//! ao corpus por categoria ou arquivo inexistente.

use thiserror::Error;

/// Classificação grosseira de um [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A entrada não permite realizar a operação (ex: conjunto de teste vazio).
    InvalidInput,
    /// A consulta referencia algo que o corpus não contém.
    NotFound,
}

/// Erros que podem ocorrer ao montar divisões, treinar ou avaliar etiquetadores.
#[derive(Debug, Error)]
pub enum Error {
    /// Uma divisão deixaria o treino ou o teste sem sentenças.
    #[error("split would leave an empty side (train: {train}, test: {test} sentences)")]
    EmptySplit { train: usize, test: usize },

    /// A avaliação recebeu um conjunto de teste sem nenhum token.
    #[error("test set contains no tokens")]
    EmptyTestSet,

    /// Validação cruzada exige pelo menos dois folds.
    #[error("number of folds must be at least 2, got {0}")]
    InvalidFoldCount(usize),

    /// Há menos sentenças do que folds.
    #[error("cannot split {samples} sentences into {folds} folds")]
    TooFewSamples { samples: usize, folds: usize },

    /// Fração de teste fora do intervalo aberto (0, 1).
    #[error("test fraction must lie in (0, 1), got {0}")]
    InvalidFraction(f64),

    /// Nenhum par de tokens adjacentes para calcular ambiguidade.
    #[error("no bigrams found in the given sentences")]
    NoBigrams,

    /// Variação percentual contra uma linha de base nula.
    #[error("percent change against a zero baseline")]
    ZeroBaseline,

    /// Categoria inexistente no corpus.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// Identificador de arquivo inexistente no corpus.
    #[error("unknown file id: {0:?}")]
    UnknownFileId(String),

    /// A seleção não encontrou nenhuma sentença.
    #[error("selection matched no sentences")]
    EmptySelection,
}

impl Error {
    /// Classifica o erro como entrada inválida ou consulta sem resultado.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownCategory(_) | Error::UnknownFileId(_) => ErrorKind::NotFound,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Alias de `Result` usado em todo o crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::EmptySplit { train: 9, test: 0 };
        assert_eq!(
            err.to_string(),
            "split would leave an empty side (train: 9, test: 0 sentences)"
        );
        assert!(Error::UnknownFileId("zz99".into()).to_string().contains("zz99"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::EmptyTestSet.kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::ZeroBaseline.kind(), ErrorKind::InvalidInput);
        assert_eq!(Error::UnknownCategory("poesia".into()).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
