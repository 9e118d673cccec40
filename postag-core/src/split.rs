//! # Estratégias de Divisão Treino/Teste
//!
//! - [`shuffle_split`]: embaralha e separa os primeiros 10% como teste.
//! - [`Split::disjoint`]: conjuntos fornecidos pelo chamador (ex: gêneros
//!   diferentes).
//! - [`KFold`]: folds contíguos por índice, cada um usado uma vez como teste.

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::corpus::TaggedSentence;
use crate::error::{Error, Result};

/// Fração de teste usada por padrão.
pub const DEFAULT_TEST_FRACTION: f64 = 0.1;

/// Número de folds usado por padrão.
pub const DEFAULT_FOLDS: usize = 10;

/// Um par treino/teste.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Vec<TaggedSentence>,
    pub test: Vec<TaggedSentence>,
}

impl Split {
    /// Usa conjuntos já separados pelo chamador; nenhum dos dois pode ser vazio.
    pub fn disjoint(train: Vec<TaggedSentence>, test: Vec<TaggedSentence>) -> Result<Self> {
        if train.is_empty() || test.is_empty() {
            return Err(Error::EmptySplit { train: train.len(), test: test.len() });
        }
        Ok(Self { train, test })
    }
}

/// Embaralha `sentences` **no lugar** e separa o início como teste.
///
/// O teste recebe `floor(n * test_fraction)` sentenças e o treino o restante,
/// então nenhuma sentença é descartada. Depois da chamada a ordem original de
/// `sentences` está perdida.
pub fn shuffle_split<R: Rng + ?Sized>(
    sentences: &mut [TaggedSentence],
    test_fraction: f64,
    rng: &mut R,
) -> Result<Split> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::InvalidFraction(test_fraction));
    }
    sentences.shuffle(rng);

    let size = (sentences.len() as f64 * test_fraction) as usize;
    let (test, train) = sentences.split_at(size);
    tracing::debug!(train = train.len(), test = test.len(), "shuffle split");
    Split::disjoint(train.to_vec(), test.to_vec())
}

/// Validação cruzada k-fold sem embaralhamento.
///
/// Com `n` sentenças, os primeiros `n % k` folds têm `n / k + 1` sentenças e
/// os demais `n / k`. Os folds de teste particionam a entrada exatamente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KFold {
    n_splits: usize,
}

impl KFold {
    pub fn new(n_splits: usize) -> Result<Self> {
        if n_splits < 2 {
            return Err(Error::InvalidFoldCount(n_splits));
        }
        Ok(Self { n_splits })
    }

    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Intervalos de índice de cada fold de teste, em ordem.
    pub fn test_ranges(&self, n_samples: usize) -> Result<Vec<Range<usize>>> {
        if n_samples < self.n_splits {
            return Err(Error::TooFewSamples { samples: n_samples, folds: self.n_splits });
        }
        let base = n_samples / self.n_splits;
        let extra = n_samples % self.n_splits;

        let mut start = 0;
        let ranges = (0..self.n_splits)
            .map(|i| {
                let size = if i < extra { base + 1 } else { base };
                let range = start..start + size;
                start += size;
                range
            })
            .collect();
        Ok(ranges)
    }

    /// Todas as rotações: o fold `i` como teste, a união dos outros como treino.
    pub fn split(&self, sentences: &[TaggedSentence]) -> Result<Vec<Split>> {
        let ranges = self.test_ranges(sentences.len())?;
        Ok(ranges
            .into_iter()
            .map(|range| {
                let mut train = Vec::with_capacity(sentences.len() - range.len());
                train.extend_from_slice(&sentences[..range.start]);
                train.extend_from_slice(&sentences[range.end..]);
                Split { train, test: sentences[range].to_vec() }
            })
            .collect())
    }
}

impl Default for KFold {
    fn default() -> Self {
        Self { n_splits: DEFAULT_FOLDS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered(n: usize) -> Vec<TaggedSentence> {
        (0..n)
            .map(|i| TaggedSentence::from_pairs(&[(i.to_string().as_str(), "CD")]))
            .collect()
    }

    #[test]
    fn test_shuffle_split_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [10, 11, 19, 20, 57, 100, 4623] {
            let mut sents = numbered(n);
            let split = shuffle_split(&mut sents, 0.1, &mut rng).unwrap();
            assert_eq!(split.test.len(), n / 10, "n = {n}");
            assert_eq!(split.train.len() + split.test.len(), n);
        }
    }

    #[test]
    fn test_shuffle_split_keeps_every_sentence() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sents = numbered(30);
        let split = shuffle_split(&mut sents, 0.1, &mut rng).unwrap();

        let mut seen: Vec<String> = split
            .train
            .iter()
            .chain(&split.test)
            .map(|s| s.tokens[0].word.clone())
            .collect();
        seen.sort_by_key(|w| w.parse::<usize>().unwrap());
        let expected: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        assert_eq!(seen, expected);
        // o teste é o início da sequência embaralhada do chamador
        assert_eq!(split.test[..], sents[..3]);
    }

    #[test]
    fn test_shuffle_split_is_reproducible_with_seed() {
        let mut a = numbered(50);
        let mut b = numbered(50);
        let sa = shuffle_split(&mut a, 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
        let sb = shuffle_split(&mut b, 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_shuffle_split_rejects_empty_side() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sents = numbered(9);
        assert!(matches!(
            shuffle_split(&mut sents, 0.1, &mut rng),
            Err(Error::EmptySplit { train: 9, test: 0 })
        ));
        assert!(matches!(
            shuffle_split(&mut sents, 1.5, &mut rng),
            Err(Error::InvalidFraction(_))
        ));
    }

    #[test]
    fn test_disjoint_requires_both_sides() {
        assert!(Split::disjoint(numbered(3), numbered(1)).is_ok());
        assert!(matches!(
            Split::disjoint(vec![], numbered(1)),
            Err(Error::EmptySplit { train: 0, test: 1 })
        ));
    }

    #[test]
    fn test_kfold_sizes() {
        let kf = KFold::default();
        let ranges = kf.test_ranges(23).unwrap();
        let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 2, 2, 2, 2, 2, 2, 2]);
        assert_eq!(ranges[0], 0..3);
        assert_eq!(ranges[9], 21..23);
    }

    #[test]
    fn test_kfold_partitions_exactly() {
        let sents = numbered(37);
        let splits = KFold::new(10).unwrap().split(&sents).unwrap();
        assert_eq!(splits.len(), 10);

        let mut counts = vec![0usize; 37];
        for split in &splits {
            assert_eq!(split.train.len() + split.test.len(), 37);
            for s in &split.test {
                counts[s.tokens[0].word.parse::<usize>().unwrap()] += 1;
            }
            for s in &split.train {
                assert!(!split.test.contains(s));
            }
        }
        assert!(counts.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_kfold_is_order_based() {
        let sents = numbered(20);
        let splits = KFold::default().split(&sents).unwrap();
        assert_eq!(splits[0].test, sents[0..2].to_vec());
        assert_eq!(splits[9].test, sents[18..20].to_vec());
    }

    #[test]
    fn test_kfold_invalid_inputs() {
        assert!(matches!(KFold::new(1), Err(Error::InvalidFoldCount(1))));
        assert!(matches!(
            KFold::default().split(&numbered(9)),
            Err(Error::TooFewSamples { samples: 9, folds: 10 })
        ));
    }
}
