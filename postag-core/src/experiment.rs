//! # Experimentos de Divisão Treino/Teste
//!
//! Junta as peças: para cada divisão treina um [`BackoffTagger`] novo,
//! avalia no teste correspondente e descarta o etiquetador.
//!
//! Três cenários por fatia do corpus:
//! - **mesmo conjunto**: divisão aleatória 90/10 da própria fatia (linha de base);
//! - **conjuntos diferentes**: treino na fatia, teste em outra fatia disjunta;
//! - **validação cruzada**: 10 folds contíguos, média das acurácias.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::corpus::{Selection, TaggedSentence};
use crate::error::{Error, Result};
use crate::evaluation::{evaluate, History};
use crate::split::{shuffle_split, KFold, Split, DEFAULT_FOLDS, DEFAULT_TEST_FRACTION};
use crate::tagger::{BackoffTagger, TaggerConfig};

/// Uma fatia do corpus usada nos experimentos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceSpec {
    /// Rótulo impresso no relatório (ex: `"category"`).
    pub label: String,
    /// Sentenças da fatia.
    pub selection: Selection,
    /// Fatia de teste no cenário "conjuntos diferentes". `None` usa uma
    /// divisão aleatória da própria fatia.
    pub contrast: Option<Selection>,
}

impl SliceSpec {
    pub fn new(label: &str, selection: Selection, contrast: Option<Selection>) -> Self {
        Self { label: label.to_string(), selection, contrast }
    }
}

/// Configuração completa de uma execução.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub tagger: TaggerConfig,
    pub history: History,
    /// Fração de teste da divisão aleatória.
    pub test_fraction: f64,
    /// Número de folds da validação cruzada.
    pub folds: usize,
    /// Semente do embaralhamento. `None` sorteia uma semente a cada execução.
    pub seed: Option<u64>,
    pub slices: Vec<SliceSpec>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            tagger: TaggerConfig::default(),
            history: History::Gold,
            test_fraction: DEFAULT_TEST_FRACTION,
            folds: DEFAULT_FOLDS,
            seed: None,
            slices: vec![
                SliceSpec::new(
                    "category",
                    Selection::category("news"),
                    Some(Selection::category("fiction")),
                ),
                SliceSpec::new(
                    "file",
                    Selection::fileids(&["ca16", "ca17", "ca18"]),
                    Some(Selection::fileids(&["cb10", "cb11", "cb12"])),
                ),
                SliceSpec::new("sentence", Selection::All, None),
            ],
        }
    }
}

impl ExperimentConfig {
    /// Confere a fração de teste e o número de folds antes de rodar.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(Error::InvalidFraction(self.test_fraction));
        }
        KFold::new(self.folds)?;
        Ok(())
    }
}

/// Acurácias por fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidation {
    pub folds: Vec<f64>,
}

impl CrossValidation {
    /// Média aritmética das acurácias dos folds.
    pub fn mean(&self) -> f64 {
        self.folds.iter().sum::<f64>() / self.folds.len() as f64
    }
}

/// Executor de experimentos com seu próprio gerador aleatório.
pub struct Experiment {
    config: ExperimentConfig,
    rng: StdRng,
}

impl Experiment {
    pub fn new(config: ExperimentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Treina no `train` da divisão e devolve a acurácia no `test`.
    pub fn train_and_evaluate(&self, split: &Split) -> Result<f64> {
        let tagger = BackoffTagger::train(&split.train, &self.config.tagger);
        Ok(evaluate(&tagger, &split.test, self.config.history)?.accuracy())
    }

    /// Mesmo conjunto: embaralha `sentences` no lugar e separa o teste.
    pub fn same_dataset(&mut self, sentences: &mut [TaggedSentence]) -> Result<f64> {
        let split = shuffle_split(sentences, self.config.test_fraction, &mut self.rng)?;
        self.train_and_evaluate(&split)
    }

    /// Conjuntos diferentes, fornecidos pelo chamador.
    pub fn different_dataset(
        &self,
        train: Vec<TaggedSentence>,
        test: Vec<TaggedSentence>,
    ) -> Result<f64> {
        self.train_and_evaluate(&Split::disjoint(train, test)?)
    }

    /// Validação cruzada k-fold na ordem dada (sem embaralhar).
    pub fn cross_validate(&self, sentences: &[TaggedSentence]) -> Result<CrossValidation> {
        let kfold = KFold::new(self.config.folds)?;
        let mut folds = Vec::with_capacity(kfold.n_splits());
        for (i, split) in kfold.split(sentences)?.iter().enumerate() {
            let accuracy = self.train_and_evaluate(split)?;
            tracing::debug!(fold = i + 1, accuracy, "fold evaluated");
            folds.push(accuracy);
        }
        Ok(CrossValidation { folds })
    }
}

/// Variação percentual de `value` em relação a `baseline`.
pub fn percent_change(value: f64, baseline: f64) -> Result<f64> {
    if baseline == 0.0 {
        return Err(Error::ZeroBaseline);
    }
    Ok((value - baseline) / baseline * 100.0)
}
