//! # postag-core — Etiquetadores N-grama e Estratégias de Divisão Treino/Teste
//!
//! Este crate investiga como a escolha da divisão entre treino e teste afeta a
//! acurácia de um etiquetador morfossintático (POS tagger) bigrama. Ele foi
//! projetado para ser didático: cada etapa é pequena e pode ser usada isoladamente.
//!
//! ## Fluxo de um Experimento
//!
//! 1.  **Corpus** ([`corpus`]): sentenças anotadas `(palavra, tag)`, filtráveis por
//!     categoria (gênero textual) ou por arquivo de origem.
//! 2.  **Divisão** ([`split`]): aleatória 90/10, conjuntos disjuntos fornecidos
//!     pelo chamador ou k-fold.
//! 3.  **Treino** ([`tagger`]): cadeia de backoff bigrama → unigrama → tag padrão.
//! 4.  **Avaliação** ([`evaluation`]): fração de tokens com a tag correta.
//! 5.  **Relatório** ([`report`]): acurácias e variações percentuais.
//!
//! Independente de treino, [`ambiguity`] mede quantos contextos bigrama do
//! corpus são ambíguos, um limite inferior para o erro de qualquer etiquetador
//! bigrama.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use postag_core::{Experiment, ExperimentConfig, Selection, TaggedCorpus};
//!
//! let corpus = TaggedCorpus::sample();
//! let mut experiment = Experiment::new(ExperimentConfig {
//!     seed: Some(42),
//!     ..ExperimentConfig::default()
//! });
//!
//! // Mesmo conjunto: 90% das sentenças de notícias para treino, 10% para teste
//! let mut news = corpus.tagged_sents(&Selection::category("news")).unwrap();
//! let baseline = experiment.same_dataset(&mut news).unwrap();
//!
//! // Conjuntos diferentes: treina em notícias, testa em ficção
//! let train = corpus.tagged_sents(&Selection::category("news")).unwrap();
//! let test = corpus.tagged_sents(&Selection::category("fiction")).unwrap();
//! let cross_genre = experiment.different_dataset(train, test).unwrap();
//!
//! assert!((0.0..=1.0).contains(&baseline));
//! assert!((0.0..=1.0).contains(&cross_genre));
//! ```

pub mod ambiguity;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod report;
pub mod split;
pub mod tagger;

pub use ambiguity::{ambiguity, AmbiguityStats};
pub use corpus::{Document, Selection, TaggedCorpus, TaggedSentence, TaggedWord};
pub use error::{Error, ErrorKind, Result};
pub use evaluation::{evaluate, Evaluation, History};
pub use experiment::{percent_change, CrossValidation, Experiment, ExperimentConfig, SliceSpec};
pub use split::{shuffle_split, KFold, Split};
pub use tagger::{BackoffTagger, TaggerConfig, DEFAULT_TAG};
