//! Compara a acurácia de um etiquetador bigrama sob diferentes divisões
//! treino/teste: por gênero, por arquivo de origem e por sentença aleatória,
//! e também com validação cruzada de 10 folds.
//!
//! O relatório vai para stdout; diagnósticos (`tracing`) vão para stderr.

use anyhow::{Context, Result};
use postag_core::{
    ambiguity, percent_change, report, Experiment, ExperimentConfig, Selection, TaggedCorpus,
    TaggedSentence,
};
use tracing::info;

fn query(corpus: &TaggedCorpus, selection: &Selection, label: &str) -> Result<Vec<TaggedSentence>> {
    corpus
        .tagged_sents(selection)
        .with_context(|| format!("loading the {label} slice"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let corpus = TaggedCorpus::sample();
    tracing::debug!(
        categories = ?corpus.categories(),
        files = corpus.fileids().len(),
        "corpus carregado"
    );

    let config = ExperimentConfig::default();
    config.validate().context("invalid experiment configuration")?;
    tracing::debug!(config = %serde_json::to_string(&config)?, "configuração efetiva");
    let mut experiment = Experiment::new(config);
    let slices = experiment.config().slices.clone();
    let folds = experiment.config().folds;

    println!();

    // Mesmo conjunto: linha de base de cada fatia
    info!("cenário: mesmo conjunto");
    println!("train/test using same dataset:\n");
    let mut baselines = Vec::with_capacity(slices.len());
    for slice in &slices {
        let mut sents = query(&corpus, &slice.selection, &slice.label)?;
        let accuracy = experiment
            .same_dataset(&mut sents)
            .with_context(|| format!("same-dataset split of the {} slice", slice.label))?;
        println!("{}", report::accuracy_line(&slice.label, accuracy));
        baselines.push(accuracy);
    }
    println!();

    // Limite inferior do erro bigrama, sem treino
    for slice in &slices {
        let sents = query(&corpus, &slice.selection, &slice.label)?;
        let stats = ambiguity(&sents)
            .with_context(|| format!("ambiguity of the {} slice", slice.label))?;
        info!(
            slice = %slice.label,
            contexts = stats.contexts,
            ambiguous = stats.ambiguous_contexts
        );
        println!("{}", report::ambiguity_line(stats.rate()));
    }

    // Conjuntos diferentes
    info!("cenário: conjuntos diferentes");
    println!("\ntrain/test using different datasets:\n");
    for (slice, baseline) in slices.iter().zip(&baselines) {
        let accuracy = match &slice.contrast {
            Some(contrast) => {
                let train = query(&corpus, &slice.selection, &slice.label)?;
                let test = query(&corpus, contrast, &slice.label)?;
                experiment.different_dataset(train, test)
            }
            None => {
                let mut sents = query(&corpus, &slice.selection, &slice.label)?;
                experiment.same_dataset(&mut sents)
            }
        }
        .with_context(|| format!("different-dataset split of the {} slice", slice.label))?;

        println!("{}", report::accuracy_line(&slice.label, accuracy));
        println!("{}\n", report::change_line(percent_change(accuracy, *baseline)?));
    }

    // Validação cruzada
    info!(folds, "cenário: validação cruzada");
    println!("train/test using same dataset with {folds}-fold cross-validation:\n");
    for (i, (slice, baseline)) in slices.iter().zip(&baselines).enumerate() {
        let sents = query(&corpus, &slice.selection, &slice.label)?;
        let cv = experiment
            .cross_validate(&sents)
            .with_context(|| format!("cross-validation of the {} slice", slice.label))?;
        for (fold, accuracy) in cv.folds.iter().enumerate() {
            println!("{}", report::fold_line(fold + 1, *accuracy));
        }

        let mean = cv.mean();
        println!("{}", report::accuracy_line(&slice.label, mean));
        println!("{}", report::change_line(percent_change(mean, *baseline)?));
        if i + 1 < slices.len() {
            println!();
        }
    }

    Ok(())
}
