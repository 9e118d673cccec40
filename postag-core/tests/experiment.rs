use postag_core::{
    ambiguity, evaluate, shuffle_split, BackoffTagger, Experiment, ExperimentConfig, History, KFold,
    Selection, TaggedCorpus, TaggedSentence, TaggerConfig, DEFAULT_TAG,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> Experiment {
    Experiment::new(ExperimentConfig { seed: Some(seed), ..ExperimentConfig::default() })
}

#[test]
fn identical_sentences_split_and_tag_perfectly() {
    let mut sents: Vec<TaggedSentence> = (0..10)
        .map(|_| TaggedSentence::from_pairs(&[("the", "DET"), ("dog", "NOUN"), ("runs", "VERB")]))
        .collect();

    let split = shuffle_split(&mut sents, 0.1, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(split.test.len(), 1);
    assert_eq!(split.train.len(), 9);

    let tagger = BackoffTagger::train(&split.train, &TaggerConfig::default());
    let eval = evaluate(&tagger, &split.test, History::Gold).unwrap();
    assert_eq!(eval.accuracy(), 1.0);

    let accuracy = seeded(99).same_dataset(&mut sents).unwrap();
    assert_eq!(accuracy, 1.0);
}

#[test]
fn empty_training_set_falls_back_to_default_tag() {
    let corpus = TaggedCorpus::sample();
    let test = corpus.tagged_sents(&Selection::category("news")).unwrap();

    let tagger = BackoffTagger::train(&[], &TaggerConfig::default());
    let accuracy = evaluate(&tagger, &test, History::Gold).unwrap().accuracy();

    let nn = test
        .iter()
        .flat_map(|s| s.tokens.iter())
        .filter(|t| t.tag == DEFAULT_TAG)
        .count();
    let total: usize = test.iter().map(|s| s.len()).sum();
    assert_eq!(accuracy, nn as f64 / total as f64);
}

#[test]
fn in_domain_beats_cross_domain() {
    let corpus = TaggedCorpus::sample();
    let news = corpus.tagged_sents(&Selection::category("news")).unwrap();
    let fiction = corpus.tagged_sents(&Selection::category("fiction")).unwrap();

    let tagger = BackoffTagger::train(&news, &TaggerConfig::default());
    let own = evaluate(&tagger, &news, History::Gold).unwrap().accuracy();
    let other = evaluate(&tagger, &fiction, History::Gold).unwrap().accuracy();
    assert!(own >= other, "own = {own}, other = {other}");

    let exp = seeded(0);
    let cross = exp.different_dataset(news, fiction).unwrap();
    assert_eq!(cross, other);
}

#[test]
fn kfold_test_folds_cover_whole_corpus_once() {
    let corpus = TaggedCorpus::sample();
    let all = corpus.tagged_sents(&Selection::All).unwrap();
    let splits = KFold::default().split(&all).unwrap();

    let tests: Vec<TaggedSentence> = splits.iter().flat_map(|s| s.test.iter().cloned()).collect();
    assert_eq!(tests, all);
}

#[test]
fn default_slices_run_end_to_end() {
    let corpus = TaggedCorpus::sample();
    let mut exp = seeded(2024);
    let slices = exp.config().slices.clone();

    for slice in &slices {
        let mut sents = corpus.tagged_sents(&slice.selection).unwrap();
        assert!(sents.len() >= 10, "{} has only {} sentences", slice.label, sents.len());

        let baseline = exp.same_dataset(&mut sents).unwrap();
        assert!((0.0..=1.0).contains(&baseline));

        let rate = ambiguity(&sents).unwrap().rate();
        assert!((0.0..=1.0).contains(&rate));

        let cv = exp.cross_validate(&corpus.tagged_sents(&slice.selection).unwrap()).unwrap();
        assert_eq!(cv.folds.len(), 10);
        assert!((0.0..=1.0).contains(&cv.mean()));

        if let Some(contrast) = &slice.contrast {
            let train = corpus.tagged_sents(&slice.selection).unwrap();
            let test = corpus.tagged_sents(contrast).unwrap();
            let accuracy = exp.different_dataset(train, test).unwrap();
            assert!((0.0..=1.0).contains(&accuracy));
        }
    }
}

#[test]
fn every_default_slice_has_ambiguous_contexts() {
    let corpus = TaggedCorpus::sample();
    for slice in &ExperimentConfig::default().slices {
        let stats = ambiguity(&corpus.tagged_sents(&slice.selection).unwrap()).unwrap();
        assert!(stats.ambiguous_contexts > 0, "{} has no ambiguous context", slice.label);
        assert!(stats.rate() > 0.0, "{}: rate = {}", slice.label, stats.rate());
    }
}

#[test]
fn category_and_file_slices_are_different_experiments() {
    let corpus = TaggedCorpus::sample();
    let exp = seeded(7);
    let slices = exp.config().slices.clone();
    let category = corpus.tagged_sents(&slices[0].selection).unwrap();
    let file = corpus.tagged_sents(&slices[1].selection).unwrap();

    assert!(file.len() < category.len());
    assert!(file.iter().all(|s| category.contains(s)));

    let cv_category = exp.cross_validate(&category).unwrap();
    let cv_file = exp.cross_validate(&file).unwrap();
    assert_ne!(cv_category.folds, cv_file.folds);
}
