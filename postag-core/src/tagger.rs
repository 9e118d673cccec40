//! # Etiquetador N-grama com Backoff
//!
//! Cadeia de três níveis, consultados em ordem até o primeiro acerto:
//!
//! 1. **Bigrama**: tabela `(tag anterior, palavra) -> tag`.
//! 2. **Unigrama**: tabela `palavra -> tag`.
//! 3. **Padrão**: sempre responde a mesma tag (`NN`, substantivo singular).
//!
//! Cada tabela guarda, para cada contexto, a tag mais frequente no treino.
//! Um contexto só entra na tabela se for *útil*: em ao menos uma ocorrência
//! a tag correta difere da resposta do restante da cadeia. Contextos que o
//! nível inferior já resolve seriam redundantes.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::corpus::TaggedSentence;

/// Tag do nível padrão (substantivo singular no tagset Brown).
pub const DEFAULT_TAG: &str = "NN";

/// Parâmetros de treino da cadeia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Resposta do último nível da cadeia.
    pub default_tag: String,
    /// Um contexto só é mantido se a tag vencedora aparecer mais que `cutoff` vezes.
    pub cutoff: usize,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self { default_tag: DEFAULT_TAG.to_string(), cutoff: 0 }
    }
}

/// Tabela do nível bigrama.
///
/// O início de sentença (sem tag anterior) é um contexto próprio.
#[derive(Debug, Clone, Default)]
struct BigramTable {
    /// Contextos na primeira posição da sentença.
    start: HashMap<String, String>,
    /// `tag anterior -> palavra -> tag`.
    after: HashMap<String, HashMap<String, String>>,
}

impl BigramTable {
    fn get(&self, prev: Option<&str>, word: &str) -> Option<&str> {
        let table = match prev {
            None => &self.start,
            Some(tag) => self.after.get(tag)?,
        };
        table.get(word).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.start.len() + self.after.values().map(HashMap::len).sum::<usize>()
    }
}

impl FromIterator<((Option<String>, String), String)> for BigramTable {
    fn from_iter<I: IntoIterator<Item = ((Option<String>, String), String)>>(iter: I) -> Self {
        let mut table = BigramTable::default();
        for ((prev, word), tag) in iter {
            match prev {
                None => table.start.insert(word, tag),
                Some(prev) => table.after.entry(prev).or_default().insert(word, tag),
            };
        }
        table
    }
}

/// Um nível da cadeia de backoff.
#[derive(Debug, Clone)]
enum Level {
    Bigram(BigramTable),
    Unigram(HashMap<String, String>),
    Default(String),
}

impl Level {
    /// Tag escolhida por este nível, ou `None` se o contexto é desconhecido.
    fn lookup(&self, word: &str, prev: Option<&str>) -> Option<&str> {
        match self {
            Level::Bigram(table) => table.get(prev, word),
            Level::Unigram(table) => table.get(word).map(String::as_str),
            Level::Default(tag) => Some(tag.as_str()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Level::Bigram(_) => "bigram",
            Level::Unigram(_) => "unigram",
            Level::Default(_) => "default",
        }
    }

    /// Número de contextos na tabela (1 para o nível padrão).
    fn len(&self) -> usize {
        match self {
            Level::Bigram(table) => table.len(),
            Level::Unigram(table) => table.len(),
            Level::Default(_) => 1,
        }
    }
}

/// Etiquetador treinado: lista ordenada de níveis, o primeiro acerto vence.
///
/// Construído do zero para cada divisão treino/teste e descartado depois da
/// avaliação.
#[derive(Debug, Clone)]
pub struct BackoffTagger {
    levels: Vec<Level>,
}

impl BackoffTagger {
    /// Treina a cadeia bigrama → unigrama → padrão.
    ///
    /// Os níveis são treinados de baixo para cima, pois cada um precisa da
    /// resposta da cadeia abaixo dele para decidir quais contextos são úteis.
    /// O histórico de tags usado no treino é sempre o correto (gold).
    ///
    /// Um conjunto de treino vazio produz uma cadeia que responde apenas a
    /// tag padrão.
    pub fn train(sentences: &[TaggedSentence], config: &TaggerConfig) -> Self {
        let mut tagger = Self { levels: vec![Level::Default(config.default_tag.clone())] };

        let unigram = fit(sentences, &tagger, config.cutoff, |sent, i, _| {
            sent.tokens[i].word.clone()
        });
        tagger.levels.insert(0, Level::Unigram(unigram.into_iter().collect()));

        let bigram = fit(sentences, &tagger, config.cutoff, |sent, i, prev| {
            (prev.map(str::to_string), sent.tokens[i].word.clone())
        });
        tagger.levels.insert(0, Level::Bigram(bigram.into_iter().collect()));

        tracing::debug!(
            sentences = sentences.len(),
            levels = ?tagger.level_sizes(),
            "backoff tagger trained"
        );
        tagger
    }

    /// Tag para `word`, dado a tag anterior (`None` no início da sentença).
    pub fn choose<'a>(&'a self, word: &str, prev: Option<&str>) -> &'a str {
        self.levels
            .iter()
            .find_map(|level| level.lookup(word, prev))
            .unwrap_or(DEFAULT_TAG)
    }

    /// `(nome, tamanho)` de cada nível, na ordem de consulta.
    pub fn level_sizes(&self) -> Vec<(&'static str, usize)> {
        self.levels.iter().map(|l| (l.name(), l.len())).collect()
    }
}

/// Treina um nível: conta tags por contexto e mantém os contextos úteis.
fn fit<K, F>(
    sentences: &[TaggedSentence],
    backoff: &BackoffTagger,
    cutoff: usize,
    context: F,
) -> HashMap<K, String>
where
    K: Eq + Hash + Clone,
    F: Fn(&TaggedSentence, usize, Option<&str>) -> K,
{
    let mut counts: HashMap<K, HashMap<&str, usize>> = HashMap::new();
    let mut useful: HashSet<K> = HashSet::new();

    for sent in sentences {
        let mut prev: Option<&str> = None;
        for (i, token) in sent.tokens.iter().enumerate() {
            let ctx = context(sent, i, prev);
            *counts.entry(ctx.clone()).or_default().entry(token.tag.as_str()).or_insert(0) += 1;
            if backoff.choose(&token.word, prev) != token.tag {
                useful.insert(ctx);
            }
            prev = Some(token.tag.as_str());
        }
    }

    useful
        .into_iter()
        .filter_map(|ctx| {
            let (tag, hits) = best_tag(&counts[&ctx])?;
            (hits > cutoff).then(|| (ctx, tag.to_string()))
        })
        .collect()
}

/// Tag mais frequente; empates vão para a menor tag em ordem lexicográfica.
fn best_tag<'a>(dist: &HashMap<&'a str, usize>) -> Option<(&'a str, usize)> {
    dist.iter()
        .map(|(tag, n)| (*tag, *n))
        .max_by(|(ta, na), (tb, nb)| na.cmp(nb).then_with(|| tb.cmp(ta)))
}
