//! # Corpus Etiquetado por Categoria e Arquivo
//!
//! Acesso a um corpus de sentenças anotadas com classes gramaticais (POS),
//! organizado como no Brown Corpus: cada **documento** tem um identificador
//! de arquivo (`ca16`, `cb10`, ...) e pertence a uma **categoria** (gênero
//! textual: `news`, `editorial`, `fiction`).
//!
//! As consultas devolvem sempre uma cópia nova das sentenças, de modo que o
//! chamador pode embaralhar ou fatiar o resultado livremente.
//!
//! ## Tagset
//!
//! A amostra embutida usa o tagset do Brown Corpus:
//!
//! | Tag   | Significado                   | Exemplos           |
//! |-------|-------------------------------|--------------------|
//! | AT    | Artigo                        | the, a             |
//! | NN    | Substantivo singular          | budget, door       |
//! | NNS   | Substantivo plural            | taxes, schools     |
//! | NP    | Nome próprio                  | Hartsfield, March  |
//! | VB    | Verbo, forma base             | cut, sign          |
//! | VBD   | Verbo, passado                | said, opened       |
//! | IN    | Preposição                    | on, in, of         |
//! | CS    | Conjunção subordinativa       | that, as           |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Um par (palavra, tag).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self { word: word.into(), tag: tag.into() }
    }
}

/// Uma sentença anotada: sequência ordenada de pares (palavra, tag).
///
/// A ordem importa, pois o contexto bigrama depende da tag anterior.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaggedSentence {
    pub tokens: Vec<TaggedWord>,
}

impl TaggedSentence {
    /// Monta uma sentença a partir de pares estáticos.
    ///
    /// # Exemplo
    /// ```rust
    /// use postag_core::corpus::TaggedSentence;
    ///
    /// let s = TaggedSentence::from_pairs(&[("the", "DET"), ("dog", "NOUN")]);
    /// assert_eq!(s.tags(), vec!["DET", "NOUN"]);
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            tokens: pairs.iter().map(|(w, t)| TaggedWord::new(*w, *t)).collect(),
        }
    }

    pub fn tags(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.tag.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Um documento-fonte do corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Identificador do arquivo (ex: `"ca16"`).
    pub fileid: String,
    /// Gênero textual (ex: `"news"`).
    pub category: String,
    pub sentences: Vec<TaggedSentence>,
}

/// Filtro aplicado a uma consulta ao corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// O corpus inteiro.
    All,
    /// Todos os documentos de uma categoria.
    Category(String),
    /// Os documentos indicados, na ordem dada.
    FileIds(Vec<String>),
}

impl Selection {
    pub fn category(name: &str) -> Self {
        Selection::Category(name.to_string())
    }

    pub fn fileids(ids: &[&str]) -> Self {
        Selection::FileIds(ids.iter().map(|s| s.to_string()).collect())
    }
}

/// Corpus em memória, consultável por categoria ou por arquivo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaggedCorpus {
    documents: Vec<Document>,
}

impl TaggedCorpus {
    /// Cria o corpus; os documentos ficam ordenados pelo identificador de arquivo.
    pub fn new(mut documents: Vec<Document>) -> Self {
        documents.sort_by(|a, b| a.fileid.cmp(&b.fileid));
        Self { documents }
    }

    /// Amostra embutida no estilo do Brown Corpus.
    pub fn sample() -> Self {
        let documents = SAMPLE
            .iter()
            .map(|file| Document {
                fileid: file.fileid.to_string(),
                category: file.category.to_string(),
                sentences: file
                    .sentences
                    .iter()
                    .map(|s| TaggedSentence::from_pairs(s))
                    .collect(),
            })
            .collect();
        Self::new(documents)
    }

    /// Categorias conhecidas, ordenadas e sem repetição.
    pub fn categories(&self) -> Vec<&str> {
        let mut cats: Vec<&str> =
            self.documents.iter().map(|d| d.category.as_str()).collect();
        cats.sort_unstable();
        cats.dedup();
        cats
    }

    pub fn fileids(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.fileid.as_str()).collect()
    }

    /// Sentenças selecionadas, como cópia nova a cada chamada.
    pub fn tagged_sents(&self, selection: &Selection) -> Result<Vec<TaggedSentence>> {
        let docs: Vec<&Document> = match selection {
            Selection::All => self.documents.iter().collect(),
            Selection::Category(cat) => self.documents_in(cat)?,
            Selection::FileIds(ids) => ids
                .iter()
                .map(|id| {
                    self.documents
                        .iter()
                        .find(|d| &d.fileid == id)
                        .ok_or_else(|| Error::UnknownFileId(id.clone()))
                })
                .collect::<Result<_>>()?,
        };

        let sents: Vec<TaggedSentence> = docs
            .into_iter()
            .flat_map(|d| d.sentences.iter().cloned())
            .collect();
        if sents.is_empty() {
            return Err(Error::EmptySelection);
        }
        Ok(sents)
    }

    fn documents_in(&self, category: &str) -> Result<Vec<&Document>> {
        let docs: Vec<&Document> =
            self.documents.iter().filter(|d| d.category == category).collect();
        if docs.is_empty() {
            return Err(Error::UnknownCategory(category.to_string()));
        }
        Ok(docs)
    }
}

/// Arquivo da amostra embutida.
struct SampleFile {
    fileid: &'static str,
    category: &'static str,
    sentences: &'static [&'static [(&'static str, &'static str)]],
}

const SAMPLE: &[SampleFile] = &[
    // ===== NEWS =====
    SampleFile {
        fileid: "ca01",
        category: "news",
        sentences: &[
            &[("The", "AT"), ("jury", "NN"), ("said", "VBD"), ("that", "CS"), ("the", "AT"),
              ("election", "NN"), ("was", "BEDZ"), ("fair", "JJ"), (".", ".")],
            &[("The", "AT"), ("jury", "NN"), ("praised", "VBD"), ("that", "DT"), ("decision", "NN"),
              (".", ".")],
            &[("Officials", "NNS"), ("went", "VBD"), ("to", "IN"), ("the", "AT"), ("polls", "NNS"),
              ("early", "RB"), (".", ".")],
            &[("Voters", "NNS"), ("wanted", "VBD"), ("to", "TO"), ("keep", "VB"), ("the", "AT"),
              ("old", "JJ"), ("system", "NN"), (".", ".")],
            &[("The", "AT"), ("governor", "NN"), ("will", "MD"), ("speak", "VB"), ("on", "IN"),
              ("Friday", "NR"), (".", ".")],
        ],
    },
    SampleFile {
        fileid: "ca02",
        category: "news",
        sentences: &[
            &[("Fire", "NN"), ("destroyed", "VBD"), ("a", "AT"), ("warehouse", "NN"), ("in", "IN"),
              ("Atlanta", "NP"), (".", ".")],
            &[("Firemen", "NNS"), ("said", "VBD"), ("the", "AT"), ("fire", "NN"),
              ("started", "VBD"), ("in", "IN"), ("the", "AT"), ("basement", "NN"), (".", ".")],
            &[("The", "AT"), ("owner", "NN"), ("hoped", "VBD"), ("to", "TO"), ("rebuild", "VB"),
              ("soon", "RB"), (".", ".")],
            &[("Neighbors", "NNS"), ("watched", "VBD"), ("as", "CS"), ("the", "AT"), ("roof", "NN"),
              ("fell", "VBD"), (".", ".")],
            &[("Damage", "NN"), ("was", "BEDZ"), ("estimated", "VBN"), ("at", "IN"), ("two", "CD"),
              ("million", "CD"), ("dollars", "NNS"), (".", ".")],
        ],
    },
    SampleFile {
        fileid: "ca16",
        category: "news",
        sentences: &[
            &[("The", "AT"), ("city", "NN"), ("council", "NN"), ("approved", "VBD"), ("the", "AT"),
              ("new", "JJ"), ("budget", "NN"), ("on", "IN"), ("Monday", "NR"), (".", ".")],
            &[("Mayor", "NN-TL"), ("Hartsfield", "NP"), ("said", "VBD"), ("the", "AT"),
              ("plan", "NN"), ("would", "MD"), ("cut", "VB"), ("taxes", "NNS"), (".", ".")],
            &[("The", "AT"), ("vote", "NN"), ("was", "BEDZ"), ("seven", "CD"), ("to", "IN"),
              ("two", "CD"), (",", ","), ("officials", "NNS"), ("said", "VBD"), (".", ".")],
            &[("Opponents", "NNS"), ("argued", "VBD"), ("that", "CS"), ("the", "AT"),
              ("budget", "NN"), ("ignored", "VBD"), ("the", "AT"), ("schools", "NNS"), (".", ".")],
            &[("The", "AT"), ("council", "NN"), ("will", "MD"), ("meet", "VB"), ("again", "RB"),
              ("in", "IN"), ("March", "NP"), (".", ".")],
            &[("Reporters", "NNS"), ("asked", "VBD"), ("the", "AT"), ("mayor", "NN"),
              ("about", "IN"), ("the", "AT"), ("schools", "NNS"), (".", ".")],
        ],
    },
    SampleFile {
        fileid: "ca17",
        category: "news",
        sentences: &[
            &[("The", "AT"), ("state", "NN"), ("senate", "NN"), ("passed", "VBD"), ("a", "AT"),
              ("bill", "NN"), ("on", "IN"), ("highway", "NN"), ("funds", "NNS"), (".", ".")],
            &[("Governor", "NN-TL"), ("Vandiver", "NP"), ("said", "VBD"), ("he", "PPS"),
              ("would", "MD"), ("sign", "VB"), ("the", "AT"), ("bill", "NN"), (".", ".")],
            &[("The", "AT"), ("bill", "NN"), ("gives", "VBZ"), ("the", "AT"), ("counties", "NNS"),
              ("more", "AP"), ("money", "NN"), ("for", "IN"), ("roads", "NNS"), (".", ".")],
            &[("Senators", "NNS"), ("said", "VBD"), ("that", "CS"), ("the", "AT"), ("vote", "NN"),
              ("was", "BEDZ"), ("close", "JJ"), (".", ".")],
            &[("The", "AT"), ("house", "NN"), ("will", "MD"), ("vote", "VB"), ("on", "IN"),
              ("the", "AT"), ("bill", "NN"), ("next", "AP"), ("week", "NN"), (".", ".")],
            &[("Critics", "NNS"), ("said", "VBD"), ("the", "AT"), ("funds", "NNS"), ("were", "BED"),
              ("too", "QL"), ("small", "JJ"), (".", ".")],
        ],
    },
    SampleFile {
        fileid: "ca18",
        category: "news",
        sentences: &[
            &[("Police", "NNS"), ("arrested", "VBD"), ("two", "CD"), ("men", "NNS"), ("in", "IN"),
              ("the", "AT"), ("downtown", "JJ"), ("area", "NN"), (".", ".")],
            &[("The", "AT"), ("men", "NNS"), ("were", "BED"), ("charged", "VBN"), ("with", "IN"),
              ("robbery", "NN"), (",", ","), ("police", "NNS"), ("said", "VBD"), (".", ".")],
            &[("A", "AT"), ("witness", "NN"), ("told", "VBD"), ("reporters", "NNS"), ("that", "CS"),
              ("the", "AT"), ("men", "NNS"), ("ran", "VBD"), (".", ".")],
            &[("The", "AT"), ("chief", "NN"), ("said", "VBD"), ("the", "AT"), ("city", "NN"),
              ("needs", "VBZ"), ("more", "AP"), ("police", "NNS"), (".", ".")],
            &[("The", "AT"), ("court", "NN"), ("will", "MD"), ("hear", "VB"), ("the", "AT"),
              ("case", "NN"), ("in", "IN"), ("April", "NP"), (".", ".")],
            &[("The", "AT"), ("judge", "NN"), ("set", "VBD"), ("bail", "NN"), ("at", "IN"),
              ("five", "CD"), ("thousand", "CD"), ("dollars", "NNS"), (".", ".")],
            &[("The", "AT"), ("mayor", "NN"), ("denied", "VBD"), ("that", "DT"), ("report", "NN"),
              (".", ".")],
        ],
    },
    // ===== EDITORIAL =====
    SampleFile {
        fileid: "cb10",
        category: "editorial",
        sentences: &[
            &[("The", "AT"), ("nation", "NN"), ("needs", "VBZ"), ("a", "AT"), ("stronger", "JJR"),
              ("foreign", "JJ"), ("policy", "NN"), (".", ".")],
            &[("We", "PPSS"), ("believe", "VB"), ("that", "CS"), ("the", "AT"), ("president", "NN"),
              ("must", "MD"), ("act", "VB"), ("now", "RB"), (".", ".")],
            &[("Congress", "NP"), ("has", "HVZ"), ("failed", "VBN"), ("to", "TO"),
              ("address", "VB"), ("the", "AT"), ("problem", "NN"), (".", ".")],
            &[("This", "DT"), ("is", "BEZ"), ("not", "*"), ("a", "AT"), ("time", "NN"),
              ("for", "IN"), ("delay", "NN"), (".", ".")],
        ],
    },
    SampleFile {
        fileid: "cb11",
        category: "editorial",
        sentences: &[
            &[("Our", "PP$"), ("schools", "NNS"), ("deserve", "VB"), ("better", "JJR"),
              ("support", "NN"), ("from", "IN"), ("the", "AT"), ("state", "NN"), (".", ".")],
            &[("Teachers", "NNS"), ("are", "BER"), ("paid", "VBN"), ("too", "QL"), ("little", "AP"),
              ("for", "IN"), ("their", "PP$"), ("work", "NN"), (".", ".")],
            &[("The", "AT"), ("legislature", "NN"), ("should", "MD"), ("raise", "VB"),
              ("their", "PP$"), ("salaries", "NNS"), (".", ".")],
            &[("Parents", "NNS"), ("must", "MD"), ("demand", "VB"), ("action", "NN"),
              ("from", "IN"), ("their", "PP$"), ("leaders", "NNS"), (".", ".")],
        ],
    },
    SampleFile {
        fileid: "cb12",
        category: "editorial",
        sentences: &[
            &[("The", "AT"), ("new", "JJ"), ("tax", "NN"), ("plan", "NN"), ("is", "BEZ"),
              ("unfair", "JJ"), ("to", "IN"), ("workers", "NNS"), (".", ".")],
            &[("It", "PPS"), ("places", "VBZ"), ("the", "AT"), ("burden", "NN"), ("on", "IN"),
              ("those", "DTS"), ("who", "WPS"), ("earn", "VB"), ("least", "AP"), (".", ".")],
            &[("We", "PPSS"), ("urge", "VB"), ("the", "AT"), ("council", "NN"), ("to", "TO"),
              ("reject", "VB"), ("it", "PPO"), (".", ".")],
            &[("A", "AT"), ("fair", "JJ"), ("plan", "NN"), ("would", "MD"), ("share", "VB"),
              ("the", "AT"), ("cost", "NN"), (".", ".")],
        ],
    },
    // ===== FICTION =====
    SampleFile {
        fileid: "ck01",
        category: "fiction",
        sentences: &[
            &[("She", "PPS"), ("opened", "VBD"), ("the", "AT"), ("door", "NN"), ("and", "CC"),
              ("looked", "VBD"), ("outside", "RB"), (".", ".")],
            &[("The", "AT"), ("wind", "NN"), ("was", "BEDZ"), ("cold", "JJ"), ("against", "IN"),
              ("her", "PP$"), ("face", "NN"), (".", ".")],
            &[("Somewhere", "RB"), ("a", "AT"), ("dog", "NN"), ("barked", "VBD"), ("twice", "RB"),
              (".", ".")],
            &[("She", "PPS"), ("remembered", "VBD"), ("the", "AT"), ("letter", "NN"), ("in", "IN"),
              ("her", "PP$"), ("pocket", "NN"), (".", ".")],
            &[("He", "PPS"), ("had", "HVD"), ("promised", "VBN"), ("to", "TO"), ("come", "VB"),
              ("home", "NR"), ("before", "IN"), ("dark", "NN"), (".", ".")],
        ],
    },
    SampleFile {
        fileid: "ck02",
        category: "fiction",
        sentences: &[
            &[("The", "AT"), ("old", "JJ"), ("man", "NN"), ("sat", "VBD"), ("by", "IN"),
              ("the", "AT"), ("fire", "NN"), (".", ".")],
            &[("His", "PP$"), ("hands", "NNS"), ("trembled", "VBD"), ("as", "CS"), ("he", "PPS"),
              ("lit", "VBD"), ("his", "PP$"), ("pipe", "NN"), (".", ".")],
            &[("Outside", "RB"), (",", ","), ("the", "AT"), ("snow", "NN"), ("fell", "VBD"),
              ("softly", "RB"), (".", ".")],
            &[("He", "PPS"), ("thought", "VBD"), ("of", "IN"), ("his", "PP$"), ("son", "NN"),
              (",", ","), ("far", "RB"), ("away", "RB"), (".", ".")],
            &[("Nobody", "PN"), ("came", "VBD"), ("to", "TO"), ("the", "AT"), ("cabin", "NN"),
              ("that", "DT"), ("night", "NN"), (".", ".")],
        ],
    },
];
