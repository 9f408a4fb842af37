//! Cargador de diccionarios desde documentos JSON
//!
//! Formato esperado (todas las claves son opcionales; una clave ausente
//! equivale a una lista vacía):
//!
//! ```json
//! {
//!   "subject": ["i", "you"],
//!   "verbs": {
//!     "regular": ["played"],
//!     "irregular": { "common": ["went"], "auxiliary": ["was"] },
//!     "state": ["seemed"]
//!   },
//!   "complements": { "objects": [], "places": [], "food": [] },
//!   "prepositions": [], "articles": [],
//!   "adjectives": { "appearance": [], "personality": [], "state": [] },
//!   "adverbs": { "time": [], "manner": [], "frequency": [] },
//!   "time_expressions": [], "past_modals": [], "negatives": [],
//!   "conjunctions": [], "cause_effect": [], "short_answers": []
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::lexicon::{Dictionary, WordCategory, WordInfo};
use crate::error::DictionaryError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WordsData {
    pub subject: Vec<String>,
    pub verbs: Verbs,
    pub complements: Complements,
    pub prepositions: Vec<String>,
    pub articles: Vec<String>,
    pub adjectives: Adjectives,
    pub adverbs: Adverbs,
    pub time_expressions: Vec<String>,
    pub past_modals: Vec<String>,
    pub negatives: Vec<String>,
    pub conjunctions: Vec<String>,
    pub cause_effect: Vec<String>,
    pub short_answers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Verbs {
    pub regular: Vec<String>,
    pub irregular: IrregularVerbs,
    pub state: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IrregularVerbs {
    pub common: Vec<String>,
    pub auxiliary: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Complements {
    pub objects: Vec<String>,
    pub places: Vec<String>,
    pub food: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Adjectives {
    pub appearance: Vec<String>,
    pub personality: Vec<String>,
    pub state: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Adverbs {
    pub time: Vec<String>,
    pub manner: Vec<String>,
    pub frequency: Vec<String>,
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Carga un diccionario desde un archivo JSON
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DictionaryError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::load_from_str(&content)
    }

    /// Carga un diccionario desde el texto de un documento JSON
    pub fn load_from_str(json: &str) -> Result<Dictionary, DictionaryError> {
        let data: WordsData =
            serde_json::from_str(json).map_err(|e| DictionaryError::Parse(e.to_string()))?;
        Ok(Self::build(&data))
    }

    /// Construye el diccionario a partir de los datos ya decodificados.
    ///
    /// El orden de inserción es fijo: si una palabra aparece en varias listas,
    /// gana la última. Los adjetivos de estado se insertan primero como
    /// `StateVerb` y después como `Adjective`, así que acaban como adjetivos.
    pub fn build(data: &WordsData) -> Dictionary {
        let mut dictionary = Dictionary::new();
        let mut skipped = 0;

        let groups: [(&[String], WordCategory, &str); 23] = [
            (data.subject.as_slice(), WordCategory::Subject, "subject"),
            (data.verbs.regular.as_slice(), WordCategory::SimpleVerb, "regular"),
            (data.verbs.irregular.common.as_slice(), WordCategory::SimpleVerb, "irregular"),
            (data.verbs.irregular.auxiliary.as_slice(), WordCategory::Auxiliary, "auxiliary"),
            (data.adjectives.state.as_slice(), WordCategory::StateVerb, "state"),
            (data.verbs.state.as_slice(), WordCategory::StateVerb, "state"),
            (data.past_modals.as_slice(), WordCategory::PastModal, "modal"),
            (data.time_expressions.as_slice(), WordCategory::TimeExpression, "time"),
            (data.prepositions.as_slice(), WordCategory::Preposition, "preposition"),
            (data.articles.as_slice(), WordCategory::Article, "article"),
            (data.adjectives.appearance.as_slice(), WordCategory::Adjective, "appearance"),
            (data.adjectives.personality.as_slice(), WordCategory::Adjective, "personality"),
            (data.adjectives.state.as_slice(), WordCategory::Adjective, "state"),
            (data.adverbs.time.as_slice(), WordCategory::Adverb, "time"),
            (data.adverbs.manner.as_slice(), WordCategory::Adverb, "manner"),
            (data.adverbs.frequency.as_slice(), WordCategory::Adverb, "frequency"),
            (data.complements.objects.as_slice(), WordCategory::Complement, "objects"),
            (data.complements.places.as_slice(), WordCategory::Complement, "places"),
            (data.complements.food.as_slice(), WordCategory::Complement, "food"),
            (data.negatives.as_slice(), WordCategory::Negative, "negative"),
            (data.conjunctions.as_slice(), WordCategory::Conjunction, "conjunction"),
            (data.cause_effect.as_slice(), WordCategory::CauseEffect, "cause_effect"),
            (data.short_answers.as_slice(), WordCategory::ShortAnswer, "short_answer"),
        ];

        for (words, category, subtype) in groups {
            skipped += Self::add_words(&mut dictionary, words, category, subtype);
        }

        debug!(
            entries = dictionary.len(),
            skipped_multi_word = skipped,
            "dictionary built"
        );
        for (category, count) in dictionary.count_by_category() {
            debug!(category = category.name(), count, "entries per category");
        }

        dictionary
    }

    /// Añade una lista de palabras. Devuelve cuántas entradas se descartaron.
    ///
    /// Las entradas de varias palabras ("the dog") nunca pueden coincidir con
    /// un token individual, así que se descartan.
    fn add_words(
        dictionary: &mut Dictionary,
        words: &[String],
        category: WordCategory,
        subtype: &str,
    ) -> usize {
        let mut skipped = 0;

        for word in words {
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            if word.split_whitespace().count() > 1 {
                skipped += 1;
                continue;
            }
            dictionary.insert(word, WordInfo::new(category, subtype));
        }

        skipped
    }
}
