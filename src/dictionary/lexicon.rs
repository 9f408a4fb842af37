//! Tabla de búsqueda palabra → categoría

use std::collections::HashMap;

use serde::Serialize;

/// Categoría gramatical de una palabra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    #[default]
    Unknown,
    Subject,
    SimpleVerb,
    StateVerb,
    PastModal,
    Auxiliary,
    Complement,
    TimeExpression,
    Preposition,
    Article,
    Adjective,
    Adverb,
    Conjunction,
    Pronoun,
    Punctuation,
    Negative,
    CauseEffect,
    ShortAnswer,
}

impl WordCategory {
    pub fn name(&self) -> &'static str {
        match self {
            WordCategory::Unknown => "unknown",
            WordCategory::Subject => "subject",
            WordCategory::SimpleVerb => "simple_verb",
            WordCategory::StateVerb => "state_verb",
            WordCategory::PastModal => "past_modal",
            WordCategory::Auxiliary => "auxiliary",
            WordCategory::Complement => "complement",
            WordCategory::TimeExpression => "time_expression",
            WordCategory::Preposition => "preposition",
            WordCategory::Article => "article",
            WordCategory::Adjective => "adjective",
            WordCategory::Adverb => "adverb",
            WordCategory::Conjunction => "conjunction",
            WordCategory::Pronoun => "pronoun",
            WordCategory::Punctuation => "punctuation",
            WordCategory::Negative => "negative",
            WordCategory::CauseEffect => "cause_effect",
            WordCategory::ShortAnswer => "short_answer",
        }
    }

    /// ¿Es un verbo que cuenta como verbo en pasado para la validación?
    pub fn is_past_verb(&self) -> bool {
        matches!(
            self,
            WordCategory::SimpleVerb | WordCategory::StateVerb | WordCategory::PastModal
        )
    }
}

/// Información asociada a una entrada del diccionario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    pub category: WordCategory,
    /// Subcategoría de origen en los datos ("regular", "places", "manner"...)
    pub subtype: String,
}

impl WordInfo {
    pub fn new(category: WordCategory, subtype: &str) -> Self {
        Self {
            category,
            subtype: subtype.to_string(),
        }
    }
}

/// Diccionario inmutable una vez construido.
///
/// Las claves se guardan siempre en minúscula.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    words: HashMap<String, WordInfo>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Inserta una palabra. Si ya existe, la nueva entrada la sustituye.
    pub fn insert(&mut self, word: &str, info: WordInfo) {
        self.words.insert(word.trim().to_lowercase(), info);
    }

    /// Búsqueda exacta de una forma ya normalizada
    pub fn get(&self, normalized: &str) -> Option<&WordInfo> {
        self.words.get(normalized)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains_key(normalized)
    }

    pub fn category_of(&self, normalized: &str) -> Option<WordCategory> {
        self.get(normalized).map(|info| info.category)
    }

    /// Número de entradas por categoría
    pub fn count_by_category(&self) -> HashMap<WordCategory, usize> {
        let mut counts = HashMap::new();
        for info in self.words.values() {
            *counts.entry(info.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
