//! Clasificador de palabras
//!
//! Asigna una categoría a cada palabra combinando, por este orden:
//! diccionario, sufijos, mayúscula inicial y contexto anterior.

use serde::Serialize;
use tracing::trace;

use crate::dictionary::{Dictionary, WordCategory};

/// Información adicional sobre la palabra
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub is_proper_noun: bool,
    pub is_abbreviation: bool,
    pub is_contraction: bool,
    pub subtype: String,
}

/// Palabra clasificada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedWord {
    pub category: WordCategory,
    /// Forma normalizada (minúscula, sin espacios)
    pub text: String,
    /// Forma tal como llegó al clasificador
    pub original: String,
    pub position: usize,
    pub metadata: Metadata,
}

/// Contexto de una palabra dentro de la oración.
///
/// Solo se conoce la categoría de la palabra anterior: la siguiente todavía
/// no se ha clasificado.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextWindow {
    pub previous_word: Option<String>,
    pub previous_category: Option<WordCategory>,
    pub next_word: Option<String>,
    pub position: usize,
}

impl ContextWindow {
    pub fn at(position: usize) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// ¿Podría ser un nombre propio? (primera letra en mayúscula)
pub fn is_possible_proper_noun(word: &str) -> bool {
    word.chars().next().map_or(false, |c| c.is_uppercase())
}

/// Clasificador sobre un diccionario ya construido
#[derive(Debug, Clone, Copy)]
pub struct WordClassifier<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> WordClassifier<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Clasifica una palabra. La primera regla que coincide gana.
    pub fn classify(&self, word: &str, context: &ContextWindow) -> ClassifiedWord {
        let original = word;
        let normalized = word.trim().to_lowercase();

        let mut metadata = Metadata {
            is_abbreviation: is_abbreviation(original.trim()),
            is_contraction: normalized.contains('\''),
            ..Metadata::default()
        };

        let category = if let Some(info) = self.dictionary.get(&normalized) {
            metadata.subtype = info.subtype.clone();
            info.category
        } else if let Some(category) = suffix_category(&normalized) {
            metadata.subtype = "suffix".to_string();
            category
        } else if is_possible_proper_noun(original.trim()) {
            metadata.is_proper_noun = true;
            metadata.subtype = "proper_noun".to_string();
            WordCategory::Subject
        } else if context.previous_category == Some(WordCategory::Article) {
            metadata.subtype = "context".to_string();
            WordCategory::Complement
        } else {
            WordCategory::Unknown
        };

        trace!(word = original, category = category.name(), "classified");

        ClassifiedWord {
            category,
            text: normalized,
            original: original.to_string(),
            position: context.position,
            metadata,
        }
    }
}

/// Heurística morfológica para palabras fuera del diccionario.
///
/// "-ing" se trata como verbo simple igual que "-ed".
fn suffix_category(normalized: &str) -> Option<WordCategory> {
    if normalized.ends_with("ly") {
        Some(WordCategory::Adverb)
    } else if normalized.ends_with("ed") || normalized.ends_with("ing") {
        Some(WordCategory::SimpleVerb)
    } else {
        None
    }
}

/// "USA", "BBC" o "u.s."
fn is_abbreviation(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    if letters >= 2 && word.chars().all(|c| c.is_ascii_uppercase()) {
        return true;
    }
    let trimmed = word.trim_end_matches('.');
    letters >= 2 && trimmed.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryLoader;

    fn dictionary() -> Dictionary {
        DictionaryLoader::load_from_str(
            r#"{
                "subject": ["i", "he"],
                "verbs": { "regular": ["played"] },
                "articles": ["the"],
                "adverbs": { "frequency": ["early"] },
                "complements": { "objects": ["football"] }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_dictionary_match() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let word = classifier.classify("played", &ContextWindow::at(1));

        assert_eq!(word.category, WordCategory::SimpleVerb);
        assert_eq!(word.text, "played");
        assert_eq!(word.original, "played");
        assert_eq!(word.position, 1);
        assert_eq!(word.metadata.subtype, "regular");
    }

    #[test]
    fn test_dictionary_match_keeps_original_case() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let word = classifier.classify("He", &ContextWindow::at(0));

        assert_eq!(word.category, WordCategory::Subject);
        assert_eq!(word.text, "he");
        assert_eq!(word.original, "He");
        // Está en el diccionario: no pasa por la heurística de mayúsculas
        assert!(!word.metadata.is_proper_noun);
    }

    #[test]
    fn test_dictionary_before_suffix() {
        // "early" acaba en -ly pero el diccionario manda
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        assert_eq!(
            classifier.classify("early", &ContextWindow::at(0)).category,
            WordCategory::Adverb
        );
        assert_eq!(
            classifier.classify("early", &ContextWindow::at(0)).metadata.subtype,
            "frequency"
        );
    }

    #[test]
    fn test_suffixes() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let ctx = ContextWindow::at(2);

        assert_eq!(classifier.classify("happily", &ctx).category, WordCategory::Adverb);
        assert_eq!(classifier.classify("jumped", &ctx).category, WordCategory::SimpleVerb);
        assert_eq!(classifier.classify("running", &ctx).category, WordCategory::SimpleVerb);
        assert_eq!(classifier.classify("jumped", &ctx).metadata.subtype, "suffix");
    }

    #[test]
    fn test_suffix_before_capitalization() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let word = classifier.classify("Jumped", &ContextWindow::at(0));
        assert_eq!(word.category, WordCategory::SimpleVerb);
        assert!(!word.metadata.is_proper_noun);
    }

    #[test]
    fn test_proper_noun() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let word = classifier.classify("Carlos", &ContextWindow::at(0));

        assert_eq!(word.category, WordCategory::Subject);
        assert_eq!(word.text, "carlos");
        assert_eq!(word.original, "Carlos");
        assert!(word.metadata.is_proper_noun);
    }

    #[test]
    fn test_context_after_article() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let ctx = ContextWindow {
            previous_word: Some("the".to_string()),
            previous_category: Some(WordCategory::Article),
            next_word: None,
            position: 1,
        };
        let word = classifier.classify("house", &ctx);
        assert_eq!(word.category, WordCategory::Complement);
        assert_eq!(word.metadata.subtype, "context");
    }

    #[test]
    fn test_proper_noun_before_context() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let ctx = ContextWindow {
            previous_category: Some(WordCategory::Article),
            position: 1,
            ..ContextWindow::default()
        };
        assert_eq!(classifier.classify("Beatles", &ctx).category, WordCategory::Subject);
    }

    #[test]
    fn test_unknown() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let word = classifier.classify("foobar", &ContextWindow::at(3));
        assert_eq!(word.category, WordCategory::Unknown);
        assert_eq!(word.metadata, Metadata::default());
    }

    #[test]
    fn test_trims_whitespace() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let word = classifier.classify("  football ", &ContextWindow::at(0));
        assert_eq!(word.category, WordCategory::Complement);
        assert_eq!(word.text, "football");
    }

    #[test]
    fn test_metadata_flags() {
        let dict = dictionary();
        let classifier = WordClassifier::new(&dict);
        let ctx = ContextWindow::at(0);

        assert!(classifier.classify("didn't", &ctx).metadata.is_contraction);
        assert!(classifier.classify("USA", &ctx).metadata.is_abbreviation);
        assert!(classifier.classify("u.s.", &ctx).metadata.is_abbreviation);
        assert!(!classifier.classify("I", &ctx).metadata.is_abbreviation);
        assert!(!classifier.classify("Carlos", &ctx).metadata.is_abbreviation);
    }

    #[test]
    fn test_possible_proper_noun() {
        assert!(is_possible_proper_noun("John"));
        assert!(!is_possible_proper_noun("cat"));
        assert!(!is_possible_proper_noun(""));
        assert!(!is_possible_proper_noun("123test"));
        assert!(!is_possible_proper_noun("iPhone"));
    }
}
