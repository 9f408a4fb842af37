//! Reglas de la estructura en pasado simple afirmativo

use crate::dictionary::WordCategory;

/// Palabras que marcan una negación
pub const NEGATIVE_MARKERS: &[&str] = &["not", "never", "no"];

/// Auxiliares que no pueden aparecer en una afirmativa en pasado simple
pub const DISALLOWED_AUXILIARIES: &[&str] =
    &["has", "have", "had", "do", "does", "did", "am", "is", "are"];

/// Categorías que pueden aparecer entre el sujeto y "was"/"were"
pub const BETWEEN_SUBJECT_AND_VERB: &[WordCategory] = &[
    WordCategory::Preposition,
    WordCategory::Complement,
    WordCategory::Article,
    WordCategory::Adjective,
];

pub fn is_negative_marker(word: &str) -> bool {
    NEGATIVE_MARKERS.contains(&word)
}

pub fn is_disallowed_auxiliary(word: &str) -> bool {
    DISALLOWED_AUXILIARIES.contains(&word)
}

pub fn is_was_or_were(word: &str) -> bool {
    word == "was" || word == "were"
}

/// Pronombre sujeto reconocido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pronoun {
    I,
    He,
    She,
    It,
    You,
    We,
    They,
}

impl Pronoun {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "i" => Some(Pronoun::I),
            "he" => Some(Pronoun::He),
            "she" => Some(Pronoun::She),
            "it" => Some(Pronoun::It),
            "you" => Some(Pronoun::You),
            "we" => Some(Pronoun::We),
            "they" => Some(Pronoun::They),
            _ => None,
        }
    }

    /// Forma canónica para los mensajes ("I" en mayúscula)
    pub fn as_str(&self) -> &'static str {
        match self {
            Pronoun::I => "I",
            Pronoun::He => "he",
            Pronoun::She => "she",
            Pronoun::It => "it",
            Pronoun::You => "you",
            Pronoun::We => "we",
            Pronoun::They => "they",
        }
    }

    /// Forma de "to be" en pasado que concuerda con el pronombre
    pub fn past_be(&self) -> &'static str {
        match self {
            Pronoun::I | Pronoun::He | Pronoun::She | Pronoun::It => "was",
            Pronoun::You | Pronoun::We | Pronoun::They => "were",
        }
    }
}

/// Motivo por el que una oración no es válida
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NoTokens,
    NegativeConstruction,
    DisallowedAuxiliary,
    NoSubjectForVerb,
    UnrecognizedSubject,
    VerbAgreement { pronoun: Pronoun },
    SubjectMissingBeforeVerb { verb: String },
    VerbMustFollowSubject,
    ComplementBeforeVerb,
    MissingSubject,
    MissingVerb,
    MixedConstruction,
    IncompleteStructure { state: String },
    Lexical(String),
    Length(String),
}

impl Violation {
    /// Etiqueta corta, usada también para agrupar errores frecuentes
    pub fn label(&self) -> &'static str {
        match self {
            Violation::NoTokens => "No tokens",
            Violation::NegativeConstruction => "Negative construction",
            Violation::DisallowedAuxiliary => "Auxiliary verb",
            Violation::NoSubjectForVerb => "Subject not found",
            Violation::UnrecognizedSubject => "Unrecognized subject",
            Violation::VerbAgreement { .. } => "Verb agreement",
            Violation::SubjectMissingBeforeVerb { .. } => "Word order",
            Violation::VerbMustFollowSubject => "Verb placement",
            Violation::ComplementBeforeVerb => "Complement placement",
            Violation::MissingSubject => "Missing subject",
            Violation::MissingVerb => "Missing verb",
            Violation::MixedConstruction => "Mixed construction",
            Violation::IncompleteStructure { .. } => "Incomplete structure",
            Violation::Lexical(_) => "Lexical error",
            Violation::Length(_) => "Invalid length",
        }
    }

    pub fn explanation(&self) -> String {
        match self {
            Violation::NoTokens => "No tokens found.".to_string(),
            Violation::NegativeConstruction => {
                "Negative constructions are not allowed in affirmative sentences.".to_string()
            }
            Violation::DisallowedAuxiliary => {
                "Auxiliary verbs are not allowed in affirmative simple past sentences.".to_string()
            }
            Violation::NoSubjectForVerb => "No subject found for verb validation.".to_string(),
            Violation::UnrecognizedSubject => "Unrecognized subject pronoun.".to_string(),
            Violation::VerbAgreement { pronoun } => format!(
                "Incorrect verb form for '{}'. Use '{}'.",
                pronoun.as_str(),
                pronoun.past_be()
            ),
            Violation::SubjectMissingBeforeVerb { verb } => {
                format!("A subject is missing before the verb '{}'.", verb)
            }
            Violation::VerbMustFollowSubject => {
                "The verb must immediately follow the subject.".to_string()
            }
            Violation::ComplementBeforeVerb => {
                "The complement must come after the verb.".to_string()
            }
            Violation::MissingSubject => "The subject is missing in the sentence.".to_string(),
            Violation::MissingVerb => "A past tense verb is missing in the sentence.".to_string(),
            Violation::MixedConstruction => {
                "The sentence cannot contain both modal verbs and negatives in the same structure."
                    .to_string()
            }
            Violation::IncompleteStructure { state } => format!(
                "The sentence does not reach a complete structure (stopped at {}).",
                state
            ),
            Violation::Lexical(error) => format!("Error in lexical analysis: {}", error),
            Violation::Length(reason) => reason.clone(),
        }
    }
}
