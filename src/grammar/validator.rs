//! Validador de la estructura en pasado simple afirmativo
//!
//! Recorre los tokens una sola vez anotando dónde aparece cada elemento de
//! la oración y después aplica las comprobaciones en orden; la primera que
//! falla decide el resultado.

use serde::Serialize;
use tracing::debug;

use crate::dictionary::{Dictionary, WordCategory};
use crate::error::LexicalError;

use super::classifier::WordClassifier;
use super::rules::{
    is_disallowed_auxiliary, is_negative_marker, is_was_or_were, Pronoun, Violation,
    BETWEEN_SUBJECT_AND_VERB,
};
use super::tokenizer::{Token, Tokenizer};

const VALID_EXPLANATION: &str = "The sentence has a valid structure in affirmative simple past.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Valid,
    Invalid,
}

/// Resultado de validar una oración
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub status: Status,
    /// Etiqueta corta de la categoría del resultado
    pub message: String,
    pub explanation: String,
    #[serde(skip)]
    pub violation: Option<Violation>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            status: Status::Valid,
            message: "Valid".to_string(),
            explanation: VALID_EXPLANATION.to_string(),
            violation: None,
        }
    }

    pub fn invalid(violation: Violation) -> Self {
        Self {
            status: Status::Invalid,
            message: violation.label().to_string(),
            explanation: violation.explanation(),
            violation: Some(violation),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }
}

/// Seguimiento de una categoría dentro de una oración
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTracker {
    pub found: bool,
    pub position: usize,
    pub count: usize,
}

impl CategoryTracker {
    /// Fija la posición solo en la primera aparición
    fn record_first(&mut self, position: usize) {
        if !self.found {
            self.found = true;
            self.position = position;
        }
        self.count += 1;
    }

    /// Sobrescribe la posición en cada aparición
    fn record_latest(&mut self, position: usize) {
        self.found = true;
        self.position = position;
        self.count += 1;
    }

    fn found_at(&self) -> Option<usize> {
        self.found.then_some(self.position)
    }
}

/// Elementos de la oración. Se crea uno nuevo en cada validación.
#[derive(Debug, Default)]
struct SentenceElements {
    subject: CategoryTracker,
    simple_verb: CategoryTracker,
    state_verb: CategoryTracker,
    past_modal: CategoryTracker,
    complement: CategoryTracker,
    negative: CategoryTracker,
}

impl SentenceElements {
    fn record(&mut self, category: WordCategory, position: usize) {
        let tracker = match category {
            WordCategory::Subject => &mut self.subject,
            WordCategory::SimpleVerb => &mut self.simple_verb,
            WordCategory::StateVerb => &mut self.state_verb,
            WordCategory::PastModal => &mut self.past_modal,
            WordCategory::Negative => &mut self.negative,
            // El complemento se queda con la última aparición
            WordCategory::Complement => {
                self.complement.record_latest(position);
                return;
            }
            _ => return,
        };
        tracker.record_first(position);
    }

    /// Posición del primer verbo en pasado de cualquier tipo
    fn first_past_verb(&self) -> Option<usize> {
        [self.simple_verb, self.state_verb, self.past_modal]
            .iter()
            .filter_map(CategoryTracker::found_at)
            .min()
    }
}

/// Validador de oraciones sobre un diccionario ya construido
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    tokenizer: Tokenizer<'a>,
}

impl<'a> Validator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            tokenizer: Tokenizer::new(WordClassifier::new(dictionary)),
        }
    }

    /// Desglose léxico de la oración, sin validar
    pub fn analyze(&self, sentence: &str) -> Result<Vec<Token>, LexicalError> {
        self.tokenizer.tokenize(sentence)
    }

    /// Tokeniza y valida. Un fallo léxico se convierte en un resultado inválido.
    pub fn validate_sentence(&self, sentence: &str) -> ValidationResult {
        let result = match self.tokenizer.tokenize(sentence) {
            Ok(tokens) => validate(&tokens),
            Err(e) => ValidationResult::invalid(Violation::Lexical(e.to_string())),
        };
        debug!(sentence, status = ?result.status, message = %result.message, "validated");
        result
    }

    /// Igual que `validate_sentence` para una oración ya dividida en palabras
    pub fn validate_words<S: AsRef<str>>(&self, words: &[S]) -> ValidationResult {
        match self.tokenizer.tokenize_words(words) {
            Ok(tokens) => validate(&tokens),
            Err(e) => ValidationResult::invalid(Violation::Lexical(e.to_string())),
        }
    }
}

/// Valida una secuencia de tokens
pub fn validate(tokens: &[Token]) -> ValidationResult {
    match check(tokens) {
        Ok(()) => ValidationResult::valid(),
        Err(violation) => ValidationResult::invalid(violation),
    }
}

fn check(tokens: &[Token]) -> Result<(), Violation> {
    if tokens.is_empty() {
        return Err(Violation::NoTokens);
    }

    let mut elements = SentenceElements::default();
    let mut first_was_were: Option<(usize, &str)> = None;
    let mut first_subject: Option<(usize, String)> = None;

    for (i, token) in tokens.iter().enumerate() {
        let text = token.text.as_str();

        if is_negative_marker(text) {
            return Err(Violation::NegativeConstruction);
        }
        if is_disallowed_auxiliary(text) {
            return Err(Violation::DisallowedAuxiliary);
        }

        if is_was_or_were(text) {
            if first_was_were.is_none() {
                first_was_were = Some((i, text));
            }
            elements.simple_verb.record_first(i);
        } else {
            elements.record(token.category, i);
        }

        if token.category == WordCategory::Subject && first_subject.is_none() {
            first_subject = Some((i, text.to_lowercase()));
        }
    }

    if let Some((verb_position, verb)) = first_was_were {
        check_was_were(tokens, first_subject.as_ref(), verb_position, verb)?;
    }

    if !elements.subject.found {
        return Err(Violation::MissingSubject);
    }

    let verb_position = elements.first_past_verb().ok_or(Violation::MissingVerb)?;

    if elements.subject.position > verb_position {
        return Err(Violation::SubjectMissingBeforeVerb {
            verb: tokens[verb_position].text.clone(),
        });
    }

    // Posición del último complemento: un complemento que solo aparece antes
    // del sujeto rompe el orden sujeto-verbo-complemento
    if elements.complement.found && elements.complement.position < elements.subject.position {
        return Err(Violation::VerbMustFollowSubject);
    }

    // Sin "was"/"were" el complemento va detrás del verbo
    if first_was_were.is_none()
        && elements.complement.found
        && elements.complement.position < verb_position
    {
        return Err(Violation::ComplementBeforeVerb);
    }

    // Solo alcanzable con negativos de diccionario ("nothing", "nobody"):
    // las marcas "not"/"never"/"no" ya se rechazaron en el recorrido
    if elements.negative.found && elements.simple_verb.found {
        return Err(Violation::MixedConstruction);
    }

    Ok(())
}

/// Concordancia y posición de "was"/"were" respecto al primer sujeto
fn check_was_were(
    tokens: &[Token],
    first_subject: Option<&(usize, String)>,
    verb_position: usize,
    verb: &str,
) -> Result<(), Violation> {
    let (subject_position, subject_text) = first_subject.ok_or(Violation::NoSubjectForVerb)?;

    let pronoun = Pronoun::from_word(subject_text).ok_or(Violation::UnrecognizedSubject)?;
    if pronoun.past_be() != verb {
        return Err(Violation::VerbAgreement { pronoun });
    }

    if *subject_position >= verb_position {
        return Err(Violation::SubjectMissingBeforeVerb {
            verb: verb.to_string(),
        });
    }

    let between_allowed = tokens[subject_position + 1..verb_position]
        .iter()
        .all(|t| BETWEEN_SUBJECT_AND_VERB.contains(&t.category));
    if !between_allowed {
        return Err(Violation::VerbMustFollowSubject);
    }

    Ok(())
}
