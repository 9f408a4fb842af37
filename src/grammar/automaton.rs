//! Validador alternativo basado en un autómata finito
//!
//! Consume una palabra clasificada cada vez y acepta las oraciones que
//! terminan en un complemento o en el estado final. Reconoce una gramática
//! más amplia que `validator` (incluye el progresivo "was playing") y no
//! produce los mismos resultados: no se combina con él.

use crate::dictionary::{Dictionary, WordCategory};

use super::classifier::WordClassifier;
use super::rules::Violation;
use super::tokenizer::{Token, Tokenizer};
use super::validator::ValidationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Initial,
    Subject,
    Auxiliary,
    SimpleVerb,
    Progressive,
    Article,
    Adjective,
    Preposition,
    Complement,
    Final,
    Error,
}

impl State {
    pub fn is_accepting(&self) -> bool {
        matches!(self, State::Complement | State::Final)
    }
}

#[derive(Debug, Clone)]
pub struct Automaton {
    state: State,
    /// Se ha cruzado una preposición desde el verbo
    after_preposition: bool,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    pub fn new() -> Self {
        Self {
            state: State::Initial,
            after_preposition: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_accepting(&self) -> bool {
        self.state.is_accepting()
    }

    /// Avanza con el siguiente token. El estado de error es definitivo.
    pub fn transition(&mut self, token: &Token) -> State {
        use WordCategory as C;

        let category = token.category;
        let progressive = category == C::SimpleVerb && token.text.ends_with("ing");

        let next = match (self.state, category) {
            (State::Error, _) => State::Error,

            (State::Initial, C::Subject) => State::Subject,
            (State::Initial, C::TimeExpression) => State::Initial,

            (State::Subject, C::Auxiliary) => State::Auxiliary,
            (State::Subject, c) if c.is_past_verb() => State::SimpleVerb,

            (State::Auxiliary, C::SimpleVerb) if progressive => State::Progressive,
            (State::Auxiliary, C::Adjective) => State::Adjective,

            (State::SimpleVerb | State::Progressive, C::Article) => State::Article,
            (State::SimpleVerb | State::Progressive, C::Adjective) => State::Adjective,
            (State::SimpleVerb | State::Progressive, C::Complement) => State::Complement,
            (s @ (State::SimpleVerb | State::Progressive), C::TimeExpression | C::Adverb) => s,

            (State::Article, C::Adjective) => State::Adjective,
            (State::Article | State::Adjective, C::Complement) => {
                if self.after_preposition {
                    State::Final
                } else {
                    State::Complement
                }
            }

            (State::Preposition, C::Article) => State::Article,
            (State::Preposition, C::Complement) => State::Final,

            (
                State::SimpleVerb
                | State::Progressive
                | State::Adjective
                | State::Complement
                | State::Final,
                C::Preposition,
            ) => {
                self.after_preposition = true;
                State::Preposition
            }
            (
                s @ (State::Complement | State::Final | State::Adjective),
                C::TimeExpression | C::Adverb,
            ) => s,

            _ => State::Error,
        };

        self.state = next;
        next
    }

    /// Recorre todos los tokens desde el estado inicial
    pub fn run(tokens: &[Token]) -> Self {
        let mut automaton = Self::new();
        for token in tokens {
            automaton.transition(token);
        }
        automaton
    }
}

/// Valida una oración con el autómata
pub fn validate_with_automaton(dictionary: &Dictionary, sentence: &str) -> ValidationResult {
    let tokenizer = Tokenizer::new(WordClassifier::new(dictionary));
    let tokens = match tokenizer.tokenize(sentence) {
        Ok(tokens) => tokens,
        Err(e) => return ValidationResult::invalid(Violation::Lexical(e.to_string())),
    };

    let automaton = Automaton::run(&tokens);
    if automaton.is_accepting() {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(Violation::IncompleteStructure {
            state: format!("{:?}", automaton.state()),
        })
    }
}
