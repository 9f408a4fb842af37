//! Motor de gramática
//!
//! Clasificación de palabras, tokenización y validación de la estructura en
//! pasado simple afirmativo.

pub mod automaton;
pub mod classifier;
pub mod rules;
pub mod tokenizer;
pub mod validator;

pub use automaton::{validate_with_automaton, Automaton, State};
pub use classifier::{ClassifiedWord, ContextWindow, Metadata, WordClassifier};
pub use rules::{Pronoun, Violation};
pub use tokenizer::{Token, Tokenizer};
pub use validator::{validate, CategoryTracker, Status, ValidationResult, Validator};
