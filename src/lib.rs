//! Pastcheck - Validador de oraciones en inglés
//!
//! Decide si una oración sigue el patrón "pasado simple, afirmativo, sin
//! auxiliares ni negación" y explica por qué cuando no lo sigue.

pub mod checker;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod grammar;

pub use checker::{Checker, CheckerConfig, Engine, Report};
pub use config::Config;
pub use dictionary::{Dictionary, DictionaryProvider, DictionarySource, WordCategory};
pub use error::{CheckError, DictionaryError, LexicalError, PastcheckError};
pub use grammar::{Status, Token, ValidationResult, Validator};
