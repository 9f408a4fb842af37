//! Módulo de diccionario
//!
//! Proporciona la tabla de categorías y su construcción a partir de datos JSON.

pub mod lexicon;
pub mod loader;
pub mod provider;

pub use lexicon::{Dictionary, WordCategory, WordInfo};
pub use loader::{DictionaryLoader, WordsData};
pub use provider::{DictionaryProvider, DictionarySource};
