//! Tipos de error del validador

use thiserror::Error;

/// Error al construir el diccionario.
///
/// Guarda solo mensajes para poder clonarse: el proveedor cachea el resultado
/// de la única construcción y lo devuelve a cada llamador.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("could not read dictionary '{path}': {message}")]
    Io { path: String, message: String },

    #[error("could not parse dictionary: {0}")]
    Parse(String),
}

/// Error del análisis léxico
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("the sentence is empty")]
    EmptyInput,
}

/// Rechazo de un lote completo de oraciones
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("please enter at most {max} sentences (found {found})")]
    TooManySentences { max: usize, found: usize },

    #[error("no sentences found in the input")]
    NoSentences,
}

/// Error general usado por el binario
#[derive(Debug, Error)]
pub enum PastcheckError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("could not read '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
