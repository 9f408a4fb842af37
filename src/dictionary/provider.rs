//! Proveedor del diccionario: se construye una sola vez y después solo se lee

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::{debug, info};

use super::lexicon::Dictionary;
use super::loader::DictionaryLoader;
use crate::error::DictionaryError;

/// Diccionario por defecto incluido en el binario
pub const BUNDLED_WORDS: &str = include_str!("../../data/en/words.json");

/// Origen de los datos del diccionario
#[derive(Debug, Clone)]
pub enum DictionarySource {
    /// Documento JSON incluido en el binario
    Bundled,
    /// Archivo JSON en disco
    File(PathBuf),
    /// Documento JSON en memoria
    Json(String),
    /// Documento incluido, contando cada construcción
    #[cfg(test)]
    Counted(std::sync::Arc<std::sync::atomic::AtomicUsize>),
}

impl DictionarySource {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        match self {
            DictionarySource::Bundled => DictionaryLoader::load_from_str(BUNDLED_WORDS),
            DictionarySource::File(path) => DictionaryLoader::load_from_file(path),
            DictionarySource::Json(json) => DictionaryLoader::load_from_str(json),
            #[cfg(test)]
            DictionarySource::Counted(loads) => {
                loads.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                std::thread::sleep(std::time::Duration::from_millis(20));
                DictionaryLoader::load_from_str(BUNDLED_WORDS)
            }
        }
    }
}

/// Construye el diccionario en el primer acceso.
///
/// `OnceLock` garantiza que la carga se ejecuta exactamente una vez aunque
/// varios hilos lleguen a la vez: uno la ejecuta y el resto espera. El
/// resultado (también un fallo) queda fijado para el resto de la vida del
/// proveedor y las lecturas posteriores no toman ningún cerrojo.
#[derive(Debug)]
pub struct DictionaryProvider {
    source: DictionarySource,
    cell: OnceLock<Result<Dictionary, DictionaryError>>,
}

impl DictionaryProvider {
    pub fn new(source: DictionarySource) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    pub fn bundled() -> Self {
        Self::new(DictionarySource::Bundled)
    }

    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(DictionarySource::File(path.into()))
    }

    /// Devuelve el diccionario, construyéndolo si nadie lo ha hecho todavía
    pub fn ensure_loaded(&self) -> Result<&Dictionary, DictionaryError> {
        self.cell
            .get_or_init(|| {
                debug!(source = ?self.source, "loading dictionary");
                let result = self.source.load();
                if let Ok(ref dictionary) = result {
                    info!(entries = dictionary.len(), "dictionary loaded");
                }
                result
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// ¿Se ha intentado ya la construcción?
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
