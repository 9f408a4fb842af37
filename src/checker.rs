//! Revisión de textos con varias oraciones
//!
//! Divide la entrada en oraciones, las limpia, comprueba su longitud y valida
//! cada una, agregando el resultado en estadísticas.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dictionary::Dictionary;
use crate::error::CheckError;
use crate::grammar::{validate_with_automaton, ValidationResult, Validator, Violation};

/// Algoritmo de validación a usar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    /// Seguimiento de elementos y reglas en orden
    #[default]
    Elements,
    /// Autómata finito alternativo
    Automaton,
}

/// Límites aplicados antes de validar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub min_words: usize,
    pub max_words: usize,
    pub max_sentences: usize,
    /// Eliminar todo lo que no sea letra, espacio, coma o punto
    pub clean_input: bool,
    pub engine: Engine,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            min_words: 1,
            max_words: 50,
            max_sentences: 5,
            clean_input: true,
            engine: Engine::Elements,
        }
    }
}

/// Resultado de una oración del texto
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceResult {
    pub sentence: String,
    pub valid: bool,
    #[serde(flatten)]
    pub result: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub valid: usize,
    pub success_percentage: f64,
    /// Número de oraciones inválidas por etiqueta de error
    pub common_errors: BTreeMap<String, usize>,
}

impl Statistics {
    fn from_results(results: &[SentenceResult]) -> Self {
        let mut common_errors = BTreeMap::new();
        let mut valid = 0;

        for r in results {
            if r.valid {
                valid += 1;
            } else {
                *common_errors.entry(r.result.message.clone()).or_insert(0) += 1;
            }
        }

        let success_percentage = if results.is_empty() {
            0.0
        } else {
            valid as f64 / results.len() as f64 * 100.0
        };

        Self {
            total: results.len(),
            valid,
            success_percentage,
            common_errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub results: Vec<SentenceResult>,
    pub stats: Statistics,
}

/// Revisor de textos sobre un diccionario ya construido
pub struct Checker<'a> {
    dictionary: &'a Dictionary,
    validator: Validator<'a>,
    config: CheckerConfig,
}

impl<'a> Checker<'a> {
    pub fn new(dictionary: &'a Dictionary, config: CheckerConfig) -> Self {
        Self {
            dictionary,
            validator: Validator::new(dictionary),
            config,
        }
    }

    pub fn validator(&self) -> &Validator<'a> {
        &self.validator
    }

    /// Revisa un texto libre con una o varias oraciones separadas por punto
    pub fn check(&self, text: &str) -> Result<Report, CheckError> {
        let sentences = self.split_sentences(text);

        if sentences.is_empty() {
            return Err(CheckError::NoSentences);
        }
        if sentences.len() > self.config.max_sentences {
            return Err(CheckError::TooManySentences {
                max: self.config.max_sentences,
                found: sentences.len(),
            });
        }

        Ok(self.check_sentences(&sentences))
    }

    /// Revisa oraciones ya separadas (sin dividir ni limpiar)
    pub fn check_sentences<S: AsRef<str>>(&self, sentences: &[S]) -> Report {
        let results: Vec<SentenceResult> = sentences
            .iter()
            .map(|s| self.check_sentence(s.as_ref()))
            .collect();
        let stats = Statistics::from_results(&results);

        debug!(
            total = stats.total,
            valid = stats.valid,
            success = stats.success_percentage,
            "text checked"
        );

        Report { results, stats }
    }

    /// Comprueba la longitud y valida una oración
    pub fn check_sentence(&self, sentence: &str) -> SentenceResult {
        let result = match self.length_violation(sentence) {
            Some(violation) => {
                warn!(sentence, reason = %violation.explanation(), "sentence rejected by length");
                ValidationResult::invalid(violation)
            }
            None => match self.config.engine {
                Engine::Elements => self.validator.validate_sentence(sentence),
                Engine::Automaton => validate_with_automaton(self.dictionary, sentence),
            },
        };

        SentenceResult {
            sentence: sentence.to_string(),
            valid: result.is_valid(),
            result,
        }
    }

    /// Divide por puntos y descarta los fragmentos vacíos
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        text.split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if self.config.clean_input {
                    clean_sentence(s)
                } else {
                    s.to_string()
                }
            })
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn length_violation(&self, sentence: &str) -> Option<Violation> {
        let words = sentence.split_whitespace().count();
        if words < self.config.min_words {
            Some(Violation::Length(format!(
                "The sentence must have at least {} words.",
                self.config.min_words
            )))
        } else if words > self.config.max_words {
            Some(Violation::Length(format!(
                "The sentence must not exceed {} words.",
                self.config.max_words
            )))
        } else {
            None
        }
    }
}

/// Conserva letras ASCII, espacios, comas y puntos; normaliza los espacios
pub fn clean_sentence(sentence: &str) -> String {
    let kept: String = sentence
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | ',' | '.'))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryProvider;

    fn with_checker<F: FnOnce(&Checker)>(config: CheckerConfig, f: F) {
        let provider = DictionaryProvider::bundled();
        let dict = provider.ensure_loaded().unwrap();
        let checker = Checker::new(dict, config);
        f(&checker);
    }

    #[test]
    fn test_clean_sentence() {
        assert_eq!(clean_sentence("I  played   football!!"), "I played football");
        assert_eq!(clean_sentence("I played, then 42 left"), "I played, then left");
        assert_eq!(clean_sentence("¿¡"), "");
    }

    #[test]
    fn test_split_sentences() {
        with_checker(CheckerConfig::default(), |checker| {
            let sentences = checker.split_sentences("I played football. She went home.  . ");
            assert_eq!(sentences, vec!["I played football", "She went home"]);
        });
    }

    #[test]
    fn test_split_without_cleaning() {
        let config = CheckerConfig {
            clean_input: false,
            ..CheckerConfig::default()
        };
        with_checker(config, |checker| {
            let sentences = checker.split_sentences("I played football!. 123");
            assert_eq!(sentences, vec!["I played football!", "123"]);
        });
    }

    #[test]
    fn test_too_many_sentences() {
        let config = CheckerConfig {
            max_sentences: 2,
            ..CheckerConfig::default()
        };
        with_checker(config, |checker| {
            let err = checker.check("I ate. I slept. I ran.").unwrap_err();
            assert_eq!(err, CheckError::TooManySentences { max: 2, found: 3 });
        });
    }

    #[test]
    fn test_no_sentences() {
        with_checker(CheckerConfig::default(), |checker| {
            assert_eq!(checker.check(" ... "), Err(CheckError::NoSentences));
            assert_eq!(checker.check("!!!"), Err(CheckError::NoSentences));
        });
    }

    #[test]
    fn test_length_limits() {
        let config = CheckerConfig {
            min_words: 2,
            max_words: 4,
            ..CheckerConfig::default()
        };
        with_checker(config, |checker| {
            let short = checker.check_sentence("played");
            assert!(!short.valid);
            assert_eq!(short.result.message, "Invalid length");
            assert_eq!(short.result.explanation, "The sentence must have at least 2 words.");

            let long = checker.check_sentence("I played football in the park");
            assert_eq!(long.result.explanation, "The sentence must not exceed 4 words.");

            assert!(checker.check_sentence("I played football").valid);
        });
    }

    #[test]
    fn test_statistics() {
        with_checker(CheckerConfig::default(), |checker| {
            let report = checker
                .check("I played football. played football. I did play. You was happy")
                .unwrap();

            assert_eq!(report.stats.total, 4);
            assert_eq!(report.stats.valid, 1);
            assert!((report.stats.success_percentage - 25.0).abs() < f64::EPSILON);
            assert_eq!(report.stats.common_errors["Missing subject"], 1);
            assert_eq!(report.stats.common_errors["Auxiliary verb"], 1);
            assert_eq!(report.stats.common_errors["Verb agreement"], 1);
        });
    }

    #[test]
    fn test_empty_statistics() {
        let stats = Statistics::from_results(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_percentage, 0.0);
    }

    #[test]
    fn test_automaton_engine() {
        let config = CheckerConfig {
            engine: Engine::Automaton,
            ..CheckerConfig::default()
        };
        with_checker(config, |checker| {
            assert!(checker.check_sentence("i played in the park").valid);
            assert!(!checker.check_sentence("i played a").valid);
        });
    }

    #[test]
    fn test_report_serializes() {
        with_checker(CheckerConfig::default(), |checker| {
            let report = checker.check_sentences(&["I played football"]);
            let json = serde_json::to_value(&report).unwrap();

            assert_eq!(json["results"][0]["sentence"], "I played football");
            assert_eq!(json["results"][0]["valid"], true);
            assert_eq!(json["results"][0]["status"], "Valid");
            assert_eq!(json["stats"]["total"], 1);
        });
    }
}
