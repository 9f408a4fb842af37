//! Configuración y argumentos CLI

use std::path::PathBuf;

use crate::checker::{CheckerConfig, Engine};

#[derive(Debug, Clone)]
pub struct Config {
    /// Diccionario JSON alternativo (por defecto, el incluido)
    pub dictionary: Option<PathBuf>,
    /// Archivo de entrada
    pub input_file: Option<String>,
    /// Texto a validar (argumento posicional)
    pub text: Option<String>,
    /// Salida en JSON
    pub json: bool,
    /// Mostrar el desglose léxico de cada oración
    pub show_tokens: bool,
    /// Límites y algoritmo de validación
    pub checker: CheckerConfig,
    /// 0 = avisos, 1 = depuración, 2+ = traza
    pub verbosity: u8,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            input_file: None,
            text: None,
            json: false,
            show_tokens: false,
            checker: CheckerConfig::default(),
            verbosity: 0,
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-d" | "--dict" => {
                    config.dictionary = Some(PathBuf::from(
                        args_iter.next().ok_or("--dict requiere un valor")?,
                    ));
                }
                "-i" | "--input" => {
                    config.input_file = Some(args_iter.next().ok_or("--input requiere un valor")?);
                }
                "-j" | "--json" => config.json = true,
                "-t" | "--tokens" => config.show_tokens = true,
                "-a" | "--automaton" => config.checker.engine = Engine::Automaton,
                "--no-clean" => config.checker.clean_input = false,
                "--max-sentences" => {
                    config.checker.max_sentences =
                        Self::parse_count(args_iter.next(), "--max-sentences")?;
                }
                "--min-words" => {
                    config.checker.min_words = Self::parse_count(args_iter.next(), "--min-words")?;
                }
                "--max-words" => {
                    config.checker.max_words = Self::parse_count(args_iter.next(), "--max-words")?;
                }
                "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
                "-vv" => config.verbosity = config.verbosity.saturating_add(2),
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("Opción desconocida: {}", arg));
                    }
                    // Argumento posicional = texto a validar
                    config.text = Some(arg);
                }
            }
        }

        if config.checker.min_words > config.checker.max_words {
            return Err("--min-words no puede ser mayor que --max-words".to_string());
        }

        Ok(config)
    }

    fn parse_count(value: Option<String>, option: &str) -> Result<usize, String> {
        let value = value.ok_or_else(|| format!("{} requiere un valor", option))?;
        value
            .parse()
            .map_err(|_| format!("{} requiere un número entero: '{}'", option, value))
    }

    pub fn print_help() {
        println!(
            r#"Pastcheck - Validador de oraciones en pasado simple afirmativo

USO:
    pastcheck [OPCIONES] [TEXTO]

ARGUMENTOS:
    [TEXTO]    Texto a validar (una o varias oraciones separadas por punto)

OPCIONES:
    -h, --help                  Muestra esta ayuda
    -d, --dict <ARCHIVO>        Diccionario JSON (default: incluido)
    -i, --input <ARCHIVO>       Archivo de entrada
    -j, --json                  Salida en JSON
    -t, --tokens                Muestra el desglose léxico de cada oración
    -a, --automaton             Usa el validador por autómata
    --max-sentences <N>         Máximo de oraciones (default: 5)
    --min-words <N>             Mínimo de palabras por oración (default: 1)
    --max-words <N>             Máximo de palabras por oración (default: 50)
    --no-clean                  No elimina caracteres especiales
    -v, --verbose               Más registro en stderr (repetible)

EJEMPLOS:
    pastcheck "I played football yesterday"
    pastcheck --json "I played football. You was happy."
    pastcheck --tokens --dict words.json "She visited London""#
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("pastcheck")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(args(&[])).unwrap();
        assert_eq!(config.checker, CheckerConfig::default());
        assert!(config.text.is_none());
        assert!(!config.json);
    }

    #[test]
    fn test_options() {
        let config = Config::from_args(args(&[
            "--json",
            "-t",
            "--automaton",
            "--max-sentences",
            "10",
            "--no-clean",
            "-v",
            "-v",
            "I played football",
        ]))
        .unwrap();

        assert!(config.json);
        assert!(config.show_tokens);
        assert_eq!(config.checker.engine, Engine::Automaton);
        assert_eq!(config.checker.max_sentences, 10);
        assert!(!config.checker.clean_input);
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.text.as_deref(), Some("I played football"));
    }

    #[test]
    fn test_help_stops_parsing() {
        let config = Config::from_args(args(&["-h", "--unknown"])).unwrap();
        assert!(config.show_help);
    }

    #[test]
    fn test_errors() {
        assert!(Config::from_args(args(&["--bogus"])).is_err());
        assert!(Config::from_args(args(&["--dict"])).is_err());
        assert!(Config::from_args(args(&["--max-words", "many"])).is_err());
        assert!(Config::from_args(args(&["--min-words", "9", "--max-words", "3"])).is_err());
    }
}
