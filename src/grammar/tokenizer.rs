//! Tokenizador de oraciones

use crate::error::LexicalError;

use super::classifier::{is_possible_proper_noun, ClassifiedWord, ContextWindow, WordClassifier};

/// Token de una oración concreta: una palabra clasificada en su posición.
pub type Token = ClassifiedWord;

/// Tokenizador de una sola pasada, de izquierda a derecha
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    classifier: WordClassifier<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(classifier: WordClassifier<'a>) -> Self {
        Self { classifier }
    }

    /// Normaliza la oración, la divide por espacios y clasifica cada palabra
    pub fn tokenize(&self, sentence: &str) -> Result<Vec<Token>, LexicalError> {
        let text = preprocess(sentence);
        let words: Vec<String> = text.split_whitespace().map(String::from).collect();
        self.classify_all(words)
    }

    /// Clasifica una oración que ya viene dividida en palabras
    pub fn tokenize_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Token>, LexicalError> {
        let words: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .map(preprocess_word)
            .collect();
        self.classify_all(words)
    }

    fn classify_all(&self, words: Vec<String>) -> Result<Vec<Token>, LexicalError> {
        if words.is_empty() {
            return Err(LexicalError::EmptyInput);
        }

        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            let context = context_window(&words, &tokens, i);
            tokens.push(self.classifier.classify(word, &context));
        }

        Ok(tokens)
    }
}

/// Normaliza espacios y pasa a minúscula todo lo que no parece nombre propio
pub fn preprocess(text: &str) -> String {
    text.split_whitespace()
        .map(preprocess_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn preprocess_word(word: &str) -> String {
    if is_possible_proper_noun(word) {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

/// Contexto de la palabra `position`, usando solo tokens ya resueltos
fn context_window(words: &[String], tokens: &[Token], position: usize) -> ContextWindow {
    let mut context = ContextWindow::at(position);

    if position > 0 {
        context.previous_word = Some(words[position - 1].clone());
        context.previous_category = tokens.get(position - 1).map(|t| t.category);
    }

    if position + 1 < words.len() {
        context.next_word = Some(words[position + 1].clone());
    }

    context
}
