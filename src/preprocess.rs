//! Turns raw delimited answers ("C; Java, python") into transactions.

use regex::Regex;

use crate::error::{AprioriError, Result};

/// Splits text fields on any of a set of literal delimiters.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new<S: AsRef<str>>(delimiters: &[S]) -> Result<Self> {
        if delimiters.is_empty() {
            return Err(AprioriError::InvalidDelimiters(
                "at least one delimiter is required".to_owned(),
            ));
        }
        if delimiters.iter().any(|delimiter| delimiter.as_ref().is_empty()) {
            return Err(AprioriError::InvalidDelimiters(
                "delimiters must not be empty".to_owned(),
            ));
        }

        let alternation = delimiters
            .iter()
            .map(|delimiter| regex::escape(delimiter.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            pattern: Regex::new(&alternation)?,
        })
    }

    /// Split, trim, drop empty tokens and lower-case alphabetic characters.
    /// Repeated tokens collapse, keeping the first occurrence.
    pub fn tokenize(&self, row: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        for token in self.pattern.split(row) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let token = normalize(token);
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens
    }

    pub fn tokenize_all<I, S>(&self, rows: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        rows.into_iter()
            .map(|row| self.tokenize(row.as_ref()))
            .collect()
    }
}

fn normalize(token: &str) -> String {
    token
        .chars()
        .flat_map(|c| {
            let lower: Vec<char> = if c.is_alphabetic() {
                c.to_lowercase().collect()
            } else {
                vec![c]
            };
            lower
        })
        .collect()
}
