//! JSON deserialization for token record lists.
//!
//! The lexer hands over an array of `{"type": "...", "value": ...}` records.
//! Records are read 1:1 first, then converted into `Token`s in record order.

use serde::Deserialize;

use crate::token::{Token, TokenKind};

/// Error while reading token records.
#[derive(Debug, thiserror::Error)]
pub enum TokenLoadError {
    #[error("invalid token records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown token kind `{kind}` in record {index}")]
    UnknownKind { index: usize, kind: String },
}

/// Conversion options for [`load_tokens`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject kinds outside the vocabulary instead of mapping them to `TokenKind::Unknown`.
    pub strict: bool,
}

/// Raw token record, 1:1 with the serialized form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawToken {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub value: RawValue,
}

/// Literal payload of a record. Lexers emit numbers either quoted or bare.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    #[default]
    Null,
}

impl RawValue {
    pub fn into_text(self) -> String {
        match self {
            RawValue::Text(text) => text,
            RawValue::Number(n) => n.to_string(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Null => String::new(),
        }
    }
}

impl RawToken {
    /// Classifies the record. Unknown kinds map to `TokenKind::Unknown` and keep their name.
    pub fn into_token(self) -> Token {
        let value = self.value.into_text();
        match TokenKind::from_name(&self.type_name) {
            Some(kind) => Token::new(kind, value),
            None => Token::unknown(self.type_name, value),
        }
    }
}

/// Parse a JSON token list into raw records.
pub fn parse_token_records(json: &str) -> Result<Vec<RawToken>, TokenLoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON token list into tokens, preserving order.
pub fn load_tokens(json: &str, options: LoadOptions) -> Result<Vec<Token>, TokenLoadError> {
    let records = parse_token_records(json)?;
    let mut tokens = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        if TokenKind::from_name(&record.type_name).is_none() {
            if options.strict {
                return Err(TokenLoadError::UnknownKind {
                    index,
                    kind: record.type_name,
                });
            }
            tracing::warn!(index, kind = %record.type_name, "unknown token kind");
        }
        tokens.push(record.into_token());
    }

    tracing::debug!(count = tokens.len(), "loaded token records");
    Ok(tokens)
}
