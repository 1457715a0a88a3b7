use std::fmt;

use super::code::CodeMap;
use super::Symbol;

#[derive(Debug, PartialEq, Eq)]
pub enum CodingError {
    UnknownSymbol(Symbol),
}

impl fmt::Display for CodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(symbol) => {
                write!(f, "symbol {:?} has no entry in the code map", symbol)
            }
        }
    }
}

impl std::error::Error for CodingError {}

/// Encodes a symbol sequence against a derived code map.
pub struct HuffmanEncoder<'a> {
    code_map: &'a CodeMap,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(code_map: &'a CodeMap) -> Self {
        Self { code_map }
    }

    /// Looks up each symbol's code and concatenates them in input order.
    ///
    /// A lookup miss means the code map was not derived from this text's
    /// frequency table. That is a caller bug, surfaced as an error rather
    /// than skipped.
    pub fn encode(&self, text: &str) -> Result<String, CodingError> {
        let mut encoded = String::new();
        for symbol in text.chars() {
            let code = self
                .code_map
                .code_of(symbol)
                .ok_or(CodingError::UnknownSymbol(symbol))?;
            encoded.push_str(code);
        }
        Ok(encoded)
    }
}
