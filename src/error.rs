use std::fmt::Display;

use crate::huffman::{CodingError, Symbol};

#[derive(Debug)]
pub enum Error {
    UnableToReadInputFile(String, std::io::Error),
    SymbolNotInCodeMap(Symbol),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::SymbolNotInCodeMap(symbol) => {
                write!(
                    f,
                    "Symbol {:?} not present in the code map derived from the input",
                    symbol
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<CodingError> for Error {
    fn from(error: CodingError) -> Self {
        match error {
            CodingError::UnknownSymbol(symbol) => Self::SymbolNotInCodeMap(symbol),
        }
    }
}
