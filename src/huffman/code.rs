use std::collections::BTreeMap;

use super::tree::HuffmanTree;
use super::Symbol;

/// Mapping from symbol to its derived code, a non-empty string over
/// {'0','1'}, with one entry per leaf of the tree.
///
/// No code is a prefix of another: a leaf never lies on the path to a
/// different leaf, so the tree shape guarantees prefix-freeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMap {
    codes: BTreeMap<Symbol, String>,
}

impl CodeMap {
    /// Derives one code per leaf by walking the tree.
    ///
    /// A single-leaf tree accumulates no path during the walk; its lone
    /// symbol is assigned the code "0" so repetitions stay decodable.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        tree.walk_leaf_paths(|symbol, path| {
            let code = if path.is_empty() {
                String::from("0")
            } else {
                path
            };
            codes.insert(symbol, code);
        });
        CodeMap { codes }
    }

    pub fn code_of(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols, equal to the leaf count of the source tree.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
    }
}

#[cfg(test)]
mod test {
    use super::super::{HuffmanTree, SymbolFrequency};
    use super::CodeMap;

    const TEXTBOOK_FREQUENCIES: &[(char, usize); 6] =
        &[('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];

    fn derive_code_map(symbols_and_frequencies: &[(char, usize)]) -> CodeMap {
        let symbol_frequencies: Vec<SymbolFrequency> = symbols_and_frequencies
            .iter()
            .copied()
            .map(SymbolFrequency::from)
            .collect();
        let tree =
            HuffmanTree::from_frequencies(&symbol_frequencies).expect("alphabet must not be empty");
        CodeMap::from_tree(&tree)
    }

    #[test]
    fn test_one_code_per_symbol() {
        let code_map = derive_code_map(TEXTBOOK_FREQUENCIES);
        assert_eq!(code_map.len(), TEXTBOOK_FREQUENCIES.len());
        for &(symbol, _) in TEXTBOOK_FREQUENCIES {
            assert!(
                code_map.code_of(symbol).is_some(),
                "symbol {:?} has no code",
                symbol
            );
        }
    }

    #[test]
    fn test_codes_are_non_empty_bit_strings() {
        let code_map = derive_code_map(TEXTBOOK_FREQUENCIES);
        for (symbol, code) in code_map.iter() {
            assert!(!code.is_empty(), "code of {:?} is empty", symbol);
            assert!(
                code.chars().all(|c| c == '0' || c == '1'),
                "code of {:?} contains a character other than '0'/'1': {}",
                symbol,
                code
            );
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let code_map = derive_code_map(TEXTBOOK_FREQUENCIES);
        for (first_symbol, first_code) in code_map.iter() {
            for (second_symbol, second_code) in code_map.iter() {
                if first_symbol == second_symbol {
                    continue;
                }
                assert!(
                    !second_code.starts_with(first_code),
                    "code {} of {:?} is a prefix of code {} of {:?}",
                    first_code,
                    first_symbol,
                    second_code,
                    second_symbol
                );
            }
        }
    }

    #[test]
    fn test_codes_are_distinct() {
        let code_map = derive_code_map(TEXTBOOK_FREQUENCIES);
        let codes: Vec<&str> = code_map.iter().map(|(_, code)| code).collect();
        for (i, first) in codes.iter().enumerate() {
            for second in codes.iter().skip(i + 1) {
                assert_ne!(first, second, "two leaves share the code {}", first);
            }
        }
    }

    #[test]
    fn test_lone_symbol_receives_code_zero() {
        let code_map = derive_code_map(&[('a', 4)]);
        assert_eq!(code_map.len(), 1);
        assert_eq!(code_map.code_of('a'), Some("0"));
    }

    #[test]
    fn test_two_equal_symbols_receive_single_bit_codes() {
        let code_map = derive_code_map(&[('a', 2), ('b', 2)]);
        let a_code = code_map.code_of('a').unwrap();
        let b_code = code_map.code_of('b').unwrap();
        assert_eq!(a_code.len(), 1);
        assert_eq!(b_code.len(), 1);
        assert_ne!(a_code, b_code, "the two single-bit codes must differ");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_code_map(TEXTBOOK_FREQUENCIES);
        let second = derive_code_map(TEXTBOOK_FREQUENCIES);
        assert_eq!(first, second);
    }

    #[test]
    fn test_iteration_is_ordered_by_symbol() {
        let code_map = derive_code_map(&[('c', 1), ('a', 2), ('b', 4)]);
        let symbols: Vec<char> = code_map.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }
}
