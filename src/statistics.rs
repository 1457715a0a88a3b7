use std::fmt;

/// Width of one symbol in the uncompressed representation.
pub const FIXED_BITS_PER_SYMBOL: usize = 8;

/// Size accounting for one encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStatistics {
    symbol_count: usize,
    distinct_symbol_count: usize,
    encoded_bit_count: usize,
}

impl CompressionStatistics {
    pub fn new(
        symbol_count: usize,
        distinct_symbol_count: usize,
        encoded_bit_count: usize,
    ) -> Self {
        Self {
            symbol_count,
            distinct_symbol_count,
            encoded_bit_count,
        }
    }

    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    pub fn distinct_symbol_count(&self) -> usize {
        self.distinct_symbol_count
    }

    pub fn original_bit_count(&self) -> usize {
        self.symbol_count * FIXED_BITS_PER_SYMBOL
    }

    pub fn encoded_bit_count(&self) -> usize {
        self.encoded_bit_count
    }

    /// Average encoded bits per input symbol; 0.0 for empty input.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbol_count == 0 {
            return 0.0;
        }
        self.encoded_bit_count as f64 / self.symbol_count as f64
    }

    /// Encoded size over original size; 0.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.symbol_count == 0 {
            return 0.0;
        }
        self.encoded_bit_count as f64 / self.original_bit_count() as f64
    }
}

impl fmt::Display for CompressionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbols encoded: {}", self.symbol_count)?;
        writeln!(f, "Distinct symbols: {}", self.distinct_symbol_count)?;
        writeln!(f, "Original size (bits): {}", self.original_bit_count())?;
        writeln!(f, "Encoded size (bits): {}", self.encoded_bit_count)?;
        writeln!(f, "Bits per symbol: {:.3}", self.bits_per_symbol())?;
        write!(f, "Compression ratio: {:.3}", self.compression_ratio())
    }
}
