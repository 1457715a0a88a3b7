use std::{
    fs,
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
use frequency::FrequencyTable;
use huffman::{CodeMap, HuffmanEncoder, HuffmanTree};
use statistics::CompressionStatistics;

mod cli;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;
pub mod statistics;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Encoded when no input file is supplied on the command line.
const SAMPLE_TEXT: &str = "It is a truth universally acknowledged, that a single man in \
possession of a good fortune, must be in want of a wife. However little known the feelings \
or views of such a man may be on his first entering a neighbourhood, this truth is so well \
fixed in the minds of the surrounding families, that he is considered as the rightful \
property of some one or other of their daughters.";

pub struct Arguments {
    input_file: Option<PathBuf>,
}

/// Everything one pipeline run derives from an input text.
pub struct CompressionReport {
    pub tree: Option<HuffmanTree>,
    pub code_map: CodeMap,
    pub encoded_text: String,
    pub statistics: CompressionStatistics,
}

fn read_input_text(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .map_err(|e| Error::UnableToReadInputFile(file_path.display().to_string(), e))
}

/// Runs the whole pipeline: frequency table, tree, code map, encoded text,
/// statistics.
///
/// Empty input is a valid run: no tree, empty code map, empty encoded text.
pub fn compress_text(text: &str) -> Result<CompressionReport> {
    let frequency_table = FrequencyTable::from(text);
    log::info!(
        "counted {} distinct symbols over {} input symbols",
        frequency_table.distinct_symbol_count(),
        frequency_table.total_count()
    );

    let tree = HuffmanTree::from_frequencies(&frequency_table.to_symbol_frequencies());
    let code_map = match tree.as_ref() {
        Some(tree) => {
            log::debug!("tree holds {} nodes", tree.node_count());
            CodeMap::from_tree(tree)
        }
        None => CodeMap::default(),
    };
    logger::log_code_map(&code_map);

    let encoded_text = HuffmanEncoder::new(&code_map).encode(text)?;
    log::info!("encoded {} input symbols into {} bits", frequency_table.total_count(), encoded_text.len());

    let statistics = CompressionStatistics::new(
        frequency_table.total_count(),
        frequency_table.distinct_symbol_count(),
        encoded_text.len(),
    );

    Ok(CompressionReport {
        tree,
        code_map,
        encoded_text,
        statistics,
    })
}

/// Encodes the file named in the arguments, or the built-in sample text,
/// and prints codes, tree diagram, encoded text and statistics.
pub fn encode_text_file(arguments: &Arguments) -> Result<()> {
    let text = match &arguments.input_file {
        Some(path) => read_input_text(path)?,
        None => SAMPLE_TEXT.to_owned(),
    };
    let report = compress_text(&text)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &CompressionReport) {
    println!("Huffman codes:");
    for (symbol, code) in report.code_map.iter() {
        println!("{:?}: {}", symbol, code);
    }
    if let Some(tree) = report.tree.as_ref() {
        println!();
        println!("Huffman tree:");
        print!("{}", tree);
    }
    println!();
    println!("Encoded text:");
    println!("{}", report.encoded_text);
    println!();
    println!("{}", report.statistics);
}
