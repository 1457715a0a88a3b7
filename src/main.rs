use std::env::args_os;

use huffman_text_encoder::{encode_text_file, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    if let Err(e) = encode_text_file(&arguments) {
        eprintln!("Encoding failed because of: {}", e);
    }
}
