use crate::huffman::CodeMap;

#[ctor::ctor]
fn init() {
    use log4rs;
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}

pub fn log_code_map(code_map: &CodeMap) {
    for (symbol, code) in code_map.iter() {
        log::debug!("{:?} -> {}", symbol, code);
    }
}
