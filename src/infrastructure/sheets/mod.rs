// ============================================================
// SHEET ACCESS
// ============================================================
// Fetching and low-level parsing of published-sheet CSV exports.

pub mod fetcher;
pub mod parser;
pub mod tokenizer;

pub use fetcher::SheetFetcher;
pub use parser::{parse_key_values, parse_lines};
pub use tokenizer::tokenize_line;
