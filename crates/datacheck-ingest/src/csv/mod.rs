//! CSV ingestion.

mod header;
mod reader;
mod source;

pub use header::{check_header_names, normalize_cell, normalize_field, normalize_header};
pub use reader::load_table;
pub use source::{MAX_FILE_SIZE, check_file_size_with_limit, decode, read_text};
