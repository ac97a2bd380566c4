//! Reading and decoding raw input files.

use std::path::Path;

use crate::error::{IngestError, Result};
use crate::options::Encoding;

/// Maximum file size for loading (500 MB default).
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read a whole file and decode it to text.
pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    check_file_size_with_limit(path, MAX_FILE_SIZE)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    decode(&bytes, encoding).ok_or_else(|| IngestError::InvalidEncoding {
        path: path.to_path_buf(),
        encoding: encoding.label(),
    })
}

/// Decode bytes in the requested encoding.
///
/// A leading UTF-8 byte-order mark is dropped for UTF-8 input. Latin-1 input
/// keeps it as `ï»¿`, which header normalization strips later.
/// Returns `None` when strict UTF-8 decoding fails.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Option<String> {
    match encoding {
        Encoding::Utf8 => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            std::str::from_utf8(body).ok().map(str::to_string)
        }
        Encoding::Latin1 => Some(decode_latin1(bytes)),
        Encoding::Auto => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            match std::str::from_utf8(body) {
                Ok(text) => Some(text.to_string()),
                Err(_) => {
                    tracing::debug!("input is not valid UTF-8, decoding as Windows-1252");
                    Some(decode_latin1(bytes))
                }
            }
        }
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}
