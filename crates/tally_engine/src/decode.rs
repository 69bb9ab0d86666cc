use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::CountError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// Size of the file on disk, BOM included.
    pub byte_len: u64,
}

/// Read a whole file as UTF-8 text, dropping a leading BOM.
pub fn read_text(path: &Path) -> Result<DecodedText, CountError> {
    let bytes = fs::read(path).map_err(|source| CountError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (text, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(CountError::Decode {
            path: path.to_path_buf(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        byte_len: bytes.len() as u64,
    })
}
