//! Export file I/O: encoding-tolerant reading and Excel-friendly writing.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::WINDOWS_1252;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Decoder that produced the text handed to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// Strict UTF-8, optionally BOM-prefixed.
    Utf8,
    /// Windows-1252 fallback (also covers Latin-1-labelled exports).
    Windows1252,
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceEncoding::Utf8 => write!(f, "utf-8"),
            SourceEncoding::Windows1252 => write!(f, "windows-1252"),
        }
    }
}

/// Read an export as text, trying strict UTF-8 first and falling back to
/// Windows-1252. The fallback cannot fail: every byte sequence decodes.
pub fn read_text_with_fallback(path: &Path) -> Result<(String, SourceEncoding)> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    match String::from_utf8(bytes) {
        Ok(text) => {
            // Drop the BOM if the exporter wrote one
            let text = if text.starts_with(BOM) {
                text[BOM.len_utf8()..].to_string()
            } else {
                text
            };
            Ok((text, SourceEncoding::Utf8))
        }
        Err(err) => {
            debug!(path = %path.display(), "input is not UTF-8; decoding as windows-1252");
            let bytes = err.into_bytes();
            let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
            Ok((decoded.into_owned(), SourceEncoding::Windows1252))
        }
    }
}

/// Create an output file primed with a UTF-8 BOM so spreadsheet tools
/// detect the encoding.
pub fn create_output_with_bom(path: &Path) -> Result<fs::File> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(String::from(BOM).as_bytes())
        .with_context(|| format!("Failed to write BOM to {}", path.display()))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn test_reads_plain_utf8() {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        let file = tmp.child("plain.csv");
        file.write_str("Title\nCafé\n").expect("write");

        let (text, encoding) = read_text_with_fallback(file.path()).expect("read");
        assert_eq!(text, "Title\nCafé\n");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_strips_utf8_bom() {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        let file = tmp.child("bom.csv");
        file.write_binary("\u{feff}Title\n".as_bytes()).expect("write");

        let (text, encoding) = read_text_with_fallback(file.path()).expect("read");
        assert_eq!(text, "Title\n");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_falls_back_to_windows_1252() {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        let file = tmp.child("legacy.csv");
        // 0xE9 is é in Windows-1252 and invalid as standalone UTF-8
        file.write_binary(b"Title\nCaf\xe9\n").expect("write");

        let (text, encoding) = read_text_with_fallback(file.path()).expect("read");
        assert_eq!(text, "Title\nCafé\n");
        assert_eq!(encoding, SourceEncoding::Windows1252);
    }

    #[test]
    fn test_output_starts_with_bom() {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        let file = tmp.child("out.csv");

        let mut out = create_output_with_bom(file.path()).expect("create");
        out.write_all(b"Title\n").expect("write body");
        drop(out);

        let bytes = fs::read(file.path()).expect("read back");
        assert!(bytes.starts_with(&[0xef, 0xbb, 0xbf]));
    }
}
