//! Document I/O: whole-document UTF-8 reads and writes.
//!
//! The reader/writer functions take an `origin` path purely for error
//! context, so tests can pass in-memory buffers.

use std::io::{Read, Write};
use std::path::Path;

use tracing::{info, instrument};

use headingfix_shared::{HeadingFixError, Result};

use crate::disambiguate::{Disambiguation, Disambiguator};

/// Read an entire UTF-8 document from `reader`.
pub fn read_document<R: Read>(mut reader: R, origin: &Path) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| HeadingFixError::io(origin, e))?;
    String::from_utf8(bytes).map_err(|e| HeadingFixError::encoding(origin, e))
}

/// Write `content` to `writer` in one pass and flush it.
pub fn write_document<W: Write>(mut writer: W, content: &str, origin: &Path) -> Result<()> {
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| HeadingFixError::io(origin, e))
}

/// Disambiguate the file at `path`.
///
/// The file is read in full, transformed in memory, and (when `write` is set)
/// overwritten with the result. No backup is kept and the write is not atomic.
#[instrument(skip(path, disambiguator), fields(path = %path.display()))]
pub fn fix_file(path: &Path, disambiguator: &Disambiguator, write: bool) -> Result<Disambiguation> {
    let file = std::fs::File::open(path).map_err(|e| HeadingFixError::io(path, e))?;
    let document = read_document(file, path)?;

    let result = disambiguator.apply(&document);

    if write {
        let file = std::fs::File::create(path).map_err(|e| HeadingFixError::io(path, e))?;
        write_document(file, &result.content, path)?;
    }

    info!(changes = result.changes.len(), written = write, "document processed");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    use headingfix_shared::{DisambiguatorConfig, JobRange};

    fn temp_file(contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hf-doc-{}.md", uuid::Uuid::now_v7()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn first_two_lines() -> Disambiguator {
        Disambiguator::new(DisambiguatorConfig::with_jobs(vec![JobRange::bounded(
            1, 2, "lint",
        )]))
        .unwrap()
    }

    /// A writer that refuses every write.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn reads_and_writes_in_memory_buffers() {
        let origin = Path::new("README.md");
        let doc = read_document(Cursor::new("#### 使用方式\nbody".as_bytes()), origin).unwrap();

        let result = first_two_lines().apply(&doc);

        let mut out = Vec::new();
        write_document(&mut out, &result.content, origin).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#### 使用方式 - lint\nbody");
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        let err = read_document(Cursor::new(vec![b'#', 0xff, 0xfe]), Path::new("bad.md"))
            .unwrap_err();
        assert!(matches!(err, HeadingFixError::Encoding { .. }));
    }

    #[test]
    fn failed_write_is_io_error() {
        let err = write_document(BrokenWriter, "content", Path::new("out.md")).unwrap_err();
        assert!(matches!(err, HeadingFixError::Io { .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn fix_file_overwrites_in_place() {
        let path = temp_file("#### 配置详解\n#### 效果说明\n#### 配置详解\n".as_bytes());

        let result = fix_file(&path, &first_two_lines(), true).unwrap();
        assert_eq!(result.changes.len(), 2);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "#### 配置详解 - lint\n#### 效果说明 - lint\n#### 配置详解\n");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn fix_file_annotates_crlf_document_and_writes_lf() {
        let path = temp_file("#### 配置详解\r\nbody\r\n".as_bytes());

        let result = fix_file(&path, &first_two_lines(), true).unwrap();
        assert_eq!(result.changes.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "#### 配置详解 - lint\nbody\n"
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn fix_file_without_write_leaves_file_untouched() {
        let original = "#### 配置详解\nbody\n";
        let path = temp_file(original.as_bytes());

        let result = fix_file(&path, &first_two_lines(), false).unwrap();
        assert_eq!(result.changes.len(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn fix_file_is_idempotent_on_disk() {
        let path = temp_file("#### 步骤详解\n".as_bytes());
        let disambiguator = first_two_lines();

        fix_file(&path, &disambiguator, true).unwrap();
        let second = fix_file(&path, &disambiguator, true).unwrap();

        assert!(second.is_unchanged());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "#### 步骤详解 - lint\n");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn fix_file_missing_source_is_io_error() {
        let path = std::env::temp_dir().join(format!("hf-missing-{}.md", uuid::Uuid::now_v7()));
        let err = fix_file(&path, &first_two_lines(), true).unwrap_err();
        assert!(matches!(err, HeadingFixError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn fix_file_rejects_non_utf8_without_writing() {
        let bytes = [b'#', 0xc3, 0x28, b'\n'];
        let path = temp_file(&bytes);

        let err = fix_file(&path, &first_two_lines(), true).unwrap_err();
        assert!(matches!(err, HeadingFixError::Encoding { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), bytes);

        std::fs::remove_file(&path).ok();
    }
}
