use crate::error::{ClassUnionError, Result};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Content of an input file, decoded as UTF-8.
#[derive(Debug, Clone)]
pub struct InputText {
    pub text: String,
    pub bytes_read: u64,
    /// Invalid UTF-8 sequences were replaced with U+FFFD
    pub lossy: bool,
}

pub struct FileOperations {
    buffer_size: usize,
}

impl FileOperations {
    pub fn new() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB buffer
        }
    }

    /// Read the whole input file. The handle is released before returning.
    pub fn read_input(&self, path: &Path) -> Result<InputText> {
        let file = fs::File::open(path).map_err(|e| ClassUnionError::from_io(e, path))?;
        let mut reader = BufReader::with_capacity(self.buffer_size, file);

        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| ClassUnionError::from_io(e, path))?;

        let bytes_read = bytes.len() as u64;
        let (text, lossy) = match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
        };

        Ok(InputText {
            text,
            bytes_read,
            lossy,
        })
    }

    /// Create or truncate `path` and write `contents` to it.
    pub fn write_output(&self, path: &Path, contents: &str) -> Result<u64> {
        let file =
            fs::File::create(path).map_err(|e| ClassUnionError::from_output_io(e, path))?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);

        writer
            .write_all(contents.as_bytes())
            .map_err(|e| ClassUnionError::from_output_io(e, path))?;
        // Flush here so buffered write errors are reported instead of lost on drop
        writer
            .flush()
            .map_err(|e| ClassUnionError::from_output_io(e, path))?;

        Ok(contents.len() as u64)
    }
}

impl Default for FileOperations {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("base.css");
        fs::write(&path, ".foo { }\n").unwrap();

        let input = FileOperations::new().read_input(&path).unwrap();
        assert_eq!(input.text, ".foo { }\n");
        assert_eq!(input.bytes_read, 9);
        assert!(!input.lossy);
    }

    #[test]
    fn test_read_binary_input_is_lossy() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.bin");
        fs::write(&path, [b'a', 0xff, b'\n', b'b']).unwrap();

        let input = FileOperations::new().read_input(&path).unwrap();
        assert_eq!(input.text, "a\u{fffd}\nb");
        assert_eq!(input.bytes_read, 4);
        assert!(input.lossy);
    }

    #[test]
    fn test_read_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.css");

        let result = FileOperations::new().read_input(&path);
        assert!(matches!(result, Err(ClassUnionError::InputNotFound { .. })));
    }

    #[test]
    fn test_write_output_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        let written = FileOperations::new().write_output(&path, "'a';").unwrap();

        assert_eq!(written, 4);
        assert_eq!(fs::read_to_string(&path).unwrap(), "'a';");
    }

    #[test]
    fn test_write_output_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("output.txt");

        let result = FileOperations::new().write_output(&path, "'a';");
        assert!(matches!(result, Err(ClassUnionError::OutputNotWritable { .. })));
    }
}
