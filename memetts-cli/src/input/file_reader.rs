//! File reading utilities

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Open a file for incremental reading
    pub fn open_buffered(path: &Path) -> Result<BufReader<File>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "我不是神鹰\nnever gonna give you up";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.txt");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_open_buffered_reads_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("lines.txt");
        fs::write(&file_path, "哈哈\n好\n").unwrap();

        let lines: Vec<String> = FileReader::open_buffered(&file_path)
            .unwrap()
            .lines()
            .map(|line| line.unwrap())
            .collect();
        assert_eq!(lines, ["哈哈", "好"]);
    }

    #[test]
    fn test_open_buffered_nonexistent_file() {
        let err = FileReader::open_buffered(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }
}
