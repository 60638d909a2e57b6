//! Output destinations for rendered reports

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes to stdout or to a file
pub struct OutputWriter {
    writer: Box<dyn Write>,
}

impl OutputWriter {
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    pub fn file(path: &Path) -> Result<Self> {
        super::ensure_parent_exists(path)?;
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
        })
    }

    /// File when a path is given, stdout otherwise
    pub fn create(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Writes already rendered content, ending it with a newline
    pub fn write_content(&mut self, content: &str) -> Result<()> {
        if content.ends_with('\n') {
            write!(self.writer, "{}", content)?;
        } else {
            writeln!(self.writer, "{}", content)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out/report.txt");

        let mut writer = OutputWriter::create(Some(&path)).unwrap();
        writer.write_content("first").unwrap();
        writer.write_content("second\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
