use crate::domain::ports::LineSource;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, StdinLock};
use std::path::Path;

/// Reads result lines from a named file.
pub struct FileSource {
    lines: Lines<BufReader<File>>,
}

impl FileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl LineSource for FileSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next().transpose()?)
    }
}

/// Reads result lines from stdin until end of input.
pub struct StdinSource {
    lines: Lines<StdinLock<'static>>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: std::io::stdin().lock().lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next().transpose()?)
    }
}
