//! Line source
//!
//! An in-memory collection of text lines that serves as both the count
//! provider and the page provider for the CLI. All I/O happens when the
//! source is built; the providers only slice the loaded lines.

use crate::error::{Result, ResultExt};
use crate::pagination::PaginationController;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// One line of the source with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub number: u64,
    pub text: String,
}

/// Lines shared between the providers handed to a controller
#[derive(Debug, Clone, Default)]
pub struct LineSource {
    lines: Arc<Vec<String>>,
}

impl LineSource {
    /// Build a source from any iterator of lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Arc::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Read every line from a buffered reader
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self {
            lines: Arc::new(lines),
        })
    }

    /// Read a file, or stdin when `path` is `-`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = if path.as_os_str() == "-" {
            Self::from_reader(io::stdin().lock())?
        } else {
            let file = File::open(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            Self::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read '{}'", path.display()))?
        };
        debug!(path = %path.display(), lines = source.len(), "Loaded line source");
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Count provider reporting the number of lines
    pub fn count_provider(&self) -> impl FnMut() -> usize + Send + 'static {
        let lines = Arc::clone(&self.lines);
        move || lines.len()
    }

    /// Page provider returning the lines in an offset/limit window
    pub fn page_provider(&self) -> impl FnMut(u64, u64) -> Vec<Line> + Send + 'static {
        let lines = Arc::clone(&self.lines);
        move |offset: u64, limit: u64| {
            lines
                .iter()
                .enumerate()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .map(|(index, text)| Line {
                    number: index as u64 + 1,
                    text: text.clone(),
                })
                .collect()
        }
    }

    /// Install both providers on a controller
    pub fn attach(&self, controller: &mut PaginationController<Vec<Line>>) -> Result<()> {
        controller
            .set_count_provider(self.count_provider())?
            .set_page_provider(self.page_provider());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_from_reader() {
        let source = LineSource::from_reader(Cursor::new("alpha\nbeta\ngamma\n")).unwrap();
        assert_eq!(source.len(), 3);
        assert!(!source.is_empty());
    }

    #[test]
    fn test_empty_source() {
        let source = LineSource::from_reader(Cursor::new("")).unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_page_provider_slices_with_line_numbers() {
        let source = LineSource::from_lines(["a", "b", "c", "d", "e"]);
        let mut page = source.page_provider();

        assert_eq!(
            page(3, 2),
            vec![
                Line {
                    number: 4,
                    text: "d".to_string()
                },
                Line {
                    number: 5,
                    text: "e".to_string()
                },
            ]
        );
        assert_eq!(page(4, 10).len(), 1);
        assert!(page(10, 10).is_empty());
    }

    #[test]
    fn test_page_provider_huge_window() {
        let source = LineSource::from_lines(["a", "b", "c"]);
        let mut page = source.page_provider();
        assert!(page(u64::MAX, 10).is_empty());
        assert_eq!(page(1, u64::MAX).len(), 2);
    }

    #[test]
    fn test_attach() {
        let source = LineSource::from_lines((1..=23).map(|i| format!("line {i}")));
        let mut controller = PaginationController::new();
        source.attach(&mut controller).unwrap();
        controller.set_page_size(5).unwrap();

        assert_eq!(controller.number_of_entries(), 23);
        assert_eq!(controller.number_of_pages(), 5);

        assert!(controller.last_page());
        let lines = controller.fetch_page().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].number, 21);
        assert_eq!(lines[2].text, "line 23");
    }

    #[test]
    fn test_from_missing_path() {
        let err = LineSource::from_path("/nonexistent/lines.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
