//! Delimited two-column loader.
//!
//! Accepts a small delimited file and extracts exactly two columns of text,
//! one newline-joined block per column, ready to feed to
//! [`analyze`](crate::core::analyze::analyze). Files with a `.csv`
//! extension route through a comma reader; anything else is treated as
//! whitespace-separated columns.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file does not yield the two required columns.
    #[error("expected at least 2 columns, found {found}")]
    TooFewColumns { found: usize },
}

/// The two extracted columns, newline-joined, plus how many data rows fed
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedColumns {
    pub identifiers: String,
    pub filenames: String,
    pub rows: usize,
}

/// Load both columns from a file, routed by extension.
pub fn load_columns(path: &Path) -> Result<LoadedColumns, LoadError> {
    let content = fs::read_to_string(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let loaded = if is_csv {
        columns_from_csv(&content)?
    } else {
        columns_from_whitespace(&content)?
    };

    debug!(path = %path.display(), rows = loaded.rows, "loaded two-column input");
    Ok(loaded)
}

/// Comma-separated route. The first data row must carry at least two
/// columns; later rows may be ragged. Blank cells are skipped when joining
/// so a ragged tail leaves no empty lines for the matcher to count.
pub fn columns_from_csv(content: &str) -> Result<LoadedColumns, LoadError> {
    //blank lines never reach the reader, mirroring the whitespace route
    let body = non_blank_lines(content).collect::<Vec<_>>().join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut identifiers = Vec::new();
    let mut filenames = Vec::new();
    let mut rows = 0usize;

    for result in reader.records() {
        let record = result?;
        if rows == 0 && record.len() < 2 {
            return Err(LoadError::TooFewColumns {
                found: record.len(),
            });
        }
        rows += 1;

        if let Some(cell) = record.get(0).filter(|c| !c.is_empty()) {
            identifiers.push(cell.to_string());
        }
        if let Some(cell) = record.get(1).filter(|c| !c.is_empty()) {
            filenames.push(cell.to_string());
        }
    }

    if rows == 0 {
        return Err(LoadError::TooFewColumns { found: 0 });
    }

    Ok(LoadedColumns {
        identifiers: identifiers.join("\n"),
        filenames: filenames.join("\n"),
        rows,
    })
}

/// Whitespace-separated route (tabs or spaces). Rows with a single token
/// contribute to the first column only; if no row yields a second token the
/// file has no second column to derive and is rejected.
pub fn columns_from_whitespace(content: &str) -> Result<LoadedColumns, LoadError> {
    let mut identifiers = Vec::new();
    let mut filenames = Vec::new();
    let mut rows = 0usize;

    for line in non_blank_lines(content) {
        rows += 1;
        let mut parts = line.split_whitespace();
        if let Some(first) = parts.next() {
            identifiers.push(first.to_string());
        }
        if let Some(second) = parts.next() {
            filenames.push(second.to_string());
        }
    }

    if rows == 0 {
        return Err(LoadError::TooFewColumns { found: 0 });
    }
    if filenames.is_empty() {
        return Err(LoadError::TooFewColumns { found: 1 });
    }

    Ok(LoadedColumns {
        identifiers: identifiers.join("\n"),
        filenames: filenames.join("\n"),
        rows,
    })
}

fn non_blank_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn csv_content_splits_into_two_columns() {
        let loaded =
            columns_from_csv("001-001-001,001-001-001.upvf\n002-001-001,002-001-001.upvc")
                .unwrap();

        assert_eq!(loaded.identifiers, "001-001-001\n002-001-001");
        assert_eq!(loaded.filenames, "001-001-001.upvf\n002-001-001.upvc");
        assert_eq!(loaded.rows, 2);
    }

    #[test]
    fn csv_skips_blank_lines_and_blank_cells() {
        let loaded = columns_from_csv("a-b-c,a-b-c.upvf\n\nd-e-f,\n").unwrap();

        assert_eq!(loaded.identifiers, "a-b-c\nd-e-f");
        //d-e-f has no filename cell; nothing blank is joined in
        assert_eq!(loaded.filenames, "a-b-c.upvf");
        assert_eq!(loaded.rows, 2);
    }

    #[test]
    fn csv_with_one_column_is_rejected() {
        let err = columns_from_csv("just-one-column\nanother").unwrap_err();
        assert!(matches!(err, LoadError::TooFewColumns { found: 1 }));
    }

    #[test]
    fn empty_content_is_rejected() {
        assert!(matches!(
            columns_from_csv("\n  \n").unwrap_err(),
            LoadError::TooFewColumns { found: 0 }
        ));
        assert!(matches!(
            columns_from_whitespace("").unwrap_err(),
            LoadError::TooFewColumns { found: 0 }
        ));
    }

    #[test]
    fn whitespace_content_tolerates_ragged_rows() {
        let loaded = columns_from_whitespace(
            "001-001-001\t001-001-001.upvf\nlonely\n002-001-001  002-001-001.upvc",
        )
        .unwrap();

        assert_eq!(loaded.identifiers, "001-001-001\nlonely\n002-001-001");
        assert_eq!(loaded.filenames, "001-001-001.upvf\n002-001-001.upvc");
        assert_eq!(loaded.rows, 3);
    }

    #[test]
    fn whitespace_content_with_no_second_column_is_rejected() {
        let err = columns_from_whitespace("a\nb\nc").unwrap_err();
        assert!(matches!(err, LoadError::TooFewColumns { found: 1 }));
    }

    #[test]
    fn load_routes_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("input.csv");
        fs::write(&csv_path, "001-001-001,001-001-001.upvf").unwrap();
        let loaded = load_columns(&csv_path).unwrap();
        assert_eq!(loaded.identifiers, "001-001-001");
        assert_eq!(loaded.filenames, "001-001-001.upvf");

        let txt_path = dir.path().join("input.txt");
        fs::write(&txt_path, "001-001-001 001-001-001.upvf").unwrap();
        let loaded = load_columns(&txt_path).unwrap();
        assert_eq!(loaded.filenames, "001-001-001.upvf");
    }
}
