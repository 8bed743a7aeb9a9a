//! Collecting input values from the command line and from files.
//!
//! Value files hold one value per line. Blank lines are skipped and `#`
//! starts a comment that runs to the end of the line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read values from any line-oriented reader.
///
/// # Errors
///
/// Propagates read failures.
pub fn read_values(reader: impl BufRead) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let value = line.split('#').next().unwrap_or_default().trim();
        if !value.is_empty() {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

/// Read values from a file.
///
/// # Errors
///
/// Fails if the file cannot be opened or read.
pub fn read_values_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let values = read_values(BufReader::new(file))?;
    debug!(path = %path.display(), count = values.len(), "read input values");
    Ok(values)
}

/// Combine positional values with those read from an optional file.
///
/// # Errors
///
/// Fails if the file cannot be read, or if no values remain at all.
pub fn collect_values(positional: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut values = positional.to_vec();
    if let Some(path) = file {
        values.extend(read_values_file(path)?);
    }
    if values.is_empty() {
        return Err(Error::NoInput);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_values_skips_comments_and_blanks() {
        let text = "0x96000045\n\n# a comment\n  410FD034  # trailing\n#\n84000000\n";
        let values = read_values(text.as_bytes()).unwrap();
        assert_eq!(values, ["0x96000045", "410FD034", "84000000"]);
    }

    #[test]
    fn test_collect_values_requires_input() {
        assert!(matches!(collect_values(&[], None), Err(Error::NoInput)));
        let values = collect_values(&["1".to_string()], None).unwrap();
        assert_eq!(values, ["1"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = collect_values(&[], Some(Path::new("/nonexistent/regdec/values.txt")));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
