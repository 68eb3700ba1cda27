// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Loading intcode from comma-separated text
//!
//! Parsing is tolerant: whitespace anywhere is ignored, and tokens that are empty or are not
//! integers are dropped (with a warning logged for the latter) rather than rejected.

use std::error::Error;
use std::fmt::{self, Display};
use std::io;
use std::path::{Path, PathBuf};

/// The input could not be turned into a program
#[derive(Debug)]
pub enum InputError {
    /// The file could not be read
    Unreadable {
        /// the file that was attempted
        path: PathBuf,
        /// why it failed
        source: io::Error,
    },
    /// No integers were found in the input
    Empty,
}

impl Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "couldn't read file at {}: {source}", path.display())
            }
            Self::Empty => write!(f, "input contains no intcode"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Parse comma-separated integers out of `text`.
///
/// # Example
///
/// ```
/// use gravity_assist::parse::parse_program;
/// assert_eq!(parse_program("1, 0,0 ,\n0,9 9,,x,-3\n"), vec![1, 0, 0, 0, 99, -3]);
/// ```
pub fn parse_program(text: &str) -> Vec<i64> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    stripped
        .split(',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<i64>() {
            Ok(n) => Some(n),
            Err(e) => {
                log::warn!("dropping token {token:?}: {e}");
                None
            }
        })
        .collect()
}

/// Read and parse the program at `path`, failing if it can't be read or contains nothing.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<i64>, InputError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let code = parse_program(&text);
    log::debug!("loaded {} ints from {}", code.len(), path.display());
    if code.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerant_of_junk() {
        assert_eq!(parse_program(""), Vec::<i64>::new());
        assert_eq!(parse_program(" \n\t"), Vec::<i64>::new());
        assert_eq!(parse_program(",,,"), Vec::<i64>::new());
        assert_eq!(parse_program("1,two,3"), vec![1, 3]);
        assert_eq!(parse_program("+4,-5,99999999999999999999"), vec![4, -5]);
    }

    #[test]
    fn trailing_newline() {
        assert_eq!(
            parse_program("1,9,10,3,2,3,11,0,99,30,40,50\n"),
            vec![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]
        );
    }

    #[test]
    fn missing_file() {
        let err = load_program("/nonexistent/gravity-assist/input.txt").unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
        assert!(err.to_string().starts_with("couldn't read file at /nonexistent"));
    }

    #[test]
    fn junk_only_file_is_empty() {
        let path = std::env::temp_dir().join(format!(
            "gravity-assist-junk-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, " ,x,\n").unwrap();
        let result = load_program(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(InputError::Empty)), "{result:?}");
        assert_eq!(InputError::Empty.to_string(), "input contains no intcode");
    }

    #[test]
    fn readable_file_loads() {
        let path = std::env::temp_dir().join(format!(
            "gravity-assist-ok-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "1,0,0,0,99\n").unwrap();
        let result = load_program(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap(), vec![1, 0, 0, 0, 99]);
    }
}
