use crate::error::{ColumnarError, Result};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Where command input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    Text(String),
}

impl Input {
    /// Map the positional path / `--text` pair onto an input source
    /// A missing path or `-` means stdin
    pub fn from_args(path: Option<PathBuf>, text: Option<String>) -> Self {
        match (text, path) {
            (Some(text), _) => Self::Text(text),
            (None, Some(path)) if path.as_os_str() != "-" => Self::File(path),
            (None, _) => Self::Stdin,
        }
    }
}

/// Read the whole input as UTF-8 text
///
/// Files and inline text are used verbatim, matching what `write_output`
/// puts in a file. Stdin loses one trailing line ending, the one stdout
/// adds, unless `keep_newline` is set.
pub fn read_input(input: &Input, keep_newline: bool) -> Result<String> {
    match input {
        Input::Text(text) => Ok(text.clone()),
        Input::File(path) => decode_utf8(std::fs::read(path)?, &path.display().to_string()),
        Input::Stdin => {
            let mut bytes = Vec::new();
            std::io::stdin().lock().read_to_end(&mut bytes)?;
            let text = decode_utf8(bytes, "stdin")?;
            if keep_newline {
                Ok(text)
            } else {
                Ok(strip_line_ending(text))
            }
        }
    }
}

/// Write the result verbatim to `path`, or to stdout with a trailing newline
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn decode_utf8(bytes: Vec<u8>, source: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ColumnarError::InvalidUtf8(format!("{}: {}", source, e)))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
