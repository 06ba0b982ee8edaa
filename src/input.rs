//! Interactive query input.
//!
//! Reads one line from the terminal and substitutes a default search
//! term when the user enters nothing.

use std::io::{self, BufRead, Write};

/// Query used when the user enters an empty line.
pub const DEFAULT_QUERY: &str = "YouTube Developers Live";

/// Prompt for and read a search term.
///
/// # Arguments
/// * `reader` - Line source, normally a locked stdin
/// * `prompt_out` - Prompt destination, normally stdout
///
/// # Returns
/// * `io::Result<String>` - The entered term, or [`DEFAULT_QUERY`] if empty
///
/// # Details
/// Only the trailing newline is stripped; interior and surrounding
/// whitespace is kept verbatim.
pub fn read_query<R: BufRead, W: Write>(mut reader: R, mut prompt_out: W) -> io::Result<String> {
    write!(prompt_out, "Please enter a search term: ")?;
    prompt_out.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    if line.is_empty() {
        return Ok(DEFAULT_QUERY.to_string());
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> String {
        let mut prompt = Vec::new();
        read_query(input.as_bytes(), &mut prompt).unwrap()
    }

    #[test]
    fn test_empty_input_uses_default() {
        assert_eq!(read("\n"), DEFAULT_QUERY);
    }

    #[test]
    fn test_eof_uses_default() {
        assert_eq!(read(""), DEFAULT_QUERY);
    }

    #[test]
    fn test_input_passed_verbatim() {
        assert_eq!(read("rust tutorial\n"), "rust tutorial");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(read("  spaced query  \n"), "  spaced query  ");
    }

    #[test]
    fn test_crlf_is_stripped() {
        assert_eq!(read("windows query\r\n"), "windows query");
    }

    #[test]
    fn test_whitespace_only_input_is_not_empty() {
        assert_eq!(read("   \n"), "   ");
    }

    #[test]
    fn test_prompt_is_written() {
        let mut prompt = Vec::new();
        read_query("anything\n".as_bytes(), &mut prompt).unwrap();
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            "Please enter a search term: "
        );
    }
}
