//! Prompt loading
//!
//! The prompt comes inline from the command line or from a text file. File
//! contents are trimmed; a blank file is an error here, while a missing
//! prompt is left to the pre-dispatch validation so the surface can report
//! it as a blocking message.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load the prompt from an inline argument or a file
pub fn load_prompt(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => {
            anyhow::bail!("Pass either an inline prompt or a prompt file, not both")
        }
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read prompt file: {}", path.display()))?;
            let trimmed = content.trim();
            if trimmed.is_empty() {
                anyhow::bail!("No prompt found in file: {}", path.display());
            }
            Ok(trimmed.to_string())
        }
        (None, None) => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_inline_prompt_passes_through() {
        let prompt = load_prompt(Some("Explain entropy".to_string()), None).unwrap();
        assert_eq!(prompt, "Explain entropy");
    }

    #[test]
    fn test_prompt_from_file_is_trimmed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  What is Rust?  ").unwrap();

        let prompt = load_prompt(None, Some(file.path())).unwrap();
        assert_eq!(prompt, "What is Rust?");
    }

    #[test]
    fn test_blank_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "   \n\n  ").unwrap();

        let err = load_prompt(None, Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("No prompt found"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_prompt(None, Some(Path::new("/nonexistent/prompt.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read prompt file"));
    }

    #[test]
    fn test_no_prompt_yields_empty_string() {
        let prompt = load_prompt(None, None).unwrap();
        assert!(prompt.is_empty());
    }
}
