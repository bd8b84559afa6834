use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Where the text to translate comes from.
pub struct InputReader;

impl InputReader {
    /// Returns the positional argument when given, otherwise reads stdin.
    ///
    /// Fails on empty input.
    pub fn read(text: Option<&str>) -> Result<String> {
        let text = match text {
            Some(text) => text.to_string(),
            None => Self::read_from(io::stdin().lock())?,
        };
        Self::check(text)
    }

    /// Validates text taken from somewhere other than the command line.
    pub fn check(text: String) -> Result<String> {
        if text.trim().is_empty() {
            bail!("Input is empty");
        }
        if text.len() > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                text.len() as f64 / 1024.0 / 1024.0
            );
        }
        Ok(text)
    }

    fn read_from(mut reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        let text = String::from_utf8(buffer).context("Input is not valid UTF-8")?;
        // Drop the newline a shell pipe appends; it would show up in the diff.
        Ok(text.trim_end_matches(['\n', '\r']).to_string())
    }
}
