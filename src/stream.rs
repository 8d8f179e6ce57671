//! Stream input adapter: reads one whitespace-delimited token and feeds it
//! to the `dd/mm/yyyy` parser.

use crate::{CivilDate, DateError};
use std::io::{self, BufRead};

/// Error type for stream input.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Underlying reader failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The token was not a valid date.
    #[error(transparent)]
    Parse(#[from] DateError),

    /// The input ended before any token appeared.
    #[error("no date token available on input")]
    UnexpectedEof,
}

/// Reads one whitespace-delimited token from `reader` and parses it as a
/// `dd/mm/yyyy` date.
///
/// Leading ASCII whitespace is skipped; the token ends at the next
/// whitespace byte (which is consumed) or at end of input.
///
/// # Errors
/// Returns `ReadError::UnexpectedEof` when the input holds no token,
/// `ReadError::Io` on reader failure, and `ReadError::Parse` when the token
/// is not a valid date.
pub fn read_date<R: BufRead>(reader: &mut R) -> Result<CivilDate, ReadError> {
    let mut token = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut consumed = 0;
        let mut token_complete = false;
        for &byte in buf {
            consumed += 1;
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    continue;
                }
                token_complete = true;
                break;
            }
            token.push(byte);
        }

        reader.consume(consumed);
        if token_complete {
            break;
        }
    }

    if token.is_empty() {
        return Err(ReadError::UnexpectedEof);
    }

    let text = String::from_utf8_lossy(&token);
    Ok(text.parse::<CivilDate>()?)
}
