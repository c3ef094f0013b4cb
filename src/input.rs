use std::io::{self, BufRead};
use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("expected two integers, found {found}")]
    MissingInteger { found: usize },

    #[error("`{token}` is not a valid integer: {source}")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Read two whitespace separated integers from `reader`.
///
/// Lines are consumed until two tokens have been seen, so the pair may span
/// several lines. Anything after the second token on its line is dropped.
pub fn read_pair<R: BufRead>(reader: &mut R) -> Result<(i32, i32), InputError> {
    let mut tokens: Vec<String> = Vec::with_capacity(2);
    let mut line = String::new();

    while tokens.len() < 2 {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(InputError::MissingInteger { found: tokens.len() });
        }
        tokens.extend(line.split_whitespace().take(2 - tokens.len()).map(str::to_owned));
    }

    debug!("read tokens {:?}", tokens);

    let a = parse_int(&tokens[0])?;
    let b = parse_int(&tokens[1])?;
    Ok((a, b))
}

fn parse_int(token: &str) -> Result<i32, InputError> {
    token
        .parse::<i32>()
        .map_err(|source| InputError::InvalidInteger { token: token.to_string(), source })
}
