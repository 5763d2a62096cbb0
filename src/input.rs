use std::num::ParseIntError;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("token {position} ({token:?}) is not an integer")]
    InvalidToken {
        token: String,
        position: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Parses integers separated by whitespace and/or commas.
///
/// Blank input gives an empty list.
pub fn parse_input_list(s: &str) -> Result<Vec<i64>, ParseError> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|source| ParseError::InvalidToken {
                token: token.to_string(),
                position,
                source,
            })
        })
        .collect::<Result<Vec<i64>, ParseError>>()?;
    debug!("Parsed {} values", values.len());
    Ok(values)
}
