//! Parsing and formatting of the `$6$[rounds=N$]salt$` textual prefix.

use std::fmt;

/// Default round count when the textual salt carries no `rounds=` field.
pub(crate) const DEFAULT_ROUNDS: u32 = 5000;

/// Smallest round count the algorithm will run, regardless of what the
/// textual salt or caller asks for.
pub(crate) const MIN_ROUNDS: u32 = 1000;

/// Largest round count the algorithm will run.
pub(crate) const MAX_ROUNDS: u32 = 999_999_999;

/// Salt bytes beyond this length are never significant.
pub(crate) const MAX_SALT_LEN: usize = 16;

/// A successfully parsed `$6$` salt string: an optional explicit round
/// count and the salt bytes (already truncated to
/// [`MAX_SALT_LEN`](MAX_SALT_LEN)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedSalt<'a> {
    pub rounds: Option<u32>,
    pub salt: &'a [u8],
}

/// Failure to recognise or parse a `$6$` salt string.
///
/// Both variants are folded into "absent output" at the public entry
/// point ([`crate::Sha512Crypt::hash`]); the distinction only matters to
/// callers that parse salt strings directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseError {
    /// The input didn't begin with `$6$`.
    WrongScheme,
    /// A `rounds=<digits>` field was present but not terminated by `$`.
    UnterminatedRounds,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongScheme => write!(f, "salt string is not a $6$ salt"),
            ParseError::UnterminatedRounds => {
                write!(f, "rounds field is missing its terminating '$'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a `$6$[rounds=N$]salt[$...]` prefix.
///
/// Only the `(rounds?, salt)` tuple is extracted; any bytes following the
/// salt's terminating `$` (i.e. an embedded hash suffix) are ignored, since
/// this is also used to parse salt strings that carry no suffix yet.
pub(crate) fn parse(input: &[u8]) -> Result<ParsedSalt<'_>, ParseError> {
    let rest = input.strip_prefix(b"$6$").ok_or(ParseError::WrongScheme)?;

    let (rounds, rest) = match rest.strip_prefix(b"rounds=") {
        Some(after_eq) => {
            let digit_len = after_eq
                .iter()
                .position(|b| !b.is_ascii_digit())
                .unwrap_or(after_eq.len());
            let (digits, after_digits) = after_eq.split_at(digit_len);
            match after_digits.split_first() {
                Some((b'$', rest)) => (Some(parse_rounds_decimal(digits)), rest),
                _ => return Err(ParseError::UnterminatedRounds),
            }
        }
        None => (None, rest),
    };

    let salt_len = rest.iter().position(|&b| b == b'$').unwrap_or(rest.len());
    let salt = &rest[..salt_len.min(MAX_SALT_LEN)];

    Ok(ParsedSalt { rounds, salt })
}

/// Parses a decimal digit run as the reference parser does: only the first
/// ten digits carry numeric weight (further digits are consumed but
/// ignored), and the result is clamped to [`MAX_ROUNDS`].
fn parse_rounds_decimal(digits: &[u8]) -> u32 {
    let value: u64 = digits
        .iter()
        .take(10)
        .fold(0u64, |acc, &b| acc * 10 + (b - b'0') as u64);
    value.min(MAX_ROUNDS as u64) as u32
}

/// Clamps an explicit round count to the algorithm's supported range,
/// exactly as the formatter does for a parsed `rounds=N`.
pub(crate) fn clamp_rounds(rounds: u32) -> u32 {
    rounds.clamp(MIN_ROUNDS, MAX_ROUNDS)
}
