//! The SHA-512 `crypt(3)` password hash ("$6$"), as specified by Ulrich
//! Drepper's [reference
//! document](https://www.akkadia.org/drepper/SHA-crypt.txt).
//!
//! Three pieces compose the scheme, leaves first: a [custom base64
//! variant](base64) over the alphabet `./0-9A-Za-z`; the [mixing
//! function](mixing) that derives a raw 64-byte digest from `(rounds, key,
//! salt)`; and a [parser/formatter](parse) for the `$6$[rounds=N$]salt$`
//! textual form. [`Sha512Crypt`] is the only public surface; the three
//! pieces beneath it are private implementation detail.

pub(crate) mod base64;
pub(crate) mod mixing;
pub(crate) mod parse;

use parse::ParsedSalt;

pub use parse::ParseError;

/// Marker type for the SHA-512 `crypt(3)` scheme.
///
/// Carries no state; every operation is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Crypt;

impl Sha512Crypt {
    /// Hashes `key` against a textual `$6$[rounds=N$]salt` string, returning
    /// the complete `$6$...$...` hash on success.
    ///
    /// Returns `None` if `salt_string` doesn't begin with `$6$`, or is
    /// otherwise malformed (for example a `rounds=` field missing its
    /// terminating `$`) — any such malformedness is folded into "not a
    /// $6$ salt", matching the reference parser's forgiving-but-total
    /// behaviour at this entry point.
    pub fn hash(key: &[u8], salt_string: &[u8]) -> Option<String> {
        let ParsedSalt { rounds, salt } = parse::parse(salt_string).ok()?;
        Some(Self::hash_raw(key, salt, rounds))
    }

    /// Hashes `key` against a raw salt byte string, first encoding it
    /// through the general base64 alphabet (§4.1) to produce the textual
    /// salt the algorithm embeds in its output.
    ///
    /// Only the first 16 bytes of the *encoded* salt are significant, same
    /// as [`hash_raw`](Self::hash_raw).
    pub fn hash_with_salt(key: &[u8], salt: &[u8], rounds: Option<u32>) -> String {
        let encoded = base64::encode(salt);
        Self::hash_raw(key, encoded.as_bytes(), rounds)
    }

    /// Hashes `key` against `salt` (at most the first 16 bytes are
    /// significant), producing the complete `$6$[rounds=N$]salt$suffix`
    /// string.
    ///
    /// `rounds = None` uses the default of 5000 internally without
    /// recording a `rounds=` field in the output; `Some(n)` clamps `n` to
    /// `[1000, 999_999_999]` and always records the clamped value, even
    /// when it equals the default.
    pub fn hash_raw(key: &[u8], salt: &[u8], rounds: Option<u32>) -> String {
        let salt = &salt[..salt.len().min(parse::MAX_SALT_LEN)];
        let effective_rounds = rounds.map_or(parse::DEFAULT_ROUNDS, parse::clamp_rounds);

        let digest = mixing::mix(key, salt, effective_rounds);
        let suffix = base64::encode_permuted(&digest)
            .expect("mixing::mix always returns exactly 64 bytes");

        format(rounds, salt, &suffix)
    }
}

/// Assembles the final `$6$[rounds=N$]salt$suffix` string.
///
/// `rounds` is the caller's original request (used only to decide whether
/// to emit a `rounds=` field at all); the value actually embedded, when
/// present, is the clamped round count.
fn format(rounds: Option<u32>, salt: &[u8], suffix: &str) -> String {
    let salt = String::from_utf8_lossy(salt);
    match rounds {
        None => format!("$6${salt}${suffix}"),
        Some(n) => {
            let clamped = parse::clamp_rounds(n);
            format!("$6$rounds={clamped}${salt}${suffix}")
        }
    }
}
