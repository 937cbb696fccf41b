//! The SHA-crypt custom base64 variant.
//!
//! Unlike standard base64, sextets are taken from the low end of a
//! little-endian 24-bit word, and the final 64-byte digest is encoded under
//! a fixed byte permutation rather than in its natural order.

use docext::docext;

/// Alphabet used by SHA-crypt, indexed 0..63.
pub(crate) const ALPHABET: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Reorders the 64-byte final digest before encoding, so that
/// [related bits end up in adjacent output characters](encode_permuted).
///
/// Listed in the order the permuted encoder consumes them: the first
/// triple is `(input[0], input[21], input[42])`.
#[rustfmt::skip]
const PERMUTATION: [usize; 64] = [
     0, 21, 42, 22, 43,  1, 44,  2, 23,  3, 24, 45, 25, 46,  4, 47,  5, 26,
     6, 27, 48, 28, 49,  7, 50,  8, 29,  9, 30, 51, 31, 52, 10, 53, 11, 32,
    12, 33, 54, 34, 55, 13, 56, 14, 35, 15, 36, 57, 37, 58, 16, 59, 17, 38,
    18, 39, 60, 40, 61, 19, 62, 20, 41, 63,
];

/// Encodes `input` using the SHA-crypt base64 alphabet.
///
/// Input bytes are consumed three at a time as $b_2, b_1, b_0$ and packed
/// into a little-endian 24-bit word $w = b_0 \mid (b_1 \ll 8) \mid (b_2 \ll
/// 16)$. Each group of three bytes yields four output characters, taken as
/// sextets from the low end: `alphabet[w & 63]`, `alphabet[(w >> 6) & 63]`,
/// `alphabet[(w >> 12) & 63]`, `alphabet[(w >> 18) & 63]`.
///
/// A 2-byte tail is packed the same way into a 16-bit word and emits three
/// characters; a 1-byte tail emits two characters, with the top two bits of
/// the second always zero. This function is total: every byte string has
/// an encoding.
#[docext]
pub(crate) fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    let mut chunks = input.chunks_exact(3);
    for c in chunks.by_ref() {
        let w = (c[2] as u32) | (c[1] as u32) << 8 | (c[0] as u32) << 16;
        push_sextets(&mut out, w, 4);
    }
    match *chunks.remainder() {
        [b1, b0] => {
            let w = (b0 as u32) | (b1 as u32) << 8;
            push_sextets(&mut out, w, 3);
        }
        [b] => {
            out.push(ALPHABET[(b & 0x3f) as usize] as char);
            out.push(ALPHABET[(b >> 6) as usize] as char);
        }
        [] => {}
        _ => unreachable!("chunks_exact(3) leaves at most 2 bytes remaining"),
    }
    out
}

fn push_sextets(out: &mut String, w: u32, count: u32) {
    for i in 0..count {
        out.push(ALPHABET[((w >> (6 * i)) & 0x3f) as usize] as char);
    }
}

/// Error returned by [`encode_permuted`] when its input isn't exactly 64
/// bytes. This can't happen from the public SHA-crypt entry points, which
/// always hand it a freshly-produced SHA-512 digest; it exists so the
/// permutation step stays independently testable as a total function on
/// its own narrower domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PermutedEncodeError;

impl std::fmt::Display for PermutedEncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("permuted base64 encoder requires exactly 64 input bytes")
    }
}

impl std::error::Error for PermutedEncodeError {}

/// Encodes a 64-byte SHA-512 digest into the 86-character SHA-crypt hash
/// suffix, reordering it through the fixed [`PERMUTATION`] first.
pub(crate) fn encode_permuted(input: &[u8]) -> Result<String, PermutedEncodeError> {
    if input.len() != 64 {
        return Err(PermutedEncodeError);
    }
    let reordered: Vec<u8> = PERMUTATION.iter().map(|&i| input[i]).collect();
    Ok(encode(&reordered))
}
