//! SHA-512 is specified by [FIPS
//! 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
//!
//! Like SHA-256, it is built on the [Merkle-Damgard](crate::MerkleDamgard)
//! and [Davies-Meyer](crate::DaviesMeyer) constructions, using a dedicated
//! block cipher ([SHACAL-2](Shacal2), widened to 64-bit words) to mix the
//! internal state with padded preimage blocks.
//!
//! This is the only member of the SHA-2 family this crate carries: the
//! SHA-crypt key derivation it feeds is specified only in terms of
//! SHA-512's 64-byte digest.

use zeroize::Zeroize;

use super::{
    merkledamgard::{CompressionFn, DaviesMeyer, DaviesMeyerStep, MerkleDamgard, MerkleDamgardPad},
    BlockEncrypt,
    Digest,
    Hash,
    Preimage,
};

const BLOCK_BYTES: usize = 128;

/// A preimage block.
type Block = [u8; BLOCK_BYTES];

/// The internal state of [SHA-512](Sha512).
type State = [u64; 8];

/// The $K_t^{512}$ round constants, the first 64 bits of the fractional
/// parts of the cube roots of the first 80 primes.
const KT_512: [u64; 80] = [
    0x428a2f98d728ae22,
    0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f,
    0xe9b5dba58189dbbc,
    0x3956c25bf348b538,
    0x59f111f1b605d019,
    0x923f82a4af194f9b,
    0xab1c5ed5da6d8118,
    0xd807aa98a3030242,
    0x12835b0145706fbe,
    0x243185be4ee4b28c,
    0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f,
    0x80deb1fe3b1696b1,
    0x9bdc06a725c71235,
    0xc19bf174cf692694,
    0xe49b69c19ef14ad2,
    0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5,
    0x240ca1cc77ac9c65,
    0x2de92c6f592b0275,
    0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4,
    0x76f988da831153b5,
    0x983e5152ee66dfab,
    0xa831c66d2db43210,
    0xb00327c898fb213f,
    0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2,
    0xd5a79147930aa725,
    0x06ca6351e003826f,
    0x142929670a0e6e70,
    0x27b70a8546d22ffc,
    0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed,
    0x53380d139d95b3df,
    0x650a73548baf63de,
    0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6,
    0x92722c851482353b,
    0xa2bfe8a14cf10364,
    0xa81a664bbc423001,
    0xc24b8b70d0f89791,
    0xc76c51a30654be30,
    0xd192e819d6ef5218,
    0xd69906245565a910,
    0xf40e35855771202a,
    0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8,
    0x1e376c085141ab53,
    0x2748774cdf8eeb99,
    0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63,
    0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373,
    0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc,
    0x78a5636f43172f60,
    0x84c87814a1f0ab72,
    0x8cc702081a6439ec,
    0x90befffa23631e28,
    0xa4506cebde82bde9,
    0xbef9a3f7b2c67915,
    0xc67178f2e372532b,
    0xca273eceea26619c,
    0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e,
    0xf57d4f7fee6ed178,
    0x06f067aa72176fba,
    0x0a637dc5a2c898a6,
    0x113f9804bef90dae,
    0x1b710b35131c471b,
    0x28db77f523047d84,
    0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc,
    0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6,
    0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec,
    0x6c44198c4a475817,
];

/// Initial hash value $H^{(0)}$, the first 64 bits of the fractional parts
/// of the square roots of the first 8 primes.
const H0: State = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// SHA-512 hash specified by [FIPS
/// 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf).
///
/// For more details, see the [module documentation](self).
#[derive(Debug)]
pub struct Sha512(MerkleDamgard<State, Block, DaviesMeyer<Shacal2, ModularAddition>, LengthPadding>);

impl Default for Sha512 {
    fn default() -> Self {
        Self(MerkleDamgard::new(
            DaviesMeyer::new(Shacal2(()), ModularAddition(())),
            LengthPadding(()),
            H0,
        ))
    }
}

impl Hash for Sha512 {
    type Output = [u8; 64];

    fn hash(&self, preimage: Preimage<&[u8]>) -> Digest<Self::Output> {
        let mut result = [0; 64];
        self.0
            .hash(preimage)
            .0
            .into_iter()
            .flat_map(u64::to_be_bytes)
            .zip(result.iter_mut())
            .for_each(|(b, r)| *r = b);
        Digest(result)
    }
}

/// The underlying block cipher used by [SHA-512](Sha512), widening SHACAL-2
/// from 32-bit to 64-bit words (80 rounds instead of 64).
///
/// Applies 80 rounds of the same permutation SHACAL-2 uses, where $a, b, c,
/// \dots$ represent the current state in 64-bit words, $W_i$ is the message
/// schedule, [$\Sigma_0^{512}$](uppercase_sigma_0), [$\Sigma_1^{512}$]
/// (uppercase_sigma_1), [$\sigma_0^{512}$](lowercase_sigma_0),
/// [$\sigma_1^{512}$](lowercase_sigma_1), [$Ch$](ch), and [$Maj$](maj) are
/// helper functions, and [$K_t^{512}$](KT_512) are the round constants.
#[derive(Debug)]
pub struct Shacal2(());

impl BlockEncrypt for Shacal2 {
    type EncryptionBlock = State;
    type EncryptionKey = Block;

    fn encrypt(
        &self,
        data: Self::EncryptionBlock,
        key: Self::EncryptionKey,
    ) -> Self::EncryptionBlock {
        let state = data;
        let block = key;

        // Initialize the message schedule.
        let mut schedule = [0u64; 16];
        schedule
            .iter_mut()
            .zip(block.chunks_exact(8))
            .for_each(|(s, b)| *s = u64::from_be_bytes(b.try_into().unwrap()));

        // Execute the rounds.
        let mut a = state[0];
        let mut b = state[1];
        let mut c = state[2];
        let mut d = state[3];
        let mut e = state[4];
        let mut f = state[5];
        let mut g = state[6];
        let mut h = state[7];
        for t in 0..80 {
            let wt = schedule[0];
            let temp1 = h
                .wrapping_add(uppercase_sigma_1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(KT_512[t])
                .wrapping_add(wt);
            let temp2 = uppercase_sigma_0(a).wrapping_add(maj(a, b, c));
            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);

            // Update the message schedule.
            let next = lowercase_sigma_1(schedule[14])
                .wrapping_add(schedule[9])
                .wrapping_add(lowercase_sigma_0(schedule[1]))
                .wrapping_add(schedule[0]);
            schedule.rotate_left(1);
            schedule[15] = next;
        }

        [a, b, c, d, e, f, g, h]
    }
}

/// Helper function $Ch$.
fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ ((!x) & z)
}

/// Helper function $Maj$.
fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Helper function $\Sigma_0^{512}$.
fn uppercase_sigma_0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

/// Helper function $\Sigma_1^{512}$.
fn uppercase_sigma_1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

/// Helper function $\sigma_0^{512}$.
fn lowercase_sigma_0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// Helper function $\sigma_1^{512}$.
fn lowercase_sigma_1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Because the new state is derived by adding the "working variables" to
/// the current state, the [Davies-Meyer step](DaviesMeyerStep) in SHA-512
/// is modular addition, same as SHA-1/SHA-2.
#[derive(Debug)]
pub struct ModularAddition(());

impl DaviesMeyerStep for ModularAddition {
    type State = State;

    fn step(&self, prev: Self::State, mut new: Self::State) -> Self::State {
        new.iter_mut()
            .zip(prev.iter())
            .for_each(|(n, p)| *n = n.wrapping_add(*p));
        new
    }
}

/// SHA-512 length padding.
///
/// The preimage is padded by appending a single 1 bit, followed by as many
/// bits as needed to pad to a multiple of 1024 - 128 = 896 bits, followed
/// by the _bit length_ of the preimage encoded as an unsigned big-endian
/// 128 bit integer. This results in a [Merkle-Damgard compliant
/// padding](MerkleDamgardPad) into blocks of 1024 bits.
#[derive(Debug)]
pub struct LengthPadding(());

impl MerkleDamgardPad for LengthPadding {
    type Block = Block;

    fn pad(&self, preimage: Preimage<&[u8]>) -> impl Iterator<Item = Self::Block> {
        let bit_len = (preimage.0.len() as u128).wrapping_mul(8);
        preimage
            .0
            .chunks(BLOCK_BYTES)
            .chain(
                // If the input is a multiple of the block size, a full block of padding needs to
                // be added.
                std::iter::once([].as_slice()).take(if preimage.0.len() % BLOCK_BYTES == 0 {
                    1
                } else {
                    0
                }),
            )
            .flat_map(move |chunk| {
                if chunk.len() == BLOCK_BYTES {
                    // This block does not need padding.
                    vec![chunk.try_into().unwrap()]
                } else if BLOCK_BYTES - chunk.len() <= 16 {
                    // This block requires an additional block of padding.
                    let mut block = [0u8; BLOCK_BYTES];
                    block[..chunk.len()].copy_from_slice(chunk);
                    block[chunk.len()] = 0x80;
                    let mut next = [0u8; BLOCK_BYTES];
                    next[BLOCK_BYTES - 16..].copy_from_slice(&bit_len.to_be_bytes());
                    vec![block, next]
                } else {
                    // This block needs to be padded.
                    let mut block = [0u8; BLOCK_BYTES];
                    block[..chunk.len()].copy_from_slice(chunk);
                    block[chunk.len()] = 0x80;
                    block[BLOCK_BYTES - 16..].copy_from_slice(&bit_len.to_be_bytes());
                    vec![block]
                }
            })
    }
}

/// Streaming SHA-512 context exposing `init`/`update`/`finalize`, the
/// capability set the SHA-crypt mixing function (see
/// [`crate::Sha512Crypt`]) is built against.
///
/// Internally this buffers every [`update`](Self::update) call and runs
/// the whole accumulated preimage through [`Sha512`] at
/// [`finalize`](Self::finalize) time. SHA-crypt digests are always
/// key/salt sized, so there's no streaming-memory benefit to threading a
/// true incremental compression loop through this crate's public API.
#[derive(Default)]
pub struct Sha512Context {
    buf: Vec<u8>,
}

impl Sha512Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    pub fn finalize(mut self) -> [u8; 64] {
        let digest = Sha512::default().hash(Preimage(&self.buf)).0;
        self.buf.zeroize();
        digest
    }
}
