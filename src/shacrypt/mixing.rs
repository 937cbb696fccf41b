//! The SHA-crypt key-derivation algorithm: digests `A`, `B`, `DP`, `DS`,
//! the derived byte sequences `P` and `S`, and the round-parameterised
//! iterative mixing loop that folds them into the final 64-byte digest.
//!
//! This is a direct transcription of Drepper's reference procedure. Every
//! byte of output must match it exactly; the structure below follows the
//! numbered steps of the reference rather than any more "natural"
//! factoring, since small reorderings here are silently catastrophic.

use zeroize::Zeroize;

use crate::hash::Sha512Context;

/// Runs the full SHA-crypt mixing function and returns the raw 64-byte
/// digest, `C_rounds` in the reference's notation.
pub(crate) fn mix(key: &[u8], salt: &[u8], rounds: u32) -> [u8; 64] {
    let kl = key.len();

    let mut b = digest_b(key, salt);
    let a = digest_a(key, salt, &b);
    let mut dp = digest_dp(key);
    let p = sequence_p(kl, &dp);
    let mut ds = digest_ds(salt, a[0]);
    let s = sequence_s(salt.len(), &ds);

    b.zeroize();
    dp.zeroize();
    ds.zeroize();

    let result = iterate(a, &p, &s, rounds);

    let mut p = p;
    let mut s = s;
    p.zeroize();
    s.zeroize();

    result
}

/// `B = SHA512(key || salt || key)`.
fn digest_b(key: &[u8], salt: &[u8]) -> [u8; 64] {
    let mut ctx = Sha512Context::new();
    ctx.update(key);
    ctx.update(salt);
    ctx.update(key);
    ctx.finalize()
}

/// `A`, built from `key`, `salt`, `B`, and the bits of `|key|`.
fn digest_a(key: &[u8], salt: &[u8], b: &[u8; 64]) -> [u8; 64] {
    let mut ctx = Sha512Context::new();
    ctx.update(key);
    ctx.update(salt);

    for chunk in key.chunks(64) {
        if chunk.len() == 64 {
            ctx.update(b);
        } else {
            ctx.update(&b[..chunk.len()]);
        }
    }

    let mut kl = key.len();
    while kl > 0 {
        if kl & 1 == 1 {
            ctx.update(b);
        } else {
            ctx.update(key);
        }
        kl >>= 1;
    }

    ctx.finalize()
}

/// `DP = SHA512(key repeated |key| times)`, or `SHA512("")` if `key` is empty.
fn digest_dp(key: &[u8]) -> [u8; 64] {
    let mut ctx = Sha512Context::new();
    for _ in 0..key.len() {
        ctx.update(key);
    }
    ctx.finalize()
}

/// `P`, built by tiling `DP` across `|key|` bytes, one `DP`-sized (or
/// shorter, for the final partial block) slice per 64-byte block of `key`.
fn sequence_p(kl: usize, dp: &[u8; 64]) -> Vec<u8> {
    let mut p = Vec::with_capacity(kl);
    let mut remaining = kl;
    while remaining > 0 {
        let take = remaining.min(64);
        p.extend_from_slice(&dp[..take]);
        remaining -= take;
    }
    p
}

/// `DS = SHA512(salt repeated (16 + A[0]) times)`.
fn digest_ds(salt: &[u8], a0: u8) -> [u8; 64] {
    let mut ctx = Sha512Context::new();
    for _ in 0..(16 + a0 as u32) {
        ctx.update(salt);
    }
    ctx.finalize()
}

/// `S = DS[0..sl]`.
fn sequence_s(sl: usize, ds: &[u8; 64]) -> Vec<u8> {
    ds[..sl].to_vec()
}

/// The iterative mixing loop (reference step 21): `rounds` applications of
/// the six-condition table, each folding the running digest `C_i` with `P`
/// and `S` into a fresh SHA-512 context.
fn iterate(a: [u8; 64], p: &[u8], s: &[u8], rounds: u32) -> [u8; 64] {
    let mut c = a;
    for i in 0..rounds {
        let mut ctx = Sha512Context::new();

        if i & 1 == 1 {
            ctx.update(p);
        } else {
            ctx.update(&c);
        }

        if i % 3 != 0 {
            ctx.update(s);
        }

        if i % 7 != 0 {
            ctx.update(p);
        }

        if i & 1 == 1 {
            ctx.update(&c);
        } else {
            ctx.update(p);
        }

        c = ctx.finalize();
    }
    c
}
