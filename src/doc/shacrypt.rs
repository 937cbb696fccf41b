//! SHA-crypt descends from the traditional DES-based `crypt(3)`, which
//! hashed passwords by using the password itself as a key to repeatedly
//! encrypt a constant block. DES-crypt's 8-byte password limit and 56-bit
//! effective key space made it increasingly unsafe as hardware caught up;
//! Poul-Henning Kamp's MD5-crypt ("$1$") and Ulrich Drepper's SHA-crypt
//! ("$5$"/"$6$") families replaced the block cipher with an iterated hash
//! function instead, removing the length limit and making the cost of a
//! single guess tunable via an explicit round count.
//!
//! Where MD5-crypt fixes its round count, SHA-crypt exposes it in the
//! textual salt (`rounds=N`), letting the hash keep pace with faster
//! hardware without a new scheme version. The iterated digest
//! ([`Sha512Crypt`](crate::Sha512Crypt) names its pieces `A`, `B`, `DP`,
//! `DS`) exists to make the relationship between the key, the salt, and
//! each round's input resistant to the kind of precomputation attacks
//! that plain iterated hashing (`hash(hash(hash(...password))))`) admits.
//!
//! The scheme is deliberately not designed for confusion and diffusion in
//! the block-cipher sense; its job is to be slow and to bind the output
//! tightly to a (key, salt, rounds) triple, not to produce output
//! indistinguishable from random noise under a chosen plaintext.
