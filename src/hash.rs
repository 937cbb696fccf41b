mod merkledamgard;
pub mod sha512;

pub use {
    merkledamgard::{CompressionFn, DaviesMeyer, DaviesMeyerStep, MerkleDamgard, MerkleDamgardPad},
    sha512::{Sha512, Sha512Context},
};

/// A cryptographic hash function over an in-memory preimage.
///
/// SHA-512 is the only hash family this crate carries, but the trait keeps
/// the shape the teacher's SHA-1/SHA-2 implementations already used, so the
/// [Merkle-Damgard](MerkleDamgard) plumbing beneath it stays generic in the
/// digest width rather than hardcoded to 64 bytes.
pub trait Hash {
    type Output;

    fn hash(&self, preimage: Preimage<&[u8]>) -> Digest<Self::Output>;
}

/// Input to a [hash function](Hash).
#[derive(Debug, Clone, Copy)]
pub struct Preimage<T>(pub T);

/// Output of a [hash function](Hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest<T>(pub T);

/// The encryption half of a block cipher, as required by the
/// [Davies-Meyer](DaviesMeyer) construction underlying SHA-2-family hash
/// functions. This is a narrower trait than a real block cipher: SHACAL-2
/// style ciphers built for Davies-Meyer never need decryption.
pub trait BlockEncrypt {
    type EncryptionBlock;
    type EncryptionKey;

    fn encrypt(
        &self,
        data: Self::EncryptionBlock,
        key: Self::EncryptionKey,
    ) -> Self::EncryptionBlock;
}
