#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod hash;
mod shacrypt;

pub use {
    hash::{
        BlockEncrypt,
        CompressionFn,
        DaviesMeyer,
        DaviesMeyerStep,
        Digest,
        Hash,
        MerkleDamgard,
        MerkleDamgardPad,
        Preimage,
        Sha512,
    },
    shacrypt::Sha512Crypt,
};
