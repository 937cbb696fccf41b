mod daviesmeyer;

use std::marker::PhantomData;

pub use daviesmeyer::{DaviesMeyer, DaviesMeyerStep};

use super::{Digest, Hash, Preimage};

/// A compression function folds one preimage block into the running hash
/// state.
pub trait CompressionFn {
    type State;
    type Block;

    fn compress(&self, state: Self::State, block: Self::Block) -> Self::State;
}

/// Splits a preimage of arbitrary length into the fixed-size blocks a
/// [`CompressionFn`] consumes, appending whatever padding the construction
/// requires (a domain bit, zero-fill, a trailing length field, ...).
pub trait MerkleDamgardPad {
    type Block;

    fn pad(&self, preimage: Preimage<&[u8]>) -> impl Iterator<Item = Self::Block>;
}

/// The Merkle-Damgard construction: fold a padded preimage through a
/// [`CompressionFn`], starting from a fixed initialization vector.
///
/// SHA-1 and SHA-2 are both built this way, with the compression function
/// itself a [Davies-Meyer](DaviesMeyer) step around a dedicated block
/// cipher (SHACAL-1 and SHACAL-2 respectively). This crate only needs the
/// SHA-512 member of that family, but keeps the construction generic in
/// `State`/`Block` so the 512-bit instantiation is a plain width change,
/// not a rewrite.
#[derive(Debug)]
pub struct MerkleDamgard<State, Block, Cf, Pad> {
    compress: Cf,
    pad: Pad,
    iv: State,
    _block: PhantomData<Block>,
}

impl<State, Block, Cf, Pad> MerkleDamgard<State, Block, Cf, Pad> {
    pub fn new(compress: Cf, pad: Pad, iv: State) -> Self {
        Self {
            compress,
            pad,
            iv,
            _block: PhantomData,
        }
    }
}

impl<State, Block, Cf, Pad> Hash for MerkleDamgard<State, Block, Cf, Pad>
where
    Cf: CompressionFn<State = State, Block = Block>,
    Pad: MerkleDamgardPad<Block = Block>,
    State: Clone,
{
    type Output = State;

    fn hash(&self, preimage: Preimage<&[u8]>) -> Digest<State> {
        let state = self
            .pad
            .pad(preimage)
            .fold(self.iv.clone(), |state, block| {
                self.compress.compress(state, block)
            });
        Digest(state)
    }
}
