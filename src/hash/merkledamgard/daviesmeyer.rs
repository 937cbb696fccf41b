use super::CompressionFn;
use crate::hash::BlockEncrypt;

/// A step in the Davies-Meyer construction.
///
/// Defines how the previous hash state should be combined with the freshly
/// encrypted state. For SHA-1/SHA-2 this is modular addition of the
/// individual words; other Davies-Meyer hashes use XOR.
pub trait DaviesMeyerStep {
    type State;

    fn step(&self, prev: Self::State, new: Self::State) -> Self::State;
}

/// Builds a [`CompressionFn`] out of a block cipher and a
/// [`DaviesMeyerStep`], using the preimage block as the encryption key and
/// the running hash state as the plaintext: `state' = step(state,
/// encrypt(state, block))`.
#[derive(Debug)]
pub struct DaviesMeyer<Cip, Step> {
    cip: Cip,
    step: Step,
}

impl<Cip, Step> DaviesMeyer<Cip, Step> {
    pub fn new(cip: Cip, step: Step) -> Self {
        Self { cip, step }
    }
}

impl<Cip, Step> CompressionFn for DaviesMeyer<Cip, Step>
where
    Cip: BlockEncrypt<EncryptionBlock = Step::State>,
    Step: DaviesMeyerStep,
    Step::State: Clone,
{
    type State = Step::State;
    type Block = Cip::EncryptionKey;

    fn compress(&self, state: Self::State, block: Self::Block) -> Self::State {
        self.step.step(state.clone(), self.cip.encrypt(state, block))
    }
}
