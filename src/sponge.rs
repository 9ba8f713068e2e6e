// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! The sponge hash primitive `H`.
//!
//! Treated as an external collaborator: only its
//! input/output contract matters to the rest of the crate. We get that
//! contract from `sha3::Shake256`, an extendable-output Keccak-based
//! sponge, the same primitive `dsm_storage_node::crypto::sha3` reaches
//! for to do domain-separated hashing.
//!
//! `Sponge` only adds the one thing `Shake256` doesn't give for free:
//! cheaply resuming an already-absorbed prefix so a caller can finalize
//! the same prepared state against many different suffixes without
//! re-absorbing the prefix each time.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// A sponge state that has absorbed some prefix and can be cloned and
/// finalized against further input any number of times.
#[derive(Clone)]
pub struct Sponge(Shake256);

impl Sponge {
    /// A fresh sponge with nothing absorbed yet.
    pub fn new() -> Self {
        Sponge(Shake256::default())
    }

    /// Absorbs more input into the sponge.
    pub fn absorb(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    /// Clones the current state, absorbs `suffix`, and squeezes exactly
    /// `N` bytes. Does not consume `self` — the prepared prefix can be
    /// reused for as many finalizations as needed.
    pub fn finalize_with<const N: usize>(&self, suffix: &[u8]) -> [u8; N] {
        let mut clone = self.0.clone();
        clone.update(suffix);
        let mut out = [0u8; N];
        clone.finalize_xof().read(&mut out);
        out
    }

    /// Consumes the sponge and squeezes `len` bytes. Used for one-shot
    /// variable-length output (the `stream` PRF).
    pub fn finalize_vec(self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.0.finalize_xof().read(&mut out);
        out
    }
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}
