// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! The public entry point: a seed-holding context that signs and
//! verifies. Construction derives the public key once and caches it;
//! every `sign`/`verify` call after that regenerates whatever trees it
//! needs from the seed and throws them away again.

use std::convert::{TryFrom, TryInto};

use tracing::info;

use crate::codec::{PublicKey, Signature};
use crate::error::VerifyError;
use crate::lmfs;
use crate::params::N;

/// A seed bound to the one supported parameter set, with its public key
/// derived and cached at construction time.
///
/// `seed` is never copied out of the borrow it was constructed with —
/// this context is only as long-lived as the caller's key material.
pub struct Context<'a> {
    seed: &'a [u8],
    public_key: PublicKey,
}

impl<'a> Context<'a> {
    /// Derives the public key from `seed` and returns a ready-to-use
    /// context.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is shorter than `N` bytes — a key this short
    /// cannot carry `N` bytes of entropy into the stream derivation, and
    /// signing under it is a programmer error, not a recoverable one.
    pub fn new(seed: &'a [u8]) -> Self {
        assert!(
            seed.len() >= N,
            "lmfs seed must be at least {} bytes, got {}",
            N,
            seed.len()
        );
        let root: [u8; N] = lmfs::public_key(seed);
        info!(seed_len = seed.len(), "derived lmfs public key");
        Context {
            seed,
            public_key: PublicKey::from_root(root),
        }
    }

    /// The public key for this seed.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Signs `msg`.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        let root: [u8; N] = self
            .public_key
            .root()
            .try_into()
            .expect("public key root is always N bytes");
        let bytes = lmfs::sign(self.seed, &root, msg);
        Signature::from_bytes_unchecked(bytes)
    }

    /// Verifies `sig` against this context's public key for `msg`.
    pub fn verify(&self, sig: &Signature, msg: &[u8]) -> Result<(), VerifyError> {
        verify(&self.public_key, sig, msg)
    }
}

/// Verifies `sig` against an arbitrary `public_key` for `msg`, without
/// needing a seed. This is what a verifier-only party calls.
pub fn verify(public_key: &PublicKey, sig: &Signature, msg: &[u8]) -> Result<(), VerifyError> {
    let root: [u8; N] = public_key
        .root()
        .try_into()
        .expect("public key root is always N bytes");
    lmfs::verify(&root, sig.as_slice(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_through_context_accepts() {
        let seed = [5u8; 32];
        let ctx = Context::new(&seed);
        let sig = ctx.sign(b"hello");
        assert!(ctx.verify(&sig, b"hello").is_ok());
    }

    #[test]
    fn verify_free_function_matches_context_verify() {
        let seed = [6u8; 32];
        let ctx = Context::new(&seed);
        let sig = ctx.sign(b"hello");
        assert!(verify(ctx.public_key(), &sig, b"hello").is_ok());
    }

    #[test]
    fn verify_rejects_tampered_message() {
        let seed = [7u8; 32];
        let ctx = Context::new(&seed);
        let sig = ctx.sign(b"hello");
        assert!(ctx.verify(&sig, b"goodbye").is_err());
    }

    #[test]
    #[should_panic(expected = "at least")]
    fn context_panics_on_short_seed() {
        let _ = Context::new(&[0u8; 4]);
    }

    #[test]
    fn verify_rejects_corrupted_public_key_bytes() {
        let seed = [8u8; 32];
        let ctx = Context::new(&seed);
        let sig = ctx.sign(b"hello");

        let mut pk_bytes = ctx.public_key().to_bytes().to_vec();
        pk_bytes[5] ^= 0x01;
        let bad_pk = PublicKey::try_from(pk_bytes.as_slice()).unwrap();

        assert!(verify(&bad_pk, &sig, b"hello").is_err());
    }

    #[test]
    fn verify_rejects_truncated_message() {
        let seed = [9u8; 32];
        let ctx = Context::new(&seed);
        let sig = ctx.sign(b"a longer message to truncate");
        assert!(ctx.verify(&sig, b"a longer message to trunc").is_err());
    }
}
