// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! The three personalized uses of the sponge hash.
//!
//! Each commits a distinct domain-separating prefix before any shared
//! input, so outputs under one personalization can never collide with
//! outputs under another, even when the underlying bytes overlap.

use crate::params::N;
use crate::sponge::Sponge;

const SIGHASH_SEP: &[u8; 8] = b"HASHSIGS";
const STREAM_KEY_SEP: &[u8; 8] = b"HASHSIGK";
const STREAM_NONCE_SEP: &[u8; 8] = b"HASHSIGN";

/// A sponge that has absorbed a depth/nonce personalization and is ready
/// to be finalized against any number of messages, each producing an
/// independent `N`-byte digest.
///
/// Mirrors `hashsig_keccak_prepare_hash`: one prepared state, reused
/// (by clone-and-finalize) for every hash call at a given tree depth —
/// both the WOTS chain hashes and the Merkle node hashes at that depth.
#[derive(Clone)]
pub struct PreparedHash(Sponge);

impl PreparedHash {
    /// Prepares a sponge personalized by `nonce`. Commits `nonce.len()`
    /// as a single byte, then `nonce` itself. An empty nonce yields the
    /// "unpersonalized" state (still distinguishable from any nonempty
    /// nonce, since the length byte differs).
    ///
    /// LMFS calls this with `nonce = &address[..depth]` — the address
    /// digest's prefix up to the current tree depth — so the one-byte
    /// length prefix and the prefix bytes together bind every hash at
    /// depth `i` to that specific address prefix.
    pub fn new(nonce: &[u8]) -> Self {
        let mut sponge = Sponge::new();
        sponge.absorb(&[nonce.len() as u8]);
        if !nonce.is_empty() {
            sponge.absorb(nonce);
        }
        PreparedHash(sponge)
    }

    /// Finalizes the prepared state against `msg`, returning an
    /// `N`-byte digest. Does not consume `self`.
    pub fn hash(&self, msg: &[u8]) -> [u8; N] {
        self.0.finalize_with::<N>(msg)
    }
}

/// Commits the public key and message into a single `N`-byte "address
/// digest", used both as the payload LMFS signs at the top level and as
/// the per-tree leaf selector.
///
/// Absorbs, in order: the `HASHSIGS` separator, the public key's length
/// (little-endian 64-bit), the
/// public key bytes, the separator again, then the message.
pub fn sighash(pub_key: &[u8], msg: &[u8]) -> [u8; N] {
    let mut sponge = Sponge::new();
    sponge.absorb(SIGHASH_SEP);
    sponge.absorb(&crate::util::store_le64(pub_key.len() as u64));
    sponge.absorb(pub_key);
    sponge.absorb(SIGHASH_SEP);
    sponge.absorb(msg);
    sponge.finalize_with::<N>(&[])
}

/// An expandable-output PRF used to derive a tree's private WOTS leaves
/// from the seed and an address prefix. Squeezes exactly `len` bytes.
///
/// Absorbs the `HASHSIGK`-framed key, then the `HASHSIGN`-framed nonce,
/// so every `(key, nonce)` pair yields an independent stream; since the
/// nonce here is the address prefix up to the current tree depth, every
/// `(tree, address-prefix)` pair is unique.
pub fn stream(key: &[u8], nonce: &[u8], len: usize) -> Vec<u8> {
    let mut sponge = Sponge::new();
    sponge.absorb(STREAM_KEY_SEP);
    sponge.absorb(&crate::util::store_le64(key.len() as u64));
    sponge.absorb(key);
    sponge.absorb(STREAM_KEY_SEP);
    sponge.absorb(STREAM_NONCE_SEP);
    sponge.absorb(&crate::util::store_le64(nonce.len() as u64));
    sponge.absorb(nonce);
    sponge.absorb(STREAM_NONCE_SEP);
    sponge.finalize_vec(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_hash_is_deterministic() {
        let a = PreparedHash::new(&[1, 2, 3]);
        let b = PreparedHash::new(&[1, 2, 3]);
        assert_eq!(a.hash(b"msg"), b.hash(b"msg"));
    }

    #[test]
    fn prepare_hash_distinguishes_depths() {
        let a = PreparedHash::new(&[1, 2, 3]);
        let b = PreparedHash::new(&[1, 2]);
        assert_ne!(a.hash(b"msg"), b.hash(b"msg"));
    }

    #[test]
    fn prepare_hash_empty_nonce_differs_from_nonempty() {
        let empty = PreparedHash::new(&[]);
        let one = PreparedHash::new(&[0]);
        assert_ne!(empty.hash(b"x"), one.hash(b"x"));
    }

    #[test]
    fn sighash_is_deterministic_and_binds_both_inputs() {
        let pk = [1u8; N];
        let pk2 = [2u8; N];
        assert_eq!(sighash(&pk, b"hello"), sighash(&pk, b"hello"));
        assert_ne!(sighash(&pk, b"hello"), sighash(&pk2, b"hello"));
        assert_ne!(sighash(&pk, b"hello"), sighash(&pk, b"world"));
    }

    #[test]
    fn stream_output_length_is_exact() {
        let out = stream(b"seed", b"\x00", 1000);
        assert_eq!(out.len(), 1000);
    }

    #[test]
    fn stream_binds_key_and_nonce_independently() {
        let a = stream(b"key1", b"nonce", 32);
        let b = stream(b"key2", b"nonce", 32);
        let c = stream(b"key1", b"other", 32);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
