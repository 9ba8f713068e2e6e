// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! LMFS: the lazy Merkle forest that ties LDWM keypairs together into a
//! many-time signature scheme.
//!
//! Nothing here is ever persisted. Every tree — including the topmost
//! one whose root is the public key — is regenerated from `seed` and an
//! address prefix whenever it's needed, and discarded afterward.

use std::convert::TryInto;

use subtle::ConstantTimeEq;
use tracing::{debug, trace};

use crate::error::VerifyError;
use crate::hash::{sighash, PreparedHash};
use crate::ldwm;
use crate::params::{LEAVES, N, TREES, TREE_HEIGHT, TYPE_TAG, WOTS_SIG_LEN};

/// The result of materializing one tree: its root, the target leaf's
/// public key, and — if asked for — the target leaf's pristine private
/// chain array and its authentication path. Also carries the
/// depth-personalized hasher used to build it, so a caller that goes on
/// to WOTS-sign something doesn't need to re-derive the same
/// personalization.
struct Materialized {
    root: [u8; N],
    leaf_pub: [u8; N],
    leaf_priv: Option<Box<[u8; WOTS_SIG_LEN]>>,
    auth_path: Option<Vec<[u8; N]>>,
    hasher: PreparedHash,
}

/// Builds the tree at `depth`, selecting leaf `address[depth]`.
///
/// Regenerates all `2^h` WOTS keypairs from `stream(seed, address[..depth])`,
/// folds their public keys into a binary tree, and — when
/// `want_leaf_data` is set — captures the target leaf's pristine private
/// chain array (copied out *before* public-key derivation destroys it)
/// and its authentication path.
fn materialize(seed: &[u8], address: &[u8; N], depth: u8, want_leaf_data: bool) -> Materialized {
    let prefix = &address[..depth as usize];
    let leaf = address[depth as usize] as usize;

    trace!(depth, leaf, "materializing lmfs tree");

    let stream_bytes = crate::hash::stream(seed, prefix, LEAVES * WOTS_SIG_LEN);
    let mut priv_leaves: Vec<[u8; WOTS_SIG_LEN]> = Vec::with_capacity(LEAVES);
    for chunk in stream_bytes.chunks_exact(WOTS_SIG_LEN) {
        let mut arr = [0u8; WOTS_SIG_LEN];
        arr.copy_from_slice(chunk);
        priv_leaves.push(arr);
    }

    // The target leaf's pristine chains must be saved before public-key
    // derivation walks every chain to its end and destroys them.
    let saved_priv = want_leaf_data.then(|| Box::new(priv_leaves[leaf]));

    let hasher = PreparedHash::new(prefix);

    let mut nodes: Vec<[u8; N]> = priv_leaves
        .iter_mut()
        .map(|chains| ldwm::public_key_from_priv(&hasher, chains))
        .collect();
    let leaf_pub = nodes[leaf];

    let mut idx = leaf;
    let mut auth_path = want_leaf_data.then(|| Vec::with_capacity(TREE_HEIGHT as usize));

    while nodes.len() > 1 {
        let mut next = Vec::with_capacity(nodes.len() / 2);
        for (j, pair) in nodes.chunks(2).enumerate() {
            if let Some(path) = auth_path.as_mut() {
                if 2 * j == idx {
                    path.push(pair[1]);
                    idx = j;
                } else if 2 * j + 1 == idx {
                    path.push(pair[0]);
                    idx = j;
                }
            }
            let mut buf = [0u8; 2 * N];
            buf[..N].copy_from_slice(&pair[0]);
            buf[N..].copy_from_slice(&pair[1]);
            next.push(hasher.hash(&buf));
        }
        nodes = next;
    }

    Materialized {
        root: nodes[0],
        leaf_pub,
        leaf_priv: saved_priv,
        auth_path,
        hasher,
    }
}

/// Derives the persistent public key: the root of the depth-0 tree
/// under the all-zero address.
pub fn public_key(seed: &[u8]) -> [u8; N] {
    let zero_address = [0u8; N];
    materialize(seed, &zero_address, 0, false).root
}

/// Signs `msg`, returning the full `1 + T*(N + WOTS_SIG_LEN + PATH_LEN)`
/// byte signature (type tag included).
pub fn sign(seed: &[u8], pk_root: &[u8; N], msg: &[u8]) -> Vec<u8> {
    let address = sighash(pk_root, msg);
    let mut payload = address;

    let mut sig = Vec::with_capacity(crate::params::SIG_LEN);
    sig.push(TYPE_TAG);

    for depth in (0..TREES as u8).rev() {
        let mat = materialize(seed, &address, depth, true);
        let mut chains = *mat
            .leaf_priv
            .expect("materialize(want_leaf_data=true) always returns private chains");
        ldwm::sign(&mat.hasher, &mut chains, &payload, true);

        sig.extend_from_slice(&mat.leaf_pub);
        sig.extend_from_slice(&chains);
        for node in mat
            .auth_path
            .expect("materialize(want_leaf_data=true) always returns an auth path")
        {
            sig.extend_from_slice(&node);
        }

        payload = mat.root;
    }

    debug_assert_eq!(sig.len(), crate::params::SIG_LEN);
    sig
}

/// Verifies `sig` (already known to be exactly `SIG_LEN` bytes) against
/// `pk_root` for `msg`.
pub fn verify(pk_root: &[u8; N], sig: &[u8], msg: &[u8]) -> Result<(), VerifyError> {
    debug_assert_eq!(sig.len(), crate::params::SIG_LEN);

    if sig[0] != TYPE_TAG {
        return Err(VerifyError::HeaderMismatch);
    }

    let address = sighash(pk_root, msg);
    let mut payload = address;
    let mut cursor = 1usize;

    for depth in (0..TREES as u8).rev() {
        let prefix = &address[..depth as usize];
        let hasher = PreparedHash::new(prefix);

        let leaf_pub: [u8; N] = sig[cursor..cursor + N].try_into().unwrap();
        cursor += N;
        let wots_sig: [u8; WOTS_SIG_LEN] = sig[cursor..cursor + WOTS_SIG_LEN].try_into().unwrap();
        cursor += WOTS_SIG_LEN;

        if !ldwm::verify(&hasher, &leaf_pub, &wots_sig, &payload, true) {
            debug!(depth, "lmfs verify: wots signature rejected");
            return Err(VerifyError::SignatureInvalid);
        }

        let mut leaf = address[depth as usize] as usize;
        let mut node = leaf_pub;
        for _ in 0..TREE_HEIGHT {
            let sibling: [u8; N] = sig[cursor..cursor + N].try_into().unwrap();
            cursor += N;

            let mut buf = [0u8; 2 * N];
            if leaf & 1 == 0 {
                buf[..N].copy_from_slice(&node);
                buf[N..].copy_from_slice(&sibling);
            } else {
                buf[..N].copy_from_slice(&sibling);
                buf[N..].copy_from_slice(&node);
            }
            node = hasher.hash(&buf);
            leaf >>= 1;
        }

        payload = node;
    }

    if bool::from(payload.ct_eq(pk_root)) {
        Ok(())
    } else {
        debug!("lmfs verify: reconstructed root does not match public key");
        Err(VerifyError::SignatureInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_is_a_pure_function_of_seed() {
        let seed = [7u8; 32];
        assert_eq!(public_key(&seed), public_key(&seed));
    }

    #[test]
    fn different_seeds_yield_different_public_keys() {
        let a = public_key(&[1u8; 32]);
        let b = public_key(&[2u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn sign_then_verify_accepts() {
        let seed = [9u8; 32];
        let pk = public_key(&seed);
        let sig = sign(&seed, &pk, b"hello world");
        assert_eq!(sig.len(), crate::params::SIG_LEN);
        assert!(verify(&pk, &sig, b"hello world").is_ok());
    }

    #[test]
    fn sign_is_deterministic() {
        let seed = [3u8; 32];
        let pk = public_key(&seed);
        let sig1 = sign(&seed, &pk, b"repeat me");
        let sig2 = sign(&seed, &pk, b"repeat me");
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn verify_rejects_wrong_message() {
        let seed = [3u8; 32];
        let pk = public_key(&seed);
        let sig = sign(&seed, &pk, b"original");
        assert_eq!(
            verify(&pk, &sig, b"different"),
            Err(VerifyError::SignatureInvalid)
        );
    }

    #[test]
    fn verify_rejects_bad_header() {
        let seed = [3u8; 32];
        let pk = public_key(&seed);
        let mut sig = sign(&seed, &pk, b"original");
        sig[0] = 0x01;
        assert_eq!(verify(&pk, &sig, b"original"), Err(VerifyError::HeaderMismatch));
    }

    #[test]
    fn verify_rejects_single_bit_flip_in_signature() {
        let seed = [11u8; 32];
        let pk = public_key(&seed);
        let mut sig = sign(&seed, &pk, b"flip me");
        sig[50] ^= 0x01;
        assert!(verify(&pk, &sig, b"flip me").is_err());
    }

    #[test]
    fn verify_rejects_wrong_public_key() {
        let seed_a = [1u8; 32];
        let seed_b = [2u8; 32];
        let pk_a = public_key(&seed_a);
        let pk_b = public_key(&seed_b);
        let sig = sign(&seed_a, &pk_a, b"hello");
        assert!(verify(&pk_b, &sig, b"hello").is_err());
    }

    #[test]
    fn empty_message_signs_and_verifies() {
        let seed = [0u8; 32];
        let pk = public_key(&seed);
        let sig = sign(&seed, &pk, b"");
        assert!(verify(&pk, &sig, b"").is_ok());
    }
}
