// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! LDWM: Winternitz one-time signature with a Merkle-style checksum
//! (Lamport / Diffie / Winternitz / Merkle lineage).
//!
//! All hashing here runs through a caller-supplied [`PreparedHash`],
//! already personalized for the tree depth this keypair belongs to —
//! this module never constructs its own sponge state.

use std::convert::TryInto;

use subtle::ConstantTimeEq;

use crate::hash::PreparedHash;
use crate::params::{CHECKSUM_SHIFT, M, MAX_DIGIT, N, P, WOTS_SIG_LEN};
use crate::util::store_le16;

/// Applies `H` to `buf` exactly `n` times in place (`F(0, x) = x`).
fn chain(ph: &PreparedHash, n: u8, buf: &mut [u8; M]) {
    for _ in 0..n {
        *buf = ph.hash(buf);
    }
}

/// Reads the `i`-th base-`2^w` digit of `buf`, low nibble first within
/// each byte.
fn digit_at(buf: &[u8], i: usize) -> u8 {
    let byte = buf[i / 2];
    if i % 2 == 0 {
        byte & MAX_DIGIT
    } else {
        (byte >> 4) & MAX_DIGIT
    }
}

/// The checksum of an `N`-byte digest: `sum(e - digit)` over its base-`w`
/// digits, shifted left to occupy the remaining bits of its 2-byte
/// field. Any forgery that increases a message digit must decrease a
/// checksum digit, which requires inverting `H`.
fn checksum(v: &[u8; N]) -> u16 {
    let mut sum: u16 = 0;
    for &byte in v.iter() {
        let mut a = byte;
        for _ in 0..(8 / 4) {
            sum += (MAX_DIGIT - (a & MAX_DIGIT)) as u16;
            a >>= 4;
        }
    }
    sum << CHECKSUM_SHIFT
}

/// Builds the `(N+2)`-byte value-plus-checksum buffer that both sign and
/// verify walk digit by digit.
fn digest_with_checksum(ph: &PreparedHash, msg: &[u8], pre_hashed: bool) -> [u8; N + 2] {
    let v: [u8; N] = if pre_hashed {
        msg.try_into().expect("pre-hashed message must be N bytes")
    } else {
        ph.hash(msg)
    };
    let c = checksum(&v);
    let mut vc = [0u8; N + 2];
    vc[..N].copy_from_slice(&v);
    store_le16(&mut vc[N..], c);
    vc
}

/// Derives the WOTS public key from a private chain array, destroying
/// the array in the process (each chain is walked to its full length).
/// Callers who need the pristine private array afterward (to sign with)
/// must copy it out first.
pub fn public_key_from_priv(ph: &PreparedHash, priv_chains: &mut [u8; WOTS_SIG_LEN]) -> [u8; N] {
    for i in 0..P {
        let chunk: &mut [u8; M] = (&mut priv_chains[i * M..(i + 1) * M])
            .try_into()
            .unwrap();
        chain(ph, MAX_DIGIT, chunk);
    }
    ph.hash(priv_chains)
}

/// Signs `msg` (or, if `pre_hashed`, treats `msg` directly as the
/// `N`-byte digest) under the private chain array, mutating it in place
/// into the signature.
pub fn sign(ph: &PreparedHash, priv_chains: &mut [u8; WOTS_SIG_LEN], msg: &[u8], pre_hashed: bool) {
    let vc = digest_with_checksum(ph, msg, pre_hashed);
    for i in 0..P {
        let d = digit_at(&vc, i);
        let chunk: &mut [u8; M] = (&mut priv_chains[i * M..(i + 1) * M])
            .try_into()
            .unwrap();
        chain(ph, d, chunk);
    }
}

/// Verifies `sig` against `pub_key` for `msg`.
pub fn verify(
    ph: &PreparedHash,
    pub_key: &[u8; N],
    sig: &[u8; WOTS_SIG_LEN],
    msg: &[u8],
    pre_hashed: bool,
) -> bool {
    let vc = digest_with_checksum(ph, msg, pre_hashed);
    let mut copy = *sig;
    for i in 0..P {
        let d = digit_at(&vc, i);
        let chunk: &mut [u8; M] = (&mut copy[i * M..(i + 1) * M]).try_into().unwrap();
        chain(ph, MAX_DIGIT - d, chunk);
    }
    let computed = ph.hash(&copy);
    bool::from(computed.ct_eq(pub_key))
}
