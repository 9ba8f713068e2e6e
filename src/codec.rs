// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Fixed-length wire encoding for public keys and signatures: a one-byte
//! type tag followed by the parameter set's fields, with no length
//! prefixes of its own — the tag tells a reader everything it needs to
//! know about the layout that follows.

use std::convert::TryFrom;

use crate::error::CodecError;
use crate::params::{PUB_LEN, SIG_LEN, TYPE_TAG};

/// An encoded LMFS public key: one type-tag byte plus the `N`-byte root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(Box<[u8]>);

impl PublicKey {
    pub(crate) fn from_root(root: [u8; crate::params::N]) -> Self {
        let mut buf = vec![0u8; PUB_LEN];
        buf[0] = TYPE_TAG;
        buf[1..].copy_from_slice(&root);
        PublicKey(buf.into_boxed_slice())
    }

    /// The `N`-byte root, without the header.
    pub(crate) fn root(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Serializes to the exact `PUB_LEN`-byte wire form.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = CodecError;

    fn try_from(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() != PUB_LEN {
            return Err(CodecError::LengthMismatch {
                expected: PUB_LEN,
                actual: buf.len(),
            });
        }
        if buf[0] != TYPE_TAG {
            return Err(CodecError::UnknownType(buf[0]));
        }
        Ok(PublicKey(buf.to_vec().into_boxed_slice()))
    }
}

/// An encoded LMFS signature: the type tag plus `TREES` stacked
/// `(leaf public key, WOTS signature, authentication path)` records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Box<[u8]>);

impl Signature {
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), SIG_LEN);
        Signature(bytes.into_boxed_slice())
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Serializes to the exact `SIG_LEN`-byte wire form.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = CodecError;

    fn try_from(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() != SIG_LEN {
            return Err(CodecError::LengthMismatch {
                expected: SIG_LEN,
                actual: buf.len(),
            });
        }
        if buf[0] != TYPE_TAG {
            return Err(CodecError::UnknownType(buf[0]));
        }
        Ok(Signature(buf.to_vec().into_boxed_slice()))
    }
}
