// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Recoverable error kinds. Programmer errors (short
//! seed, mismatched public key at construction) panic at the call site
//! instead — they are not represented here.

use thiserror::Error;

/// Why a signature failed to verify.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// The signature's type-tag header did not match the context's
    /// parameter set. Checked before any hashing of the remaining
    /// signature fields. An unsupported type tag never reaches this far —
    /// [`CodecError::UnknownType`] rejects it at decode time.
    #[error("signature header does not match this parameter set")]
    HeaderMismatch,

    /// The WOTS signature, or the reconstructed Merkle path, did not
    /// validate against the expected public key.
    #[error("signature did not validate")]
    SignatureInvalid,
}

/// Why a byte buffer could not be decoded into a [`crate::PublicKey`] or
/// [`crate::Signature`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer length did not match the exact constant this parameter
    /// set requires.
    #[error("expected a buffer of exactly {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Type tag byte was not `0x00`.
    #[error("unrecognized type tag 0x{0:02x}")]
    UnknownType(u8),
}
