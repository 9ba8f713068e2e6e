// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! A hash-based many-time signature scheme: a forest of Merkle trees of
//! one-time WOTS keypairs, indexed by a message-derived address and
//! regenerated on demand from a single seed.
//!
//! Every key, tree node, and authentication path is derived — never
//! stored — from a keyed extendable-output stream. Signing and
//! verifying cost is dominated by that regeneration, not by I/O against
//! persisted state.
//!
//! ```
//! use lmfs_sig::Context;
//!
//! let seed = [0x42u8; 32];
//! let ctx = Context::new(&seed);
//! let sig = ctx.sign(b"attack at dawn");
//! assert!(ctx.verify(&sig, b"attack at dawn").is_ok());
//! ```

mod codec;
mod context;
mod error;
mod hash;
mod ldwm;
mod lmfs;
mod params;
mod sponge;
mod util;

pub use codec::{PublicKey, Signature};
pub use context::{verify, Context};
pub use error::{CodecError, VerifyError};
pub use params::{PUB_LEN, SIG_LEN};
