// Copyright (C) 2026 Quentin Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! The one recognized parameter set, and its type-tag layout.
//!
//! There is no external configuration file for this crate — the type
//! tag *is* the configuration, and decoding it is this module's job,
//! the same way a config loader validates a profile name before
//! accepting it.

/// Digest size in bytes.
pub const N: usize = 32;
/// WOTS chain element size in bytes (equal to `N` in this parameter set).
pub const M: usize = N;
/// Winternitz window, in bits.
pub const LOG2_W: usize = 4;
/// `2^w - 1`: the maximum chain length / largest base-`w` digit value.
pub const MAX_DIGIT: u8 = (1 << LOG2_W) - 1;
/// Message digits (`ceil(8*N/w)`).
pub const L1: usize = 8 * N / LOG2_W;
/// Checksum digits.
pub const L2: usize = 3;
/// Checksum left-shift, in bits.
pub const CHECKSUM_SHIFT: u32 = 4;
/// Total chains per WOTS keypair.
pub const P: usize = L1 + L2;
/// One WOTS signature (or private/public chain array), in bytes.
pub const WOTS_SIG_LEN: usize = P * M;

/// Tree height: bits of address consumed per stacked tree.
pub const TREE_HEIGHT: u32 = 8;
/// Leaves per tree (`2^TREE_HEIGHT`).
pub const LEAVES: usize = 1 << TREE_HEIGHT;
/// Number of stacked trees (`256 / TREE_HEIGHT`).
pub const TREES: usize = 256 / TREE_HEIGHT as usize;
/// Authentication path length per tree, in bytes.
pub const PATH_LEN: usize = TREE_HEIGHT as usize * N;
/// One header byte in front of every serialized public key and signature.
pub const SIG_HEADER: usize = 1;
/// Total signature length in bytes.
pub const SIG_LEN: usize = SIG_HEADER + TREES * (N + WOTS_SIG_LEN + PATH_LEN);
/// Total public key length in bytes.
pub const PUB_LEN: usize = SIG_HEADER + N;

/// The only type tag this crate accepts for context construction.
pub const TYPE_TAG: u8 = 0x00;

/// Decoded form of the type-tag bit layout.
///
/// Bit 0-1: `log2(w)`. Bit 2: selects `M`/`T` variant. Bit 3: selects
/// `N=64` vs `N=32`. Bit 4: selects `h=16` vs `h=8`. Bit 5: selects
/// Skein-1024 instead of Keccak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLayout {
    pub log2_w: u8,
    pub m_or_t: bool,
    pub n64: bool,
    pub h16: bool,
    pub skein: bool,
}

impl TagLayout {
    /// Decodes any tag byte, valid or not — used to render a readable
    /// description of an unsupported public key or signature rather
    /// than a bare "parse failed".
    pub fn decode(tag: u8) -> Self {
        TagLayout {
            log2_w: tag & 0x03,
            m_or_t: tag & 0x04 != 0,
            n64: tag & 0x08 != 0,
            h16: tag & 0x10 != 0,
            skein: tag & 0x20 != 0,
        }
    }

    /// Whether this tag matches the one parameter set this crate
    /// implements (`0x00`: w=4, N=32, h=8, Keccak).
    pub fn is_supported(self) -> bool {
        self == TagLayout::decode(TYPE_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_parameter_set() {
        assert_eq!(P, 67);
        assert_eq!(WOTS_SIG_LEN, 2144);
        assert_eq!(LEAVES, 256);
        assert_eq!(TREES, 32);
        assert_eq!(PATH_LEN, 256);
        assert_eq!(SIG_LEN, 77_825);
        assert_eq!(PUB_LEN, 33);
    }

    #[test]
    fn zero_tag_is_the_only_supported_layout() {
        assert!(TagLayout::decode(0x00).is_supported());
        assert!(!TagLayout::decode(0x01).is_supported());
        assert!(!TagLayout::decode(0x20).is_supported());
        assert!(!TagLayout::decode(0xff).is_supported());
    }

    #[test]
    fn decode_reads_each_field_independently() {
        let t = TagLayout::decode(0b0010_1101);
        assert_eq!(t.log2_w, 0b01);
        assert!(t.m_or_t);
        assert!(t.n64);
        assert!(!t.h16);
        assert!(t.skein);
    }
}
