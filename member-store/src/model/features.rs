//! Supported-feature bitset

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Capabilities a member player advertises
///
/// Bit values follow the host platform's media-player feature flags so a
/// raw `supported_features` integer can be wrapped as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberFeatures(u32);

impl MemberFeatures {
    pub const VOLUME_SET: MemberFeatures = MemberFeatures(4);
    pub const VOLUME_MUTE: MemberFeatures = MemberFeatures(8);
    pub const SELECT_SOURCE: MemberFeatures = MemberFeatures(2048);

    /// Wrap raw feature bits
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// True if every bit in `other` is set
    pub const fn contains(&self, other: MemberFeatures) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: MemberFeatures) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for MemberFeatures {
    type Output = MemberFeatures;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for MemberFeatures {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
