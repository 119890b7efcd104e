//! Variant selection for consumers that pick a hash width at runtime

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MurmurHash3 output width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Murmur3Variant {
    /// 32-bit digest, one-shot oriented
    #[serde(rename = "murmur3_32")]
    Bits32,
    /// 64-bit digest with incremental carry buffer
    #[serde(rename = "murmur3_64")]
    Bits64,
    /// 128-bit digest with incremental carry buffer
    #[serde(rename = "murmur3_128")]
    Bits128,
}

impl Murmur3Variant {
    /// Digest length in bytes
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Bits32 => 4,
            Self::Bits64 => 8,
            Self::Bits128 => 16,
        }
    }

    /// Number of input bytes consumed per mixing step
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Self::Bits32 => 4,
            Self::Bits64 => 8,
            Self::Bits128 => 16,
        }
    }

    /// Whether input may be split across update calls at arbitrary offsets
    #[must_use]
    pub const fn is_incremental(self) -> bool {
        !matches!(self, Self::Bits32)
    }

    /// Canonical name, as used by `Display` and serde
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bits32 => "murmur3_32",
            Self::Bits64 => "murmur3_64",
            Self::Bits128 => "murmur3_128",
        }
    }
}

impl fmt::Display for Murmur3Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Murmur3Variant {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let bits = normalized
            .strip_prefix("murmur3")
            .map(|rest| rest.trim_start_matches(['_', '-']))
            .unwrap_or(normalized.as_str());

        match bits {
            "32" => Ok(Self::Bits32),
            "64" => Ok(Self::Bits64),
            "128" => Ok(Self::Bits128),
            _ => Err(HashError::invalid_argument(format!(
                "unknown murmur3 variant '{s}'"
            ))),
        }
    }
}
