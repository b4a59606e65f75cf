use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Domain tag prepended to every key derivation.
const KEY_DOMAIN: &[u8] = b"onm-object-key-v1:";

/// Identity key for a mapped object.
///
/// An `ObjectKey` is the first 8 bytes (little-endian) of the BLAKE3 hash of
/// an object's string form. The derivation is stable across processes and
/// platforms, so keys written to disk stay valid after a restart.
///
/// Distinct strings may in principle collide; mapping strategies treat a
/// collision exactly like a repeated string form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectKey(u64);

impl ObjectKey {
    /// Derive the key for a string form.
    pub fn of(string_form: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(KEY_DOMAIN);
        hasher.update(string_form.as_bytes());
        let hash = hasher.finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash.as_bytes()[..8]);
        Self(u64::from_le_bytes(prefix))
    }

    /// Derive the key for any value with a `Display` string form.
    pub fn of_display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::of(&value.to_string())
    }

    /// The raw 64-bit key.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Hex-encoded big-endian representation (16 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_be_bytes())
    }

    /// Parse from a 16-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 8 {
            return Err(TypeError::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes);
        Ok(Self(u64::from_be_bytes(arr)))
    }
}

impl fmt::Debug for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectKey({})", self.to_hex())
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
