//! Hash functions used by the rust-cryptonote ecosystem.
//!
//! CryptoNote hashes almost everything with `cn_fast_hash`, which is
//! Keccak-256 with the original Keccak padding rather than the padding the
//! NIST SHA-3 standard later settled on. The two produce different digests,
//! so reaching for a generic SHA-3 implementation silently breaks address
//! checksums.

use core::fmt;

use tiny_keccak::{Hasher, Keccak};

/// Size of a [`Hash256`] in bytes.
pub const HASH_SIZE: usize = 32;

/// A 32-byte hash value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256([u8; HASH_SIZE]);

impl Hash256 {
    /// Constructs a hash from a raw byte array.
    pub const fn from_byte_array(bytes: [u8; HASH_SIZE]) -> Self {
        Hash256(bytes)
    }

    /// Returns the underlying byte array.
    pub const fn to_byte_array(self) -> [u8; HASH_SIZE] {
        self.0
    }

    /// Returns a reference to the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self)
    }
}

/// Computes `cn_fast_hash` (Keccak-256) over `data`.
pub fn cn_fast_hash(data: &[u8]) -> Hash256 {
    let mut keccak = Keccak::v256();
    let mut output = [0u8; HASH_SIZE];
    keccak.update(data);
    keccak.finalize(&mut output);
    Hash256(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_empty() {
        assert_eq!(
            cn_fast_hash(b"").to_string(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak_abc() {
        assert_eq!(
            cn_fast_hash(b"abc").to_string(),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn test_byte_array_roundtrip() {
        let hash = cn_fast_hash(b"roundtrip");
        let rebuilt = Hash256::from_byte_array(hash.to_byte_array());
        assert_eq!(hash, rebuilt);
        assert_eq!(hash.as_bytes(), rebuilt.as_bytes());
    }

    #[test]
    fn test_display_matches_hex() {
        let hash = cn_fast_hash(b"display");
        assert_eq!(hash.to_string(), hex::encode(hash.as_bytes()));
        assert_eq!(format!("{:?}", hash), format!("Hash256({})", hash));
    }
}
