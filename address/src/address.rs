//! CryptoNote public address parsing and rendering.
//!
//! A public address carries a varint network prefix, the public spend and
//! view keys, and, for integrated addresses, a payment id. The serialized
//! payload is checksummed and rendered with the block base58 codec from
//! [`crate::base58`].

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use crate::serde;

use crate::base58;
use crate::error::{Error, Result};
use crate::varint;

/// Public address prefix of the TurtleCoin mainnet. Addresses carrying it
/// start with "TRTL".
pub const TURTLECOIN_PUBLIC_ADDRESS_PREFIX: u64 = 3914525;

/// Size of a public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// A 32-byte CryptoNote public key.
///
/// Spend and view keys are ed25519 points, but the address codec treats
/// them as opaque bytes; whether a key is a valid curve point is a wallet
/// concern.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Constructs a key from a raw byte array.
    pub const fn from_byte_array(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        PublicKey(bytes)
    }

    /// Constructs a key from a byte slice.
    ///
    /// Fails with [`Error::InvalidKeyLength`] unless the slice is exactly
    /// 32 bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let bytes: [u8; PUBLIC_KEY_SIZE] =
            data.try_into().map_err(|_| Error::InvalidKeyLength(data.len()))?;
        Ok(PublicKey(bytes))
    }

    /// Constructs a key from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)
            .map_err(|e| Error::InvalidEncoding(format!("invalid hex key: {}", e)))?;
        Self::from_slice(&bytes)
    }

    /// Returns a reference to the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Returns the underlying byte array.
    pub const fn to_byte_array(self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

/// Payment id carried by an integrated address.
///
/// The codec does not fix its length: on decode it is whatever lies between
/// the view key and the checksum. TurtleCoin integrated addresses carry 64
/// bytes, Monero's carry 8.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PaymentId(Vec<u8>);

impl PaymentId {
    /// Constructs a payment id from raw bytes.
    ///
    /// Fails with [`Error::InvalidEncoding`] on an empty slice; an
    /// integrated address without a payment id is a standard address.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::InvalidEncoding("payment id must not be empty".into()));
        }
        Ok(PaymentId(data.to_vec()))
    }

    /// Returns the payment id bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the payment id, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the payment id in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; empty payment ids cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaymentId({})", self)
    }
}

/// A parsed CryptoNote public address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Network prefix identifying the chain and address kind.
    pub prefix: u64,
    /// Public spend key.
    pub spend: PublicKey,
    /// Public view key.
    pub view: PublicKey,
    /// Payment id, present on integrated addresses.
    pub payment_id: Option<PaymentId>,
}

impl Address {
    /// Creates a standard address.
    pub fn new(prefix: u64, spend: PublicKey, view: PublicKey) -> Self {
        Address {
            prefix,
            spend,
            view,
            payment_id: None,
        }
    }

    /// Creates an integrated address carrying a payment id.
    pub fn with_payment_id(
        prefix: u64,
        spend: PublicKey,
        view: PublicKey,
        payment_id: PaymentId,
    ) -> Self {
        Address {
            prefix,
            spend,
            view,
            payment_id: Some(payment_id),
        }
    }

    /// Encodes the address as a base58 string.
    ///
    /// Deterministic: the same address always renders to the same string.
    pub fn encode(&self) -> String {
        let payment_id_len = self.payment_id.as_ref().map_or(0, PaymentId::len);
        let mut payload = Vec::with_capacity(
            varint::encode(self.prefix).len() + 2 * PUBLIC_KEY_SIZE + payment_id_len,
        );
        varint::write(self.prefix, &mut payload);
        payload.extend_from_slice(self.spend.as_bytes());
        payload.extend_from_slice(self.view.as_bytes());
        if let Some(payment_id) = &self.payment_id {
            payload.extend_from_slice(payment_id.as_bytes());
        }
        base58::encode_check(&payload)
    }

    /// Decodes a base58 address string.
    ///
    /// Verifies the checksum over everything but the trailing
    /// [`base58::CHECKSUM_SIZE`] bytes, parses the varint prefix, then
    /// splits the remainder into spend key, view key and optional payment
    /// id. Either returns the fully parsed address or exactly one error;
    /// nothing is partially decoded.
    pub fn decode(s: &str) -> Result<Self> {
        let payload = base58::decode_check(s)?;
        let (prefix, consumed) = varint::decode(&payload)?;

        let keys = &payload[consumed..];
        if keys.len() < 2 * PUBLIC_KEY_SIZE {
            return Err(Error::InvalidEncoding(format!(
                "{} bytes after the prefix cannot hold two public keys",
                keys.len()
            )));
        }

        let spend = PublicKey::from_slice(&keys[..PUBLIC_KEY_SIZE])?;
        let view = PublicKey::from_slice(&keys[PUBLIC_KEY_SIZE..2 * PUBLIC_KEY_SIZE])?;
        let payment_id = match &keys[2 * PUBLIC_KEY_SIZE..] {
            [] => None,
            rest => Some(PaymentId::from_bytes(rest)?),
        };

        Ok(Address {
            prefix,
            spend,
            view,
            payment_id,
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::decode(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        struct AddressVisitor;

        impl serde::de::Visitor<'_> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a base58 cryptonote address string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> core::result::Result<Address, E> {
                Address::decode(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = PublicKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 64-character hex public key")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> core::result::Result<PublicKey, E> {
                PublicKey::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}
