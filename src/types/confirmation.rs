// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Validator confirmations as delivered next to a claimed state.

use core::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::SIGNATURE_LEN;

use super::id::ValidatorIndex;
use super::key::ValidatorKey;

/// How a confirmation names its signer.
///
/// On the wire a number is an index into the registry, a hex string is a
/// public key. Both forms of the same validator resolve to the same index.
/// Anything else is kept as [`ValidatorRef::Unresolvable`] so that one bad
/// entry only costs its own confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RefWire")]
pub enum ValidatorRef {
    Index(ValidatorIndex),
    Key(ValidatorKey),
    /// Names no validator: out-of-range index, malformed key, wrong type.
    Unresolvable(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RefWire {
    Number(u64),
    Text(String),
    Other(IgnoredAny),
}

impl From<RefWire> for ValidatorRef {
    fn from(wire: RefWire) -> Self {
        match wire {
            RefWire::Number(n) => match u16::try_from(n) {
                Ok(index) => ValidatorRef::Index(ValidatorIndex(index)),
                Err(_) => ValidatorRef::Unresolvable(n.to_string()),
            },
            RefWire::Text(text) => match ValidatorKey::from_hex(&text) {
                Ok(key) => ValidatorRef::Key(key),
                Err(_) => ValidatorRef::Unresolvable(text),
            },
            RefWire::Other(_) => ValidatorRef::Unresolvable(String::new()),
        }
    }
}

impl Serialize for ValidatorRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidatorRef::Index(index) => serializer.serialize_u16(index.0),
            ValidatorRef::Key(key) => key.serialize(serializer),
            ValidatorRef::Unresolvable(raw) => serializer.serialize_str(raw),
        }
    }
}

impl From<ValidatorIndex> for ValidatorRef {
    fn from(index: ValidatorIndex) -> Self {
        ValidatorRef::Index(index)
    }
}

impl From<ValidatorKey> for ValidatorRef {
    fn from(key: ValidatorKey) -> Self {
        ValidatorRef::Key(key)
    }
}

impl fmt::Display for ValidatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorRef::Index(index) => index.fmt(f),
            ValidatorRef::Key(key) => key.fmt(f),
            ValidatorRef::Unresolvable(raw) => {
                let shown: String = raw.chars().take(16).collect();
                write!(f, "unresolvable({:?})", shown)
            }
        }
    }
}

/// Raw signature bytes, hex on the wire.
///
/// Neither length nor encoding is checked here: a signature that is not 64
/// bytes of hex is a bad confirmation, not a transport error.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SignatureBytes(pub Vec<u8>);

impl SignatureBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SignatureBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<[u8; SIGNATURE_LEN]> for SignatureBytes {
    fn from(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Debug for SignatureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignatureBytes({} bytes)", self.0.len())
    }
}

impl Serialize for SignatureBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for SignatureBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Undecodable input becomes an empty signature, which never verifies.
        let bytes = match SignatureWire::deserialize(deserializer)? {
            SignatureWire::Text(s) => hex::decode(s).unwrap_or_default(),
            SignatureWire::Other(_) => Vec::new(),
        };
        Ok(Self(bytes))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignatureWire {
    Text(String),
    Other(IgnoredAny),
}

/// One validator's attestation of a claimed state.
///
/// An entry that is not a confirmation at all decodes to an unresolvable
/// signer with no signature instead of failing the surrounding bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfirmationWire")]
pub struct Confirmation {
    pub validator: ValidatorRef,
    pub signature: SignatureBytes,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfirmationWire {
    Entry {
        validator: ValidatorRef,
        #[serde(default)]
        signature: SignatureBytes,
    },
    Other(IgnoredAny),
}

impl From<ConfirmationWire> for Confirmation {
    fn from(wire: ConfirmationWire) -> Self {
        match wire {
            ConfirmationWire::Entry { validator, signature } => Self { validator, signature },
            ConfirmationWire::Other(_) => Self {
                validator: ValidatorRef::Unresolvable(String::new()),
                signature: SignatureBytes::default(),
            },
        }
    }
}

impl Confirmation {
    pub fn new(validator: impl Into<ValidatorRef>, signature: impl Into<SignatureBytes>) -> Self {
        Self {
            validator: validator.into(),
            signature: signature.into(),
        }
    }
}
