//! 256-bit unsigned amounts carried as [`HexEncodedAmount`] text.

use crate::{prefix_hex, Error, HexEncodedAmount};

const LEN: usize = 32;
const MAX_DIGITS: usize = LEN * 2;

/// Unsigned 256-bit value, big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenAmount([u8; LEN]);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount([0; LEN]);
    pub const MAX: TokenAmount = TokenAmount([0xff; LEN]);

    pub fn from_be_bytes(bytes: [u8; LEN]) -> Self {
        Self(bytes)
    }

    pub fn to_be_bytes(self) -> [u8; LEN] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Accepts odd digit counts and leading zeros, `0x` is required.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let digits = prefix_hex::strip_prefix(s)?;
        if digits.is_empty() {
            return Err(Error::EmptyAmount);
        }
        let significant = digits.trim_start_matches('0');
        if significant.len() > MAX_DIGITS {
            return Err(Error::AmountOverflow);
        }

        let mut padded = [b'0'; MAX_DIGITS];
        padded[MAX_DIGITS - significant.len()..].copy_from_slice(significant.as_bytes());

        let mut bytes = [0u8; LEN];
        // Padding shifts positions, map them back onto the caller's input
        let offset = MAX_DIGITS - significant.len();
        let leading = digits.len() - significant.len();
        hex::decode_to_slice(padded, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => prefix_hex::hex_error(
                hex::FromHexError::InvalidHexCharacter {
                    c,
                    index: index - offset,
                },
                prefix_hex::PREFIX.len() + leading,
            ),
            err => Error::InvalidHex(err),
        })?;
        Ok(Self(bytes))
    }

    /// Minimal lowercase form, zero is `0x0`.
    pub fn to_hex(&self) -> HexEncodedAmount {
        let digits = hex::encode(self.0);
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            format!("{}0", prefix_hex::PREFIX)
        } else {
            format!("{}{}", prefix_hex::PREFIX, significant)
        }
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self::from(u128::from(value))
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        let mut bytes = [0u8; LEN];
        bytes[LEN - 16..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }
}

impl TryFrom<TokenAmount> for u128 {
    type Error = Error;

    fn try_from(value: TokenAmount) -> Result<Self, Self::Error> {
        let (high, low) = value.0.split_at(LEN - 16);
        if high.iter().any(|b| *b != 0) {
            return Err(Error::AmountOverflow);
        }
        let mut low_bytes = [0u8; 16];
        low_bytes.copy_from_slice(low);
        Ok(u128::from_be_bytes(low_bytes))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for TokenAmount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for TokenAmount {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for TokenAmount {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::Deserialize;

        let s = <std::borrow::Cow<'de, str>>::deserialize(d)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
