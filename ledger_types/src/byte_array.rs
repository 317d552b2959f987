use crate::{prefix_hex, HexEncodedString};

// Serialized as 0x-prefixed hex in JSON and byte strings in CBOR
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteArray<const LEN: usize>(pub [u8; LEN]);

impl<const LEN: usize> ByteArray<LEN> {
    pub fn to_hex_encoded(&self) -> HexEncodedString {
        prefix_hex::encode(self.0)
    }
}

impl<const LEN: usize> Default for ByteArray<LEN> {
    fn default() -> Self {
        Self([0u8; LEN])
    }
}

impl<const LEN: usize> From<[u8; LEN]> for ByteArray<LEN> {
    fn from(value: [u8; LEN]) -> Self {
        Self(value)
    }
}

impl<const LEN: usize> AsRef<[u8]> for ByteArray<LEN> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const LEN: usize> std::fmt::LowerHex for ByteArray<LEN> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if f.alternate() {
            f.write_str(prefix_hex::PREFIX)?;
        }
        for ch in self.0 {
            write!(f, "{:02x}", ch)?;
        }
        Ok(())
    }
}

impl<const LEN: usize> std::fmt::Display for ByteArray<LEN> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl<const LEN: usize> std::str::FromStr for ByteArray<LEN> {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        prefix_hex::decode_to_array(s).map(Self)
    }
}

impl<const LEN: usize> serde::Serialize for ByteArray<LEN> {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.collect_str(self)
        } else {
            s.serialize_bytes(&self.0)
        }
    }
}

impl<'de, const LEN: usize> serde::Deserialize<'de> for ByteArray<LEN> {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::Deserialize;

        if d.is_human_readable() {
            let s = <std::borrow::Cow<'de, str>>::deserialize(d)?;
            let bytes = prefix_hex::decode_to_array(&s).map_err(serde::de::Error::custom)?;
            Ok(Self(bytes))
        } else {
            let bytes = <serde_bytes::ByteBuf>::deserialize(d)?;
            let bytes = <[u8; LEN]>::try_from(bytes.as_slice()).map_err(|_| {
                serde::de::Error::invalid_length(bytes.len(), &"a fixed size byte string")
            })?;
            Ok(Self(bytes))
        }
    }
}

impl<const LEN: usize> rand::distributions::Distribution<ByteArray<LEN>>
    for rand::distributions::Standard
{
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> ByteArray<LEN> {
        let mut data = [0u8; LEN];
        rng.fill_bytes(&mut data);
        ByteArray(data)
    }
}

pub type ByteArray32 = ByteArray<32>;
pub type ByteArray33 = ByteArray<33>;
pub type ByteArray64 = ByteArray<64>;
