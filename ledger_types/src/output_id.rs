use crate::{
    byte_array::ByteArray32, hash::blake2b_256, prefix_hex, Error, HexEncodedString, TransactionId,
};

pub const OUTPUT_INDEX_MAX: u16 = 127;

const TRANSACTION_ID_LEN: usize = 32;
const LEN: usize = TRANSACTION_ID_LEN + 2;

/// Transaction id followed by the little-endian output index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputId {
    transaction_id: TransactionId,
    index: u16,
}

impl OutputId {
    pub fn new(transaction_id: TransactionId, index: u16) -> Result<Self, Error> {
        if index > OUTPUT_INDEX_MAX {
            return Err(Error::InvalidOutputIndex(index));
        }
        Ok(Self {
            transaction_id,
            index,
        })
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    pub fn to_bytes(&self) -> [u8; LEN] {
        let mut bytes = [0u8; LEN];
        bytes[..TRANSACTION_ID_LEN].copy_from_slice(&self.transaction_id.0);
        bytes[TRANSACTION_ID_LEN..].copy_from_slice(&self.index.to_le_bytes());
        bytes
    }

    pub fn to_hex_encoded(&self) -> HexEncodedString {
        prefix_hex::encode(self.to_bytes())
    }

    /// Blake2b-256 of the output id bytes, this is the id of an account or NFT created by the output.
    pub fn hash(&self) -> ByteArray32 {
        blake2b_256(self.to_bytes())
    }
}

impl TryFrom<[u8; LEN]> for OutputId {
    type Error = Error;

    fn try_from(bytes: [u8; LEN]) -> Result<Self, Self::Error> {
        let mut transaction_id = [0u8; TRANSACTION_ID_LEN];
        transaction_id.copy_from_slice(&bytes[..TRANSACTION_ID_LEN]);
        let index = u16::from_le_bytes([bytes[TRANSACTION_ID_LEN], bytes[TRANSACTION_ID_LEN + 1]]);
        Self::new(transaction_id.into(), index)
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_hex_encoded())
    }
}

impl std::str::FromStr for OutputId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = prefix_hex::decode_to_array::<LEN>(s)?;
        Self::try_from(bytes)
    }
}

impl serde::Serialize for OutputId {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for OutputId {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::Deserialize;

        let s = <std::borrow::Cow<'de, str>>::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
