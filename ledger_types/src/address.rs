//! Ledger addresses and their bech32 form.

use crate::{byte_array::ByteArray32, hash::blake2b_256, Error};

const LEN: usize = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Ed25519,
    Account,
    Nft,
}

impl AddressKind {
    pub fn tag(self) -> u8 {
        match self {
            AddressKind::Ed25519 => 0,
            AddressKind::Account => 8,
            AddressKind::Nft => 16,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self, Error> {
        match tag {
            0 => Ok(AddressKind::Ed25519),
            8 => Ok(AddressKind::Account),
            16 => Ok(AddressKind::Nft),
            _ => Err(Error::UnsupportedAddressKind(tag)),
        }
    }
}

/// Kind tag followed by a 32 byte id (public key hash, account id or NFT id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    kind: AddressKind,
    id: ByteArray32,
}

impl Address {
    pub fn new(kind: AddressKind, id: ByteArray32) -> Self {
        Address { kind, id }
    }

    pub fn from_ed25519_public_key(public_key: &[u8; 32]) -> Self {
        Address::new(AddressKind::Ed25519, blake2b_256(public_key))
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn id(&self) -> &ByteArray32 {
        &self.id
    }

    pub fn to_bytes(&self) -> [u8; LEN] {
        let mut bytes = [0u8; LEN];
        bytes[0] = self.kind.tag();
        bytes[1..].copy_from_slice(&self.id.0);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (tag, id) = bytes.split_first().ok_or(Error::InvalidLength {
            expected: LEN,
            actual: 0,
        })?;
        let kind = AddressKind::from_tag(*tag)?;
        let id = <[u8; 32]>::try_from(id).map_err(|_| Error::InvalidLength {
            expected: LEN,
            actual: bytes.len(),
        })?;
        Ok(Address::new(kind, id.into()))
    }

    pub fn to_bech32(&self, hrp: &str) -> Result<String, Error> {
        let hrp = bech32::Hrp::parse(hrp).map_err(|err| Error::InvalidBech32(err.to_string()))?;
        bech32::encode::<bech32::Bech32>(hrp, &self.to_bytes())
            .map_err(|err| Error::InvalidBech32(err.to_string()))
    }

    /// Returns the human readable part and the address.
    pub fn from_bech32(address: &str) -> Result<(String, Address), Error> {
        let (hrp, data) =
            bech32::decode(address).map_err(|err| Error::InvalidBech32(err.to_string()))?;
        Ok((hrp.to_string(), Address::from_bytes(&data)?))
    }

    pub fn is_valid_bech32(address: &str) -> bool {
        Address::from_bech32(address).is_ok()
    }
}
