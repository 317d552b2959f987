//! `0x`-prefixed hex codec used to produce and read [`HexEncodedString`] values.

use crate::{Error, HexEncodedString};

pub const PREFIX: &str = "0x";

pub fn encode(bytes: impl AsRef<[u8]>) -> HexEncodedString {
    let bytes = bytes.as_ref();
    let mut res = String::with_capacity(PREFIX.len() + bytes.len() * 2);
    res.push_str(PREFIX);
    res.push_str(&hex::encode(bytes));
    res
}

pub fn strip_prefix(s: &str) -> Result<&str, Error> {
    s.strip_prefix(PREFIX).ok_or(Error::MissingPrefix)
}

/// Moves a reported character position so that it counts from the start of
/// the caller's string, `offset` is where `digits` began in it.
pub(crate) fn hex_error(err: hex::FromHexError, offset: usize) -> Error {
    match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            Error::InvalidHex(hex::FromHexError::InvalidHexCharacter {
                c,
                index: index + offset,
            })
        }
        err => Error::InvalidHex(err),
    }
}

pub fn decode(s: &str) -> Result<Vec<u8>, Error> {
    let digits = strip_prefix(s)?;
    hex::decode(digits).map_err(|err| hex_error(err, PREFIX.len()))
}

pub fn decode_to_array<const LEN: usize>(s: &str) -> Result<[u8; LEN], Error> {
    let digits = strip_prefix(s)?;
    if digits.len() != LEN * 2 {
        // Report the alphabet problem first, it is the more useful one
        let bytes = decode(s)?;
        return Err(Error::InvalidLength {
            expected: LEN,
            actual: bytes.len(),
        });
    }
    let mut bytes = [0u8; LEN];
    hex::decode_to_slice(digits, &mut bytes).map_err(|err| hex_error(err, PREFIX.len()))?;
    Ok(bytes)
}

pub fn is_valid(s: &str) -> bool {
    decode(s).is_ok()
}
