//! Names for strings that carry hex-encoded data.
//!
//! Both aliases are plain [`String`]s. Nothing here checks the content, values
//! are produced and validated by [`crate::prefix_hex`] and [`crate::amount`].

/// Hex-encoded bytes with a `0x` prefix, e.g. a hash, public key or signature.
pub type HexEncodedString = String;

/// Hex-encoded unsigned 256-bit integer with a `0x` prefix, e.g. a native token amount.
pub type HexEncodedAmount = String;
