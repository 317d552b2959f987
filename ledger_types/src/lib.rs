pub mod address;
pub mod amount;
pub mod byte_array;
pub mod error;
pub mod foundry;
pub mod hash;
pub mod hex_encoded;
pub mod native_token;
pub mod output_id;
pub mod prefix_hex;

pub use error::Error;
pub use hex_encoded::{HexEncodedAmount, HexEncodedString};

pub type TransactionId = byte_array::ByteArray32;
pub type AccountId = byte_array::ByteArray32;
pub type NftId = byte_array::ByteArray32;
pub type FoundryId = byte_array::ByteArray<38>;
pub type TokenId = byte_array::ByteArray<38>;
