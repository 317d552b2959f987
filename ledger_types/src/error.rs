#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("hex string must start with 0x")]
    MissingPrefix,
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("empty amount")]
    EmptyAmount,
    #[error("amount does not fit into 256 bits")]
    AmountOverflow,
    #[error("invalid output index: {0}")]
    InvalidOutputIndex(u16),
    #[error("invalid bech32: {0}")]
    InvalidBech32(String),
    #[error("unsupported address kind: {0}")]
    UnsupportedAddressKind(u8),
}
