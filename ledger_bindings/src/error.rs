use crate::response::{ErrorCode, ErrorResp};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Types(#[from] ledger_types::Error),
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid mnemonic: {0}")]
    Mnemonic(#[from] bip39::Error),
    #[error("secp256k1 error: {0}")]
    Secp256k1(#[from] secp256k1::Error),
    #[error("ed25519 error: {0}")]
    Ed25519(#[from] ed25519_dalek::SignatureError),
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Error::Types(ledger_types::Error::InvalidOutputIndex(_)) => ErrorCode::InvalidRequest,
            Error::Types(
                ledger_types::Error::InvalidBech32(_) | ledger_types::Error::UnsupportedAddressKind(_),
            ) => ErrorCode::InvalidAddress,
            Error::Types(_) | Error::Utf8(_) => ErrorCode::InvalidHex,
            Error::Mnemonic(_) => ErrorCode::InvalidMnemonic,
            Error::Secp256k1(_) | Error::Ed25519(_) => ErrorCode::InvalidKey,
            Error::Json(_) => ErrorCode::InvalidRequest,
        }
    }
}

impl From<Error> for ErrorResp {
    fn from(val: Error) -> Self {
        ErrorResp {
            text: val.to_string(),
            code: val.error_code(),
        }
    }
}
