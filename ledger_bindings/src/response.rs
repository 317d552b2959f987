use ledger_types::{
    output_id::OutputId, AccountId, FoundryId, HexEncodedAmount, HexEncodedString, NftId, TokenId,
};
use serde::{Deserialize, Serialize};

use crate::method::SecretString;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    InvalidRequest,
    InvalidHex,
    InvalidMnemonic,
    InvalidKey,
    InvalidAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResp {
    pub text: String,
    pub code: ErrorCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Response {
    Bech32ToHex(HexEncodedString),
    Bech32Address(String),
    GeneratedMnemonic(SecretString),
    MnemonicHexSeed(SecretString),
    OutputId(OutputId),
    AccountId(AccountId),
    NftId(NftId),
    FoundryId(FoundryId),
    TokenId(TokenId),
    Hex(HexEncodedString),
    Utf8(String),
    Amount(HexEncodedAmount),
    Bool(bool),
    Ok,
    Error(ErrorResp),
}
