use serde::{Deserialize, Serialize};

use crate::{
    amount::TokenAmount, byte_array::ByteArray, prefix_hex, Error, HexEncodedAmount,
    HexEncodedString, TokenId,
};

/// Native token balance as it appears in node and wallet JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeToken {
    pub id: HexEncodedString,
    pub amount: HexEncodedAmount,
}

impl NativeToken {
    pub fn new(id: &TokenId, amount: TokenAmount) -> Self {
        NativeToken {
            id: id.to_hex_encoded(),
            amount: amount.to_hex(),
        }
    }

    pub fn token_id(&self) -> Result<TokenId, Error> {
        prefix_hex::decode_to_array(&self.id).map(ByteArray)
    }

    pub fn amount_value(&self) -> Result<TokenAmount, Error> {
        TokenAmount::from_hex(&self.amount)
    }
}
