use ledger_types::{output_id::OutputId, HexEncodedAmount, HexEncodedString};
use serde::{Deserialize, Serialize};

/// String that must not show up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretString(pub String);

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<omitted>")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        SecretString(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ed25519Signature {
    pub public_key: HexEncodedString,
    pub signature: HexEncodedString,
}

/// Stateless helper calls available to the language bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", content = "data", rename_all = "camelCase")]
pub enum UtilsMethod {
    /// Returns the id part of a bech32 address.
    Bech32ToHex { bech32: String },
    /// Encodes an Ed25519 address (public key hash) as bech32.
    #[serde(rename_all = "camelCase")]
    HexToBech32 {
        hex: HexEncodedString,
        bech32_hrp: String,
    },
    #[serde(rename_all = "camelCase")]
    AccountIdToBech32 {
        account_id: HexEncodedString,
        bech32_hrp: String,
    },
    #[serde(rename_all = "camelCase")]
    NftIdToBech32 {
        nft_id: HexEncodedString,
        bech32_hrp: String,
    },
    /// Hashes an Ed25519 public key into an address and encodes it as bech32.
    #[serde(rename_all = "camelCase")]
    HexPublicKeyToBech32Address {
        hex: HexEncodedString,
        bech32_hrp: String,
    },
    IsAddressValid { address: String },
    /// Generates a new 24 word mnemonic.
    GenerateMnemonic,
    /// Returns the BIP-39 seed of a mnemonic (empty passphrase).
    MnemonicToHexSeed { mnemonic: SecretString },
    /// Checks that the mnemonic is valid. Responds with `ok`.
    VerifyMnemonic { mnemonic: SecretString },
    /// Builds an output id from a transaction id and an output index.
    ComputeOutputId { id: HexEncodedString, index: u16 },
    #[serde(rename_all = "camelCase")]
    ComputeAccountId { output_id: OutputId },
    #[serde(rename_all = "camelCase")]
    ComputeNftId { output_id: OutputId },
    #[serde(rename_all = "camelCase")]
    ComputeFoundryId {
        account_id: HexEncodedString,
        serial_number: u32,
        token_scheme_type: u8,
    },
    #[serde(rename_all = "camelCase")]
    ComputeTokenId {
        account_id: HexEncodedString,
        serial_number: u32,
        token_scheme_type: u8,
    },
    Utf8ToHex { utf8: String },
    HexToUtf8 { hex: HexEncodedString },
    /// Returns the canonical form of a hex amount.
    NormalizeAmount { amount: HexEncodedAmount },
    VerifyEd25519Signature {
        signature: Ed25519Signature,
        message: HexEncodedString,
    },
    /// Verifies a compact ECDSA signature over the Keccak-256 digest of `message`.
    #[serde(rename_all = "camelCase")]
    VerifySecp256k1EcdsaSignature {
        public_key: HexEncodedString,
        signature: HexEncodedString,
        message: HexEncodedString,
    },
}
