use ed25519_dalek::Verifier;
use ledger_types::{
    address::{Address, AddressKind},
    amount::TokenAmount,
    foundry,
    output_id::OutputId,
    prefix_hex, AccountId, TransactionId,
};
use sha3::Digest;

use crate::{method::UtilsMethod, response::Response, Error, Result};

const MNEMONIC_WORD_COUNT: usize = 24;
const PUBLIC_KEY_LEN: usize = 33;
const SIGNATURE_LEN: usize = 64;
const ED25519_PUBLIC_KEY_LEN: usize = 32;

pub fn call_utils_method(method: UtilsMethod) -> Response {
    log::debug!("utils method: {method:?}");

    let response = match call_utils_method_internal(method) {
        Ok(response) => response,
        Err(err) => {
            log::debug!("utils method failed: {err}");
            Response::Error(err.into())
        }
    };

    log::debug!("utils response: {response:?}");
    response
}

/// Takes and returns JSON, for bindings that only pass strings across.
pub fn call_utils_method_json(method: &str) -> String {
    let response = match serde_json::from_str::<UtilsMethod>(method) {
        Ok(method) => call_utils_method(method),
        Err(err) => {
            log::debug!("invalid utils method: {err}");
            Response::Error(Error::from(err).into())
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|err| {
        log::error!("response serialization failed: {err}");
        r#"{"type":"error","payload":{"text":"response serialization failed","code":"invalidRequest"}}"#
            .to_owned()
    })
}

fn call_utils_method_internal(method: UtilsMethod) -> Result<Response> {
    let response = match method {
        UtilsMethod::Bech32ToHex { bech32 } => {
            let (_hrp, address) = Address::from_bech32(&bech32)?;
            Response::Bech32ToHex(address.id().to_hex_encoded())
        }

        UtilsMethod::HexToBech32 { hex, bech32_hrp } => {
            bech32_address(AddressKind::Ed25519, &hex, &bech32_hrp)?
        }

        UtilsMethod::AccountIdToBech32 {
            account_id,
            bech32_hrp,
        } => bech32_address(AddressKind::Account, &account_id, &bech32_hrp)?,

        UtilsMethod::NftIdToBech32 { nft_id, bech32_hrp } => {
            bech32_address(AddressKind::Nft, &nft_id, &bech32_hrp)?
        }

        UtilsMethod::HexPublicKeyToBech32Address { hex, bech32_hrp } => {
            let public_key = prefix_hex::decode_to_array::<ED25519_PUBLIC_KEY_LEN>(&hex)?;
            let address = Address::from_ed25519_public_key(&public_key);
            Response::Bech32Address(address.to_bech32(&bech32_hrp)?)
        }

        UtilsMethod::IsAddressValid { address } => {
            Response::Bool(Address::is_valid_bech32(&address))
        }

        UtilsMethod::GenerateMnemonic => {
            let mnemonic = bip39::Mnemonic::generate(MNEMONIC_WORD_COUNT)?;
            Response::GeneratedMnemonic(mnemonic.to_string().into())
        }

        UtilsMethod::MnemonicToHexSeed { mnemonic } => {
            let mnemonic = bip39::Mnemonic::parse(mnemonic.0.as_str())?;
            Response::MnemonicHexSeed(prefix_hex::encode(mnemonic.to_seed("")).into())
        }

        UtilsMethod::VerifyMnemonic { mnemonic } => {
            bip39::Mnemonic::parse(mnemonic.0.as_str())?;
            Response::Ok
        }

        UtilsMethod::ComputeOutputId { id, index } => {
            let transaction_id = id.parse::<TransactionId>()?;
            Response::OutputId(OutputId::new(transaction_id, index)?)
        }

        UtilsMethod::ComputeAccountId { output_id } => Response::AccountId(output_id.hash()),

        UtilsMethod::ComputeNftId { output_id } => Response::NftId(output_id.hash()),

        UtilsMethod::ComputeFoundryId {
            account_id,
            serial_number,
            token_scheme_type,
        } => {
            let account_id = account_id.parse::<AccountId>()?;
            Response::FoundryId(foundry::foundry_id(
                &account_id,
                serial_number,
                token_scheme_type,
            ))
        }

        UtilsMethod::ComputeTokenId {
            account_id,
            serial_number,
            token_scheme_type,
        } => {
            let account_id = account_id.parse::<AccountId>()?;
            Response::TokenId(foundry::token_id(
                &account_id,
                serial_number,
                token_scheme_type,
            ))
        }

        UtilsMethod::Utf8ToHex { utf8 } => Response::Hex(prefix_hex::encode(utf8)),

        UtilsMethod::HexToUtf8 { hex } => {
            let bytes = prefix_hex::decode(&hex)?;
            Response::Utf8(String::from_utf8(bytes)?)
        }

        UtilsMethod::NormalizeAmount { amount } => {
            Response::Amount(TokenAmount::from_hex(&amount)?.to_hex())
        }

        UtilsMethod::VerifyEd25519Signature { signature, message } => {
            let public_key =
                prefix_hex::decode_to_array::<ED25519_PUBLIC_KEY_LEN>(&signature.public_key)?;
            let public_key = ed25519_dalek::VerifyingKey::from_bytes(&public_key)?;
            let signature = prefix_hex::decode_to_array::<SIGNATURE_LEN>(&signature.signature)?;
            let signature = ed25519_dalek::Signature::from_bytes(&signature);
            let message = prefix_hex::decode(&message)?;

            Response::Bool(public_key.verify(&message, &signature).is_ok())
        }

        UtilsMethod::VerifySecp256k1EcdsaSignature {
            public_key,
            signature,
            message,
        } => {
            let public_key = prefix_hex::decode_to_array::<PUBLIC_KEY_LEN>(&public_key)?;
            let public_key = secp256k1::PublicKey::from_slice(&public_key)?;
            let signature = prefix_hex::decode_to_array::<SIGNATURE_LEN>(&signature)?;
            let signature = secp256k1::ecdsa::Signature::from_compact(&signature)?;
            let message = prefix_hex::decode(&message)?;

            let digest: [u8; 32] = sha3::Keccak256::digest(&message).into();
            let message = secp256k1::Message::from_digest(digest);

            let valid = secp256k1::SECP256K1
                .verify_ecdsa(&message, &signature, &public_key)
                .is_ok();
            Response::Bool(valid)
        }
    };

    Ok(response)
}

fn bech32_address(kind: AddressKind, id: &str, hrp: &str) -> Result<Response> {
    let address = Address::new(kind, id.parse()?);
    Ok(Response::Bech32Address(address.to_bech32(hrp)?))
}

#[cfg(test)]
mod tests;
