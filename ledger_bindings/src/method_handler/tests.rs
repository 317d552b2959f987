use ed25519_dalek::Signer;
use ledger_types::{output_id::OutputId, HexEncodedString};
use secp256k1::{PublicKey, SecretKey, SECP256K1};

use super::*;
use crate::response::ErrorCode;

const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn error_code(response: Response) -> ErrorCode {
    match response {
        Response::Error(err) => err.code,
        other => panic!("unexpected response: {other:?}"),
    }
}

const ACCOUNT_ID: &str = "0xf1c011fb54df4a4e5b07462536fbacc779bf80cc45e03bc3410836587b4efc98";

fn sign(secret_key: &SecretKey, message: &[u8]) -> HexEncodedString {
    let digest: [u8; 32] = sha3::Keccak256::digest(message).into();
    sign_digest(secret_key, digest)
}

fn sign_digest(secret_key: &SecretKey, digest: [u8; 32]) -> HexEncodedString {
    let signature = SECP256K1.sign_ecdsa(&secp256k1::Message::from_digest(digest), secret_key);
    prefix_hex::encode(signature.serialize_compact())
}

#[test]
fn mnemonic_seed() {
    let response = call_utils_method(UtilsMethod::MnemonicToHexSeed {
        mnemonic: MNEMONIC.to_owned().into(),
    });
    // BIP-39 test vector with an empty passphrase
    let expected = "0x5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";
    assert_eq!(response, Response::MnemonicHexSeed(expected.to_owned().into()));
}

#[test]
fn generated_mnemonic_is_valid() {
    let mnemonic = match call_utils_method(UtilsMethod::GenerateMnemonic) {
        Response::GeneratedMnemonic(mnemonic) => mnemonic,
        other => panic!("unexpected response: {other:?}"),
    };
    assert_eq!(mnemonic.0.split_whitespace().count(), MNEMONIC_WORD_COUNT);

    let response = call_utils_method(UtilsMethod::VerifyMnemonic { mnemonic });
    assert_eq!(response, Response::Ok);
}

#[test]
fn invalid_mnemonic() {
    let response = call_utils_method(UtilsMethod::VerifyMnemonic {
        mnemonic: "abandon abandon".to_owned().into(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidMnemonic);
}

#[test]
fn utf8_hex() {
    let response = call_utils_method(UtilsMethod::Utf8ToHex {
        utf8: "hello".to_owned(),
    });
    assert_eq!(response, Response::Hex("0x68656c6c6f".to_owned()));

    let response = call_utils_method(UtilsMethod::HexToUtf8 {
        hex: "0x68656c6c6f".to_owned(),
    });
    assert_eq!(response, Response::Utf8("hello".to_owned()));

    let response = call_utils_method(UtilsMethod::HexToUtf8 {
        hex: "0xff".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidHex);

    let response = call_utils_method(UtilsMethod::HexToUtf8 {
        hex: "68656c6c6f".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidHex);
}

#[test]
fn normalize_amount() {
    let response = call_utils_method(UtilsMethod::NormalizeAmount {
        amount: "0x00002A".to_owned(),
    });
    assert_eq!(response, Response::Amount("0x2a".to_owned()));

    let response = call_utils_method(UtilsMethod::NormalizeAmount {
        amount: "0x".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidHex);
}

#[test]
fn output_id() {
    let txid = "0x52fdfc072182654f163f5f0f9a621d729566c74d10037c4d7bbb0407d1e2c649";
    let response = call_utils_method(UtilsMethod::ComputeOutputId {
        id: txid.to_owned(),
        index: 3,
    });
    let output_id = match response {
        Response::OutputId(output_id) => output_id,
        other => panic!("unexpected response: {other:?}"),
    };
    assert_eq!(output_id.to_hex_encoded(), format!("{txid}0300"));

    let response = call_utils_method(UtilsMethod::ComputeOutputId {
        id: txid.to_owned(),
        index: 500,
    });
    assert_eq!(error_code(response), ErrorCode::InvalidRequest);
}

#[test]
fn secp256k1_signature() {
    let secret_key = SecretKey::from_slice(&[0x11; 32]).unwrap();
    let public_key = prefix_hex::encode(PublicKey::from_secret_key(SECP256K1, &secret_key).serialize());
    let message = b"ledger message";
    let signature = sign(&secret_key, message);

    let response = call_utils_method(UtilsMethod::VerifySecp256k1EcdsaSignature {
        public_key: public_key.clone(),
        signature: signature.clone(),
        message: prefix_hex::encode(message),
    });
    assert_eq!(response, Response::Bool(true));

    let response = call_utils_method(UtilsMethod::VerifySecp256k1EcdsaSignature {
        public_key: public_key.clone(),
        signature,
        message: prefix_hex::encode(b"other message"),
    });
    assert_eq!(response, Response::Bool(false));

    let response = call_utils_method(UtilsMethod::VerifySecp256k1EcdsaSignature {
        public_key: prefix_hex::encode([0x05; PUBLIC_KEY_LEN]),
        signature: prefix_hex::encode([0x01; SIGNATURE_LEN]),
        message: "0x".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidKey);

    let response = call_utils_method(UtilsMethod::VerifySecp256k1EcdsaSignature {
        public_key,
        signature: "0x00".to_owned(),
        message: "0x".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidHex);
}

#[test]
fn secp256k1_signature_uses_keccak256() {
    let secret_key = SecretKey::from_slice(&[0x11; 32]).unwrap();
    let public_key = prefix_hex::encode(PublicKey::from_secret_key(SECP256K1, &secret_key).serialize());
    let message = b"ledger message";

    let keccak: [u8; 32] = sha3::Keccak256::digest(message).into();
    let response = call_utils_method(UtilsMethod::VerifySecp256k1EcdsaSignature {
        public_key: public_key.clone(),
        signature: sign_digest(&secret_key, keccak),
        message: prefix_hex::encode(message),
    });
    assert_eq!(response, Response::Bool(true));

    // SHA3-256 uses different padding than Keccak-256
    let sha3: [u8; 32] = sha3::Sha3_256::digest(message).into();
    assert_ne!(sha3, keccak);
    let response = call_utils_method(UtilsMethod::VerifySecp256k1EcdsaSignature {
        public_key,
        signature: sign_digest(&secret_key, sha3),
        message: prefix_hex::encode(message),
    });
    assert_eq!(response, Response::Bool(false));
}

#[test]
fn ed25519_signature() {
    let signing_key = ed25519_dalek::SigningKey::from_bytes(&[7; 32]);
    let message = b"ledger message";
    let signature = crate::method::Ed25519Signature {
        public_key: prefix_hex::encode(signing_key.verifying_key().to_bytes()),
        signature: prefix_hex::encode(signing_key.sign(message).to_bytes()),
    };

    let response = call_utils_method(UtilsMethod::VerifyEd25519Signature {
        signature: signature.clone(),
        message: prefix_hex::encode(message),
    });
    assert_eq!(response, Response::Bool(true));

    let response = call_utils_method(UtilsMethod::VerifyEd25519Signature {
        signature: signature.clone(),
        message: prefix_hex::encode(b"other message"),
    });
    assert_eq!(response, Response::Bool(false));

    let response = call_utils_method(UtilsMethod::VerifyEd25519Signature {
        signature: crate::method::Ed25519Signature {
            public_key: signature.public_key,
            signature: "0x00".to_owned(),
        },
        message: "0x".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidHex);
}

#[test]
fn bech32_addresses() {
    let response = call_utils_method(UtilsMethod::HexPublicKeyToBech32Address {
        hex: "0x2baaf3bca8ace9f862e60184bd3e79df25ff230f7eaaa4c7f03daa9833ba854a".to_owned(),
        bech32_hrp: "atoi".to_owned(),
    });
    assert_eq!(
        response,
        Response::Bech32Address(
            "atoi1qzt0nhsf38nh6rs4p6zs5knqp6psgha9wsv74uajqgjmwc75ugupx3y7x0r".to_owned()
        )
    );

    let public_key_hash = "0xefdc112efe262b304bcf379b26c31bad029f616ee3ec4aa6345a366e4c9e43a3";
    let ed25519 = "iota1qrhacyfwlcnzkvzteumekfkrrwks98mpdm37cj4xx3drvmjvnep6xqgyzyx";
    let response = call_utils_method(UtilsMethod::HexToBech32 {
        hex: public_key_hash.to_owned(),
        bech32_hrp: "iota".to_owned(),
    });
    assert_eq!(response, Response::Bech32Address(ed25519.to_owned()));

    let response = call_utils_method(UtilsMethod::Bech32ToHex {
        bech32: ed25519.to_owned(),
    });
    assert_eq!(response, Response::Bech32ToHex(public_key_hash.to_owned()));

    let account = "iota1prcuqy0m2n055njmqarz2dhm4nrhn0uqe3z7qw7rgyyrvkrmfm7fsnwyxu6";
    let response = call_utils_method(UtilsMethod::AccountIdToBech32 {
        account_id: ACCOUNT_ID.to_owned(),
        bech32_hrp: "iota".to_owned(),
    });
    assert_eq!(response, Response::Bech32Address(account.to_owned()));

    let response = call_utils_method(UtilsMethod::IsAddressValid {
        address: account.to_owned(),
    });
    assert_eq!(response, Response::Bool(true));

    let response = call_utils_method(UtilsMethod::IsAddressValid {
        address: account.replace('6', "7"),
    });
    assert_eq!(response, Response::Bool(false));

    let response = call_utils_method(UtilsMethod::Bech32ToHex {
        bech32: "not an address".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidAddress);

    let response = call_utils_method(UtilsMethod::NftIdToBech32 {
        nft_id: "0x00".to_owned(),
        bech32_hrp: "iota".to_owned(),
    });
    assert_eq!(error_code(response), ErrorCode::InvalidHex);
}

#[test]
fn computed_ids() {
    let output_id = OutputId::new(ACCOUNT_ID.parse().unwrap(), 1).unwrap();

    let response = call_utils_method(UtilsMethod::ComputeAccountId { output_id });
    assert_eq!(response, Response::AccountId(output_id.hash()));

    let response = call_utils_method(UtilsMethod::ComputeNftId { output_id });
    assert_eq!(response, Response::NftId(output_id.hash()));

    let expected = format!("0x08{}0100000000", &ACCOUNT_ID[2..]);
    let response = call_utils_method(UtilsMethod::ComputeFoundryId {
        account_id: ACCOUNT_ID.to_owned(),
        serial_number: 1,
        token_scheme_type: 0,
    });
    assert_eq!(response, Response::FoundryId(expected.parse().unwrap()));

    let response = call_utils_method(UtilsMethod::ComputeTokenId {
        account_id: ACCOUNT_ID.to_owned(),
        serial_number: 1,
        token_scheme_type: 0,
    });
    assert_eq!(response, Response::TokenId(expected.parse().unwrap()));
}

#[test]
fn secrets_are_not_logged() {
    let method = UtilsMethod::MnemonicToHexSeed {
        mnemonic: MNEMONIC.to_owned().into(),
    };
    let debug = format!("{method:?}");
    assert!(!debug.contains("abandon"));
    assert!(debug.contains("<omitted>"));
}
