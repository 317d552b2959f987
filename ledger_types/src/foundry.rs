use crate::{address::AddressKind, AccountId, FoundryId, TokenId};

pub const SIMPLE_TOKEN_SCHEME_KIND: u8 = 0;

/// Account address of the controlling account, then the serial number (LE) and the token scheme kind.
pub fn foundry_id(account_id: &AccountId, serial_number: u32, token_scheme_kind: u8) -> FoundryId {
    let mut bytes = [0u8; 38];
    bytes[0] = AddressKind::Account.tag();
    bytes[1..33].copy_from_slice(&account_id.0);
    bytes[33..37].copy_from_slice(&serial_number.to_le_bytes());
    bytes[37] = token_scheme_kind;
    FoundryId::from(bytes)
}

/// Native tokens are identified by the id of the foundry that minted them.
pub fn token_id(account_id: &AccountId, serial_number: u32, token_scheme_kind: u8) -> TokenId {
    foundry_id(account_id, serial_number, token_scheme_kind)
}
