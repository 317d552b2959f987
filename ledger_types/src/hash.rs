use blake2::{digest::consts::U32, Blake2b, Digest};

use crate::byte_array::ByteArray32;

type Blake2b256 = Blake2b<U32>;

pub fn blake2b_256(data: impl AsRef<[u8]>) -> ByteArray32 {
    ByteArray32::from(<[u8; 32]>::from(Blake2b256::digest(data)))
}
