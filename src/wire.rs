//! Fixed width big-endian integers and transaction ids.

use bytes::BufMut;

use crate::error::{CodecError, CodecResult};

pub fn encode_u16(buf: &mut impl BufMut, value: u16) {
    buf.put_u16(value);
}

pub fn encode_u32(buf: &mut impl BufMut, value: u32) {
    buf.put_u32(value);
}

pub fn decode_u16(bytes: &[u8]) -> CodecResult<u16> {
    match bytes {
        [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
        _ => Err(CodecError::InsufficientData {
            requested: 2,
            remaining: bytes.len(),
        }),
    }
}

pub fn decode_u32(bytes: &[u8]) -> CodecResult<u32> {
    match bytes {
        [a, b, c, d, ..] => Ok(u32::from_be_bytes([*a, *b, *c, *d])),
        _ => Err(CodecError::InsufficientData {
            requested: 4,
            remaining: bytes.len(),
        }),
    }
}

/// Draws a query id uniformly from the whole 16 bit range.
pub fn random_transaction_id(rng: &mut fastrand::Rng) -> u16 {
    rng.u16(..)
}
