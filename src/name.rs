//! Domain names as length-prefixed label sequences.

use std::io::SeekFrom;

use bytes::BufMut;
use tracing::trace;

use crate::{
    cursor::ByteCursor,
    error::{CodecError, CodecResult},
};

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0xC0;
const MAX_JUMPS: usize = 16;

/// Writes `name` as labels terminated by the zero length root label.
///
/// `""` and `"."` encode the root domain, and a trailing dot is ignored.
pub fn encode_name(name: &str, buf: &mut impl BufMut) -> CodecResult<usize> {
    let name = name.strip_suffix('.').unwrap_or(name);
    let mut written = 0;
    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(CodecError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(CodecError::LabelTooLong { len: label.len() });
            }
            written += label.len() + 1;
            if written + 1 > MAX_NAME_LEN {
                return Err(CodecError::NameTooLong);
            }
            buf.put_u8(label.len() as u8);
            buf.put_slice(label.as_bytes());
        }
    }
    buf.put_u8(0);
    Ok(written + 1)
}

/// Reads a possibly compressed name starting at the cursor position.
///
/// When a pointer is met the position just past it is saved, the cursor
/// jumps to the pointer target, and once the name is complete the saved
/// position is restored. The cursor therefore always ends right after the
/// bytes that belong to the record being decoded.
pub fn decode_name(cursor: &mut ByteCursor<'_>) -> CodecResult<String> {
    let mut name = String::new();
    let mut resume_at: Option<usize> = None;
    let mut jumps = 0;

    loop {
        let len = cursor.read_u8()?;
        match len & POINTER_MASK {
            POINTER_MASK => {
                if jumps == MAX_JUMPS {
                    return Err(CodecError::CompressionLoop { limit: MAX_JUMPS });
                }
                jumps += 1;

                let low = cursor.read_u8()?;
                let offset = (u16::from(len & !POINTER_MASK) << 8) | u16::from(low);
                if resume_at.is_none() {
                    resume_at = Some(cursor.position());
                }
                trace!(offset, jumps, "following compression pointer");
                cursor.seek(SeekFrom::Start(offset.into()))?;
            }
            0x00 => {
                if len == 0 {
                    break;
                }
                let label = cursor.read_bytes(len as usize)?;
                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&String::from_utf8_lossy(label));
            }
            _ => return Err(CodecError::ReservedLabelType(len)),
        }
    }

    if let Some(position) = resume_at {
        cursor.seek(SeekFrom::Start(position as u64))?;
    }
    Ok(name)
}
