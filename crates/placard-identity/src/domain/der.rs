//! # Signature Codec
//!
//! Normalizes ECDSA signatures between the two accepted encodings.
//!
//! Browser-native crypto APIs emit the fixed-width 64-byte `r || s` form while
//! most other signing stacks emit ASN.1 DER. Accepting both lets clients
//! interoperate without negotiation; the selection happens once, by length,
//! and everything downstream sees DER only.

use super::entities::FIXED_WIDTH_SIGNATURE_LEN;

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// Normalize a signature to the DER SEQUENCE(INTEGER, INTEGER) form.
///
/// A 64-byte input is treated as fixed-width `r || s` (32 bytes each) and
/// re-encoded. Any other length is assumed to already be DER and passes
/// through unchanged; if it is not, the verifier rejects it there. This step
/// itself cannot fail.
pub fn normalize_signature(signature: &[u8]) -> Vec<u8> {
    if signature.len() != FIXED_WIDTH_SIGNATURE_LEN {
        return signature.to_vec();
    }

    let r = encode_integer(&signature[..32]);
    let s = encode_integer(&signature[32..]);

    let mut out = Vec::with_capacity(2 + r.len() + s.len() + 2);
    out.push(SEQUENCE_TAG);
    push_length(&mut out, r.len() + s.len());
    out.extend_from_slice(&r);
    out.extend_from_slice(&s);
    out
}

/// Encode a 32-byte unsigned big-endian integer as an ASN.1 INTEGER.
///
/// Leading zero bytes are stripped down to one byte minimum; a single `0x00`
/// is prepended when the remaining leading byte has its high bit set, keeping
/// the INTEGER non-negative.
fn encode_integer(be_bytes: &[u8]) -> Vec<u8> {
    let mut start = 0;
    while start < be_bytes.len() - 1 && be_bytes[start] == 0 {
        start += 1;
    }
    let minimized = &be_bytes[start..];

    let pad = minimized[0] & 0x80 != 0;
    let content_len = minimized.len() + usize::from(pad);

    let mut out = Vec::with_capacity(2 + content_len);
    out.push(INTEGER_TAG);
    push_length(&mut out, content_len);
    if pad {
        out.push(0x00);
    }
    out.extend_from_slice(minimized);
    out
}

/// Append a DER length: short form below 128, else long form with a
/// length-of-length prefix (`0x81`/`0x82`).
fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 128 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push((len & 0xFF) as u8);
    }
}
