//! UTF-8 / UTF-16 conversion and codepoint iteration.
//!
//! These routines are deliberately hand-rolled rather than routed through
//! `std::str`: the host boundary hands us raw bytes that are not guaranteed
//! to be valid UTF-8 (a truncated multi-byte sequence, an unpaired
//! surrogate smuggled in through a 3-byte encoding), and the contract here
//! is to fail soft — return an empty sequence — rather than panic or bubble
//! up an error. See the Unicode Standard, chapter 3, "Conformance" (D92,
//! Table 3-7) for the encoding table implemented by [`codepoints`].

/// Decode a raw byte sequence as UTF-8 into its codepoints.
///
/// On any malformed input (truncated multi-byte sequence, a continuation
/// byte in the wrong position, or a 3-byte sequence that decodes to a
/// surrogate codepoint, which is never a valid scalar value) this returns
/// an empty vector rather than a partial one or an error.
pub fn codepoints(bytes: &[u8]) -> Vec<u32> {
    match try_codepoints(bytes) {
        Some(cps) => cps,
        None => {
            log::debug!("codec: malformed utf-8 input ({} bytes)", bytes.len());
            Vec::new()
        }
    }
}

fn try_codepoints(bytes: &[u8]) -> Option<Vec<u32>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        if b0 & 0x80 == 0 {
            out.push(b0 as u32);
            i += 1;
            continue;
        }
        let (len, mut cp, min) = if b0 & 0xE0 == 0xC0 {
            (2usize, (b0 & 0x1F) as u32, 0x80u32)
        } else if b0 & 0xF0 == 0xE0 {
            (3, (b0 & 0x0F) as u32, 0x800)
        } else if b0 & 0xF8 == 0xF0 {
            (4, (b0 & 0x07) as u32, 0x10000)
        } else {
            return None;
        };
        if i + len > bytes.len() {
            return None;
        }
        for k in 1..len {
            let b = bytes[i + k];
            if b & 0xC0 != 0x80 {
                return None;
            }
            cp = (cp << 6) | (b & 0x3F) as u32;
        }
        if cp < min || cp > 0x10FFFF || (0xD800..=0xDFFF).contains(&cp) {
            return None;
        }
        out.push(cp);
        i += len;
    }
    Some(out)
}

/// Encode a single codepoint into its UTF-8 byte sequence and append it to
/// `out`. Invalid scalar values (surrogates, values above `0x10FFFF`) are
/// silently dropped.
pub fn push_utf8(out: &mut String, cp: u32) {
    if let Some(c) = char::from_u32(cp) {
        out.push(c);
    }
}

/// Convert raw UTF-8 bytes to a sequence of UTF-16 code units.
///
/// Codepoints above `0xFFFF` are emitted as a surrogate pair, per D91 of
/// the Unicode Standard. Malformed input yields an empty sequence.
pub fn utf8_to_utf16(bytes: &[u8]) -> Vec<u16> {
    let cps = codepoints(bytes);
    if cps.is_empty() && !bytes.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(cps.len());
    for cp in cps {
        push_utf16(&mut out, cp);
    }
    out
}

fn push_utf16(out: &mut Vec<u16>, cp: u32) {
    if cp <= 0xFFFF {
        out.push(cp as u16);
    } else {
        let v = cp - 0x10000;
        out.push(0xD800 + (v >> 10) as u16);
        out.push(0xDC00 + (v & 0x3FF) as u16);
    }
}

/// Convert a sequence of UTF-16 code units back to a UTF-8 `String`.
///
/// An unpaired high surrogate (not followed by a low surrogate) or a lone
/// low surrogate is treated as malformed input and yields an empty string.
pub fn utf16_to_utf8(units: &[u16]) -> String {
    match try_utf16_to_utf8(units) {
        Some(s) => s,
        None => {
            log::debug!("codec: unpaired surrogate in utf-16 input ({} units)", units.len());
            String::new()
        }
    }
}

fn try_utf16_to_utf8(units: &[u16]) -> Option<String> {
    let mut out = String::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let u = units[i];
        let cp = if (0xD800..=0xDBFF).contains(&u) {
            let lo = *units.get(i + 1)?;
            if !(0xDC00..=0xDFFF).contains(&lo) {
                return None;
            }
            i += 2;
            0x10000 + (((u - 0xD800) as u32) << 10) + (lo - 0xDC00) as u32
        } else if (0xDC00..=0xDFFF).contains(&u) {
            return None;
        } else {
            i += 1;
            u as u32
        };
        push_utf8(&mut out, cp);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_roundtrip() {
        assert_eq!(codepoints(b"cat"), vec![99, 97, 116]);
    }

    #[test]
    fn hangul_codepoint() {
        assert_eq!(codepoints("강".as_bytes()), vec![0xAC15]);
    }

    #[test]
    fn truncated_two_byte() {
        assert_eq!(codepoints(&[0xC3]), Vec::<u32>::new());
    }

    #[test]
    fn truncated_three_byte() {
        assert_eq!(codepoints(&[0xE0, 0x80]), Vec::<u32>::new());
    }

    #[test]
    fn bad_continuation_byte() {
        assert_eq!(codepoints(&[0xC3, 0x28]), Vec::<u32>::new());
    }

    #[test]
    fn surrogate_pair_roundtrip() {
        // U+1F600 GRINNING FACE, outside the BMP.
        let units = utf8_to_utf16("😀".as_bytes());
        assert_eq!(units, vec![0xD83D, 0xDE00]);
        assert_eq!(utf16_to_utf8(&units), "😀");
    }

    #[test]
    fn unpaired_high_surrogate() {
        assert_eq!(utf16_to_utf8(&[0xD800]), "");
    }

    #[test]
    fn lone_low_surrogate() {
        assert_eq!(utf16_to_utf8(&[0xDC00]), "");
    }
}
