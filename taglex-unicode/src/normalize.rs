//! The public normalization and shortening operations.

use crate::codec::{codepoints, push_utf8};
use crate::hangul::{choseong, hangul_decompose};
use crate::jamo::normalize_jamo;

const HANGUL_LO: u32 = 0xAC00;
const HANGUL_HI: u32 = 0xD7A3;

/// Produce the canonical search key for `input`: ASCII letters are
/// lowercased, ASCII letters/digits pass through, precomposed Hangul
/// syllables are decomposed into Compatibility Jamo, and everything else
/// is routed through the Jamo normalizer (which also handles raw Jamo
/// input and leaves anything not covered by its tables untouched).
///
/// `input` is raw bytes rather than `&str` so that malformed UTF-8 can
/// fail soft (an empty search key) instead of panicking — see
/// [`crate::codec::codepoints`].
pub fn normalize(input: &[u8]) -> String {
    let mut cps = Vec::new();
    for cp in codepoints(input) {
        if (b'A' as u32..=b'Z' as u32).contains(&cp) {
            cps.push(cp - b'A' as u32 + b'a' as u32);
        } else if (b'a' as u32..=b'z' as u32).contains(&cp)
            || (b'0' as u32..=b'9' as u32).contains(&cp)
        {
            cps.push(cp);
        } else if (HANGUL_LO..=HANGUL_HI).contains(&cp) {
            let (l, v, t) = hangul_decompose(cp).expect("checked range above");
            normalize_jamo(&mut cps, l);
            normalize_jamo(&mut cps, v);
            if let Some(t) = t {
                normalize_jamo(&mut cps, t);
            }
        } else {
            normalize_jamo(&mut cps, cp);
        }
    }
    let mut out = String::with_capacity(cps.len());
    for cp in cps {
        push_utf8(&mut out, cp);
    }
    out
}

/// Produce the compact alternate key: Chosung-only for Korean text,
/// first-letter-of-each-word for Latin text.
///
/// The choice between the two modes is made once, up front, by checking
/// whether `input` contains any precomposed Hangul syllable at all — a
/// tag is never a mix of the two shortening strategies.
pub fn shorten(input: &[u8]) -> String {
    let cps = codepoints(input);
    if cps.iter().any(|&cp| (HANGUL_LO..=HANGUL_HI).contains(&cp)) {
        shorten_hangul(&cps)
    } else {
        shorten_latin(&cps)
    }
}

fn shorten_hangul(cps: &[u32]) -> String {
    let mut out_cps = Vec::new();
    for &cp in cps {
        if let Some(l) = choseong(cp) {
            normalize_jamo(&mut out_cps, l);
        }
    }
    let mut out = String::with_capacity(out_cps.len());
    for cp in out_cps {
        push_utf8(&mut out, cp);
    }
    out
}

fn shorten_latin(cps: &[u32]) -> String {
    let mut out = String::new();
    let mut run_has_letter = false;
    for &cp in cps {
        if cp == b' ' as u32 || cp == b'\t' as u32 || cp == b'\n' as u32 || cp == b'\r' as u32 {
            run_has_letter = false;
            continue;
        }
        if !run_has_letter {
            if (b'a' as u32..=b'z' as u32).contains(&cp) {
                push_utf8(&mut out, cp);
                out.push(' ');
            }
            run_has_letter = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_lowercased() {
        assert_eq!(normalize(b"CAT"), "cat");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(normalize(b"cat2"), "cat2");
    }

    #[test]
    fn hangul_gang_decomposes() {
        // 강 -> ㄱㅏㅇ (U+3131 U+314F U+3147)
        assert_eq!(normalize("강".as_bytes()), "\u{3131}\u{314F}\u{3147}");
    }

    #[test]
    fn hangul_gwa_splits_complex_medial() {
        // 과 -> ㄱㅗㅏ because ㅘ decomposes into ㅗㅏ
        assert_eq!(normalize("과".as_bytes()), "\u{3131}\u{3157}\u{314F}");
    }

    #[test]
    fn idempotent() {
        let once = normalize("강아지 CAT".as_bytes());
        let twice = normalize(once.as_bytes());
        assert_eq!(once, twice);
    }

    #[test]
    fn shorten_latin_first_letters() {
        // the run-initial 'F' is uppercase, outside a-z, so it marks the
        // run as already-taken without emitting anything; 'o'/'x' then
        // fall later in the same run and are suppressed too.
        assert_eq!(shorten(b"the quick Fox"), "t q ");
    }

    #[test]
    fn shorten_latin_non_letter_blocks_run() {
        // a digit inside a run consumes the "first letter" slot without
        // emitting anything, and does not start a new word.
        assert_eq!(shorten(b"1abc def"), "d ");
    }

    #[test]
    fn shorten_hangul_chosung_only() {
        // 강아지 -> ㄱㅇㅈ
        assert_eq!(shorten("강아지".as_bytes()), "\u{3131}\u{3147}\u{3148}");
    }
}
