//! Compatibility Jamo tables.
//!
//! These map the Hangul Jamo block (`U+1100`-`U+11FF`, the codepoints
//! produced by decomposing a precomposed syllable) onto the Hangul
//! Compatibility Jamo block (`U+3130`-`U+318F`, the display forms used for
//! standalone Jamo text), plus the further decomposition of the handful of
//! Compatibility Jamo that themselves represent two simple letters (e.g.
//! `ㅘ` = `ㅗ` + `ㅏ`).

const LEADING_BASE: u32 = 0x1100;
const LEADING: [u32; 19] = [
    0x3131, 0x3132, 0x3134, 0x3137, 0x3138, 0x3139, 0x3141, 0x3142, 0x3143,
    0x3145, 0x3146, 0x3147, 0x3148, 0x3149, 0x314A, 0x314B, 0x314C, 0x314D,
    0x314E,
];

const MEDIAL_BASE: u32 = 0x1161;
const MEDIAL: [u32; 21] = [
    0x314F, 0x3150, 0x3151, 0x3152, 0x3153, 0x3154, 0x3155, 0x3156, 0x3157,
    0x3158, 0x3159, 0x315A, 0x315B, 0x315C, 0x315D, 0x315E, 0x315F, 0x3160,
    0x3161, 0x3162, 0x3163,
];

const TRAILING_BASE: u32 = 0x11A8;
const TRAILING: [u32; 27] = [
    0x3131, 0x3132, 0x3133, 0x3134, 0x3135, 0x3136, 0x3137, 0x3139, 0x313A,
    0x313B, 0x313C, 0x313D, 0x313E, 0x313F, 0x3140, 0x3141, 0x3142, 0x3144,
    0x3145, 0x3146, 0x3147, 0x3148, 0x314A, 0x314B, 0x314C, 0x314D, 0x314E,
];

/// `(leading jamo, compat jamo)` exceptions outside the contiguous
/// `LEADING` table — archaic Choseong fillers.
const LEADING_EXCEPTIONS: [(u32, u32); 3] =
    [(0x1140, 0x317F), (0x114C, 0x3181), (0x1159, 0x3186)];

/// Same shape as [`LEADING_EXCEPTIONS`], for the medial vowel table.
const MEDIAL_EXCEPTIONS: [(u32, u32); 1] = [(0x119E, 0x318D)];

/// Same shape as [`LEADING_EXCEPTIONS`], for the trailing consonant table.
const TRAILING_EXCEPTIONS: [(u32, u32); 3] =
    [(0x11EB, 0x317F), (0x11F0, 0x3181), (0x11F9, 0x3186)];

/// Complex Compatibility Jamo that visually combine two simple Jamos, and
/// their two-letter decomposition.
const COMPLEX: [(u32, u32, u32); 23] = [
    (0x3158, 0x3157, 0x314F), // ㅘ -> ㅗㅏ
    (0x3159, 0x3157, 0x3150), // ㅙ -> ㅗㅐ
    (0x315A, 0x3157, 0x3163), // ㅚ -> ㅗㅣ
    (0x315D, 0x315C, 0x3153), // ㅝ -> ㅜㅓ
    (0x315E, 0x315C, 0x3154), // ㅞ -> ㅜㅔ
    (0x315F, 0x315C, 0x3163), // ㅟ -> ㅜㅣ
    (0x3162, 0x3161, 0x3163), // ㅢ -> ㅡㅣ
    (0x3133, 0x3131, 0x3145), // ㄳ -> ㄱㅅ
    (0x3135, 0x3134, 0x3148), // ㄵ -> ㄴㅈ
    (0x3136, 0x3134, 0x314E), // ㄶ -> ㄴㅎ
    (0x313A, 0x3139, 0x3131), // ㄺ -> ㄹㄱ
    (0x313B, 0x3139, 0x3141), // ㄻ -> ㄹㅁ
    (0x313C, 0x3139, 0x3142), // ㄼ -> ㄹㅂ
    (0x313D, 0x3139, 0x3145), // ㄽ -> ㄹㅅ
    (0x313E, 0x3139, 0x314C), // ㄾ -> ㄹㅌ
    (0x313F, 0x3139, 0x314D), // ㄿ -> ㄹㅍ
    (0x3140, 0x3139, 0x314E), // ㅀ -> ㄹㅎ
    (0x3144, 0x3142, 0x3145), // ㅄ -> ㅂㅅ
    (0x3132, 0x3131, 0x3131), // ㄲ -> ㄱㄱ
    (0x3138, 0x3137, 0x3137), // ㄸ -> ㄷㄷ
    (0x3143, 0x3142, 0x3142), // ㅃ -> ㅂㅂ
    (0x3146, 0x3145, 0x3145), // ㅆ -> ㅅㅅ
    (0x3149, 0x3148, 0x3148), // ㅉ -> ㅈㅈ
];

fn table_lookup(base: u32, table: &[u32], exceptions: &[(u32, u32)], cp: u32) -> Option<u32> {
    if cp >= base && (cp - base) < table.len() as u32 {
        return Some(table[(cp - base) as usize]);
    }
    exceptions.iter().find(|&&(k, _)| k == cp).map(|&(_, v)| v)
}

/// Map a single Leading, Medial, or Trailing Jamo codepoint onto its
/// Compatibility Jamo. Codepoints outside the three ranges/exception sets
/// pass through unchanged.
pub fn jamo_to_compat(cp: u32) -> u32 {
    if let Some(v) = table_lookup(LEADING_BASE, &LEADING, &LEADING_EXCEPTIONS, cp) {
        return v;
    }
    if let Some(v) = table_lookup(MEDIAL_BASE, &MEDIAL, &MEDIAL_EXCEPTIONS, cp) {
        return v;
    }
    if let Some(v) = table_lookup(TRAILING_BASE, &TRAILING, &TRAILING_EXCEPTIONS, cp) {
        return v;
    }
    cp
}

/// If `cp` is a complex Compatibility Jamo, return its two-letter simple
/// decomposition.
pub fn complex_decomposition(cp: u32) -> Option<(u32, u32)> {
    COMPLEX.iter().find(|&&(k, _, _)| k == cp).map(|&(_, a, b)| (a, b))
}

/// Run a single codepoint through the Jamo normalizer: map Leading/Medial/
/// Trailing Jamo to Compatibility Jamo, then split complex Compatibility
/// Jamo into their two simple constituents. Anything else passes through.
pub fn normalize_jamo(out: &mut Vec<u32>, cp: u32) {
    let mapped = jamo_to_compat(cp);
    match complex_decomposition(mapped) {
        Some((a, b)) => {
            out.push(a);
            out.push(b);
        }
        None => out.push(mapped),
    }
}
