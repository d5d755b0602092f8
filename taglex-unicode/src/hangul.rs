//! Decomposition of precomposed Hangul syllables into their Jamo parts.
//!
//! This implements the algorithm described in Unicode 3.12 and Unicode 4.8
//! Table 4-13 (the "Hangul Syllable Decomposition Algorithm"), the same
//! one `ucd-util`'s `hangul` module implements for the purpose of
//! synthesizing character names. Here it exists to feed the Jamo
//! normalizer during search-key construction instead.

/// The set of ranges that correspond to all Hangul syllable codepoints.
pub const RANGE_HANGUL_SYLLABLE: (u32, u32) = (0xAC00, 0xD7A3);

const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = 588; // 21 * 28

/// Decompose a precomposed Hangul syllable codepoint into its Leading
/// (Choseong), Medial (Jungseong), and optional Trailing (Jongseong) Jamo.
///
/// Returns `None` if `cp` does not fall in the precomposed Hangul syllable
/// range `AC00..=D7A3`. The third element of the tuple is `None` when the
/// syllable has no trailing consonant.
pub fn hangul_decompose(cp: u32) -> Option<(u32, u32, Option<u32>)> {
    let (lo, hi) = RANGE_HANGUL_SYLLABLE;
    if !(lo..=hi).contains(&cp) {
        return None;
    }
    let s_index = cp - S_BASE;
    let l_index = s_index / N_COUNT;
    let v_index = (s_index % N_COUNT) / T_COUNT;
    let t_index = s_index % T_COUNT;

    let l_part = L_BASE + l_index;
    let v_part = V_BASE + v_index;
    let t_part = if t_index == 0 { None } else { Some(T_BASE + t_index) };
    Some((l_part, v_part, t_part))
}

/// The Choseong (leading consonant) codepoint of a precomposed syllable,
/// used by [`crate::shorten`] to build the Chosung-only key. This is the
/// `initial` index from [`hangul_decompose`] re-expressed as a raw Leading
/// Jamo codepoint, before running it through the Jamo normalizer.
pub fn choseong(cp: u32) -> Option<u32> {
    hangul_decompose(cp).map(|(l, _, _)| l)
}
