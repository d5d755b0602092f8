//! The `Word` record and the plain helpers that operate on its keys.
use std::rc::Rc;

/// A literal redirect value meaning "this entry is canonical".
pub const NO_REDIRECT: &str = "null";

/// One dictionary entry. Immutable after insertion into a `Database`.
///
/// `normalized` and `shortened` are the decomposed search keys, compared
/// as UTF-16 code units; `word` and `redirect` are the original surface
/// forms.
#[derive(Clone, Debug)]
pub struct Word {
    pub normalized: Rc<[u16]>,
    pub shortened: Rc<[u16]>,
    pub word: Rc<str>,
    pub redirect: Rc<str>,
    pub freq: i64,
    pub category: i32,
    pub priority: i32,
}

impl Word {
    /// `true` iff this entry is itself canonical (has no redirect target).
    pub fn is_canonical(&self) -> bool {
        &*self.redirect == NO_REDIRECT
    }

    /// Re-encode `normalized` back to UTF-8, for display purposes (the
    /// stored form is UTF-16 code units).
    pub fn normalized_str(&self) -> String {
        taglex_unicode::utf16_to_utf8(&self.normalized)
    }
}

/// Is `small` a subsequence of `large`? Greedy two-pointer scan: advance
/// `i` in `small` only on a match, always advance `j` in `large`.
pub fn is_subsequence(small: &[u16], large: &[u16]) -> bool {
    let mut i = 0;
    for &c in large {
        if i >= small.len() {
            break;
        }
        if small[i] == c {
            i += 1;
        }
    }
    i == small.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsequence_basic() {
        let small: Vec<u16> = "ct".encode_utf16().collect();
        let large: Vec<u16> = "cat".encode_utf16().collect();
        assert!(is_subsequence(&small, &large));
    }

    #[test]
    fn not_a_subsequence() {
        let small: Vec<u16> = "tc".encode_utf16().collect();
        let large: Vec<u16> = "cat".encode_utf16().collect();
        assert!(!is_subsequence(&small, &large));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(is_subsequence(&[], &"anything".encode_utf16().collect::<Vec<_>>()));
    }
}
