/*!
The `taglex-unicode` crate contains the codec and normalization
primitives needed to turn raw tag text into search keys: UTF-8/UTF-16
conversion, Hangul syllable decomposition, and the Compatibility Jamo
tables used to fold a syllable down into its component letters.

A *current* design constraint of this crate, same as its counterpart
over in the Unicode-table-generation world, is that it should not grow
a dependency on a full Unicode database. Everything here is a small,
fixed table derived directly from the Hangul algorithm in the Unicode
standard (Unicode 3.12 §3.12, Unicode 9 Table 3-13 for Hangul Syllable
decomposition) plus the handful of Compatibility Jamo mappings needed
for search, not general-purpose Unicode text processing.
*/

mod codec;
mod hangul;
mod jamo;
mod normalize;

pub use crate::codec::{codepoints, utf16_to_utf8, utf8_to_utf16};
pub use crate::hangul::{hangul_decompose, RANGE_HANGUL_SYLLABLE};
pub use crate::normalize::{normalize, shorten};
