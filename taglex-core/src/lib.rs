/*!
In-memory tag search engine: per-database dictionaries of tagged words
answering ranked prefix/subsequence autocomplete queries.

A [`Registry`] owns zero or more named [`Database`]s, addressed by an
integer handle. Loading a database bulk-replaces its contents from CSV
text; searching runs a cheap subsequence filter followed by a
gap-insertion-distance rerank.
*/

mod arena;
mod database;
mod error;
mod gap_match;
mod registry;
mod word;

pub use crate::database::{Database, FINAL_CUTOFF, INITIAL_CUTOFF, MAX_WORD_LEN};
pub use crate::error::{Error, Result};
pub use crate::gap_match::{gap_match, INF};
pub use crate::registry::Registry;
pub use crate::word::Word;
