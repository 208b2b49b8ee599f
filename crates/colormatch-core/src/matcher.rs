//! Nearest-color matching against a shared catalogue
//!
//! Matching is two-tiered. An exact hit on the packed-key index answers
//! in O(1) and always wins. Otherwise, when a nonzero tolerance is
//! allowed, the bucket index prunes the catalogue down to the entries
//! whose channel sum could still be compatible with the tolerance, and
//! only those are scored channel by channel.

use std::sync::Arc;

use crate::catalogue::{Catalogue, ColorEntry};
use crate::color::Rgb;

/// Per-candidate deviation record computed while scoring a fuzzy search.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    entry: &'a ColorEntry,
    r_dev: u32,
    g_dev: u32,
    b_dev: u32,
    avg_dev: u32,
}

impl<'a> Candidate<'a> {
    fn score(entry: &'a ColorEntry, pixel: Rgb) -> Self {
        let r_dev = entry.color.red.abs_diff(pixel.red) as u32;
        let g_dev = entry.color.green.abs_diff(pixel.green) as u32;
        let b_dev = entry.color.blue.abs_diff(pixel.blue) as u32;
        Self {
            entry,
            r_dev,
            g_dev,
            b_dev,
            avg_dev: (r_dev + g_dev + b_dev) / 3,
        }
    }

    /// Each channel must qualify on its own; a small sum deviation is
    /// not enough.
    fn within(&self, fuzziness: u32) -> bool {
        self.r_dev <= fuzziness && self.g_dev <= fuzziness && self.b_dev <= fuzziness
    }
}

/// Resolves sampled pixels to catalogue entries.
///
/// Holds shared ownership of an immutable [`Catalogue`]; clones share
/// the same catalogue, so a matcher can be handed to any number of
/// threads without locking.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalogue: Arc<Catalogue>,
}

impl Matcher {
    /// Create a matcher over a shared catalogue.
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    /// The catalogue this matcher resolves against
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Match a sampled pixel against the catalogue.
    ///
    /// `fuzziness` is the maximum allowed absolute deviation per channel
    /// for an approximate match; e.g. with fuzziness 2, `(122, 118, 121)`
    /// matches a catalogue entry `(120, 120, 120)` because all of R, G
    /// and B are within 2. An entry whose color equals the pixel exactly
    /// is returned regardless of fuzziness. With fuzziness 0 only exact
    /// matches are reported.
    ///
    /// Returns `None` when no entry qualifies; that is an ordinary
    /// outcome, not a failure.
    pub fn match_pixel(&self, pixel: Rgb, fuzziness: u32) -> Option<&ColorEntry> {
        if let Some(entry) = self.catalogue.lookup_exact(pixel.packed()) {
            return Some(entry);
        }
        if fuzziness == 0 {
            return None;
        }
        self.fuzzy_search(pixel, fuzziness)
    }

    /// Approximate search over the bucket index.
    ///
    /// Candidates are examined in ascending channel-sum order, source
    /// order within a bucket; on ties in average deviation the first
    /// candidate examined wins, so results are stable for a fixed
    /// catalogue source.
    fn fuzzy_search(&self, pixel: Rgb, fuzziness: u32) -> Option<&ColorEntry> {
        let target_sum = pixel.channel_sum();
        // Widest sum deviation that can still keep every channel within
        // the tolerance.
        let max_sum_delta = fuzziness.saturating_mul(3);
        let lo = target_sum.saturating_sub(max_sum_delta);
        let hi = target_sum.saturating_add(max_sum_delta);

        let mut best: Option<Candidate> = None;
        for entry in self.catalogue.buckets_between(lo, hi) {
            let candidate = Candidate::score(entry, pixel);
            if !candidate.within(fuzziness) {
                continue;
            }
            if best.is_none_or(|b| candidate.avg_dev < b.avg_dev) {
                best = Some(candidate);
            }
        }
        best.map(|candidate| candidate.entry)
    }
}
