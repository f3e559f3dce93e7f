//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::ParseState;
use super::token::Token;

impl ParseState<'_, '_> {
    /// The push-back buffer holds a single token; the grammar never needs two.
    #[inline]
    pub(super) fn ensure_lookahead_empty(&self, incoming: Token) {
        debug_assert!(
            self.lookahead.is_none(),
            "broken parser invariant: pushed back {:?} over unconsumed {:?}",
            incoming,
            self.lookahead,
        );
    }
}
