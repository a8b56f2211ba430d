//! The running match length shared by both linear-time constructions.
//!
//! Both constructions visit text positions in increasing order.  If suffix `i` shares `h` symbols
//! with its predecessor in suffix-array order, suffix `i + 1` shares at least `h - 1` symbols with
//! its own predecessor, so the comparison for `i + 1` may start at `h - 1`.  The length therefore
//! grows at most `2n` times over a sweep and each position fails at most one comparison.

/////////////////////////////////////////// MatchLength ////////////////////////////////////////////

/// An accumulator for the running match length of a left-to-right sweep over the text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchLength {
    h: usize,
    extensions: usize,
    mismatches: usize,
}

impl MatchLength {
    /// A match length of zero with no comparisons made.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current match length.
    pub fn get(&self) -> usize {
        self.h
    }

    /// Extend the match between the suffixes at `i` and `pre` and return its length.
    ///
    /// Comparison starts at the current length and stops at the end of the shorter suffix, so the
    /// text needs no sentinel to keep this in bounds.  Both offsets must be less than
    /// `text.len()`.
    pub fn extend<T: Eq>(&mut self, text: &[T], i: usize, pre: usize) -> usize {
        let bound = text.len() - std::cmp::max(i, pre);
        while self.h < bound {
            if text[i + self.h] != text[pre + self.h] {
                self.mismatches += 1;
                return self.h;
            }
            self.h += 1;
            self.extensions += 1;
        }
        self.h
    }

    /// Step from one text position to the next:  decrement the length, floored at zero.
    pub fn carry(&mut self) {
        self.h = self.h.saturating_sub(1);
    }

    /// The number of symbol comparisons that grew the match.
    pub fn extensions(&self) -> usize {
        self.extensions
    }

    /// The number of symbol comparisons that ended a match.
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }
}

/////////////////////////////////////////////// tests //////////////////////////////////////////////
