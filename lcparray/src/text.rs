//! Preparing a text for suffix sorting.
//!
//! The constructions in this crate are bounded by the text length and need no sentinel.  The
//! suffix array they consume is only well defined when no suffix is a prefix of another, which
//! callers usually guarantee by ending the text with a unique smallest symbol.

use super::Error;

/// Truncate `text` to at most `prefix_size` symbols and overwrite the final symbol with the zero
/// sentinel.  A `prefix_size` of `None` keeps the whole text.
///
/// The final symbol is replaced rather than appended so that a prefix of `k` bytes yields a text
/// of exactly `k` bytes.
pub fn prepare_text(mut text: Vec<u8>, prefix_size: Option<usize>) -> Result<Vec<u8>, Error> {
    if let Some(prefix_size) = prefix_size {
        text.truncate(prefix_size);
    }
    match text.last_mut() {
        Some(last) => {
            *last = 0;
            Ok(text)
        }
        None => Err(Error::EmptyInput),
    }
}

/// Check, best-effort, that the last symbol of `text` is strictly smaller than every other symbol.
///
/// Returns `MissingSentinel` naming the first offset that violates this.
pub fn check_sentinel<T: Ord>(text: &[T]) -> Result<(), Error> {
    let Some((sentinel, rest)) = text.split_last() else {
        return Err(Error::EmptyInput);
    };
    match rest.iter().position(|x| x <= sentinel) {
        Some(offset) => Err(Error::MissingSentinel { offset }),
        None => Ok(()),
    }
}
