#![doc = include_str!("../README.md")]

use std::fmt::Debug;
use std::num::TryFromIntError;
use std::str::FromStr;

pub mod inverse;
pub mod phi;
pub mod reference;
pub mod sweep;
pub mod text;

pub use inverse::InverseLcp;
pub use phi::PhiLcp;
pub use reference::ReferenceLcp;
pub use sweep::MatchLength;
pub use text::{check_sentinel, prepare_text};

////////////////////////////////////////////// indicio /////////////////////////////////////////////

/// The collector for all clues emitted by this crate.
pub static COLLECTOR: indicio::Collector = indicio::Collector::new();

/////////////////////////////////////////////// Error //////////////////////////////////////////////

/// All Error conditions within `lcparray`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// EmptyInput indicates a text (and suffix array) of length zero.
    EmptyInput,
    /// LengthMismatch indicates the text and suffix array differ in length.
    LengthMismatch {
        /// Length of the text.
        text: usize,
        /// Length of the suffix array.
        sa: usize,
    },
    /// NotAPermutation indicates the suffix array holds an offset that is out of bounds or that
    /// was already seen at a lower rank.
    NotAPermutation {
        /// Rank at which the bad offset was found.
        rank: usize,
        /// The offending offset.
        offset: usize,
    },
    /// TextTooLong indicates the index type cannot represent every offset of the text.
    TextTooLong {
        /// Length of the text.
        len: usize,
    },
    /// MissingSentinel indicates the last symbol of the text is not strictly smaller than every
    /// other symbol.
    MissingSentinel {
        /// The first offset whose symbol is not larger than the final symbol.
        offset: usize,
    },
    /// IntoIndex indicates an integer conversion that would not fit.
    IntoIndex,
    /// UnknownAlgorithm indicates a name that does not parse as an [Algorithm].
    UnknownAlgorithm,
}

impl Error {
    /// True iff the error describes a malformed (text, suffix array) pair.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::LengthMismatch { .. }
                | Error::NotAPermutation { .. }
                | Error::TextTooLong { .. }
                | Error::MissingSentinel { .. }
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInput => fmt.debug_struct("EmptyInput").finish(),
            Error::LengthMismatch { text, sa } => fmt
                .debug_struct("LengthMismatch")
                .field("text", text)
                .field("sa", sa)
                .finish(),
            Error::NotAPermutation { rank, offset } => fmt
                .debug_struct("NotAPermutation")
                .field("rank", rank)
                .field("offset", offset)
                .finish(),
            Error::TextTooLong { len } => fmt.debug_struct("TextTooLong").field("len", len).finish(),
            Error::MissingSentinel { offset } => fmt
                .debug_struct("MissingSentinel")
                .field("offset", offset)
                .finish(),
            Error::IntoIndex => fmt.debug_struct("IntoIndex").finish(),
            Error::UnknownAlgorithm => fmt.debug_struct("UnknownAlgorithm").finish(),
        }
    }
}

impl std::error::Error for Error {}

impl From<TryFromIntError> for Error {
    fn from(_: TryFromIntError) -> Self {
        Self::IntoIndex
    }
}

/////////////////////////////////////////////// Index //////////////////////////////////////////////

/// An unsigned integer wide enough to hold every offset of a text.
///
/// Conversions are unchecked.  Every construction calls [check_inputs] first, which rejects texts
/// whose largest offset exceeds `MAX_OFFSET`, so the algorithms never truncate.
pub trait Index: Copy + Debug + Default + Eq + Ord + Send + Sync + 'static {
    /// The largest offset representable by this type, saturated to usize.
    const MAX_OFFSET: usize;

    /// Convert from a usize that is known to be at most `MAX_OFFSET`.
    fn from_usize(x: usize) -> Self;
    /// Convert to a usize.
    fn as_usize(self) -> usize;
}

macro_rules! impl_index {
    ($($t:ty),*) => {
        $(
            impl Index for $t {
                const MAX_OFFSET: usize = if (<$t>::MAX as u128) < (usize::MAX as u128) {
                    <$t>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline(always)]
                fn from_usize(x: usize) -> Self {
                    debug_assert!(x <= Self::MAX_OFFSET);
                    x as $t
                }

                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_index!(u16, u32, u64, usize);

////////////////////////////////////////// LcpConstruction /////////////////////////////////////////

/// A construction of the LCP array from a text and its suffix array.
///
/// The returned array is indexed by suffix-array rank:  `lcp[i]` is the length of the longest
/// common prefix of `text[sa[i]..]` and `text[sa[i - 1]..]`, and `lcp[0]` is zero.  Neither input
/// is modified.
pub trait LcpConstruction {
    /// A short, stable name for the construction.
    const NAME: &'static str;

    /// Construct the LCP array.  Fails without a partial result if [check_inputs] fails.
    fn construct<T: Eq, I: Index>(text: &[T], sa: &[I]) -> Result<Vec<I>, Error>;
}

///////////////////////////////////////////// Algorithm ////////////////////////////////////////////

/// A run-time choice among the constructions in this crate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// [InverseLcp]
    Inverse,
    /// [PhiLcp]
    #[default]
    Phi,
    /// [ReferenceLcp]
    Reference,
}

impl Algorithm {
    /// Every algorithm, linear ones first.
    pub const ALL: &'static [Algorithm] = &[Algorithm::Inverse, Algorithm::Phi, Algorithm::Reference];

    /// The name of the algorithm's construction.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Inverse => InverseLcp::NAME,
            Algorithm::Phi => PhiLcp::NAME,
            Algorithm::Reference => ReferenceLcp::NAME,
        }
    }

    /// Compute the LCP array of `text` with this algorithm.
    pub fn compute<T: Eq, I: Index>(&self, text: &[T], sa: &[I]) -> Result<Vec<I>, Error> {
        match self {
            Algorithm::Inverse => InverseLcp::construct(text, sa),
            Algorithm::Phi => PhiLcp::construct(text, sa),
            Algorithm::Reference => ReferenceLcp::construct(text, sa),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inverse" | "kasai" | "naive" | "n" => Ok(Algorithm::Inverse),
            "phi" | "p" => Ok(Algorithm::Phi),
            "reference" | "r" => Ok(Algorithm::Reference),
            _ => Err(Error::UnknownAlgorithm),
        }
    }
}

//////////////////////////////////////////// compute_lcp ///////////////////////////////////////////

/// Compute the LCP array of `text` given its suffix array `sa` using the default algorithm.
pub fn compute_lcp<T: Eq, I: Index>(text: &[T], sa: &[I]) -> Result<Vec<I>, Error> {
    Algorithm::default().compute(text, sa)
}

//////////////////////////////////////////// check_inputs //////////////////////////////////////////

/// Check that `text` and `sa` are a pair every construction in this crate can safely consume.
///
/// This checks lengths, that `I` can hold every offset, and that `sa` is a permutation of
/// `[0, text.len())`.  It does not check that `sa` is sorted; see [check_sentinel] for the one
/// best-effort check on the text itself.
pub fn check_inputs<T, I: Index>(text: &[T], sa: &[I]) -> Result<(), Error> {
    if text.is_empty() && sa.is_empty() {
        return Err(Error::EmptyInput);
    }
    if text.len() != sa.len() {
        return Err(Error::LengthMismatch {
            text: text.len(),
            sa: sa.len(),
        });
    }
    if text.len() - 1 > I::MAX_OFFSET {
        return Err(Error::TextTooLong { len: text.len() });
    }
    check_permutation(sa)
}

fn check_permutation<I: Index>(sa: &[I]) -> Result<(), Error> {
    let mut seen = vec![false; sa.len()];
    for (rank, offset) in sa.iter().map(|x| x.as_usize()).enumerate() {
        if offset >= sa.len() || seen[offset] {
            return Err(Error::NotAPermutation { rank, offset });
        }
        seen[offset] = true;
    }
    Ok(())
}

////////////////////////////////////////////// inverse /////////////////////////////////////////////

/// Invert the permutation `x`.  For a suffix array this yields the inverse suffix array.
pub fn inverse<I: Index>(x: &[I]) -> Vec<I> {
    let mut ix = vec![I::default(); x.len()];
    for (i, x) in x.iter().enumerate() {
        ix[x.as_usize()] = I::from_usize(i);
    }
    ix
}

///////////////////////////////////////////// test_util ////////////////////////////////////////////


/////////////////////////////////////////////// tests //////////////////////////////////////////////
