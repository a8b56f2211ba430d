use super::check_inputs;
use super::Error;
use super::Index;
use super::LcpConstruction;

/// The LCP array straight from its definition:  compare every pair of adjacent suffixes from
/// their first symbol.  Quadratic on repetitive text.  Used to check the linear constructions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceLcp;

impl LcpConstruction for ReferenceLcp {
    const NAME: &'static str = "reference";

    fn construct<T: Eq, I: Index>(text: &[T], sa: &[I]) -> Result<Vec<I>, Error> {
        check_inputs(text, sa)?;
        let mut lcp = Vec::with_capacity(sa.len());
        lcp.push(I::default());
        for pair in sa.windows(2) {
            let prev = &text[pair[0].as_usize()..];
            let next = &text[pair[1].as_usize()..];
            lcp.push(I::from_usize(common_prefix(prev, next)));
        }
        Ok(lcp)
    }
}

/// The length of the longest common prefix of `lhs` and `rhs`.
pub fn common_prefix<T: Eq>(lhs: &[T], rhs: &[T]) -> usize {
    lhs.iter().zip(rhs.iter()).take_while(|(l, r)| l == r).count()
}
