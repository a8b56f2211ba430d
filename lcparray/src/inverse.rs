use indicio::{clue, INFO};

use super::check_inputs;
use super::sweep::MatchLength;
use super::Error;
use super::Index;
use super::LcpConstruction;
use super::COLLECTOR;

///////////////////////////////////////////// InverseLcp ///////////////////////////////////////////

/// Kasai-style construction driven by the inverse suffix array.
///
/// Text positions are visited in increasing order.  For position `i` with rank `ISA[i] > 0`, the
/// predecessor suffix is `SA[ISA[i] - 1]` and the match against it starts from the previous
/// position's length minus one.  Runs in O(n) time with one auxiliary buffer (the ISA).
#[derive(Clone, Copy, Debug, Default)]
pub struct InverseLcp;

impl LcpConstruction for InverseLcp {
    const NAME: &'static str = "inverse";

    fn construct<T: Eq, I: Index>(text: &[T], sa: &[I]) -> Result<Vec<I>, Error> {
        check_inputs(text, sa)?;
        let n = text.len() as u64;
        clue!(COLLECTOR, INFO, {
            construct: Self::NAME,
            n: n,
        });
        let isa = super::inverse(sa);
        let mut h = MatchLength::new();
        let lcp = sweep(text, sa, &isa, &mut h);
        let extensions = h.extensions() as u64;
        let mismatches = h.mismatches() as u64;
        clue!(COLLECTOR, INFO, {
            swept: Self::NAME,
            extensions: extensions,
            mismatches: mismatches,
        });
        Ok(lcp)
    }
}

/// Sweep text positions in order, writing the LCP of each suffix at its rank.
///
/// The position of rank zero is skipped without touching `h`:  the suffix before it can share at
/// most one symbol with its own predecessor, so the carried length is already zero.
fn sweep<T: Eq, I: Index>(text: &[T], sa: &[I], isa: &[I], h: &mut MatchLength) -> Vec<I> {
    let mut lcp = vec![I::default(); sa.len()];
    for (i, rank) in isa.iter().map(|x| x.as_usize()).enumerate() {
        if rank == 0 {
            continue;
        }
        let pre = sa[rank - 1].as_usize();
        lcp[rank] = I::from_usize(h.extend(text, i, pre));
        h.carry();
    }
    lcp
}

/////////////////////////////////////////////// tests //////////////////////////////////////////////
