//! The Φ construction of the LCP array.
//!
//! `Φ[SA[i]] = SA[i - 1]` maps each text position to the start of the suffix that precedes it in
//! suffix-array order.  Sweeping Φ in text order computes the permuted LCP array (PLCP), which is
//! the LCP array indexed by text position rather than rank.  A final pass through the suffix
//! array puts it in rank order.

use indicio::{clue, INFO};

use super::check_inputs;
use super::sweep::MatchLength;
use super::Error;
use super::Index;
use super::LcpConstruction;
use super::COLLECTOR;

/////////////////////////////////////////////// PhiLcp /////////////////////////////////////////////

/// The Φ-array construction.  Runs in O(n) time with one auxiliary buffer that holds Φ and then,
/// in place, the PLCP array.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhiLcp;

impl LcpConstruction for PhiLcp {
    const NAME: &'static str = "phi";

    fn construct<T: Eq, I: Index>(text: &[T], sa: &[I]) -> Result<Vec<I>, Error> {
        check_inputs(text, sa)?;
        let n = text.len() as u64;
        clue!(COLLECTOR, INFO, {
            construct: Self::NAME,
            n: n,
        });
        let mut phi = phi_array(sa);
        let mut h = MatchLength::new();
        plcp_in_place(text, &mut phi, &mut h);
        let extensions = h.extensions() as u64;
        let mismatches = h.mismatches() as u64;
        clue!(COLLECTOR, INFO, {
            swept: Self::NAME,
            extensions: extensions,
            mismatches: mismatches,
        });
        Ok(permute_plcp(sa, &phi))
    }
}

/// Build the Φ array of a non-empty suffix array.
///
/// The suffix of rank zero has no predecessor.  Its slot wraps around to `SA[n - 1]` so that
/// every slot holds an offset less than `n`.
pub fn phi_array<I: Index>(sa: &[I]) -> Vec<I> {
    let mut phi = vec![I::default(); sa.len()];
    if let (Some(first), Some(last)) = (sa.first(), sa.last()) {
        phi[first.as_usize()] = *last;
    }
    for pair in sa.windows(2) {
        phi[pair[1].as_usize()] = pair[0];
    }
    phi
}

/// Overwrite each `phi[i]` with the length of the match between suffix `i` and suffix `phi[i]`.
///
/// Afterwards `phi` holds the PLCP array everywhere except at `SA[0]`, whose slot holds the
/// match against the wraparound suffix.  That slot is never read by [permute_plcp].
pub fn plcp_in_place<T: Eq, I: Index>(text: &[T], phi: &mut [I], h: &mut MatchLength) {
    for (i, slot) in phi.iter_mut().enumerate() {
        let pre = slot.as_usize();
        *slot = I::from_usize(h.extend(text, i, pre));
        h.carry();
    }
}

/// Put the PLCP array into suffix-array order and zero the first entry.
pub fn permute_plcp<I: Index>(sa: &[I], plcp: &[I]) -> Vec<I> {
    let mut lcp: Vec<I> = sa.iter().map(|x| plcp[x.as_usize()]).collect();
    if let Some(first) = lcp.first_mut() {
        *first = I::default();
    }
    lcp
}

/////////////////////////////////////////////// tests //////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::test_util::{assert_eq_with_ctx, suffix_array, test_cases_for, TestCase};

    use super::*;

    fn check_phi_array(t: &TestCase) {
        let returned = phi_array(t.SA);
        assert_eq_with_ctx!(t.PHI, returned.as_slice());
        for rank in 1..t.SA.len() {
            assert_eq_with_ctx!(t.SA[rank - 1], returned[t.SA[rank]], rank);
        }
        assert_eq!(t.SA[t.SA.len() - 1], returned[t.SA[0]]);
    }

    test_cases_for! {phi_array, super::check_phi_array}

    fn check_plcp(t: &TestCase) {
        let mut phi = phi_array(t.SA);
        let mut h = MatchLength::new();
        plcp_in_place(t.text, &mut phi, &mut h);
        for (i, plcp) in t.PLCP.iter().enumerate() {
            if i != t.SA[0] {
                assert_eq_with_ctx!(*plcp, phi[i], i);
            }
        }
        assert!(h.extensions() <= 2 * t.text.len(), "{h:?}");
        assert!(h.mismatches() <= t.text.len(), "{h:?}");
    }

    test_cases_for! {plcp, super::check_plcp}

    fn check_phi_lcp(t: &TestCase) {
        let returned = PhiLcp::construct(t.text, t.SA).expect("valid input should construct");
        assert_eq_with_ctx!(t.LCP, returned.as_slice());
    }

    test_cases_for! {phi_lcp, super::check_phi_lcp}

    #[test]
    fn single_symbol() {
        let sa: &[u32] = &[0];
        assert_eq!(vec![0u32], phi_array(sa));
        assert_eq!(vec![0u32], PhiLcp::construct(b"\0", sa).unwrap());
        assert_eq!(vec![0u32], PhiLcp::construct(b"x", sa).unwrap());
    }

    #[test]
    fn wraparound_with_sentinel() {
        // SA[0] is the sentinel at n - 1:  the bound is exactly one and the comparison fails.
        let text = b"banana\0";
        let sa: &[usize] = &[6, 5, 3, 1, 0, 4, 2];
        let mut phi = phi_array(sa);
        assert_eq!(2, phi[6]);
        let mut h = MatchLength::new();
        plcp_in_place(text, &mut phi, &mut h);
        assert_eq!(0, phi[6]);
        assert_eq!(0, h.get());
    }

    #[test]
    fn wraparound_does_not_leak() {
        // Without a sentinel the wraparound slot compares "a" against "aaaa" and matches one
        // symbol.  The value stays in the scratch buffer and rank zero still reports zero.
        let text = b"aaaa";
        let sa: &[usize] = &[3, 2, 1, 0];
        let mut phi = phi_array(sa);
        assert_eq!(0, phi[3]);
        let mut h = MatchLength::new();
        plcp_in_place(text, &mut phi, &mut h);
        assert_eq!(vec![3, 2, 1, 1], phi);
        assert_eq!(vec![0, 1, 2, 3], permute_plcp(sa, &phi));
        assert_eq!(vec![0, 1, 2, 3], PhiLcp::construct(text, sa).unwrap());
    }

    #[test]
    fn wraparound_bound_never_underflows() {
        // max(i, phi[i]) < n for every slot, including the wraparound, so the bound is at least 1.
        for text in [&b"ab"[..], &b"ba"[..], &b"aab"[..], &b"abab"[..], &b"zyxw"[..], &b"\0"[..]] {
            let sa = suffix_array(text);
            let phi = phi_array(&sa);
            for (i, pre) in phi.iter().enumerate() {
                assert!(i.max(*pre) < text.len());
            }
            let expected = crate::reference::ReferenceLcp::construct(text, &sa).unwrap();
            assert_eq!(expected, PhiLcp::construct(text, &sa).unwrap());
        }
    }

    #[test]
    fn permute_zeroes_rank_zero() {
        let sa: &[u32] = &[2, 0, 1];
        let plcp: &[u32] = &[0, 0, 7];
        assert_eq!(vec![0, 0, 0], permute_plcp(sa, plcp));
    }

    #[test]
    fn caller_inputs_are_untouched() {
        let text = b"abracadabra\0".to_vec();
        let sa: Vec<u32> = suffix_array(&text).into_iter().map(|x| x as u32).collect();
        let before = (text.clone(), sa.clone());
        PhiLcp::construct(&text, &sa).unwrap();
        assert_eq!(before, (text, sa));
    }
}
