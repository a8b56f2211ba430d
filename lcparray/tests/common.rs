extern crate lcparray;

use lcparray::reference::common_prefix;
use lcparray::{Algorithm, Index};

/// Sort the suffixes of `text` directly.
pub fn suffix_array<I: Index>(text: &[u8]) -> Vec<I> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|lhs, rhs| text[*lhs..].cmp(&text[*rhs..]));
    sa.into_iter().map(I::from_usize).collect()
}

/// Check every construction against the definition of the LCP array.
pub fn check_lcp<I: Index>(text: &[u8]) -> Vec<I> {
    let sa: Vec<I> = suffix_array(text);
    let inverse = Algorithm::Inverse.compute(text, &sa).expect("inverse should construct");
    let phi = Algorithm::Phi.compute(text, &sa).expect("phi should construct");
    assert_eq!(inverse, phi, "text={:?}", text);
    assert_eq!(sa.len(), phi.len());
    assert_eq!(I::default(), phi[0]);
    for rank in 1..sa.len() {
        let prev = &text[sa[rank - 1].as_usize()..];
        let next = &text[sa[rank].as_usize()..];
        assert_eq!(
            common_prefix(prev, next),
            phi[rank].as_usize(),
            "text={:?} rank={}",
            text,
            rank
        );
    }
    phi
}
