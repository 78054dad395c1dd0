/// L∞ (Chebyshev) distance between two channel vectors: the largest
/// per-channel absolute difference.
#[inline]
pub fn linf_distance<const C: usize>(a: &[u8; C], b: &[u8; C]) -> u8 {
    a.iter()
        .zip(b)
        .map(|(&p, &q)| p.abs_diff(q))
        .max()
        .unwrap_or(0)
}

/// Whether two adjacent pixels are close enough to share a zone.
#[inline]
pub(crate) fn within_alpha<const C: usize>(a: &[u8; C], b: &[u8; C], alpha: i32) -> bool {
    i32::from(linf_distance(a, b)) <= alpha
}
