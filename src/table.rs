//! Boundary tables partitioning each magnitude class into length bands.
//!
//! `CUTOFFS[i]` is the exclusive upper bound of band `i` and the inclusive lower bound of band
//! `i + 1`. Band `i` is written in `i + 1` bytes carrying `7 * (i + 1)` payload bits, so each
//! cutoff is the previous one plus the number of values the band holds:
//! `cutoff[0] = 128`, `cutoff[i] = (cutoff[i - 1] + 1) * 128`.

use crate::{MAX_LEN_EXTENDED, MAX_SAFE_INTEGER};

/// Number of bands in the native class.
pub(crate) const NATIVE_BANDS: usize = 8;

const fn compute_native_cutoffs() -> [u64; NATIVE_BANDS] {
    let mut tbl = [0u64; NATIVE_BANDS];
    let mut prev = 0u64;
    let mut i = 0;
    while i < NATIVE_BANDS {
        let next = (prev + 1) * 128;
        // The last band stops at the safe integer ceiling rather than its natural width.
        tbl[i] = if next > MAX_SAFE_INTEGER {
            MAX_SAFE_INTEGER + 1
        } else {
            next
        };
        prev = next;
        i += 1;
    }
    tbl
}

const fn compute_extended_cutoffs() -> [u128; MAX_LEN_EXTENDED] {
    let mut tbl = [0u128; MAX_LEN_EXTENDED];
    let mut prev = 0u128;
    let mut i = 0;
    while i < MAX_LEN_EXTENDED {
        // The final band is wider than u128; it saturates and covers everything that remains.
        let next = prev.saturating_add(1).saturating_mul(128);
        tbl[i] = next;
        prev = next;
        i += 1;
    }
    tbl
}

pub(crate) const NATIVE_CUTOFFS: [u64; NATIVE_BANDS] = compute_native_cutoffs();
pub(crate) const EXTENDED_CUTOFFS: [u128; MAX_LEN_EXTENDED] = compute_extended_cutoffs();

/// Returns the band index of `v`, which must not exceed `MAX_SAFE_INTEGER`.
#[inline]
pub(crate) fn native_band(v: u64) -> usize {
    NATIVE_CUTOFFS
        .iter()
        .position(|&cutoff| v < cutoff)
        .unwrap_or(NATIVE_BANDS - 1)
}

/// Returns the band index of `v`.
#[inline]
pub(crate) fn extended_band(v: u128) -> usize {
    EXTENDED_CUTOFFS
        .iter()
        .position(|&cutoff| v < cutoff)
        .unwrap_or(MAX_LEN_EXTENDED - 1)
}

/// Smallest value coded in `band`.
#[inline(always)]
pub(crate) const fn native_lower(band: usize) -> u64 {
    if band == 0 {
        0
    } else {
        NATIVE_CUTOFFS[band - 1]
    }
}

/// Smallest value coded in `band`.
#[inline(always)]
pub(crate) const fn extended_lower(band: usize) -> u128 {
    if band == 0 {
        0
    } else {
        EXTENDED_CUTOFFS[band - 1]
    }
}
