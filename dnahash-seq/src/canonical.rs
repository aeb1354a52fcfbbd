//! Canonical strand selection for double-stranded DNA.
//!
//! A DNA fragment and its reverse complement describe the same molecule.
//! [`canonical_strand`] picks one of the two orientations deterministically
//! by comparing nucleotide values at mirrored positions, and
//! [`canonicalize`] materializes the chosen orientation. Both map a
//! sequence and its reverse complement to the same result.

use dnahash_core::Result;

use crate::codec::{self, COMPLEMENT_MASK};

/// Which physical strand the canonical orientation reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    /// The sequence as given.
    Forward,
    /// The reverse complement of the sequence as given.
    Reverse,
}

/// Decide the canonical orientation of `seq`.
///
/// Walks positions `0..=n/2` comparing the forward read against the
/// reverse-complement read at the mirrored position, keeping whichever
/// orientation reads the higher nucleotide value first. A sequence that
/// ties at every scanned position (a palindrome, or the empty sequence)
/// stays [`Strand::Forward`].
///
/// # Example
///
/// ```
/// use dnahash_seq::{canonical_strand, Strand};
///
/// assert_eq!(canonical_strand(b"TTTT").unwrap(), Strand::Forward);
/// assert_eq!(canonical_strand(b"AAAA").unwrap(), Strand::Reverse);
/// ```
pub fn canonical_strand(seq: &[u8]) -> Result<Strand> {
    codec::validate(seq)?;
    Ok(strand_validated(seq))
}

/// Return `seq` in its canonical orientation.
pub fn canonicalize(seq: &[u8]) -> Result<Vec<u8>> {
    codec::validate(seq)?;
    Ok(canonicalize_validated(seq))
}

/// [`canonical_strand`] for input already checked by [`codec::validate`].
pub(crate) fn strand_validated(seq: &[u8]) -> Strand {
    let n = seq.len();
    if n == 0 {
        return Strand::Forward;
    }
    for i in 0..=n / 2 {
        let fwd = codec::value_validated(seq[i]);
        let rev = codec::value_validated(seq[n - 1 - i]) ^ COMPLEMENT_MASK;
        if fwd > rev {
            return Strand::Forward;
        }
        if fwd < rev {
            return Strand::Reverse;
        }
    }
    Strand::Forward
}

/// [`canonicalize`] for input already checked by [`codec::validate`].
pub(crate) fn canonicalize_validated(seq: &[u8]) -> Vec<u8> {
    match strand_validated(seq) {
        Strand::Forward => seq.to_vec(),
        Strand::Reverse => seq
            .iter()
            .rev()
            .map(|&b| codec::complement_validated(b))
            .collect(),
    }
}
