//! Strand-invariant DNA hashing.
//!
//! The pipeline: orient the input on its canonical strand, split it into
//! blocks, pack each block's nucleotide values into a `u64`, fold the
//! packed value down to `width` bits with [`xor_fold`], and XOR the folded
//! blocks together over an all-ones seed. A second pass with the block
//! boundary shifted by `len % width` is XOR-combined when the length is
//! not a multiple of the width, so block alignment contributes to the
//! result.
//!
//! Because the whole input is oriented before any block is formed, a
//! sequence and its reverse complement always hash to the same value.

use dnahash_core::{mask, xor_fold, DnaHashError, Result};

use crate::canonical::{self, Strand};
use crate::chunk::ChunkIter;
use crate::codec::{self, COMPLEMENT_MASK};

/// Maximum output width in bits.
///
/// The compressor hands `numerify` blocks of `2 * width` symbols, and a
/// packed block occupies up to two bits per symbol of the `u64`
/// accumulator, so `2 * (2 * width) <= 64`.
pub const MAX_OUTPUT_WIDTH: u32 = u64::BITS / 4;

/// Largest block whose packed value fits the `u64` accumulator.
const MAX_PACK_LEN: usize = (u64::BITS / 2) as usize;

fn validate_width(width: u32) -> Result<()> {
    if width == 0 {
        return Err(DnaHashError::InvalidInput(
            "output width must be positive".into(),
        ));
    }
    if width % 2 != 0 {
        return Err(DnaHashError::OddWidth(width));
    }
    if width > MAX_OUTPUT_WIDTH {
        return Err(DnaHashError::WidthTooLarge(width, MAX_OUTPUT_WIDTH));
    }
    Ok(())
}

/// Reduce a single block to a `width`-bit value.
///
/// The block is read on its canonical strand, packed into a `u64` with the
/// leftmost symbol at the highest shift (one bit of shift per position),
/// then folded to `width` bits. The block may be at most 32 symbols long.
///
/// # Example
///
/// ```
/// use dnahash_seq::numerify;
///
/// // ACGT packs to 0*8 + 1*4 + 2*2 + 3*1 = 11; folding to 4 bits is a no-op
/// assert_eq!(numerify(b"ACGT", 4).unwrap(), 11);
/// ```
pub fn numerify(seq: &[u8], width: u32) -> Result<u64> {
    if width == 0 {
        return Err(DnaHashError::InvalidInput(
            "output width must be positive".into(),
        ));
    }
    if seq.len() > MAX_PACK_LEN {
        return Err(DnaHashError::InvalidInput(format!(
            "block of {} symbols exceeds the {}-symbol packing limit",
            seq.len(),
            MAX_PACK_LEN
        )));
    }
    codec::validate(seq)?;
    numerify_validated(seq, width)
}

/// [`numerify`] for input already checked by [`codec::validate`].
fn numerify_validated(seq: &[u8], width: u32) -> Result<u64> {
    let l = seq.len();
    let mut num = 0u64;
    match canonical::strand_validated(seq) {
        Strand::Forward => {
            for (i, &b) in seq.iter().enumerate() {
                num += codec::value_validated(b) << (l - 1 - i);
            }
        }
        // Pack the reverse complement without materializing it: the
        // complement of seq[i] lands at mirrored shift i.
        Strand::Reverse => {
            for (i, &b) in seq.iter().enumerate() {
                num += (codec::value_validated(b) ^ COMPLEMENT_MASK) << i;
            }
        }
    }
    xor_fold(num, width)
}

/// One compression pass over pre-validated input.
///
/// Seeds the accumulator with all ones, XORs in the leading partial block
/// `&seq[..offset]`, then XORs in every `2 * width`-symbol chunk of the
/// remainder.
pub(crate) fn compress(seq: &[u8], offset: usize, width: u32) -> Result<u64> {
    let mut accum = mask(width);
    accum ^= numerify_validated(&seq[..offset], width)?;
    for chunk in ChunkIter::new(&seq[offset..], 2 * width as usize)? {
        accum ^= numerify_validated(chunk, width)?;
    }
    Ok(accum)
}

/// Hash a DNA sequence to a `width`-bit value, invariant under reverse
/// complement.
///
/// The width must be positive, even, and at most [`MAX_OUTPUT_WIDTH`];
/// every input byte must be an uppercase A, C, G, or T. The empty sequence
/// hashes to the all-ones seed `(1 << width) - 1`.
///
/// # Example
///
/// ```
/// use dnahash_seq::{hash_dna, reverse_complement};
///
/// let seq = b"GATTACAGATTACA";
/// let rc = reverse_complement(seq).unwrap();
/// assert_eq!(hash_dna(seq, 8).unwrap(), hash_dna(&rc, 8).unwrap());
/// ```
pub fn hash_dna(seq: &[u8], width: u32) -> Result<u64> {
    validate_width(width)?;
    codec::validate(seq)?;
    hash_validated(seq, width)
}

/// Hash path shared by [`hash_dna`] and [`DnaHasher::hash`]; assumes the
/// width and the input bytes were already validated.
fn hash_validated(seq: &[u8], width: u32) -> Result<u64> {
    let canonical = canonical::canonicalize_validated(seq);
    let h1 = compress(&canonical, 0, width)?;
    let offset = canonical.len() % width as usize;
    if offset == 0 {
        Ok(h1)
    } else {
        Ok(h1 ^ compress(&canonical, offset, width)?)
    }
}

/// A hasher configured once with a validated output width.
///
/// # Example
///
/// ```
/// use dnahash_seq::DnaHasher;
///
/// let hasher = DnaHasher::new(16).unwrap();
/// let h = hasher.hash(b"GATTACA").unwrap();
/// assert!(h < (1 << 16));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnaHasher {
    width: u32,
}

impl DnaHasher {
    /// Create a hasher for `width`-bit outputs.
    ///
    /// Performs all width validation up front; [`DnaHasher::hash`] can then
    /// only fail on invalid input bytes.
    pub fn new(width: u32) -> Result<Self> {
        validate_width(width)?;
        Ok(Self { width })
    }

    /// The configured output width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Hash a sequence with the configured width.
    pub fn hash(&self, seq: &[u8]) -> Result<u64> {
        codec::validate(seq)?;
        hash_validated(seq, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::reverse_complement;

    // Deterministic DNA generator, so tests carry no rand dependency.
    fn random_dna(len: usize, seed: u64) -> Vec<u8> {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                bases[((state >> 33) % 4) as usize]
            })
            .collect()
    }

    // --- numerify ---

    #[test]
    fn numerify_vectors() {
        assert_eq!(numerify(b"ACGT", 4).unwrap(), 11);
        assert_eq!(numerify(b"AAAA", 4).unwrap(), 15);
        assert_eq!(numerify(b"GT", 2).unwrap(), 2);
        assert_eq!(numerify(b"TT", 2).unwrap(), 3);
        assert_eq!(numerify(b"CTT", 2).unwrap(), 2);
        assert_eq!(numerify(b"C", 2).unwrap(), 2);
        assert_eq!(numerify(b"A", 2).unwrap(), 3);
    }

    #[test]
    fn numerify_empty_is_zero() {
        assert_eq!(numerify(b"", 4).unwrap(), 0);
        assert_eq!(numerify(b"", 16).unwrap(), 0);
    }

    #[test]
    fn numerify_strand_invariant() {
        for seed in 0..20 {
            for len in [1, 2, 3, 7, 16, 31, 32] {
                let seq = random_dna(len, seed);
                let rc = reverse_complement(&seq).unwrap();
                assert_eq!(
                    numerify(&seq, 8).unwrap(),
                    numerify(&rc, 8).unwrap(),
                    "numerify diverges for {}",
                    std::str::from_utf8(&seq).unwrap()
                );
            }
        }
    }

    #[test]
    fn numerify_rejects_oversized_block() {
        let long = vec![b'A'; 33];
        assert!(matches!(
            numerify(&long, 4),
            Err(DnaHashError::InvalidInput(_))
        ));
        assert!(numerify(&vec![b'T'; 32], 4).is_ok());
    }

    #[test]
    fn numerify_width_errors() {
        assert!(matches!(
            numerify(b"ACGT", 0),
            Err(DnaHashError::InvalidInput(_))
        ));
        assert!(matches!(
            numerify(b"ACGT", 3),
            Err(DnaHashError::OddWidth(3))
        ));
        assert!(matches!(
            numerify(b"ACGT", 34),
            Err(DnaHashError::WidthTooLarge(34, _))
        ));
    }

    // --- compress ---

    #[test]
    fn compress_empty_is_seed() {
        assert_eq!(compress(b"", 0, 4).unwrap(), 0b1111);
        assert_eq!(compress(b"", 0, 16).unwrap(), 0xFFFF);
    }

    #[test]
    fn compress_single_block() {
        // seed 15 ^ numerify("") ^ numerify("ACGT") = 15 ^ 0 ^ 11 = 4
        assert_eq!(compress(b"ACGT", 0, 4).unwrap(), 4);
    }

    #[test]
    fn compress_with_offset() {
        // seed 3 ^ numerify("C") ^ numerify("TT") = 3 ^ 2 ^ 3 = 2
        assert_eq!(compress(b"CTT", 1, 2).unwrap(), 2);
    }

    // --- hash_dna ---

    #[test]
    fn hash_vectors() {
        assert_eq!(hash_dna(b"ACGT", 4).unwrap(), 4);
        assert_eq!(hash_dna(b"AAAA", 4).unwrap(), 0);
        assert_eq!(hash_dna(b"TTTT", 4).unwrap(), 0);
        assert_eq!(hash_dna(b"AAG", 2).unwrap(), 3);
        assert_eq!(hash_dna(b"CTT", 2).unwrap(), 3);
    }

    #[test]
    fn hash_empty_is_all_ones_seed() {
        for width in [2, 4, 8, 16] {
            assert_eq!(hash_dna(b"", width).unwrap(), (1 << width) - 1);
        }
    }

    #[test]
    fn hash_fits_width() {
        for width in [2, 4, 8, 16] {
            for seed in 0..10 {
                let seq = random_dna(100, seed);
                assert!(hash_dna(&seq, width).unwrap() < (1 << width));
            }
        }
    }

    #[test]
    fn hash_strand_invariant() {
        for width in [2u32, 4, 8, 16] {
            for seed in 0..10 {
                for len in [0, 1, 2, 3, 5, 7, 15, 16, 17, 33, 64, 100, 199] {
                    let seq = random_dna(len, seed);
                    let rc = reverse_complement(&seq).unwrap();
                    assert_eq!(
                        hash_dna(&seq, width).unwrap(),
                        hash_dna(&rc, width).unwrap(),
                        "hash diverges for {} at width {}",
                        std::str::from_utf8(&seq).unwrap(),
                        width
                    );
                }
            }
        }
    }

    #[test]
    fn hash_deterministic() {
        let seq = random_dna(1000, 7);
        assert_eq!(hash_dna(&seq, 16).unwrap(), hash_dna(&seq, 16).unwrap());
    }

    #[test]
    fn hash_width_errors() {
        assert!(matches!(
            hash_dna(b"ACGT", 0),
            Err(DnaHashError::InvalidInput(_))
        ));
        assert!(matches!(
            hash_dna(b"ACGT", 3),
            Err(DnaHashError::OddWidth(3))
        ));
        assert!(matches!(
            hash_dna(b"ACGT", 18),
            Err(DnaHashError::WidthTooLarge(18, MAX_OUTPUT_WIDTH))
        ));
    }

    #[test]
    fn hash_rejects_invalid_symbols() {
        assert!(matches!(
            hash_dna(b"ACGX", 4),
            Err(DnaHashError::InvalidSymbol(_))
        ));
        assert!(hash_dna(b"acgt", 4).is_err());
    }

    #[test]
    fn hash_long_sequence() {
        // Lengths far beyond one block only ever reach numerify in
        // chunks of at most 2 * width symbols.
        let seq = random_dna(100_000, 42);
        let rc = reverse_complement(&seq).unwrap();
        assert_eq!(hash_dna(&seq, 16).unwrap(), hash_dna(&rc, 16).unwrap());
    }

    // --- DnaHasher ---

    #[test]
    fn hasher_matches_free_function() {
        let hasher = DnaHasher::new(8).unwrap();
        for seed in 0..10 {
            let seq = random_dna(50, seed);
            assert_eq!(hasher.hash(&seq).unwrap(), hash_dna(&seq, 8).unwrap());
        }
    }

    #[test]
    fn hasher_validates_width_once() {
        assert!(DnaHasher::new(0).is_err());
        assert!(DnaHasher::new(5).is_err());
        assert!(DnaHasher::new(18).is_err());
        assert_eq!(DnaHasher::new(16).unwrap().width(), 16);
    }

    #[test]
    fn hasher_surfaces_symbol_errors() {
        let hasher = DnaHasher::new(4).unwrap();
        assert!(matches!(
            hasher.hash(b"ACGU"),
            Err(DnaHashError::InvalidSymbol(_))
        ));
    }
}
