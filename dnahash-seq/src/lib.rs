//! Strand-orientation-invariant DNA sequence hashing.
//!
//! A DNA fragment can be read from either physical strand, so a fragment
//! and its reverse complement describe the same molecule. This crate hashes
//! sequences over the strict uppercase ACGT alphabet such that both reads
//! produce the identical value:
//!
//! - **Sequences** — validated [`DnaSequence`] with [`reverse_complement`]
//! - **Canonical orientation** — [`canonical_strand`], [`canonicalize`], [`Strand`]
//! - **Block iteration** — zero-allocation [`ChunkIter`]
//! - **Hashing** — [`hash_dna`], [`numerify`], and the configured [`DnaHasher`]
//!
//! # Example
//!
//! ```
//! use dnahash_seq::{DnaHasher, DnaSequence};
//!
//! let seq = DnaSequence::new(b"GATTACA").unwrap();
//! let rc = seq.reverse_complement();
//! assert_eq!(rc.as_bytes(), b"TGTAATC");
//!
//! // Both strands hash to the same 8-bit value
//! let hasher = DnaHasher::new(8).unwrap();
//! assert_eq!(hasher.hash(&seq).unwrap(), hasher.hash(&rc).unwrap());
//! ```

pub mod canonical;
pub mod chunk;
pub mod codec;
pub mod hash;
pub mod seq;

// Re-export the sequence type and reverse complement
pub use seq::{reverse_complement, DnaSequence};

// Re-export canonical orientation selection
pub use canonical::{canonical_strand, canonicalize, Strand};

// Re-export the chunk iterator
pub use chunk::ChunkIter;

// Re-export the hashing pipeline
pub use hash::{hash_dna, numerify, DnaHasher, MAX_OUTPUT_WIDTH};

// Re-export the nucleotide codec
pub use codec::{complement_base, is_dna, nucleotide_value, COMPLEMENT_MASK};
