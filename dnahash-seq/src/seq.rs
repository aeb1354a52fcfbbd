//! Validated DNA sequence type and reverse complement.
//!
//! [`DnaSequence`] is a newtype over `Vec<u8>` whose constructor checks
//! every byte against the strict uppercase ACGT alphabet. The inner data
//! is always valid, so `Deref<Target=[u8]>` and `as_bytes()` are zero-cost
//! and safe to pass to downstream `&[u8]` APIs without re-validation.

use std::fmt;
use std::ops::Deref;

use dnahash_core::Result;

use crate::canonical::{self, Strand};
use crate::codec;

/// Return the reverse complement of a raw byte sequence.
///
/// # Example
///
/// ```
/// use dnahash_seq::reverse_complement;
///
/// assert_eq!(reverse_complement(b"GATTACA").unwrap(), b"TGTAATC");
/// ```
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>> {
    seq.iter().rev().map(|&b| codec::complement_base(b)).collect()
}

/// A validated DNA sequence over the strict uppercase ACGT alphabet.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DnaSequence {
    data: Vec<u8>,
}

impl DnaSequence {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Returns an error naming the first byte that is not an uppercase
    /// A, C, G, or T.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        codec::validate(bytes)?;
        Ok(Self {
            data: bytes.to_vec(),
        })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// # Safety (logical)
    ///
    /// Caller must guarantee all bytes are uppercase A, C, G, or T.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The raw sequence bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> DnaSequence {
        let rc: Vec<u8> = self
            .data
            .iter()
            .rev()
            .map(|&b| codec::complement_validated(b))
            .collect();
        DnaSequence::from_validated(rc)
    }

    /// Which orientation [`DnaSequence::canonical`] will read from.
    pub fn strand(&self) -> Strand {
        canonical::strand_validated(&self.data)
    }

    /// Return the sequence in its canonical orientation.
    ///
    /// The result is the same for this sequence and its reverse complement.
    pub fn canonical(&self) -> DnaSequence {
        DnaSequence::from_validated(canonical::canonicalize_validated(&self.data))
    }

    /// Whether the sequence equals its own reverse complement.
    pub fn is_palindromic(&self) -> bool {
        let n = self.data.len();
        self.data
            .iter()
            .zip(self.data.iter().rev())
            .take(n / 2 + n % 2)
            .all(|(&b, &m)| codec::complement_validated(m) == b)
    }
}

impl Deref for DnaSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for DnaSequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "DnaSequence(\"{}\")", s)
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DnaSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DnaSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
