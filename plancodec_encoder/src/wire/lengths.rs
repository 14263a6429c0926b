use crate::error::{EncodeError, Result};
use derive_more::{Add, AddAssign, Deref};

/// Bytes appended by one emission.
#[derive(Deref, Add, AddAssign, PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

fn narrow<T: TryFrom<usize>>(what: &'static str, len: usize) -> Result<T> {
    T::try_from(len).map_err(|_| EncodeError::CountOverflow { what, len })
}

/// Length of arrays governed by one count field. The first array leads; every other must match.
pub fn shared_len(what: &'static str, lens: &[usize]) -> Result<usize> {
    let (&expected, rest) = match lens.split_first() {
        None => return Ok(0),
        Some(split) => split,
    };
    match rest.iter().find(|&&actual| actual != expected) {
        Some(&actual) => Err(EncodeError::ParallelLengthMismatch {
            what,
            expected,
            actual,
        }),
        None => Ok(expected),
    }
}

/// Byte length prefixing a string.
#[derive(Deref, Clone, Copy)]
pub struct StrLen(i32);
impl StrLen {
    pub fn from_str_opt(s: Option<&str>) -> Result<Self> {
        let len = s.map_or(0, str::len);
        Ok(Self(narrow("string", len)?))
    }
}

/// Element count following a list's container tag. Also used for count-driven arrays.
#[derive(Deref, Clone, Copy)]
pub struct ElemCount(i32);
impl ElemCount {
    pub fn from_len(what: &'static str, len: usize) -> Result<Self> {
        Ok(Self(narrow(what, len)?))
    }
}

/// A 16-bit count written as two raw bytes ahead of its array.
#[derive(Deref, Clone, Copy)]
pub struct ShortCount(i16);
impl ShortCount {
    pub fn from_len(what: &'static str, len: usize) -> Result<Self> {
        Ok(Self(narrow(what, len)?))
    }
}

/// Word count prefixing an integer set.
#[derive(Deref, Clone, Copy)]
pub struct WordCount(i32);
impl WordCount {
    pub fn from_words<W>(words: &[W]) -> Result<Self> {
        Ok(Self(narrow("bitmapset", words.len())?))
    }
}

/// Byte length prefixing a by-reference datum. Zero marks the invalid pointer.
#[derive(Deref, Clone, Copy)]
pub struct DatumLen(u64);
impl DatumLen {
    pub fn invalid() -> Self {
        Self(0)
    }
    pub fn from_len(len: usize) -> Result<Self> {
        Ok(Self(narrow("datum", len)?))
    }
}
