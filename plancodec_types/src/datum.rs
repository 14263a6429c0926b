use std::mem;

/// Bytes in the length word that prefixes a variable-length datum.
pub const VARHDRSZ: usize = mem::size_of::<u32>();

/// A runtime-typed scalar.
///
/// A datum does not know its own type. Whoever holds it also holds the declared storage length
/// and the pass-by-value flag, and those decide how the datum is read.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Datum {
    /// Pass-by-value scalar, held in a native word.
    Word(u64),
    /// Pass-by-reference payload. `None` is the invalid pointer.
    Ref(Option<Vec<u8>>),
}

impl Default for Datum {
    fn default() -> Self {
        Datum::Word(0)
    }
}

/* By-value constructors. Narrow signed integers are sign-extended into the word. */
impl Datum {
    pub fn from_bool(b: bool) -> Self {
        Datum::Word(b as u64)
    }
    pub fn from_i16(i: i16) -> Self {
        Datum::Word(i as i64 as u64)
    }
    pub fn from_i32(i: i32) -> Self {
        Datum::Word(i as i64 as u64)
    }
    pub fn from_i64(i: i64) -> Self {
        Datum::Word(i as u64)
    }
    pub fn from_oid(oid: u32) -> Self {
        Datum::Word(oid as u64)
    }
    pub fn from_f64(f: f64) -> Self {
        Datum::Word(f.to_bits())
    }
}

/* By-reference constructors. */
impl Datum {
    /// A variable-length datum: a native `u32` total length (header included), then the body.
    pub fn varlena(body: &[u8]) -> Self {
        let tot = (VARHDRSZ + body.len()) as u32;
        let mut buf = Vec::with_capacity(tot as usize);
        buf.extend_from_slice(&tot.to_ne_bytes());
        buf.extend_from_slice(body);
        Datum::Ref(Some(buf))
    }

    pub fn text(s: &str) -> Self {
        Self::varlena(s.as_bytes())
    }

    /// A NUL-terminated C string.
    pub fn cstring(s: &str) -> Self {
        let mut buf = Vec::with_capacity(s.len() + 1);
        buf.extend_from_slice(s.as_bytes());
        buf.push(0);
        Datum::Ref(Some(buf))
    }

    pub fn fixed(bytes: &[u8]) -> Self {
        Datum::Ref(Some(bytes.to_vec()))
    }

    pub fn invalid() -> Self {
        Datum::Ref(None)
    }
}

/* Accessors. */
impl Datum {
    /// The word of a by-value datum. A by-reference datum has no word and reads as zero.
    pub fn word(&self) -> u64 {
        match self {
            Datum::Word(w) => *w,
            Datum::Ref(_) => 0,
        }
    }

    /// The payload of a by-reference datum, or `None` for the invalid pointer.
    /// A by-value datum has no payload.
    pub fn referent(&self) -> Option<&[u8]> {
        match self {
            Datum::Word(_) => None,
            Datum::Ref(r) => r.as_deref(),
        }
    }
}
