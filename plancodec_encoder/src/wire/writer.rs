use crate::error::Result;
use crate::wire::{shared_len, ElemCount, StrLen, WriteLen};
use derive_more::{Deref, DerefMut, From, Into};
use num_traits::ToPrimitive;
use plancodec_types::{NodeTag, NodeTagInt};
use std::mem;

/// Trailing marker of a complete top-level encode.
pub const WIRE_SENTINEL: u16 = 0xDEAD;

/// A fixed-width scalar written in native byte order.
pub trait WireScalar: Copy {
    const WIDTH: usize;
    fn append_ne(self, buf: &mut Vec<u8>);
}

macro_rules! wire_scalar {
    ($($t:ty),*) => {
        $(
            impl WireScalar for $t {
                const WIDTH: usize = mem::size_of::<$t>();
                fn append_ne(self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}
wire_scalar!(i16, u16, i32, u32, i64, u64, f64);

/// The primitive codec. Every emission appends and reports how much it appended.
#[derive(From, Into, Deref, DerefMut, Default)]
pub struct WireBuf {
    buf: Vec<u8>,
}

impl WireBuf {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
        }
    }

    fn append(&mut self, bytes: &[u8]) -> WriteLen {
        self.buf.extend_from_slice(bytes);
        WriteLen::new_manual(bytes.len())
    }

    pub fn write_scalar<T: WireScalar>(&mut self, v: T) -> WriteLen {
        v.append_ne(&mut self.buf);
        WriteLen::new_manual(T::WIDTH)
    }

    pub fn write_tag(&mut self, tag: NodeTag) -> WriteLen {
        self.write_scalar(*NodeTagInt::from(tag))
    }

    pub fn write_sentinel(&mut self) -> WriteLen {
        self.write_scalar(WIRE_SENTINEL)
    }

    pub fn write_bool(&mut self, b: bool) -> WriteLen {
        self.append(&[b as u8])
    }

    pub fn write_char(&mut self, c: u8) -> WriteLen {
        self.append(&[c])
    }

    /// Narrowed to 16 bits whatever the enumeration's own width.
    pub fn write_enum<E: ToPrimitive>(&mut self, e: E) -> WriteLen {
        let int = e.to_i16().unwrap();
        self.write_scalar(int)
    }

    /// An enumeration stored in an int field.
    pub fn write_enum_int<E: ToPrimitive>(&mut self, e: E) -> WriteLen {
        let int = e.to_i32().unwrap();
        self.write_scalar(int)
    }

    /// Always widened to double.
    pub fn write_float(&mut self, f: impl Into<f64>) -> WriteLen {
        self.write_scalar(f.into())
    }

    /// Length-prefixed. An absent string and an empty string both write length zero.
    pub fn write_str(&mut self, s: Option<&str>) -> Result<WriteLen> {
        let mut w_len = WriteLen::default();
        let slen = StrLen::from_str_opt(s)?;
        w_len += self.write_scalar(*slen);
        if let Some(s) = s {
            w_len += self.append(s.as_bytes());
        }
        Ok(w_len)
    }

    /// Raw bytes whose size the reader knows from the field's type.
    pub fn write_blob(&mut self, bytes: &[u8]) -> WriteLen {
        self.append(bytes)
    }

    pub fn write_zeros(&mut self, n: usize) -> WriteLen {
        self.buf.resize(self.buf.len() + n, 0);
        WriteLen::new_manual(n)
    }

    /// Elements only. The count is a separate field written by the caller.
    pub fn write_array<T: WireScalar>(&mut self, vals: &[T]) -> WriteLen {
        let mut w_len = WriteLen::default();
        for v in vals {
            w_len += self.write_scalar(*v);
        }
        w_len
    }

    /// The count field of a count-driven array.
    pub fn write_count<T>(&mut self, what: &'static str, vals: &[T]) -> Result<WriteLen> {
        let ct = ElemCount::from_len(what, vals.len())?;
        Ok(self.write_scalar(*ct))
    }

    /// The one count field ahead of parallel arrays, given each array's length.
    pub fn write_shared_count(&mut self, what: &'static str, lens: &[usize]) -> Result<WriteLen> {
        let ct = ElemCount::from_len(what, shared_len(what, lens)?)?;
        Ok(self.write_scalar(*ct))
    }
}
