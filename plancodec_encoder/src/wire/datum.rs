use crate::error::Result;
use crate::wire::{DatumLen, WireBuf, WriteLen};
use plancodec_types::{Datum, VARHDRSZ};

/// Declared length of a variable-length (varlena) type.
pub const TYPLEN_VARLENA: i32 = -1;
/// Declared length of a NUL-terminated C string type.
pub const TYPLEN_CSTRING: i32 = -2;

/// Storage length of a by-reference datum whose type has no fixed length.
///
/// This is the type system's knowledge, supplied by the caller. The encoder only asks.
pub trait DatumSizer {
    fn datum_len(&self, referent: &[u8], typlen: i32) -> usize;
}

/// Sizes the two variable-length conventions of [`Datum`]: a leading native `u32` total
/// length for varlena, and the terminating NUL for C strings.
#[derive(Clone, Copy, Default, Debug)]
pub struct StorageSizer;

impl DatumSizer for StorageSizer {
    fn datum_len(&self, referent: &[u8], typlen: i32) -> usize {
        match typlen {
            TYPLEN_VARLENA if referent.len() >= VARHDRSZ => {
                let mut hdr = [0u8; VARHDRSZ];
                hdr.copy_from_slice(&referent[..VARHDRSZ]);
                u32::from_ne_bytes(hdr) as usize
            }
            TYPLEN_CSTRING => match referent.iter().position(|b| *b == 0) {
                Some(nul) => nul + 1,
                None => referent.len(),
            },
            _ => referent.len(),
        }
    }
}

impl WireBuf {
    /// Writes a datum as `typlen` and `typbyval` say it is stored.
    ///
    /// Both are taken on trust. A by-value datum is its word. A by-reference datum is a length,
    /// zero for the invalid pointer, then that many bytes. A positive `typlen` is the length;
    /// otherwise `sizer` decides. A referent shorter than its length is zero-filled.
    pub fn write_datum(
        &mut self,
        dat: &Datum,
        typlen: i32,
        typbyval: bool,
        sizer: &dyn DatumSizer,
    ) -> Result<WriteLen> {
        if typbyval {
            return Ok(self.write_scalar(dat.word()));
        }

        let referent = match dat.referent() {
            None => return Ok(self.write_scalar(*DatumLen::invalid())),
            Some(referent) => referent,
        };

        let len = if typlen > 0 {
            typlen as usize
        } else {
            sizer.datum_len(referent, typlen)
        };

        let mut w_len = WriteLen::default();
        w_len += self.write_scalar(*DatumLen::from_len(len)?);

        let body = &referent[..len.min(referent.len())];
        w_len += self.write_blob(body);
        if body.len() < len {
            w_len += self.write_zeros(len - body.len());
        }

        Ok(w_len)
    }
}
