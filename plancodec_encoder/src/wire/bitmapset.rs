use crate::error::Result;
use crate::wire::{WireBuf, WordCount, WriteLen};
use plancodec_types::Bitmapset;

impl WireBuf {
    /// Word count, then the words verbatim. An absent set writes a zero count.
    pub fn write_bitmapset(&mut self, bms: Option<&Bitmapset>) -> Result<WriteLen> {
        let words = bms.map_or(&[][..], Bitmapset::words);
        let mut w_len = WriteLen::default();
        w_len += self.write_scalar(*WordCount::from_words(words)?);
        w_len += self.write_array(words);
        Ok(w_len)
    }
}
