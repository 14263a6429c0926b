use crate::error::Result;
use crate::wire::{WireBuf, WriteLen};
use plancodec_types::Value;

impl WireBuf {
    /// Tag, then a payload whose shape the tag determines.
    pub fn write_value(&mut self, val: &Value) -> Result<WriteLen> {
        let mut w_len = self.write_tag(val.tag());
        match val {
            Value::Integer(ival) => w_len += self.write_scalar(*ival),
            Value::Float(s) | Value::String(s) | Value::BitString(s) => {
                w_len += self.write_str(Some(s.as_str()))?
            }
            Value::Null => {}
        }
        Ok(w_len)
    }
}
