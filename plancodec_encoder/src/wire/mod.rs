//! # Wire format
//!
//! A tree is written as a depth-first, pre-order walk. Nothing is self-describing beyond node
//! tags: the reader knows from each field's static type whether a node, a list, a literal or a
//! scalar comes next, and how wide it is. All integers are in native byte order.
//!
//! Every node position starts with a `u16` tag. Tag `0` means nothing follows, which is how an
//! absent node and an absent list are both written.
//!
//! ```text
//! struct Absent {
//!     tag:            u16 = 0,
//! }
//!
//! struct Node {
//!     tag:            u16,
//!     fields:         [Field; per-kind layout],
//! }
//!
//! struct List or IntList or OidList {
//!     tag:            u16,
//!     elems_count:    i32,
//!     elems:          [Node or i32 or u32; elems_count],
//! }
//!
//! struct Value::Integer {
//!     tag:            u16,
//!     ival:           i64,
//! }
//!
//! struct Value::Float or Value::String or Value::BitString {
//!     tag:            u16,
//!     text_len:       i32,
//!     text:           [u8; text_len],
//! }
//!
//! struct Value::Null {
//!     tag:            u16,
//! }
//! ```
//!
//! Fields inside a node:
//!
//! ```text
//! bool:           u8, 0 or 1
//! char:           u8
//! int16:          i16
//! int, uint, oid: i32 or u32
//! long, uint64:   i64 or u64
//! enum:           i16
//! float:          f64, whatever the source precision
//! string {
//!     len:        i32,            // 0 for both absent and empty
//!     bytes:      [u8; len],
//! }
//! blob:           [u8; N]         // N fixed by the field's type
//! array:          [T; count]      // count is an earlier int field
//! bitmapset {
//!     words_count:    i32,        // 0 for absent
//!     words:          [u32; words_count],
//! }
//! datum, by value:    u64
//! datum, by reference {
//!     len:        u64,            // 0 for the invalid pointer
//!     bytes:      [u8; len],
//! }
//! ```
//!
//! A top-level encode ends with the `u16` sentinel [`WIRE_SENTINEL`].

mod bitmapset;
mod datum;
mod lengths;
mod value;
mod writer;

pub use datum::*;
pub use lengths::*;
pub use writer::*;
