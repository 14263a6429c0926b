//! Per-kind emission routines, one `impl NodeWriter` block per family.
//!
//! Each routine writes its kind's tag and then its fields in a fixed order that the decoder
//! mirrors exactly. Reordering, adding, or removing a field is a wire format change.

mod parsenodes;
mod plan;
mod primnodes;
