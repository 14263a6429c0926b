//! The tree model shipped between the coordinator and its workers: parsed queries, planned
//! statements, and the expression and metadata nodes they are built from.
//!
//! Trees are built in full before they are handed to the encoder and are never cyclic.

mod bitmapset;
mod datum;
pub mod enums;
mod list;
mod node;
mod parsenodes;
mod plannodes;
mod primnodes;
mod tag;
mod value;

pub use bitmapset::*;
pub use datum::*;
pub use list::*;
pub use node::*;
pub use parsenodes::*;
pub use plannodes::*;
pub use primnodes::*;
pub use tag::*;
pub use value::*;

pub type Oid = u32;
pub type AttrNumber = i16;
pub type Index = u32;

pub type NodePtr = Option<Box<Node>>;
