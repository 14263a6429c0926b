//! Binary encoder for plan and parse trees, as shipped from the coordinator to its workers.
//!
//! The output is a compact, native-endian, pre-order walk of the tree (see [`wire`] for the
//! layout) that only the matching decoder can read. It is not a storage or interchange format.
//!
//! ```ignore
//! let bytes = plancodec_encoder::encode(Some(&plan))?.into_bytes();
//! ```
//!
//! For plan caching, [`NodeEncoder::enter_cache_mode`] leaves out estimates and identifiers that
//! vary between otherwise equal plans.

mod catalog;
mod config;
mod dispatch;
mod encoder;
mod error;
mod mode;
pub mod wire;

pub use config::*;
pub use dispatch::*;
pub use encoder::*;
pub use error::*;
pub use mode::*;
