//! Block-chaining modes built on top of the round pipeline

pub mod cbc;
pub mod ecb;

pub use cbc::ChainingContext;
