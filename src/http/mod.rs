//! HTTP protocol layer.
//!
//! Content-type detection, byte-range evaluation, and response building,
//! independent of how files are located on disk.

pub mod mime;
pub mod range;
pub mod response;
