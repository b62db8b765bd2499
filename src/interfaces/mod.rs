//! Wire decode/encode at the hosting boundary.
//!
//! The engine itself performs no I/O; these readers and writers translate
//! between payload formats and the domain types it consumes and produces.

pub mod csv;
pub mod json;
