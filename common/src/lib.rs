//! Payload types shared between the reporting engine and whatever renders it.
//!
//! Everything here is plain data: serializable, rebuilt on every request, and
//! free of any store access.

pub mod model;
