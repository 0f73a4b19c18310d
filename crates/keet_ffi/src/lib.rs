//! FFI surface crate for the Flutter view layer.

pub mod api;
