//! Proxy module
//!
//! Handles request forwarding to the NVIDIA NIM upstream.

pub mod nim;

pub use nim::NimClient;
