//! Networking modules for the blog JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and request encoding, `types` defines the
//! request/response schema the controllers decode.

pub mod api;
pub mod types;
