//! snackboard-store
//!
//! The document-store client boundary: collections of JSON documents keyed
//! by string id, with filtered queries, server-assigned timestamps, and
//! atomic array transforms. The store itself is a black box behind
//! [`store::DocumentStore`]; [`memory::MemoryStore`] is the bundled backend.

pub mod document;
pub mod error;
pub mod filter;
pub mod memory;
pub mod store;
