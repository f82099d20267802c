//! snackboard-repo
//!
//! The mapping layer between the domain and the document store: the snack
//! and feedback repositories, the pure category grouping, and the two
//! UI-facing workflows (catalog query, feedback submission).

pub mod catalog;
pub mod error;
pub mod feedback;
pub mod snacks;
pub mod submission;
