//! Contest domain logic.
//!
//! Pure rules shared by the storage and HTTP layers: word counting, the
//! event lifecycle, submission validation and the admin credential gate.
//! Nothing in this crate performs I/O.

pub mod admin;
pub mod error;
pub mod event;
pub mod submission;
pub mod types;
pub mod words;
