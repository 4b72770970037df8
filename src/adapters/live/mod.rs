//! Live adapters for real external interactions.

pub mod dispatch;
pub mod docs;
pub mod filesystem;
