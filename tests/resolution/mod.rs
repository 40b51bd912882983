//! Resolution layer tests
//!
//! End-to-end tests through the public API:
//! - Overload resolution under nominal subtyping
//! - Declaration scopes opening and closing
//! - Resource exhaustion and recovery

pub mod tests_exhaustion;
pub mod tests_overloads;
pub mod tests_scopes;
