//! Domain models and operation parameter types.
//!
//! Repositories return these models instead of raw entity models so the
//! business logic layer stays decoupled from persistence details.

pub mod impression;
pub mod prayer;
