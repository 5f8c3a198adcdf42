//! Wire-format DTOs shared by all API endpoints.
//!
//! These types define the JSON request and response bodies of the HTTP API.
//! Field names are camelCase on the wire.

pub mod api;
pub mod impression;
pub mod prayer;
