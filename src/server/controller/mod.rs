//! HTTP request handlers for the prayer API.
//!
//! Controllers translate between the wire format and the service layer:
//! they extract the authenticated identity, validate enum fields, apply
//! ownership checks, and map outcomes to status codes. Business logic
//! lives in the service layer.

pub mod impression;
pub mod prayer;

#[cfg(test)]
mod test;
