//! Infrastructure adapters.
//!
//! Slack implements the outbound ports and maps its errors to DomainError; HTTP
//! drives the use cases.

pub mod http;
pub mod slack;
