//! Core domain layer. No external I/O dependencies.
//!
//! Entities, greeting templates and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod greetings;

pub use entities::{
    GreetingMessage, InviteOutcome, LookupResult, MilitaryStatus, SlackUser, UnknownStatus,
};
pub use errors::DomainError;
