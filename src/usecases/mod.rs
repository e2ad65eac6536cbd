//! Application use cases. Orchestrate domain logic via ports.

pub mod greeting_service;
pub mod invite_service;
pub mod verify_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use greeting_service::GreetingService;
pub use invite_service::InviteService;
pub use verify_service::VerifyService;
