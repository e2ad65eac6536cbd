//! onboard-bot: Slack workspace onboarding endpoints with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
