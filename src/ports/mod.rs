//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into Slack through these. The HTTP
//! adapter drives the use cases directly.

pub mod outbound;

pub use outbound::{AdminInvitePort, DirectoryPort, InviteErrorPort, MessengerPort};
