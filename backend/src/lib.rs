//! Campus energy dashboard backend.
//!
//! The domain resolves day records from the energy store and falls back to
//! generated data whenever the store cannot supply a usable day. Inbound
//! adapters expose the read model over HTTP; outbound adapters talk to a
//! REST store or keep everything in memory.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod seeding;
