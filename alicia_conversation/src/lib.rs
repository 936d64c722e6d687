#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Conversation state and reply routing for the Alicia persona.
//!
//! # Key Features
//! - In-memory session table with one lock per user
//! - Keyword sensitivity scoring with tiered acknowledgments
//! - Natural conversation endings, hints and promotional suggestions
//! - Completion service adapter with persona apologies on failure
//! - Simulated thinking and typing delays

mod completion;
mod manager;
mod metrics;
mod pacing;
mod random;
pub mod replies;
pub mod sensitivity;
mod store;

pub use completion::CompletionAdapter;
pub use manager::{Reply, ReplyKind, SessionManager, Stats};
pub use metrics::{Metrics, MetricsSnapshot};
pub use pacing::{COMMAND_PAUSE, Pacer, START_PAUSE, typing_bounds};
pub use random::RandomSource;
pub use sensitivity::Tier;
pub use store::InMemorySessionStore;
