//! External reasoning service integration.
//!
//! The semantic judgment of a report (inconsistencies, vague claims,
//! misleading statements) is delegated to an external natural-language
//! reasoning service behind the [`ReasoningClient`] trait. The response is
//! opaque prose; a 0-100 reliability rating is pulled out of it best-effort.

pub mod client;
pub mod error;
pub mod rating;

mod prompt;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use client::{GenaiReasoningClient, ReasoningClient};
pub use error::ReasoningError;
pub use rating::extract_reliability_rating;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBehavior, MockReasoningClient};
