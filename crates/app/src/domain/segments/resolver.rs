//! Segment resolution capability.

use std::fmt;

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A customer classification tag, e.g. `"p1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segment(String);

impl Segment {
    #[must_use]
    pub fn new(segment: impl Into<String>) -> Self {
        Self(segment.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors resolving a user's segment.
#[derive(Debug, Error)]
pub enum SegmentResolverError {
    /// The lookup request could not be sent or its body decoded.
    #[error("segment lookup request failed")]
    Request(#[source] reqwest::Error),

    /// The segment service knows no segment for the user.
    #[error("no segment mapped for user {user_id}")]
    Unmapped {
        /// The user the lookup was for.
        user_id: i64,
    },
}

/// Resolves the customer segment for a user.
///
/// Segment data lives in an external service; the evaluator only consumes
/// this capability, so tests can substitute a fake.
#[automock]
#[async_trait]
pub trait SegmentResolver: Send + Sync {
    /// Resolve the segment for a user.
    async fn resolve(&self, user_id: i64) -> Result<Segment, SegmentResolverError>;
}
