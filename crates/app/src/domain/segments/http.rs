//! HTTP segment resolver.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::segments::resolver::{Segment, SegmentResolver, SegmentResolverError};

/// Settings for the user-segment service client.
#[derive(Debug, Clone)]
pub struct SegmentServiceConfig {
    /// Base URL of the user-segment service.
    pub base_url: String,
}

/// Resolver backed by the external user-segment service.
#[derive(Debug, Clone)]
pub struct HttpSegmentResolver {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SegmentLookup {
    segment: Segment,
}

impl HttpSegmentResolver {
    /// Build a resolver for the configured segment service.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: SegmentServiceConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl SegmentResolver for HttpSegmentResolver {
    async fn resolve(&self, user_id: i64) -> Result<Segment, SegmentResolverError> {
        let response = self
            .client
            .get(format!("{}/api/v1/user_segment", self.base_url))
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(SegmentResolverError::Request)?;

        if !response.status().is_success() {
            return Err(SegmentResolverError::Unmapped { user_id });
        }

        let lookup: SegmentLookup = response
            .json()
            .await
            .map_err(SegmentResolverError::Request)?;

        Ok(lookup.segment)
    }
}
