//! User-Segment Service Config

use clap::Args;

use mensa_app::domain::segments::SegmentServiceConfig;

/// External user-segment service settings.
#[derive(Debug, Args)]
pub struct SegmentsConfig {
    /// Base URL of the user-segment service
    #[arg(
        long,
        env = "USER_SEGMENT_BASE_URL",
        default_value = "http://localhost:1080"
    )]
    pub user_segment_base_url: String,
}

impl SegmentsConfig {
    /// Client settings for the segment resolver.
    #[must_use]
    pub fn client_config(&self) -> SegmentServiceConfig {
        SegmentServiceConfig {
            base_url: self.user_segment_base_url.clone(),
        }
    }
}
