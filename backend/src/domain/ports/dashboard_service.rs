//! Driving port for the dashboard views.

use async_trait::async_trait;

use crate::domain::views::{ViewRequest, ViewResponse};
use crate::domain::{Error, SessionState};

/// Domain use-case port that renders one view for one session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Run the handler for `request` on behalf of `session`.
    async fn render(&self, session: &SessionState, request: ViewRequest)
    -> Result<ViewResponse, Error>;
}
