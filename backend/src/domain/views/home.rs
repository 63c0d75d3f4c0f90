//! Static landing page.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::SessionState;

/// Welcome content, plus the signed-in user when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    title: &'static str,
    subtitle: &'static str,
    hero_caption: &'static str,
    #[schema(example = "admin")]
    signed_in_as: Option<String>,
}

impl HomeView {
    pub fn title(&self) -> &str {
        self.title
    }

    pub fn hero_caption(&self) -> &str {
        self.hero_caption
    }

    pub fn signed_in_as(&self) -> Option<&str> {
        self.signed_in_as.as_deref()
    }
}

pub(super) fn render(session: &SessionState) -> HomeView {
    HomeView {
        title: "Welcome to the Online Gaming System",
        subtitle: "Your portal to an exciting world of online gaming",
        hero_caption: "Ready to Play?",
        signed_in_as: session.current_user().map(str::to_owned),
    }
}
