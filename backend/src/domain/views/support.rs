//! Support contact form.
//!
//! Submissions are acknowledged and dropped. Nothing is stored or sent.

use serde::Serialize;
use utoipa::ToSchema;

use super::Notice;

/// Acknowledgement shown after every submission.
pub const SUPPORT_ACKNOWLEDGEMENT: &str = "Thank you for reaching out! We'll get back to you soon.";

/// A support submission. Both fields are free text and kept as entered.
///
/// # Examples
/// ```
/// use gamehub::domain::views::SupportForm;
///
/// let form = SupportForm::new("me", "lag");
/// assert_eq!(form.email(), "me");
/// assert_eq!(form.issue(), "lag");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportForm {
    email: String,
    issue: String,
}

impl SupportForm {
    pub fn new(email: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            issue: issue.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn issue(&self) -> &str {
        &self.issue
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportRequest {
    pub submission: Option<SupportForm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupportView {
    title: &'static str,
    description: &'static str,
    acknowledgement: Option<Notice>,
}

impl SupportView {
    pub fn acknowledgement(&self) -> Option<&Notice> {
        self.acknowledgement.as_ref()
    }
}

pub(super) fn render(request: SupportRequest) -> SupportView {
    SupportView {
        title: "Support",
        description: "Need help? Reach out to us!",
        acknowledgement: request
            .submission
            .map(|_| Notice::success(SUPPORT_ACKNOWLEDGEMENT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn acknowledges_only_submissions() {
        assert!(render(SupportRequest::default()).acknowledgement().is_none());

        let view = render(SupportRequest {
            submission: Some(SupportForm::new("a@b.c", "lag")),
        });
        assert_eq!(
            view.acknowledgement().map(Notice::message),
            Some(SUPPORT_ACKNOWLEDGEMENT)
        );
    }

    #[rstest]
    #[case("me", "lag")]
    #[case("", "")]
    #[case("   ", "   ")]
    fn acknowledges_any_submitted_text(#[case] email: &str, #[case] issue: &str) {
        let view = render(SupportRequest {
            submission: Some(SupportForm::new(email, issue)),
        });
        assert_eq!(
            view.acknowledgement().map(Notice::message),
            Some(SUPPORT_ACKNOWLEDGEMENT)
        );
    }
}
