//! User-facing feedback records.
//!
//! Informational and success messages queue as transient toasts; errors and
//! warnings surface as a single blocking modal that pauses the session until
//! dismissed. Auto-dismiss timing is the embedding shell's concern.

use crate::explanations::move_explanations::MoveExplanation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Warning,
    Info,
    Success,
}

impl FeedbackKind {
    /// Errors and warnings block play until acknowledged.
    #[inline]
    pub const fn is_blocking(self) -> bool {
        matches!(self, FeedbackKind::Error | FeedbackKind::Warning)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub id: String,
    pub kind: FeedbackKind,
    pub message: String,
    pub icon: &'static str,
    pub explanation: Option<String>,
    /// Rule identifier for the external explanation collaborator.
    pub rule: Option<&'static str>,
}

impl FeedbackMessage {
    pub fn plain(kind: FeedbackKind, message: impl Into<String>, icon: &'static str) -> Self {
        Self {
            id: String::new(),
            kind,
            message: message.into(),
            icon,
            explanation: None,
            rule: None,
        }
    }

    pub fn from_explanation(
        kind: FeedbackKind,
        explanation: MoveExplanation,
        icon: &'static str,
    ) -> Self {
        Self {
            id: String::new(),
            kind,
            message: explanation.message,
            icon,
            explanation: Some(explanation.explanation),
            rule: Some(explanation.rule),
        }
    }
}
