use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A transient, dismissible message shown outside the widget's inline error slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn extraction_failed() -> Self {
        Self {
            title: "Error processing file".to_string(),
            description: "There was an issue extracting text from your file.".to_string(),
            variant: NotificationVariant::Destructive,
        }
    }
}
