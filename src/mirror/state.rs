use serde::{Deserialize, Serialize};

/// What kind of media a simulation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// An opaque reference to image or video bytes. The `url` is either a
/// `data:` URL (images) or a `blob:` object URL (videos); the widget never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaRef {
    pub fn image(url: impl Into<String>) -> Self {
        Self { url: url.into(), kind: MediaKind::Image }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self { url: url.into(), kind: MediaKind::Video }
    }
}

/// Stage of the simulation widget. One discriminated value instead of a pile
/// of independent flags, so "loading with a populated error" or "lead gate
/// without a pending result" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetStage {
    /// Nothing in flight, nothing to reveal.
    Idle,
    /// A generation request is in flight; `message` is the current
    /// user-visible progress line.
    Loading { message: String },
    /// A result exists but the lead gate has not been satisfied yet.
    AwaitingLead { pending: MediaRef },
    /// The lead gate was satisfied and the result is shown.
    Revealed { generated: MediaRef },
    /// The last attempt failed; `message` is the friendly mapped text.
    Error { message: String },
}

impl WidgetStage {
    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetStage::Loading { .. })
    }

    pub fn pending(&self) -> Option<&MediaRef> {
        match self {
            WidgetStage::AwaitingLead { pending } => Some(pending),
            _ => None,
        }
    }

    pub fn revealed(&self) -> Option<&MediaRef> {
        match self {
            WidgetStage::Revealed { generated } => Some(generated),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_slots_are_exclusive() {
        let pending = MediaRef::image("data:image/png;base64,xyz");
        let stage = WidgetStage::AwaitingLead { pending: pending.clone() };
        assert_eq!(stage.pending(), Some(&pending));
        assert_eq!(stage.revealed(), None);
        assert!(!stage.is_loading());

        let stage = WidgetStage::Revealed { generated: pending.clone() };
        assert_eq!(stage.pending(), None);
        assert_eq!(stage.revealed(), Some(&pending));
    }

    #[test]
    fn media_ref_round_trips_through_json() {
        let media = MediaRef::video("blob:abc123");
        let json = serde_json::to_string(&media).unwrap();
        let back: MediaRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, media);
        assert!(json.contains("\"video\""));
    }
}
