use dioxus::prelude::*;

/// Color family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Info,
    Danger,
}

impl StatusTone {
    fn class(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "neutral",
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Info => "info",
            StatusTone::Danger => "danger",
        }
    }

    /// Tone for a policy, claim, assessment or account status string.
    pub fn for_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "active" | "approved" | "completed" => StatusTone::Success,
            "pending" => StatusTone::Warning,
            "processing" | "in_progress" => StatusTone::Info,
            "rejected" | "expired" | "inactive" => StatusTone::Danger,
            _ => StatusTone::Neutral,
        }
    }
}

/// Pill showing a record's status, colored by [`StatusTone::for_status`].
#[component]
pub fn StatusBadge(
    status: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let tone = StatusTone::for_status(&status);
    let text = status.replace('_', " ");
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            "{text}"
        }
    }
}
