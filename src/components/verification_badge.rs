use dioxus::prelude::*;

const BADGE_BASE: &str = "inline-flex items-center gap-2 rounded-full px-3 py-1 text-sm font-medium";
const DOT_BASE: &str = "h-2 w-2 rounded-full";

/// Label and classes for the verification badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub tone: &'static str,
    pub dot: &'static str,
}

impl BadgeStyle {
    pub fn for_status(is_verified: bool) -> Self {
        if is_verified {
            Self {
                label: "Đã xác minh",
                tone: "bg-emerald-500/15 text-emerald-300 border border-emerald-400/30",
                dot: "bg-emerald-400",
            }
        } else {
            Self {
                label: "Chưa xác minh",
                tone: "bg-amber-500/15 text-amber-300 border border-amber-400/30",
                dot: "bg-amber-400",
            }
        }
    }

    pub fn container_class(&self) -> String {
        format!("{} {}", BADGE_BASE, self.tone)
    }

    pub fn dot_class(&self) -> String {
        format!("{} {}", DOT_BASE, self.dot)
    }
}

#[component]
pub fn VerificationBadge(is_verified: bool) -> Element {
    let style = BadgeStyle::for_status(is_verified);
    let container_class = style.container_class();
    let dot_class = style.dot_class();

    rsx! {
        span {
            class: "{container_class}",
            span {
                class: "{dot_class}",
                aria_hidden: "true",
            }
            "{style.label}"
        }
    }
}
