use dioxus::prelude::*;

use crate::components::VerificationBadge;
use crate::stores::user_profile::UserProfile;
use crate::utils::initials_of;

/// Read-only card showing every field of a profile
#[component]
pub fn ProfileCard(profile: UserProfile) -> Element {
    let initials = initials_of(&profile.full_name);

    rsx! {
        section {
            aria_label: "Thông tin hồ sơ",
            class: "rounded-2xl border border-white/20 bg-white/10 shadow-lg backdrop-blur-md p-6 md:p-8",

            // Avatar, name and badge
            div {
                class: "flex flex-col md:flex-row md:items-center md:justify-between gap-6",
                div {
                    class: "flex items-center gap-4",
                    div {
                        class: "h-16 w-16 shrink-0 rounded-full bg-gradient-to-br from-emerald-400 to-cyan-400 grid place-items-center text-xl font-bold text-slate-900",
                        "{initials}"
                    }
                    div {
                        class: "leading-tight",
                        div {
                            class: "text-lg font-semibold break-words",
                            "{profile.full_name}"
                        }
                        div {
                            class: "text-white/80 text-sm break-words",
                            "{profile.email}"
                        }
                    }
                }

                VerificationBadge { is_verified: profile.is_verified }
            }

            div { class: "my-6 h-px w-full bg-white/10" }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-5",
                ProfileField { caption: "Email", value: profile.email.clone(), wide: true }
                ProfileField { caption: "Họ và tên", value: profile.full_name.clone() }
                ProfileField { caption: "Số điện thoại", value: profile.phone.clone() }
                ProfileField { caption: "Địa chỉ", value: profile.address.clone(), wide: true }
            }
        }
    }
}

/// Labelled read-only value
#[component]
fn ProfileField(caption: &'static str, value: String, #[props(default)] wide: bool) -> Element {
    let span_class = if wide { "md:col-span-2" } else { "" };

    rsx! {
        div {
            class: "{span_class}",
            label {
                class: "mb-1 block text-sm text-white/80",
                "{caption}"
            }
            div {
                class: "w-full rounded-xl border border-white/20 bg-white/10 px-4 py-3 break-words",
                "{value}"
            }
        }
    }
}
