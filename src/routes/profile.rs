use dioxus::prelude::*;

use crate::components::ProfileCard;
use crate::context::AppContext;
use crate::stores::user_profile::resolve_profile;

/// Profile page
///
/// Reads the stored profile once when mounted and renders it, falling back
/// to the built-in default when nothing usable is stored.
#[component]
pub fn ProfileUser() -> Element {
    let ctx = use_context::<AppContext>();
    let profile = use_hook(move || resolve_profile(ctx.storage()));

    rsx! {
        div {
            class: "relative min-h-screen w-full text-white",
            div {
                class: "absolute inset-0 bg-black/35 backdrop-blur-sm",
                aria_hidden: "true",
            }

            div {
                class: "relative z-10 px-6 py-10",
                div {
                    class: "mx-auto max-w-3xl",
                    header {
                        class: "mb-6",
                        h1 {
                            class: "text-2xl md:text-3xl font-semibold text-center leading-relaxed",
                            "Hồ sơ người dùng"
                        }
                    }

                    ProfileCard { profile }
                }
            }
        }
    }
}
