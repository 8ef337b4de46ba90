use dioxus::prelude::*;

pub mod profile;

use profile::ProfileUser;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        ProfileUser {},

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-slate-900 transition-colors",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "max-w-3xl mx-auto px-6 py-12 text-white text-center",
            h1 {
                class: "text-2xl font-semibold mb-4",
                "Không tìm thấy trang"
            }
            p {
                class: "text-white/80 mb-6 break-words",
                "/{path}"
            }
            Link {
                to: Route::ProfileUser {},
                class: "underline",
                "Hồ sơ người dùng"
            }
        }
    }
}
