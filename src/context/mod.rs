// Shared context handed to components through Dioxus context providers

pub mod app_context;

pub use app_context::AppContext;
