//! Documentation site for the `bootstrap_ui` builder library.
//!
//! Every live example on these pages is rendered through the same builders
//! the pages document.

mod app;
mod docs;
mod fixings;

pub use app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
