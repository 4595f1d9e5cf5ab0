// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

use posted_jobs::job::{HiringStatus, Severity};

#[component]
pub fn StatusBadge(status: HiringStatus) -> Element {
    let color_class = match status.severity() {
        Severity::Affirmative => "badge-success",
        Severity::Negative => "badge-error",
    };
    let label = status.label();

    rsx! {
        span { class: "badge {color_class}", "{label}" }
    }
}
