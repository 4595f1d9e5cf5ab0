// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

#[component]
pub fn Skills(skills: Vec<String>) -> Element {
    rsx! {
        div { class: "skills",
            // NOTE: Skills can repeat, so their position is the only stable key
            for (index, skill) in skills.into_iter().enumerate() {
                span { key: "{index}", class: "badge badge-outline", {skill} }
            }
        }
    }
}
