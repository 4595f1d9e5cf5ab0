use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "page-header",
            h1 { "Posted Jobs" }
        }
    }
}
