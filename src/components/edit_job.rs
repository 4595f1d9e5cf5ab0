// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

use posted_jobs::job::JobId;

use crate::Route;

/// Where the "Edit" button on a job card leads. The editing form itself belongs to the job-posting screens
#[component]
pub fn EditJob(job_id: JobId) -> Element {
    rsx! {
        div { class: "card-body",
            h2 { class: "card-title", "Edit job #{job_id}" }
            p { "Editing isn't available here yet." }
            Link { class: "btn", to: Route::PostedJobs {}, "Back to posted jobs" }
        }
    }
}
