use dioxus::prelude::*;

use posted_jobs::{
    api::HttpJobApi,
    applicants::ApplicantCount,
    confirmation::{Confirmation, delete_job},
    job::{JobId, JobRecord},
};

use crate::{
    Route,
    components::{
        confirmation_dialog::ConfirmationDialog, skills::Skills, status_badge::StatusBadge,
    },
};

#[component]
pub fn JobCard(job: JobRecord, applicants: ApplicantCount, on_delete: EventHandler<JobId>) -> Element {
    let api = use_context::<HttpJobApi>();
    let mut confirmation = use_signal(Confirmation::default);
    let job_id = job.job_id;

    let on_confirm = move |()| {
        if !confirmation.write().confirm() {
            return;
        }

        let api = api.clone();
        spawn(async move {
            let result = delete_job(&api, job_id).await;
            // NOTE: The signal is settled before the parent is told, since removing this card drops the signal
            if confirmation.write().settle(result) {
                on_delete.call(job_id);
            }
        });
    };

    let state = confirmation.read();
    let (active, busy, error) = (state.visible(), state.busy(), state.error().map(str::to_owned));
    drop(state);

    rsx! {
        article { class: "job-card",
            div { class: "job-header",
                h2 { class: "card-title", "{job.title}" }
                StatusBadge { status: job.status() }
            }

            p { "{job.description}" }
            p {
                strong { "Experience: " }
                "{job.experience}"
            }
            p {
                strong { "Education: " }
                "{job.education}"
            }
            p {
                strong { "Location: " }
                "{job.location}"
            }
            p {
                strong { "Posted on: " }
                {job.posted_on_label()}
            }

            Skills { skills: job.skills().into_iter().map(str::to_owned).collect::<Vec<_>>() }

            div { class: "button-group",
                button { class: "btn btn-ghost", r#type: "button", "{applicants}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator().push(Route::EditJob { job_id });
                    },
                    "Edit"
                }
                button {
                    class: "btn btn-error",
                    r#type: "button",
                    onclick: move |_| confirmation.write().request(),
                    "Delete"
                }
            }

            ConfirmationDialog {
                active,
                busy,
                error,
                on_cancel: move |()| confirmation.write().cancel(),
                on_confirm,
            }
        }
    }
}
