use dioxus::prelude::*;

use posted_jobs::{
    api::HttpJobApi,
    config::Config,
    dashboard::{Dashboard, refresh},
};

use crate::components::job_card::JobCard;

#[component]
pub fn PostedJobs() -> Element {
    let api = use_context::<HttpJobApi>();
    let role_id = use_context::<Config>().role_id;
    let mut dashboard = use_signal(Dashboard::new);

    // NOTE: Tasks spawned here are owned by this component, so navigating away drops a fetch that's still in flight
    // before it can write to the (by then dropped) signal
    use_hook(move || {
        spawn(async move {
            refresh(&api, &role_id, |fetched| dashboard.write().apply(fetched)).await;
        })
    });

    let state = dashboard.read();
    let load_error = state.load_error().map(|report| {
        rsx! {
            div { role: "alert", class: "alert alert-error", "Couldn't load your posted jobs: {report}" }
        }
    });
    let empty = state.loaded() && state.jobs().is_empty();
    let cards: Vec<_> = state
        .cards()
        .map(|(job, applicants)| (job.job_id, job.clone(), applicants))
        .collect();
    drop(state);

    rsx! {
        div { class: "card-body",
            {load_error}

            if empty {
                p { class: "empty-state", "You haven't posted any jobs yet" }
            }

            div { class: "job-grid",
                for (job_id, job, applicants) in cards {
                    JobCard {
                        key: "{job_id}",
                        job,
                        applicants,
                        on_delete: move |job_id| dashboard.write().remove(job_id),
                    }
                }
            }
        }
    }
}
