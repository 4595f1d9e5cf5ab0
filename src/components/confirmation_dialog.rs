use dioxus::prelude::*;

/// Asks the user to confirm a deletion. Renders nothing unless `active`
#[component]
pub fn ConfirmationDialog(
    active: bool,
    busy: bool,
    error: Option<String>,
    on_cancel: EventHandler,
    on_confirm: EventHandler,
) -> Element {
    if !active {
        return rsx! {};
    }

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box", role: "dialog",
                h3 { class: "modal-title", "Confirm Deletion" }
                p { "Are you sure you want to delete this job?" }

                {error.map(|error| rsx! {
                    p { role: "alert", class: "alert alert-error", "Couldn't delete this job: {error}" }
                })}

                div { class: "modal-action",
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "Yes"
                    }
                }
            }
        }
    }
}
