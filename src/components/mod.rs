mod confirmation_dialog;
mod edit_job;
mod header;
mod job_card;
mod posted_jobs;
mod skills;
mod status_badge;

pub use edit_job::EditJob;
pub use header::Header;
pub use posted_jobs::PostedJobs;
