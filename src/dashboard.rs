// Standard Library Imports
use std::sync::Arc;

// External Crate Imports
use color_eyre::eyre::Report;
use futures::future::join_all;
use tracing::{debug, error, warn};

// Local Crate Imports
use crate::{
    api::JobApi,
    applicants::{ApplicantCount, ApplicantCounts},
    job::{JobId, JobRecord, RoleId},
};

// Public API ==========================================================================================================

/// The outcome of one phase of [`refresh()`], to be committed with [`Dashboard::apply()`]
#[derive(Debug)]
pub enum Fetched {
    Jobs(Vec<JobRecord>),
    Counts(ApplicantCounts),
    Failed(Report),
}

/// The provider's posted jobs, in the order the service returned them, along with their applicant counts
#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    jobs: Vec<JobRecord>,
    counts: ApplicantCounts,
    loaded: bool,
    load_error: Option<Arc<Report>>,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    #[must_use]
    pub const fn counts(&self) -> &ApplicantCounts {
        &self.counts
    }

    /// Whether a list of jobs has been received at least once
    #[must_use]
    pub const fn loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&Report> {
        self.load_error.as_deref()
    }

    pub fn cards(&self) -> impl Iterator<Item = (&JobRecord, ApplicantCount)> {
        self.jobs
            .iter()
            .map(|job| (job, self.counts.get(job.job_id)))
    }

    pub fn apply(&mut self, fetched: Fetched) {
        match fetched {
            Fetched::Jobs(jobs) => {
                self.jobs = jobs;
                self.loaded = true;
                self.load_error = None;
            }
            Fetched::Counts(counts) => self.counts = counts,
            // NOTE: Whatever was loaded before stays on screen, since stale jobs are more useful than none
            Fetched::Failed(report) => self.load_error = Some(Arc::new(report)),
        }
    }

    /// Drops a job the service has already deleted, keeping the remaining jobs in order
    pub fn remove(&mut self, job_id: JobId) {
        self.jobs.retain(|job| job.job_id != job_id);
        self.counts.remove(job_id);
    }
}

/// Fetches the provider's jobs, then their applicant counts, passing each result to `apply` as soon as it arrives.
/// The jobs are handed over before any counts are requested, so they can be shown while the counts are in flight.
pub async fn refresh(api: &impl JobApi, role_id: &RoleId, mut apply: impl FnMut(Fetched)) {
    let jobs = match api.provider_jobs(role_id).await {
        Ok(jobs) => jobs,
        Err(report) => {
            error!("couldn't fetch the posted jobs: {report:#}");
            apply(Fetched::Failed(report));
            return;
        }
    };

    let job_ids: Vec<_> = jobs.iter().map(|job| job.job_id).collect();
    debug!(jobs = job_ids.len(), "fetched posted jobs");
    apply(Fetched::Jobs(jobs));

    let counts = fetch_counts(api, &job_ids).await;
    apply(Fetched::Counts(counts));
}

/// Requests every job's applicant count at once. Each request settles on its own: a failed request only marks that
/// job's count as [`ApplicantCount::Unknown`]
pub async fn fetch_counts(api: &impl JobApi, job_ids: &[JobId]) -> ApplicantCounts {
    let requests = job_ids.iter().map(|&job_id| async move {
        let count = match api.applicant_count(job_id).await {
            Ok(count) => ApplicantCount::Known(count),
            Err(report) => {
                warn!(%job_id, "couldn't fetch the applicant count: {report:#}");
                ApplicantCount::Unknown
            }
        };

        (job_id, count)
    });

    join_all(requests).await.into_iter().collect()
}

// Unit Tests ==========================================================================================================
