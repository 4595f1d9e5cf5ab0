// Standard Library Imports
use std::future::Future;

// External Crate Imports
use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

// Local Crate Imports
use crate::job::{JobId, JobRecord, RoleId};

// Public API ==========================================================================================================

/// The remote job-provider service that owns every job, application, and deletion
pub trait JobApi {
    fn provider_jobs(&self, role_id: &RoleId) -> impl Future<Output = Result<Vec<JobRecord>>>;

    fn applicant_count(&self, job_id: JobId) -> impl Future<Output = Result<u64>>;

    fn delete_job(&self, job_id: JobId) -> impl Future<Output = Result<()>>;
}

#[derive(Clone, Debug)]
pub struct HttpJobApi {
    client: Client,
    base_url: Url,
}

impl HttpJobApi {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

impl JobApi for HttpJobApi {
    async fn provider_jobs(&self, role_id: &RoleId) -> Result<Vec<JobRecord>> {
        let url = self.endpoint(&["jobprovider", role_id.as_str(), "jobs"])?;
        debug!(%url, "fetching posted jobs");

        self.get_json(url)
            .await
            .wrap_err_with(|| format!("failed to fetch the jobs posted by provider {role_id}"))
    }

    async fn applicant_count(&self, job_id: JobId) -> Result<u64> {
        let url = self.endpoint(&["application", "count", &job_id.to_string()])?;
        debug!(%url, "fetching applicant count");

        self.get_json(url)
            .await
            .wrap_err_with(|| format!("failed to count the applicants for job {job_id}"))
    }

    async fn delete_job(&self, job_id: JobId) -> Result<()> {
        let url = self.endpoint(&["job", "delete", &job_id.to_string()])?;
        debug!(%url, "deleting job");

        self.client
            .delete(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .wrap_err_with(|| format!("failed to delete job {job_id}"))?;

        Ok(())
    }
}

// Private Helper Code =================================================================================================

impl HttpJobApi {
    // NOTE: Building the path from segments (rather than `format!()`-ing a string) percent-encodes each segment, so an
    // odd role ID can't escape into a different endpoint
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| eyre!("{} cannot be used as an API base URL", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        serde_json::from_slice(&body).wrap_err("the response body wasn't the expected JSON")
    }
}

// Unit Tests ==========================================================================================================
