mod components;

use color_eyre::Result;
#[cfg(feature = "desktop")]
use dioxus::desktop::{self, WindowBuilder};
use dioxus::prelude::*;
use posted_jobs::{api::HttpJobApi, config::Config, job::JobId, telemetry};

use components::{EditJob, Header, PostedJobs};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
enum Route {
    #[route("/")]
    PostedJobs {},
    #[route("/editjobs/jobprovider/:job_id")]
    EditJob { job_id: JobId },
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        Header {}

        main { class: "card",
            Router::<Route> {}
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    telemetry::init(&config.log_level)?;
    let api = HttpJobApi::new(config.api_url.clone());

    let launcher = dioxus::LaunchBuilder::new();
    #[cfg(feature = "desktop")]
    let launcher = launcher.with_cfg(
        desktop::Config::default()
            .with_menu(None)
            .with_window(WindowBuilder::new().with_title("Posted Jobs")),
    );

    launcher
        .with_context(config)
        .with_context(api)
        .launch(App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes() {
        assert_eq!(Route::PostedJobs {}.to_string(), "/");
        assert_eq!(
            Route::EditJob {
                job_id: JobId::new(12)
            }
            .to_string(),
            "/editjobs/jobprovider/12"
        );
        assert_eq!(
            "/editjobs/jobprovider/7".parse::<Route>().ok(),
            Some(Route::EditJob {
                job_id: JobId::new(7)
            })
        );
    }
}
