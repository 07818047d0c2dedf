/// Popup actions: validate input, pull the page, call the backend
///
/// Each function is what one popup button does, minus the rendering. They are
/// generic over the transport and page source so the flows run unchanged
/// against scripted fakes.
use crate::api::{ApiClient, Transport};
use crate::error::ScoutError;
use crate::input::{parse_titles, require_company_name, require_file};
use crate::models::{
    Company, CompanyCreate, JobMatch, NewJob, RankedJob, ResumeOut, ScrapeRequest, SettingsOut,
    SettingsUpdate,
};
use crate::page::PageSource;

/// Match the active page against the wanted titles, one per line of `raw_titles`
pub async fn search_jobs<T: Transport>(
    client: &ApiClient<T>,
    pages: &impl PageSource,
    raw_titles: &str,
) -> Result<Vec<JobMatch>, ScoutError> {
    let titles = parse_titles(raw_titles)?;
    let page = pages.snapshot().await?;

    log::info!("Searching {} for {} title(s)", page.url, titles.len());
    let response = client
        .scrape(&ScrapeRequest {
            url: page.url,
            titles,
            page_html: page.html,
        })
        .await?;

    Ok(response.matches)
}

pub async fn load_companies<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Company>, ScoutError> {
    client.list_companies().await
}

/// A reload that follows a successful write. Its failure does not undo the write.
async fn reload_companies<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Company>, ScoutError> {
    let reloaded = client.list_companies().await;
    if let Err(e) = &reloaded {
        log::warn!("Reloading companies failed: {}", e);
    }
    reloaded
}

/// A newly tracked company and the list as reloaded afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedCompany {
    pub company: Company,
    pub companies: Result<Vec<Company>, ScoutError>,
}

/// Track the active tab's address as `name`'s career page, then reload the list
pub async fn add_company<T: Transport>(
    client: &ApiClient<T>,
    pages: &impl PageSource,
    raw_name: &str,
) -> Result<TrackedCompany, ScoutError> {
    let name = require_company_name(raw_name)?;
    let career_url = pages.active_url().await?;

    let company = client.add_company(&CompanyCreate { name, career_url }).await?;
    log::info!("Tracking {} (id {})", company.name, company.id);

    Ok(TrackedCompany {
        company,
        companies: reload_companies(client).await,
    })
}

/// Stop tracking a company, then reload the list
pub async fn remove_company<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Vec<Company>, ScoutError> {
    client.delete_company(id).await?;
    log::info!("Stopped tracking company {}", id);

    client.list_companies().await
}

/// Outcome of a surveillance check, with the refreshed company list
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub new_jobs: Vec<NewJob>,
    pub companies: Result<Vec<Company>, ScoutError>,
}

pub async fn check_companies<T: Transport>(client: &ApiClient<T>) -> Result<CheckReport, ScoutError> {
    let response = client.check_surveillance().await?;
    log::info!("Surveillance found {} new job(s)", response.new_jobs.len());

    Ok(CheckReport {
        new_jobs: response.new_jobs,
        companies: reload_companies(client).await,
    })
}

pub async fn upload_resume<T: Transport>(
    client: &ApiClient<T>,
    selected: Option<T::Upload>,
) -> Result<ResumeOut, ScoutError> {
    let file = require_file(selected)?;
    client.upload_resume(file).await
}

pub async fn rank_jobs<T: Transport>(client: &ApiClient<T>) -> Result<Vec<RankedJob>, ScoutError> {
    client.rank(None).await
}

pub async fn load_settings<T: Transport>(client: &ApiClient<T>) -> Result<SettingsOut, ScoutError> {
    client.settings().await
}

pub async fn save_settings<T: Transport>(
    client: &ApiClient<T>,
    update: &SettingsUpdate,
) -> Result<SettingsOut, ScoutError> {
    let saved = client.update_settings(update).await?;
    log::info!("LLM provider set to {}", saved.llm_provider);
    Ok(saved)
}
