/// Turns backend payloads into what the popup shows
use crate::models::{Company, JobMatch, NewJob, RankedJob};

pub const NO_MATCHES: &str = "No matching jobs found on this page.";
pub const NO_NEW_JOBS: &str = "No new jobs. Every tracked company is up to date.";
pub const NO_COMPANIES: &str = "No companies tracked yet.";
pub const NOTHING_TO_RANK: &str = "No jobs to rank yet. Search a page or run a check first.";
pub const NEVER_CHECKED: &str = "never";

/// Cards to render, or the message for an empty result
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Empty(&'static str),
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>, empty: &'static str) -> Self {
        if items.is_empty() {
            Listing::Empty(empty)
        } else {
            Listing::Items(items)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobCard {
    pub title: String,
    /// Relevance, company, or posting date line under the title
    pub details: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCard {
    pub position: usize,
    pub title: String,
    pub combined: String,
    pub score: String,
    pub company: String,
    pub posted: Option<String>,
    pub reason: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRow {
    pub id: i64,
    pub name: String,
    pub career_url: String,
    pub last_checked: String,
}

/// Calendar day of an ISO-8601 timestamp; anything unparseable is shown as-is
pub fn day_of(timestamp: &str) -> String {
    let day = timestamp.split(['T', ' ']).next().unwrap_or(timestamp);
    let is_day = day.len() == 10
        && day
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });

    if is_day { day.to_string() } else { timestamp.to_string() }
}

/// Only http(s) links are rendered as anchors
fn link(url: &Option<String>) -> Option<String> {
    url.as_deref()
        .map(str::trim)
        .filter(|u| u.starts_with("http://") || u.starts_with("https://"))
        .map(str::to_string)
}

pub fn match_cards(matches: &[JobMatch]) -> Listing<JobCard> {
    let cards = matches
        .iter()
        .map(|m| JobCard {
            title: m.title.clone(),
            details: vec![format!("Relevance: {}", m.relevance)],
            link: link(&m.url),
        })
        .collect();

    Listing::from_items(cards, NO_MATCHES)
}

pub fn new_job_cards(jobs: &[NewJob]) -> Listing<JobCard> {
    let cards = jobs
        .iter()
        .map(|job| {
            let mut details = vec![job.company.clone()];
            if let Some(posted) = &job.posted_at {
                details.push(format!("Posted {}", day_of(posted)));
            }
            JobCard {
                title: job.title.clone(),
                details,
                link: link(&job.url),
            }
        })
        .collect();

    Listing::from_items(cards, NO_NEW_JOBS)
}

pub fn ranked_cards(jobs: &[RankedJob]) -> Listing<RankedCard> {
    let cards = jobs
        .iter()
        .enumerate()
        .map(|(i, job)| RankedCard {
            position: i + 1,
            title: job.title.clone(),
            combined: format!("{:.1}", job.combined_score),
            score: format!("{}/10", trim_score(job.score)),
            company: job.company.clone(),
            posted: job.posted_at.as_deref().map(day_of),
            reason: job.reason.clone(),
            link: link(&job.url),
        })
        .collect();

    Listing::from_items(cards, NOTHING_TO_RANK)
}

pub fn company_rows(companies: &[Company]) -> Listing<CompanyRow> {
    let rows = companies
        .iter()
        .map(|c| CompanyRow {
            id: c.id,
            name: c.name.clone(),
            career_url: c.career_url.clone(),
            last_checked: c
                .last_checked_at
                .as_deref()
                .map(day_of)
                .unwrap_or_else(|| NEVER_CHECKED.to_string()),
        })
        .collect();

    Listing::from_items(rows, NO_COMPANIES)
}

/// `8` rather than `8.0`, `7.5` stays `7.5`
fn trim_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}
