use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{company, job_post};
use crate::pagination::Page;
use crate::slug::slugify;

/// Longest pain-point or buying-trigger excerpt used as a description.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 200;
/// Description for companies with no profile data at all.
pub const DEFAULT_DESCRIPTION: &str = "Company profile information available";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyListItem {
    pub company_name: String,
    pub company_website: Option<String>,
    /// Profile summary synthesized from the company's profile fields
    pub company_description: Option<String>,
    /// URL identifier derived from the company name
    pub company_slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyListResponse {
    /// Total number of companies matching the search
    pub companies_total: u64,
    /// Companies on this page
    pub companies: Vec<CompanyListItem>,
    /// Total number of pages
    pub total_pages: u64,
    /// Current page number
    pub current_page: u64,
    /// Items per page
    pub per_page: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetail {
    pub co_rowid: i64,
    pub company_name: String,
    pub company_website: Option<String>,
    pub linkedin_company_url: Option<String>,
    pub is_profiled: Option<bool>,
    pub market_size: Option<String>,
    pub company_size: Option<String>,
    pub revenue_threshold: Option<String>,
    pub pain_points: Option<String>,
    pub buying_triggers: Option<String>,
    pub last_profiled_on: Option<NaiveDateTime>,
    pub company_slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobItem {
    pub job_title: Option<String>,
    /// Always null: job posts carry no description column
    pub job_description: Option<String>,
    pub job_location: Option<String>,
    pub job_type: Option<String>,
    pub job_url: Option<String>,
    /// Posting date as scraped, free text
    pub job_posted_date: Option<String>,
    pub job_pay_rate: Option<String>,
    pub job_source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyJobsResponse {
    /// Total number of job positions for the company
    pub total_position: u64,
    /// Jobs on this page
    pub jobs: Vec<JobItem>,
    /// Total number of pages
    pub total_pages: u64,
    /// Items per page
    pub page_size: u64,
    /// Current page number
    pub current_page: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub app_name: String,
    pub version: String,
}

/// One-line description for the company list.
///
/// Market size, company size and revenue win whenever any of them is set.
/// Otherwise the first non-empty of pain points and buying triggers is used,
/// cut to [`DESCRIPTION_EXCERPT_CHARS`] characters.
pub fn describe_company(company: &company::Model) -> String {
    let facts: Vec<String> = [
        ("Market Size", &company.market_size),
        ("Company Size", &company.company_size),
        ("Revenue", &company.revenue_threshold),
    ]
    .into_iter()
    .filter_map(|(label, value)| non_empty(value).map(|value| format!("{}: {}", label, value)))
    .collect();

    if !facts.is_empty() {
        return facts.join(" | ");
    }

    non_empty(&company.pain_points)
        .or_else(|| non_empty(&company.buying_triggers))
        .map(excerpt)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

impl From<company::Model> for CompanyListItem {
    fn from(company: company::Model) -> Self {
        CompanyListItem {
            company_description: Some(describe_company(&company)),
            company_slug: slugify(Some(&company.company_name)),
            company_name: company.company_name,
            company_website: company.company_website,
        }
    }
}

impl From<Page<company::Model>> for CompanyListResponse {
    fn from(page: Page<company::Model>) -> Self {
        let page = page.map(CompanyListItem::from);
        CompanyListResponse {
            companies_total: page.total,
            companies: page.items,
            total_pages: page.total_pages,
            current_page: page.page,
            per_page: page.page_size,
        }
    }
}

impl From<company::Model> for CompanyDetail {
    fn from(company: company::Model) -> Self {
        CompanyDetail {
            company_slug: slugify(Some(&company.company_name)),
            co_rowid: company.co_rowid,
            company_name: company.company_name,
            company_website: company.company_website,
            linkedin_company_url: company.linkedin_company_url,
            is_profiled: company.is_profiled,
            market_size: company.market_size,
            company_size: company.company_size,
            revenue_threshold: company.revenue_threshold,
            pain_points: company.pain_points,
            buying_triggers: company.buying_triggers,
            last_profiled_on: company.last_profiled_on,
        }
    }
}

impl From<job_post::Model> for JobItem {
    fn from(job: job_post::Model) -> Self {
        JobItem {
            job_title: job.job_title,
            job_description: None,
            job_location: job.job_location,
            job_type: job.job_type,
            job_url: job.job_url,
            job_posted_date: job.job_posted_at,
            job_pay_rate: job.job_pay,
            job_source: job.job_source,
        }
    }
}

impl From<Page<job_post::Model>> for CompanyJobsResponse {
    fn from(page: Page<job_post::Model>) -> Self {
        let page = page.map(JobItem::from);
        CompanyJobsResponse {
            total_position: page.total,
            jobs: page.items,
            total_pages: page.total_pages,
            page_size: page.page_size,
            current_page: page.page,
        }
    }
}
