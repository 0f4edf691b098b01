use std::future::Future;
use std::pin::Pin;

use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::config::PaginationSettings;
use crate::entities::{company, job_post, Company, JobPost};
use crate::error::QueryError;
use crate::pagination::{ensure_page_exists, total_pages, Page, PageRequest};
use crate::slug::slugify;

// Backslash escaping is dialect specific; '!' is not.
const LIKE_ESCAPE: char = '!';

type SessionFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, QueryError>> + Send + 'c>>;

/// Read access to companies and their job posts.
///
/// Every public method runs in its own transaction: committed when the
/// method succeeds, rolled back when it fails, and the pooled connection is
/// released either way.
#[derive(Debug, Clone)]
pub struct CompanyStore {
    db: DatabaseConnection,
    pagination: PaginationSettings,
}

impl CompanyStore {
    pub fn new(db: DatabaseConnection, pagination: PaginationSettings) -> Self {
        Self { db, pagination }
    }

    /// One page of companies ordered by name, optionally filtered by a
    /// case-insensitive substring of the name.
    #[tracing::instrument(skip(self))]
    pub async fn list_companies(
        &self,
        page: Option<u64>,
        per_page: Option<u64>,
        search: Option<String>,
    ) -> Result<Page<company::Model>, QueryError> {
        let request = PageRequest::new(
            page,
            per_page,
            self.pagination.default_page_size,
            self.pagination.max_page_size,
        )?;

        self.session("list_companies", move |txn| {
            Box::pin(async move { list_companies_in(txn, request, search.as_deref()).await })
        })
        .await
    }

    /// First company, in store order, whose derived slug equals `slug`.
    #[tracing::instrument(skip(self))]
    pub async fn company_by_slug(&self, slug: &str) -> Result<company::Model, QueryError> {
        let slug = slug.to_string();
        self.session("company_by_slug", move |txn| {
            Box::pin(async move { company_by_slug_in(txn, &slug).await })
        })
        .await
    }

    /// One page of a company's job posts, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn company_jobs(
        &self,
        company_id: i64,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Page<job_post::Model>, QueryError> {
        let default_size = self.pagination.default_jobs_page_size;
        let max_size = self.pagination.max_jobs_page_size;

        self.session("company_jobs", move |txn| {
            Box::pin(async move {
                if Company::find_by_id(company_id).one(txn).await?.is_none() {
                    return Err(QueryError::CompanyNotFound(company_id));
                }
                let request = PageRequest::new(page, page_size, default_size, max_size)?;
                company_jobs_in(txn, company_id, request).await
            })
        })
        .await
    }

    /// `(co_rowid, company_name)` for every company, oldest row first.
    #[tracing::instrument(skip(self))]
    pub async fn company_names(&self) -> Result<Vec<(i64, String)>, QueryError> {
        self.session("company_names", |txn| {
            Box::pin(async move {
                let rows = Company::find()
                    .select_only()
                    .column(company::Column::CoRowid)
                    .column(company::Column::CompanyName)
                    .order_by_asc(company::Column::CoRowid)
                    .into_tuple::<(i64, String)>()
                    .all(txn)
                    .await?;
                Ok::<_, QueryError>(rows)
            })
        })
        .await
    }

    async fn session<T, F>(&self, operation: &'static str, work: F) -> Result<T, QueryError>
    where
        T: Send,
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> SessionFuture<'c, T> + Send,
    {
        self.db
            .transaction::<_, T, QueryError>(work)
            .await
            .map_err(|err| {
                let err = QueryError::from(err);
                // Reported at ERROR by the HTTP layer or the caller.
                if let QueryError::Store(db_err) = &err {
                    tracing::debug!(operation, error = %db_err, "session rolled back");
                }
                err
            })
    }
}

async fn list_companies_in(
    txn: &DatabaseTransaction,
    request: PageRequest,
    search: Option<&str>,
) -> Result<Page<company::Model>, QueryError> {
    let mut select = Company::find();
    if let Some(term) = search.filter(|term| !term.is_empty()) {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(company::Column::CompanyName)))
                .like(LikeExpr::new(contains_pattern(term)).escape(LIKE_ESCAPE)),
        );
    }

    let select = select
        .order_by_asc(company::Column::CompanyName)
        .order_by_asc(company::Column::CoRowid);

    let total = select.clone().count(txn).await?;
    let total_pages = total_pages(total, request.page_size);
    ensure_page_exists(request.page, total_pages)?;

    // No rows means no fetch: any page >= 1 is an empty page.
    let items = if total == 0 {
        Vec::new()
    } else {
        select
            .offset(page_offset(request, total_pages)?)
            .limit(request.page_size)
            .all(txn)
            .await?
    };
    tracing::debug!(total, total_pages, rows = items.len(), "fetched company page");

    Ok(Page {
        items,
        total,
        total_pages,
        page: request.page,
        page_size: request.page_size,
    })
}

async fn company_by_slug_in(
    txn: &DatabaseTransaction,
    slug: &str,
) -> Result<company::Model, QueryError> {
    // Full scan: slugs are derived, not stored.
    let companies = Company::find().all(txn).await?;
    tracing::debug!(scanned = companies.len(), "scanning companies for slug");

    companies
        .into_iter()
        .find(|company| slugify(Some(&company.company_name)) == slug)
        .ok_or_else(|| QueryError::SlugNotFound(slug.to_string()))
}

async fn company_jobs_in(
    txn: &DatabaseTransaction,
    company_id: i64,
    request: PageRequest,
) -> Result<Page<job_post::Model>, QueryError> {
    let select = JobPost::find()
        .filter(job_post::Column::CoRowid.eq(company_id))
        .order_by_desc(job_post::Column::JobRowid);

    let total = select.clone().count(txn).await?;
    let total_pages = total_pages(total, request.page_size);
    ensure_page_exists(request.page, total_pages)?;

    let items = if total == 0 {
        Vec::new()
    } else {
        select
            .offset(page_offset(request, total_pages)?)
            .limit(request.page_size)
            .all(txn)
            .await?
    };

    Ok(Page {
        items,
        total,
        total_pages,
        page: request.page,
        page_size: request.page_size,
    })
}

fn page_offset(request: PageRequest, total_pages: u64) -> Result<u64, QueryError> {
    request.offset().ok_or(QueryError::InvalidPage {
        page: request.page,
        total_pages,
    })
}

/// `%term%` for a LIKE match on the lowercased name, with LIKE wildcards in
/// the term escaped so they match literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
