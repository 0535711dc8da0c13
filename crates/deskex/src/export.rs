//! The export driver loop.
//!
//! Owns the pagination offset and the output sink; walks the customer list
//! one page at a time, fetches each customer's detail, filters out customers
//! without an email address, and appends formatted rows. Strictly sequential:
//! one list fetch, then one detail fetch at a time, rows written in list
//! order.

use std::io::{self, Write};

use deskex_api::{CustomerApi, HttpClient};
use tracing::{error, info, warn};

use crate::row;

/// Page size requested from the list endpoint.
pub const PAGE_LIMIT: usize = 100;

/// Counters accumulated over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportStats {
    /// Non-empty pages processed.
    pub pages: usize,
    /// Rows written to the sink.
    pub exported: usize,
    /// Records skipped because no detail could be fetched.
    pub skipped_no_detail: usize,
    /// Records skipped by the email-presence filter.
    pub skipped_no_email: usize,
}

pub struct Exporter<'a, C: HttpClient, W: Write> {
    api: &'a CustomerApi<C>,
    sink: &'a mut W,
}

impl<'a, C: HttpClient, W: Write> Exporter<'a, C, W> {
    pub fn new(api: &'a CustomerApi<C>, sink: &'a mut W) -> Self {
        Self { api, sink }
    }

    /// Run the export to completion.
    ///
    /// Ends on an empty page, a short page, or list-fetch retry exhaustion.
    /// All three are normal terminations; exhaustion is reported in the log
    /// but the accumulated stats still come back as `Ok`. An `Err` here only
    /// ever means the sink rejected a write.
    pub async fn run(mut self, token: &str) -> io::Result<ExportStats> {
        writeln!(self.sink, "{}", row::HEADER)?;

        let mut stats = ExportStats::default();
        let mut offset = 0;

        loop {
            let page = match self.api.list_page(token, PAGE_LIMIT, offset).await {
                Ok(page) => page,
                Err(e) => {
                    error!(offset, error = %e, "customer list unavailable, stopping export");
                    break;
                }
            };

            if page.is_empty() {
                info!("empty page, export finished");
                break;
            }

            stats.pages += 1;
            let page_len = page.len();
            for summary in page {
                self.process(token, summary.id, &mut stats).await?;
            }

            if page_len < PAGE_LIMIT {
                info!("short page ({page_len} of {PAGE_LIMIT}), all customers processed");
                break;
            }
            offset += PAGE_LIMIT;
        }

        info!(
            pages = stats.pages,
            exported = stats.exported,
            skipped_no_detail = stats.skipped_no_detail,
            skipped_no_email = stats.skipped_no_email,
            "export run complete"
        );
        Ok(stats)
    }

    /// Handle one customer: fetch detail, filter, append. Failures here skip
    /// the record, never the page.
    async fn process(
        &mut self,
        token: &str,
        customer_id: i64,
        stats: &mut ExportStats,
    ) -> io::Result<()> {
        let detail = match self.api.get_detail(token, customer_id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => {
                warn!(customer_id, "no detail record, skipping");
                stats.skipped_no_detail += 1;
                return Ok(());
            }
            Err(e) => {
                warn!(customer_id, error = %e, "could not fetch detail, skipping");
                stats.skipped_no_detail += 1;
                return Ok(());
            }
        };

        if detail.emails.is_empty() {
            info!(customer_id, "skipped (no email)");
            stats.skipped_no_email += 1;
            return Ok(());
        }

        writeln!(self.sink, "{}", row::format_row(&detail))?;
        stats.exported += 1;
        info!(customer_id, "exported");
        Ok(())
    }
}
