//! Batch exporter of helpdesk customer records to CSV.
//!
//! The binary prompts for a secret key, then drives [`export::Exporter`] over
//! the retrying API client from `deskex-api`: page through the customer list,
//! fetch per-customer detail, drop customers without an email address, append
//! `;`-delimited rows to the output file.

pub mod cli;
pub mod export;
pub mod prompt;
pub mod row;
