//! # AutoAnalyst - Executive Dataset Analysis
//!
//! AutoAnalyst turns a tabular dataset (CSV or Excel) into a compact
//! statistical summary and, from that summary, an executive business report
//! written by a language model.
//!
//! The crate is built around two components used in sequence:
//!
//! - [`analyser`]: deterministic analysis of a parsed table - column
//!   classification, per-column statistics, upper-tail outlier counts,
//!   top categorical values and missing-cell counts, assembled into a
//!   [`analyser::DatasetAnalysis`].
//! - [`report`]: a pure text digest of the analysis, a fixed prompt
//!   template around that digest, and a single model-service call that
//!   returns the finished report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use autoanalyst::analyser::{analyse_df, load_df};
//! use autoanalyst::report::summarise;
//!
//! # fn example() -> autoanalyst::error::Result<()> {
//! let df = load_df(std::path::Path::new("data.csv"))?;
//! let analysis = analyse_df(&df)?;
//!
//! // The digest is deterministic: same analysis in, same text out.
//! let digest = summarise(&analysis);
//! # Ok(())
//! # }
//! ```
//!
//! Generating a report requires an OpenAI API key:
//!
//! ```no_run
//! use autoanalyst::config::ReportConfig;
//! use autoanalyst::report::{OpenAiService, ReportGenerator};
//!
//! # async fn example(
//! #     analysis: &autoanalyst::analyser::DatasetAnalysis,
//! # ) -> autoanalyst::error::Result<()> {
//! let service = OpenAiService::new("sk-...".to_owned(), ReportConfig::default());
//! let report = ReportGenerator::new(service).generate_report(analysis).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`analyser`]: dataset loading and statistical analysis
//! - [`report`]: digest, prompt template and report generation
//! - [`config`]: model-call configuration
//! - [`error`]: error types and handling utilities
//! - [`logging`]: tracing subscriber setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
