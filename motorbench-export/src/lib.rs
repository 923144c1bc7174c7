//! Tabular Export and Console Reporting for Motorbench
//!
//! ## Overview
//!
//! The estimation core hands out plain arrays and scalars; this crate is
//! the thin adapter layer that turns them into artifacts people consume:
//!
//! - **CSV files**: one two-column file per characteristic, header row
//!   naming both axes, ready for a spreadsheet or an external plotting
//!   tool ([`csv`]).
//! - **Console reports**: the fixed-order summary block a bench session
//!   prints after a run ([`report`]).
//!
//! Nothing here computes: every value is produced by `motorbench-core`
//! and written out verbatim. Keeping the I/O on this side of the seam
//! means the core stays pure and off-std capable while this crate can
//! lean on `std::io` freely.
//!
//! ## Error Handling
//!
//! All fallible operations return [`ExportError`], which wraps the
//! underlying I/O failure. There is no retry logic: a failed write is
//! surfaced immediately to the caller, who owns the target directory.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod csv;
pub mod report;

pub use csv::{save_curve, write_curve};
pub use report::render_summary;

use thiserror::Error;

/// Errors surfaced by the export adapters.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The underlying file or stream write failed
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
