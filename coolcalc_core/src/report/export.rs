//! # Export Pipeline
//!
//! The two-call external contract of the report exporter, behind traits so
//! the platform services stay pluggable:
//!
//! 1. [`PrintService::print_to_file`] materializes the rendered HTML into a
//!    file reference (on a device this is the platform print-to-PDF
//!    capability; [`FilePrinter`] is the native implementation).
//! 2. [`ShareService::share`] hands the file reference to the platform
//!    share dialog with an `application/pdf` MIME type.
//!
//! Every failure - generation, missing share capability, share rejection -
//! is caught, logged, and collapsed into one generic notice through
//! [`AlertSink`]. Nothing structured is returned to the caller, and there
//! is no retry, dedup, or cancellation: overlapping export requests each
//! produce their own independent file.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::errors::{CalcError, CalcResult};
use crate::report::html::render_html;
use crate::report::ReportDocument;

/// Static title of the single user-facing failure notice
pub const ERROR_ALERT_TITLE: &str = "Error";

/// Generic message for any generation or share failure
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to generate PDF. Please try again.";

/// Message shown when the share capability is missing
pub const SHARE_UNAVAILABLE_MESSAGE: &str = "Sharing is not available on this device";

/// MIME type handed to the share dialog
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Reference to a produced report file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Location of the produced file
    pub path: PathBuf,
}

/// Options passed along with a share request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareOptions {
    /// MIME type of the shared file
    pub mime_type: String,
    /// Title for the platform share dialog
    pub dialog_title: String,
}

impl ShareOptions {
    /// Standard options for sharing a generated report as PDF
    pub fn pdf(document_title: &str) -> Self {
        ShareOptions {
            mime_type: PDF_MIME_TYPE.to_string(),
            dialog_title: format!("Share {document_title}"),
        }
    }
}

/// External print-to-file capability.
pub trait PrintService {
    /// Materialize the rendered HTML into a file and return its reference.
    fn print_to_file(&self, html: &str, document_title: &str) -> CalcResult<FileRef>;
}

/// External share capability.
pub trait ShareService {
    /// Whether sharing is available on this device
    fn is_available(&self) -> bool;

    /// Offer the produced file through the platform share dialog
    fn share(&self, file: &FileRef, options: &ShareOptions) -> CalcResult<()>;
}

/// Sink for the single user-facing notice.
pub trait AlertSink {
    /// Show a modal notice with a title and message
    fn alert(&self, title: &str, message: &str);
}

/// Render, produce, and share the report document.
///
/// All three failure classes (generation, share-capability missing, share
/// rejection) collapse into exactly one alert; the structured cause goes to
/// the log only.
pub fn export_and_share(
    doc: &ReportDocument,
    printer: &dyn PrintService,
    sharer: &dyn ShareService,
    alerts: &dyn AlertSink,
) {
    match try_export(doc, printer, sharer) {
        Ok(file) => {
            info!(path = %file.path.display(), title = %doc.title, "Report exported");
        }
        Err(CalcError::ShareUnavailable) => {
            warn!(title = %doc.title, "Share capability unavailable");
            alerts.alert(ERROR_ALERT_TITLE, SHARE_UNAVAILABLE_MESSAGE);
        }
        Err(e) => {
            error!(code = e.error_code(), %e, title = %doc.title, "Report export failed");
            alerts.alert(ERROR_ALERT_TITLE, EXPORT_FAILED_MESSAGE);
        }
    }
}

fn try_export(
    doc: &ReportDocument,
    printer: &dyn PrintService,
    sharer: &dyn ShareService,
) -> CalcResult<FileRef> {
    let html = render_html(doc);
    let file = printer.print_to_file(&html, &doc.title)?;

    if !sharer.is_available() {
        return Err(CalcError::ShareUnavailable);
    }
    sharer.share(&file, &ShareOptions::pdf(&doc.title))?;

    Ok(file)
}

// ============================================================================
// Native print service
// ============================================================================

/// Native [`PrintService`] that writes the rendered HTML into a directory.
///
/// Uses an atomic temp-write + rename so a crash mid-write never leaves a
/// truncated report behind. Each invocation produces its own file; repeated
/// exports of the same title overwrite the previous report.
#[derive(Debug, Clone)]
pub struct FilePrinter {
    output_dir: PathBuf,
}

impl FilePrinter {
    /// Create a printer that writes into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        FilePrinter {
            output_dir: output_dir.into(),
        }
    }

    fn output_path(&self, document_title: &str) -> PathBuf {
        self.output_dir.join(format!("{}.html", slug(document_title)))
    }
}

impl PrintService for FilePrinter {
    fn print_to_file(&self, html: &str, document_title: &str) -> CalcResult<FileRef> {
        let path = self.output_path(document_title);
        let tmp_path = path.with_extension("html.tmp");

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            CalcError::file_error(
                "create output dir",
                self.output_dir.display().to_string(),
                e.to_string(),
            )
        })?;

        fs::write(&tmp_path, html).map_err(|e| {
            CalcError::file_error("write", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            CalcError::file_error("rename", path.display().to_string(), e.to_string())
        })?;

        Ok(FileRef { path })
    }
}

/// Turn a document title into a safe file stem
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("report");
    }
    out
}
