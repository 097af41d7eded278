use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use roster_ingest::{read_headers, read_rows, read_submission_json};
use roster_model::{
    AddUserRecord, CsvValidation, HeaderValidation, LinkUserRecord, SubmissionValidation,
    UploadValidation,
};
use roster_validate::{
    validate_add_users_csv, validate_add_users_submit, validate_add_users_upload,
    validate_headers, validate_link_users_csv,
};

use crate::cli::{HeadersArgs, ProfileArg, SubmitArgs, UploadArgs, ValidateArgs};
use crate::config::RosterConfig;
use crate::logging::redact_value;

/// Result of one command, ready to be printed.
#[derive(Debug)]
pub enum Report {
    Upload(UploadValidation),
    AddRows(CsvValidation<AddUserRecord>),
    LinkRows(CsvValidation<LinkUserRecord>),
    Submission(SubmissionValidation),
    Headers(HeaderValidation),
}

impl Report {
    pub fn success(&self) -> bool {
        match self {
            Report::Upload(result) => result.success,
            Report::AddRows(result) => result.success,
            Report::LinkRows(result) => result.success,
            Report::Submission(result) => result.success,
            Report::Headers(result) => result.success,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            Report::Upload(result) => serde_json::to_string_pretty(result),
            Report::AddRows(result) => serde_json::to_string_pretty(result),
            Report::LinkRows(result) => serde_json::to_string_pretty(result),
            Report::Submission(result) => serde_json::to_string_pretty(result),
            Report::Headers(result) => serde_json::to_string_pretty(result),
        }
    }
}

pub fn run_upload(args: &UploadArgs, config: &RosterConfig) -> Result<Report> {
    let span = info_span!("upload", file = %args.file.display());
    let _guard = span.enter();
    let options = config.upload_options(args.site_from_permissions, args.as_of);
    let rows = read_rows(&args.file)
        .with_context(|| format!("failed to load roster {}", args.file.display()))?;
    info!(rows = rows.len(), site_policy = ?options.site_policy, "Validating upload");

    let result = validate_add_users_upload(rows, &options);
    for error in &result.errors {
        debug!(row = error.row, error = %error.error, "Rejected user");
    }
    for site in &result.unique_sites {
        debug!(site = redact_value(site), "Referenced site");
    }
    if !result.success {
        warn!(
            errors = result.error_count(),
            header_errors = result.has_header_errors(),
            "Upload rejected"
        );
    }
    Ok(Report::Upload(result))
}

pub fn run_validate(args: &ValidateArgs, config: &RosterConfig) -> Result<Report> {
    let span = info_span!("validate", file = %args.file.display(), profile = ?args.profile);
    let _guard = span.enter();
    let rows = read_rows(&args.file)
        .with_context(|| format!("failed to load roster {}", args.file.display()))?;
    info!(rows = rows.len(), "Validating rows");

    let report = match args.profile {
        ProfileArg::Add => {
            let options = config.validation_options(args.as_of);
            Report::AddRows(validate_add_users_csv(&rows, &options))
        }
        ProfileArg::Link => Report::LinkRows(validate_link_users_csv(&rows)),
    };
    debug!(success = report.success(), "Row validation finished");
    Ok(report)
}

pub fn run_submit(args: &SubmitArgs, config: &RosterConfig) -> Result<Report> {
    let span = info_span!("submit", file = %args.file.display());
    let _guard = span.enter();
    let value = read_submission_json(&args.file)
        .with_context(|| format!("failed to load submission {}", args.file.display()))?;
    let result = validate_add_users_submit(&value, &config.validation_options(args.as_of));
    if let Some(data) = &result.data {
        debug!(
            id = redact_value(data.id.as_deref().unwrap_or_default()),
            user_type = %data.user_type,
            "Submission accepted"
        );
    }
    info!(errors = result.errors.len(), "Validated submission");
    Ok(Report::Submission(result))
}

pub fn run_headers(args: &HeadersArgs) -> Result<Report> {
    let headers = read_headers(&args.file)
        .with_context(|| format!("failed to read headers of {}", args.file.display()))?;
    let result = validate_headers(&headers, &args.require);
    info!(
        observed = headers.len(),
        missing = result.errors.len(),
        "Checked headers"
    );
    Ok(Report::Headers(result))
}
