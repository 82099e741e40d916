/// Client-facing message for every authentication failure after the header parses.
///
/// Invalid tokens and tokens without a user share it so the two are indistinguishable.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid authentication credentials";

/// Confirmation returned once a report has been dispatched
pub const REPORT_ACCEPTED_MESSAGE: &str = "Successfully reported data violation.";
