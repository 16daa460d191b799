pub mod listing_errors;
pub mod organisation_errors;
pub mod user_errors;
