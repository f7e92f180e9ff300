//! Pattern validators for roster field values
//!
//! Validators are pure and stateless. They test the structural shape of a
//! single raw value; business rules (required-ness, cross-field constraints)
//! live in the validation engine one layer up.

mod social;
mod text;

pub use social::{supported_platform_names, validate_social_url, SocialUrlOutcome};
pub use text::{is_blank, validate_required_text, CheckOutcome};
