//! Input validation, output sanitization, and per-caller rate limiting.

mod rate_limit;
mod sanitize;
mod validate;

pub use rate_limit::{CallerState, RequestGate};
pub use sanitize::{escape_html, sanitize_value};
pub use validate::validate_target;
