//! fieldcheck built-in predicates
//!
//! Pure validation functions backing the built-in rule set (`required`, `email`,
//! `url`, `password`, `phone`). Every function is total over any `&str` input,
//! including the empty string, and never panics.
//!
//! Note the empty-string asymmetry: `required` and `email` fail on empty input,
//! `url` and `phone` pass on it, and `password` fails on it through its length
//! check. Callers that want emptiness to fail for `url`/`phone` combine those
//! rules with `required`.

pub mod email;
pub mod password;
pub mod phone;
pub mod string;

pub use email::*;
pub use password::*;
pub use phone::*;
pub use string::*;
