//! # Layer 4: Interview Search Engine
//!
//! Linear search with early exit over a sequence. An interview asks each
//! candidate a list of questions in priority order and reports where the
//! first satisfying answer was found.
//!
//! - `result.rs`: `SearchResult` (index or `Sentinel`) and `Hit`.
//! - `question.rs`: widened predicates that also see the scanned context
//!   and an interviewer.
//! - `scan.rs`: the `Interview` engine: anchoring, precedence, the scan loop.
//! - `kindred.rs`: cross-kind comparators for interviewers of another kind.
//!
//! ```text
//!   Anchor::Left    0 -> 1 -> 2 -> ... -> n-1     context = prefix
//!   Anchor::Right   0 <- 1 <- 2 <- ... <- n-1     context = suffix
//! ```

pub mod kindred;
pub mod question;
pub mod result;
pub mod scan;

pub use kindred::{classified_as, holds, instance_of, kind_of};
pub use question::{Kindred, Plain, Question};
pub use result::{Hit, SearchResult};
pub use scan::{search, search_right, Anchor, Interview, Precedence};
