//! Permission enrichment for the form platform.
//!
//! An [`Enricher`] computes, for a single request, the permissions and
//! roles the requesting actor holds along with an audit trail of every
//! decision made.  It never denies anything itself; an enforcement layer
//! compares the required permissions against the ones computed here.
//!
//! Lookups against the backing store only happen for authenticated
//! users, and any failure there results in the affected permissions or
//! roles being withheld.

mod builder;
mod enricher;
pub mod error;
mod vocabulary;

pub use crate::builder::Builder;
pub use crate::enricher::Enricher;
pub use crate::vocabulary::Vocabulary;
