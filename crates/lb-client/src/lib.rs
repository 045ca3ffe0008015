//! linkboard/crates/lb-client/src/lib.rs
//!
//! Client core for the link-sharing platform: the vote reconciliation
//! engine and the post submission coordinator, plus the caches and form
//! store they drive. Transport, identity internals and rendering stay
//! behind the lb-core ports.

pub mod ledger;
pub mod reconcile;
pub mod voting;
pub mod form;
pub mod submit;
pub mod feed;
pub mod notice;

pub use feed::PostFeed;
pub use form::{Draft, FormState, FormStore};
pub use ledger::VoteLedgerCache;
pub use notice::Notice;
pub use reconcile::{reconcile, VoteView};
pub use submit::SubmissionService;
pub use voting::VoteService;
