pub mod resolver;
pub mod stats_service;
pub mod submission;

pub use resolver::{RedirectResolver, Resolution};
pub use stats_service::{LinkDetails, LinkOverview, StatsService, StatsSummary};
pub use submission::{RowIssue, SubmissionPipeline, SubmissionRow, SubmitError};
