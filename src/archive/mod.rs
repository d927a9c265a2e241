pub mod extractor;
pub mod fetcher;
pub mod janitor;

pub use extractor::ArchiveExtractor;
pub use fetcher::{ArchiveFetcher, FetchOutcome};
pub use janitor::{CleanupStats, WorkspaceJanitor};
