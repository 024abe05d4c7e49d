mod split_service;

pub use split_service::{SplitArchive, SplitError, SplitService};
