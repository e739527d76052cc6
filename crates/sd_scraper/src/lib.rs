pub mod extract;
pub mod fetch;
pub mod scheduler;

pub use fetch::{Fetch, Fetcher};
pub use scheduler::{RefreshScheduler, Refresher};

pub mod prelude {
    pub use crate::fetch::Fetch;
    pub use sd_core::{ArticleDetail, ArticleSummary, Error, Result};
}
