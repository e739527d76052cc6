pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use error::Error;
pub use registry::ArticleRegistry;
pub use store::ArticleStore;
pub use types::{ArticleDetail, ArticleSummary};

pub type Result<T> = std::result::Result<T, Error>;
