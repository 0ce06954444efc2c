pub mod config;
pub mod error;
pub mod ignore_set;

pub use config::SummaryConfig;
pub use error::SummaryError;
pub use ignore_set::IgnoreSet;
