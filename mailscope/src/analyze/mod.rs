mod cli;
mod error;
mod flags;
mod headers;
mod patterns;

pub use headers::{analyze_headers, HeaderAnalysis, NOT_FOUND};

pub mod prelude {
    pub use super::cli::{analyze_root, AnalyzeArgs};
    pub use super::error::AnalyzeError;
    pub use super::flags::Flag;
    pub use super::headers::{analyze_headers, HeaderAnalysis, NOT_FOUND};
}
