//! Response models

pub mod analysis;
pub mod practice;

pub use analysis::AnalysisResult;
pub use practice::{PracticeEntry, PracticeList};
