pub mod result;
pub mod session;

pub use result::AnalysisResult;
pub use session::{SessionPayload, LEAD_COUNT};
