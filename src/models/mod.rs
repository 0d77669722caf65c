pub mod result;
pub mod run;
pub mod status;

pub use result::{Browser, SpecInfo, SpecResult};
pub use run::{BrowserSuite, RunState};
pub use status::SpecStatus;
