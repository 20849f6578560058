//! Application handlers.
//!
//! One handler per user action: scan, summary guidance, leadership script.

mod generate_narrative;
mod scan_communications;

pub use generate_narrative::{
    GenerateNarrativeCommand, GenerateNarrativeHandler, NarrativeError, NarrativeResult,
};
pub use scan_communications::{ScanCommunicationsCommand, ScanCommunicationsHandler, ScanError};
