pub mod campaign;
pub mod segment;
pub mod tag;
pub mod validation;

pub use campaign::{Account, CampaignEstimate, CampaignSubmission, SubmissionReceipt};
pub use segment::{SegmentPolicy, SegmentResult};
pub use tag::MergeTag;
pub use validation::{Field, ValidationError, ValidationReport, Violation};
