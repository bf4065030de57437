pub mod error;
pub mod extract;
pub mod outcome;
pub mod schema;

pub use error::AccessError;
pub use extract::{build_filter, extract_conditions, extract_outcomes};
pub use outcome::{FieldOutcome, SkipReason};
pub use schema::{AccessResult, Criteria, CriteriaSchema, FieldDef};
