pub mod ledger;
pub mod record;
pub mod source_table;

pub use ledger::{Annotation, Ledger};
pub use record::{RecordId, WorkItem};
pub use source_table::SourceTable;
