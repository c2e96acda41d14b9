mod record_visit;

pub use record_visit::{RecordVisitCommand, RecordVisitError, RecordVisitUseCase};
