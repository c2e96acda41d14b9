mod record_visit;

pub use record_visit::{__path_record_visit_handler, record_visit_handler, RecordVisitRequest};
