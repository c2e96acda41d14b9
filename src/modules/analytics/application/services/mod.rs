mod analytics_recorder;
mod record_visit_service;

pub use analytics_recorder::{AnalyticsRecorder, MAX_VISITS};
pub use record_visit_service::RecordVisitService;
