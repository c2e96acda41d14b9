use crate::modules::analytics::application::ports::incoming::use_cases::RecordVisitUseCase;
use crate::modules::content::application::ports::incoming::use_cases::GetPublicContentUseCase;
use crate::modules::email::application::ports::incoming::use_cases::SendContactEmailUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    public_content: Option<Arc<dyn GetPublicContentUseCase + Send + Sync>>,
    send_contact_email: Option<Arc<dyn SendContactEmailUseCase + Send + Sync>>,
    record_visit: Option<Arc<dyn RecordVisitUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            public_content: Some(Arc::new(StubGetPublicContentUseCase)),
            send_contact_email: Some(Arc::new(StubSendContactEmailUseCase)),
            record_visit: Some(Arc::new(StubRecordVisitUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_public_content(
        mut self,
        uc: impl GetPublicContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.public_content = Some(Arc::new(uc));
        self
    }

    pub fn with_send_contact_email(
        mut self,
        uc: impl SendContactEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.send_contact_email = Some(Arc::new(uc));
        self
    }

    pub fn with_record_visit(
        mut self,
        uc: impl RecordVisitUseCase + Send + Sync + 'static,
    ) -> Self {
        self.record_visit = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            public_content: self.public_content.expect("public_content not set"),
            send_contact_email: self.send_contact_email.expect("send_contact_email not set"),
            record_visit: self.record_visit.expect("record_visit not set"),
        })
    }
}
