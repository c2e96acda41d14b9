use async_trait::async_trait;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    RecordVisitCommand, RecordVisitError, RecordVisitUseCase,
};
use crate::modules::analytics::domain::VisitRecord;
use crate::modules::contact::domain::NewContactMessage;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetPublicContentUseCase, SectionContent,
};
use crate::modules::content::domain::{PortfolioContent, PublicSection};
use crate::modules::email::application::ports::incoming::use_cases::{
    ContactMailError, SendContactEmailUseCase,
};

/// Serves the built-in defaults as if nothing had been saved.
#[derive(Default, Clone)]
pub struct StubGetPublicContentUseCase;

#[async_trait]
impl GetPublicContentUseCase for StubGetPublicContentUseCase {
    async fn portfolio(&self) -> PortfolioContent {
        PortfolioContent::builtin()
    }

    async fn section(&self, section: PublicSection) -> SectionContent {
        let d = PortfolioContent::builtin();
        match section {
            PublicSection::Personal => SectionContent::Personal(d.personal),
            PublicSection::Experience => SectionContent::Experience(d.experience),
            PublicSection::Projects => SectionContent::Projects(d.projects),
            PublicSection::Skills => SectionContent::Skills(d.skills),
            PublicSection::Education => SectionContent::Education(d.education),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubSendContactEmailUseCase;

#[async_trait]
impl SendContactEmailUseCase for StubSendContactEmailUseCase {
    async fn execute(&self, _submission: NewContactMessage) -> Result<(), ContactMailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRecordVisitUseCase;

#[async_trait]
impl RecordVisitUseCase for StubRecordVisitUseCase {
    async fn execute(&self, _command: RecordVisitCommand) -> Result<VisitRecord, RecordVisitError> {
        unimplemented!("Not used in this test")
    }
}
