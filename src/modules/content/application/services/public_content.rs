use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetPublicContentUseCase, SectionContent,
};
use crate::modules::content::application::services::ContentStorage;
use crate::modules::content::domain::{Content, ContentDomain, PortfolioContent, PublicSection};
use crate::shared::events::{ChangeNotifier, Subscription};

/// One pull of a domain for display: the stored value if it survives the
/// defensive read, otherwise the compiled-in defaults.
pub fn load_public_content<T: Content>(
    storage: &ContentStorage,
    domain: ContentDomain,
    defaults: &T,
) -> T {
    storage
        .read::<T>(domain.storage_key())
        .unwrap_or_else(|| defaults.clone())
}

/// Every public section, each falling back on its own.
pub fn load_portfolio(storage: &ContentStorage, defaults: &PortfolioContent) -> PortfolioContent {
    PortfolioContent {
        personal: load_public_content(storage, ContentDomain::PersonalInfo, &defaults.personal),
        experience: load_public_content(storage, ContentDomain::Experience, &defaults.experience),
        projects: load_public_content(storage, ContentDomain::Projects, &defaults.projects),
        skills: load_public_content(storage, ContentDomain::Skills, &defaults.skills),
        education: load_public_content(storage, ContentDomain::Education, &defaults.education),
    }
}

/// A mounted reader: reads once on mount and again on every change signal
/// of its domain. Dropping it unsubscribes.
pub struct PublicContent<T: Content> {
    value: Arc<RwLock<T>>,
    refresh: Arc<dyn Fn() + Send + Sync>,
    _subscription: Subscription,
}

impl<T: Content> PublicContent<T> {
    pub fn mount(
        storage: ContentStorage,
        domain: ContentDomain,
        defaults: T,
        notifier: &ChangeNotifier,
    ) -> Self {
        let value = Arc::new(RwLock::new(load_public_content(
            &storage, domain, &defaults,
        )));

        let refresh: Arc<dyn Fn() + Send + Sync> = {
            let value = Arc::clone(&value);
            Arc::new(move || {
                let fresh = load_public_content(&storage, domain, &defaults);
                *value.write().unwrap_or_else(PoisonError::into_inner) = fresh;
            })
        };

        let subscription = {
            let refresh = Arc::clone(&refresh);
            notifier.subscribe(domain.signal(), move || refresh())
        };

        Self {
            value,
            refresh,
            _subscription: subscription,
        }
    }

    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forces a re-read without waiting for a signal.
    pub fn refresh(&self) {
        (self.refresh)();
    }
}

/// Serves the public pages. Reads storage on every call; there is no cache
/// to invalidate.
pub struct PublicContentService {
    storage: ContentStorage,
    defaults: Arc<PortfolioContent>,
}

impl PublicContentService {
    pub fn new(storage: ContentStorage, defaults: Arc<PortfolioContent>) -> Self {
        Self { storage, defaults }
    }
}

#[async_trait]
impl GetPublicContentUseCase for PublicContentService {
    async fn portfolio(&self) -> PortfolioContent {
        load_portfolio(&self.storage, &self.defaults)
    }

    async fn section(&self, section: PublicSection) -> SectionContent {
        let domain = ContentDomain::from(section);
        let d = &self.defaults;
        match section {
            PublicSection::Personal => {
                SectionContent::Personal(load_public_content(&self.storage, domain, &d.personal))
            }
            PublicSection::Experience => SectionContent::Experience(load_public_content(
                &self.storage,
                domain,
                &d.experience,
            )),
            PublicSection::Projects => {
                SectionContent::Projects(load_public_content(&self.storage, domain, &d.projects))
            }
            PublicSection::Skills => {
                SectionContent::Skills(load_public_content(&self.storage, domain, &d.skills))
            }
            PublicSection::Education => SectionContent::Education(load_public_content(
                &self.storage,
                domain,
                &d.education,
            )),
        }
    }
}
