//! Ammaar site composition root
//!
//! Wires configuration, the catalog and the lead sink into a [`Site`] that
//! resolves routes into live pages.

use std::sync::Arc;

use ammaar_catalog::{CatalogProvider, StaticCatalog};
use ammaar_common::{Result, SiteConfig};
use ammaar_leads::{LeadConfig, LeadSinkFactory, LeadSubmitter};

pub mod links;
pub mod pages;
pub mod preview;
pub mod routes;

pub use links::ContactLinks;
pub use pages::{Page, View};
pub use routes::Route;

use pages::{AboutPage, ContactForm, GalleryPage, HomePage, LoginForm, ProjectsPage};

pub struct Site {
    config: SiteConfig,
    catalog: Arc<dyn CatalogProvider>,
    submitter: LeadSubmitter,
    links: ContactLinks,
}

impl Site {
    pub fn new(
        config: SiteConfig,
        catalog: Arc<dyn CatalogProvider>,
        submitter: LeadSubmitter,
    ) -> Self {
        let links = ContactLinks::from_config(&config);
        Self {
            config,
            catalog,
            submitter,
            links,
        }
    }

    /// Build the site from explicit configuration with the bundled catalog
    pub fn build(config: SiteConfig, lead_config: LeadConfig) -> anyhow::Result<Self> {
        let catalog = StaticCatalog::load()?;
        let links = ContactLinks::from_config(&config);

        let accept_unconfirmed = lead_config.accept_unconfirmed;
        let sink = LeadSinkFactory::create(lead_config)?;
        let submitter = LeadSubmitter::new(Arc::from(sink), links.whatsapp_number())
            .with_accept_unconfirmed(accept_unconfirmed);

        tracing::info!(
            provider = submitter.provider_name(),
            projects = catalog.len(),
            "Site assembled"
        );

        Ok(Self::new(config, Arc::new(catalog), submitter))
    }

    /// Build the site from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let config = SiteConfig::from_env()?;
        let lead_config = LeadConfig::from_env()?;
        Self::build(config, lead_config)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogProvider> {
        &self.catalog
    }

    pub fn submitter(&self) -> &LeadSubmitter {
        &self.submitter
    }

    pub fn links(&self) -> &ContactLinks {
        &self.links
    }

    /// Resolve a path into a live view. `None` for unknown paths.
    ///
    /// The home page starts its hero timer, so this must run inside a tokio
    /// runtime.
    pub fn navigate(&self, path_and_query: &str) -> Option<Result<View>> {
        let route = Route::parse(path_and_query)?;
        Some(self.page_for(&route).map(|page| View { route, page }))
    }

    pub fn page_for(&self, route: &Route) -> Result<Page> {
        tracing::debug!(route = %route, "Building page");
        let page = match route {
            Route::Home => Page::Home(Box::new(HomePage::new(
                self.catalog.clone(),
                &self.config,
                self.links.clone(),
            )?)),
            Route::About => Page::About(AboutPage::new(self.links.clone())),
            Route::Projects { filter } => Page::Projects(ProjectsPage::new(
                self.catalog.clone(),
                filter.clone(),
                self.links.clone(),
            )),
            Route::Gallery => Page::Gallery(GalleryPage::new(self.catalog.clone())),
            Route::Contact => Page::Contact(ContactForm::new()),
            Route::Login => Page::Login(LoginForm::new()),
        };
        Ok(page)
    }
}
