//! Home page: auto-advancing hero, featured projects, inline contact form
//!
//! The hero carousel is shared with an [`AutoAdvance`] task. Dropping the
//! page drops the handle, which aborts the task.

use std::sync::{Arc, Mutex, PoisonError};

use ammaar_catalog::{CatalogProvider, Project};
use ammaar_common::{Error, Result, SiteConfig};
use ammaar_gallery::{AutoAdvance, Carousel, Lightbox, SharedCarousel};

use crate::links::ContactLinks;
use crate::pages::contact::ContactForm;

pub struct HomePage {
    catalog: Arc<dyn CatalogProvider>,
    hero: SharedCarousel<Arc<Project>>,
    autoplay: AutoAdvance,
    featured: Vec<Arc<Project>>,
    lightbox: Lightbox,
    contact: ContactForm,
    links: ContactLinks,
}

impl HomePage {
    /// Build the page and start the hero timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        config: &SiteConfig,
        links: ContactLinks,
    ) -> Result<Self> {
        let slides = catalog.featured(config.hero_slides).to_vec();
        let hero = Carousel::new(slides)
            .map_err(|e| Error::Configuration(format!("Hero has no slides: {}", e)))?;
        let hero: SharedCarousel<Arc<Project>> = Arc::new(Mutex::new(hero));
        let autoplay = AutoAdvance::spawn(hero.clone(), config.hero_interval());
        let featured = catalog.featured(config.featured_projects).to_vec();

        Ok(Self {
            catalog,
            hero,
            autoplay,
            featured,
            lightbox: Lightbox::new(),
            contact: ContactForm::new(),
            links,
        })
    }

    fn with_hero<R>(&self, f: impl FnOnce(&mut Carousel<Arc<Project>>) -> R) -> R {
        let mut hero = self.hero.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut hero)
    }

    pub fn current_slide(&self) -> Arc<Project> {
        self.with_hero(|hero| hero.current().clone())
    }

    pub fn slide_index(&self) -> usize {
        self.with_hero(|hero| hero.index())
    }

    pub fn slide_count(&self) -> usize {
        self.with_hero(|hero| hero.len())
    }

    pub fn next_slide(&self) -> usize {
        self.with_hero(Carousel::next)
    }

    pub fn prev_slide(&self) -> usize {
        self.with_hero(Carousel::prev)
    }

    /// Dot indicator click
    pub fn goto_slide(&self, index: usize) -> Result<()> {
        self.with_hero(|hero| hero.goto(index))
            .map_err(|e| Error::Validation(e.to_string()))
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    pub fn featured(&self) -> &[Arc<Project>] {
        &self.featured
    }

    /// Open the property modal from a featured card
    pub fn open(&mut self, id: &str) -> Result<()> {
        let project = self
            .catalog
            .find(id)
            .ok_or_else(|| Error::NotFound(format!("Project '{}'", id)))?;
        self.lightbox
            .open(project)
            .map_err(|e| Error::Internal(e.to_string()))
    }

    pub fn close(&mut self) -> bool {
        self.lightbox.close()
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn call_link(&self) -> String {
        self.links.call()
    }
}
