//! Page shells, one per route

pub mod about;
pub mod browser;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod login;
pub mod projects;

pub use about::AboutPage;
pub use browser::{FilterButton, ProjectBrowser, EMPTY_STATE_TEXT};
pub use contact::{ContactFields, ContactForm, FormEvent, FormPhase, FormStateMachine};
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use login::{LoginForm, LOGIN_UNAVAILABLE};
pub use projects::ProjectsPage;

use ammaar_gallery::Lightbox;

use crate::routes::Route;

pub enum Page {
    Home(Box<HomePage>),
    About(AboutPage),
    Projects(ProjectsPage),
    Gallery(GalleryPage),
    Contact(ContactForm),
    Login(LoginForm),
}

impl Page {
    /// The page's property modal, if it has one
    pub fn lightbox(&self) -> Option<&Lightbox> {
        match self {
            Page::Home(page) => Some(page.lightbox()),
            Page::Projects(page) => Some(page.lightbox()),
            Page::Gallery(page) => Some(page.lightbox()),
            Page::About(_) | Page::Contact(_) | Page::Login(_) => None,
        }
    }

    /// Open the property modal on pages that list projects
    pub fn open(&mut self, id: &str) -> ammaar_common::Result<()> {
        match self {
            Page::Home(page) => page.open(id),
            Page::Projects(page) => page.open(id),
            Page::Gallery(page) => page.open(id),
            Page::About(_) | Page::Contact(_) | Page::Login(_) => Err(
                ammaar_common::Error::NotFound("This page lists no projects".to_string()),
            ),
        }
    }
}

/// A resolved route together with its live page
pub struct View {
    pub route: Route,
    pub page: Page,
}

impl View {
    pub fn shows_navbar(&self) -> bool {
        self.route.shows_chrome()
    }

    pub fn shows_footer(&self) -> bool {
        self.route.shows_chrome()
    }

    /// Page scroll is locked while a modal covers it
    pub fn scroll_locked(&self) -> bool {
        self.page.lightbox().is_some_and(Lightbox::is_open)
    }
}
