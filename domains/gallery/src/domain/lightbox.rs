//! Lightbox / property-detail modal controller
//!
//! Holds the optional selected project and an image carousel scoped to that
//! project. The carousel is rebuilt on every `open`, so its cursor always
//! starts at the first image, and it is dropped on `close`.

use std::sync::Arc;

use thiserror::Error;

use ammaar_catalog::Project;
use ammaar_common::StateError;

use crate::domain::carousel::{Carousel, CarouselError};
use crate::domain::state::{ModalEvent, ModalState, ModalStateMachine};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LightboxError {
    #[error(transparent)]
    Carousel(#[from] CarouselError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("Lightbox is closed")]
    NotOpen,
}

#[derive(Debug)]
struct Selection {
    project: Arc<Project>,
    images: Carousel<String>,
}

#[derive(Debug, Default)]
pub struct Lightbox {
    state: ModalState,
    selection: Option<Selection>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `project`, replacing any current selection. The image cursor
    /// resets to the first image.
    pub fn open(&mut self, project: Arc<Project>) -> Result<(), LightboxError> {
        let next = ModalStateMachine::transition(self.state, ModalEvent::Select)?;
        let images = Carousel::new(project.images.clone())?;

        tracing::debug!(
            project_id = %project.id,
            images = images.len(),
            "Opening lightbox"
        );

        self.selection = Some(Selection { project, images });
        self.state = next;
        Ok(())
    }

    /// Dismiss the overlay. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        match ModalStateMachine::transition(self.state, ModalEvent::Dismiss) {
            Ok(next) => {
                self.state = next;
                self.selection = None;
                tracing::debug!("Closed lightbox");
                true
            }
            Err(_) => false,
        }
    }

    /// Whether the overlay is visible; the layout locks page scroll on this
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn selection(&self) -> Option<&Arc<Project>> {
        self.selection.as_ref().map(|s| &s.project)
    }

    /// Prev/next controls are only offered for multi-image projects
    pub fn has_navigation(&self) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|s| !s.images.is_single())
    }

    /// Next image. `None` when closed or when there is nothing to page through.
    pub fn next(&mut self) -> Option<usize> {
        self.navigable_images().map(Carousel::next)
    }

    /// Previous image. `None` when closed or when there is nothing to page through.
    pub fn prev(&mut self) -> Option<usize> {
        self.navigable_images().map(Carousel::prev)
    }

    /// Jump to an image via the dot indicators
    pub fn goto(&mut self, index: usize) -> Result<(), LightboxError> {
        let selection = self.selection.as_mut().ok_or(LightboxError::NotOpen)?;
        selection.images.goto(index)?;
        Ok(())
    }

    pub fn current_image(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.images.current().as_str())
    }

    pub fn image_index(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.images.index())
    }

    /// "3 of 5" counter under the image
    pub fn position_label(&self) -> Option<String> {
        self.selection.as_ref().map(|s| s.images.position_label())
    }

    fn navigable_images(&mut self) -> Option<&mut Carousel<String>> {
        self.selection
            .as_mut()
            .map(|s| &mut s.images)
            .filter(|images| !images.is_single())
    }
}
