//! Gallery domain: carousel cursors, lightbox modal, hero auto-advance

pub mod autoplay;
pub mod domain;

pub use autoplay::{AutoAdvance, SharedCarousel};
pub use domain::carousel::{Carousel, CarouselError};
pub use domain::lightbox::{Lightbox, LightboxError};
pub use domain::state::{ModalEvent, ModalState, ModalStateMachine};
