//! Carousel cursor over a non-empty ordered sequence
//!
//! The cursor always points at a valid element: construction rejects an
//! empty sequence, `next`/`prev` wrap modulo the length, and `goto` refuses
//! indices outside the sequence without moving.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel requires at least one item")]
    Empty,

    #[error("Index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    /// Create a cursor at index 0
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { items, index: 0 })
    }

    /// Advance one item, wrapping to the start. Returns the new index.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.items.len();
        self.index
    }

    /// Step back one item, wrapping to the end. Returns the new index.
    pub fn prev(&mut self) -> usize {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
        self.index
    }

    /// Jump to `index`. Out-of-range requests leave the cursor where it is.
    pub fn goto(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// A single item needs no navigation controls
    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }

    /// Swap in a new sequence; the cursor resets to 0
    pub fn replace(&mut self, items: Vec<T>) -> Result<(), CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        self.items = items;
        self.index = 0;
        Ok(())
    }

    /// One-based counter such as "2 of 5"
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.index + 1, self.items.len())
    }
}
