//! Platform abstraction layer
//!
//! The game core talks to its surroundings through four small traits:
//! - `Renderer`: clear, fill, draw textured rects, present
//! - `AssetLoader`: image file to texture
//! - `EventSource`: non-blocking input polling
//! - `Clock`: monotonic milliseconds
//!
//! `terminal` implements all of them on top of crossterm.

pub mod image;
pub mod terminal;

pub use terminal::{TerminalBackend, TerminalTexture};

use std::io;
use std::path::Path;
use std::time::Instant;

use crate::error::SetupError;
use crate::renderer::Color;
use crate::sim::{InputEvent, Rect};

pub trait Renderer {
    type Texture;

    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `texture` stretched to `dest`
    fn draw_textured_rect(&mut self, texture: &Self::Texture, dest: Rect);

    /// Short text overlay. Backends without text support ignore it.
    fn draw_label(&mut self, _x: i32, _y: i32, _text: &str) {}

    /// Show the frame. May block until the next refresh.
    fn present(&mut self) -> io::Result<()>;
}

pub trait AssetLoader {
    type Texture;

    /// Decode an image file into a texture sized to its pixel dimensions
    fn load_texture(&mut self, path: &Path) -> Result<Self::Texture, SetupError>;
}

pub trait EventSource {
    /// Next pending event, `None` once the queue is drained. Never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

pub trait Clock {
    /// Monotonic milliseconds since an arbitrary origin
    fn now_millis(&self) -> u64;
}

/// Everything the frame loop needs from a backend
pub trait Platform:
    Renderer + AssetLoader<Texture = <Self as Renderer>::Texture> + EventSource + Clock
{
}

impl<T> Platform for T where
    T: Renderer + AssetLoader<Texture = <T as Renderer>::Texture> + EventSource + Clock
{
}

/// `Instant`-backed clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
