#![cfg_attr(not(test), no_std)]

//! Framebuffers and geometry for a dual-screen handheld (400x240 top, 320x240 bottom).

mod framebuffer;
pub mod geometry;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;

use geometry::{
    BOTTOM_BUFFER_SIZE, BOTTOM_HEIGHT, BOTTOM_WIDTH, TOP_BUFFER_SIZE, TOP_HEIGHT, TOP_WIDTH,
};

/// 1bpp framebuffer for the top (info) screen.
pub type TopFrame = FrameBuffer<TOP_WIDTH, TOP_HEIGHT, TOP_BUFFER_SIZE>;

/// 1bpp framebuffer for the bottom (controls) screen.
pub type BottomFrame = FrameBuffer<BOTTOM_WIDTH, BOTTOM_HEIGHT, BOTTOM_BUFFER_SIZE>;

/// Physical screen of the console.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenId {
    Top,
    Bottom,
}

impl ScreenId {
    /// Width in pixels.
    pub const fn width(self) -> usize {
        match self {
            Self::Top => TOP_WIDTH,
            Self::Bottom => BOTTOM_WIDTH,
        }
    }

    /// Height in pixels.
    pub const fn height(self) -> usize {
        match self {
            Self::Top => TOP_HEIGHT,
            Self::Bottom => BOTTOM_HEIGHT,
        }
    }

    /// Text console columns for this screen.
    pub const fn columns(self) -> usize {
        self.width() / geometry::CELL_SIZE
    }

    /// Text console rows for this screen.
    pub const fn rows(self) -> usize {
        self.height() / geometry::CELL_SIZE
    }
}
