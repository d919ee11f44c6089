//! Display collaborator trait
//!
//! A minimal rect-and-text surface. The core draws the watch face and
//! game through these four primitives; pixel pushing, SPI transfers,
//! and font rendering stay in the implementation.

/// Semantic palette used by the core
///
/// Implementations map these to whatever the panel understands
/// (typically RGB565).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Gray,
    Orange,
}

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus/interface write failed
    Interface,
}

/// Trait for the display surface
pub trait Display {
    /// Fill the entire screen with one color
    fn fill(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color)
        -> Result<(), DisplayError>;

    /// Draw a one-pixel rectangle outline
    fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<(), DisplayError>;

    /// Draw a text string with its top-left corner at (x, y)
    fn text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), DisplayError>;
}
