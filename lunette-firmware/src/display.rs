//! GC9A01 panel adapter
//!
//! Implements the core `Display` trait over mipidsi + embedded-graphics.
//! The semantic palette maps to RGB565 here; the core never sees pixel
//! formats.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;
use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::GC9A01;
use mipidsi::options::ColorInversion;
use mipidsi::Builder;

use lunette_core::traits::display::{Color, Display, DisplayError};

type PanelSpi = ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>;
type PanelInterface = SpiInterface<'static, PanelSpi, Output<'static>>;
type Panel = mipidsi::Display<PanelInterface, GC9A01, Output<'static>>;

pub struct Gc9a01Panel {
    panel: Panel,
}

impl Gc9a01Panel {
    /// Bring up the panel over a blocking SPI bus
    pub fn new(
        spi_bus: Spi<'static, SPI1, Blocking>,
        cs: Output<'static>,
        dc: Output<'static>,
        rst: Output<'static>,
        buffer: &'static mut [u8],
    ) -> Result<Self, DisplayError> {
        let device = ExclusiveDevice::new_no_delay(spi_bus, cs)
            .map_err(|_| DisplayError::Interface)?;
        let di = SpiInterface::new(device, dc, buffer);

        let panel = Builder::new(GC9A01, di)
            .display_size(240, 240)
            .reset_pin(rst)
            .invert_colors(ColorInversion::Inverted)
            .init(&mut Delay)
            .map_err(|_| DisplayError::Interface)?;

        Ok(Self { panel })
    }
}

impl Display for Gc9a01Panel {
    fn fill(&mut self, color: Color) -> Result<(), DisplayError> {
        self.panel
            .clear(rgb(color))
            .map_err(|_| DisplayError::Interface)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_fill(rgb(color)))
            .draw(&mut self.panel)
            .map_err(|_| DisplayError::Interface)
    }

    fn rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<(), DisplayError> {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_stroke(rgb(color), 1))
            .draw(&mut self.panel)
            .map_err(|_| DisplayError::Interface)
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_8X13, rgb(color));
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.panel)
            .map_err(|_| DisplayError::Interface)?;
        Ok(())
    }
}

fn rgb(color: Color) -> Rgb565 {
    match color {
        Color::Black => Rgb565::BLACK,
        Color::White => Rgb565::WHITE,
        Color::Red => Rgb565::RED,
        Color::Green => Rgb565::GREEN,
        Color::Blue => Rgb565::BLUE,
        Color::Yellow => Rgb565::YELLOW,
        Color::Gray => Rgb565::new(16, 32, 16),
        Color::Orange => Rgb565::new(31, 40, 0),
    }
}
