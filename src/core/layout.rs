//! Dual-board world layout.
//!
//! The versus presentation draws two boards side by side. This module owns
//! the derived geometry: where the first board sits, how far the second one
//! is offset, and the total world size. All values are in grid cells.
//!
//! The inter-board spacing is the one persisted preference. The sum
//! `2 * x_padding + internal_spacing` is held constant, so widening the gap
//! narrows the outer margins and the world width stays put.

use crate::settings::SettingsProvider;

/// Settings key for the persisted spacing value.
pub const SPACING_KEY: &str = "internal_spacing";

/// Default gap between the two boards, in cells.
pub const DEFAULT_SPACING: f32 = 4.0;

/// Invariant: `2 * x_padding + internal_spacing == CONSTANT_SPACING`.
const CONSTANT_SPACING: f32 = 8.0;

const DEFAULT_Y_PADDING: f32 = 1.0;

/// Derived geometry for the dual-board world.
#[derive(Debug, Clone, PartialEq)]
pub struct DuelLayout {
    board_width: f32,
    board_height: f32,
    x_padding: f32,
    y_padding: f32,
    internal_spacing: f32,
    board_origin: (f32, f32),
    board_offset: f32,
    world_width: f32,
    world_height: f32,
}

impl DuelLayout {
    /// Build the layout for the given board dimensions, loading the spacing
    /// preference from the settings provider.
    pub fn new(width: i8, height: i8, settings: &dyn SettingsProvider) -> Self {
        let internal_spacing = settings.get_f32(SPACING_KEY, DEFAULT_SPACING);
        let mut layout = Self {
            board_width: width as f32,
            board_height: height as f32,
            x_padding: 0.0,
            y_padding: DEFAULT_Y_PADDING,
            internal_spacing,
            board_origin: (0.0, 0.0),
            board_offset: 0.0,
            world_width: 0.0,
            world_height: 0.0,
        };
        layout.recompute();
        layout
    }

    pub fn internal_spacing(&self) -> f32 {
        self.internal_spacing
    }

    pub fn x_padding(&self) -> f32 {
        self.x_padding
    }

    pub fn y_padding(&self) -> f32 {
        self.y_padding
    }

    /// Origin of the left board.
    pub fn board_origin(&self) -> (f32, f32) {
        self.board_origin
    }

    /// Horizontal distance from the left board to the right board.
    pub fn board_offset(&self) -> f32 {
        self.board_offset
    }

    pub fn world_width(&self) -> f32 {
        self.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.world_height
    }

    /// Change the spacing preference, recompute, and persist the new value.
    pub fn set_internal_spacing(&mut self, value: f32, settings: &mut dyn SettingsProvider) {
        self.internal_spacing = value;
        self.recompute();
        settings.set_f32(SPACING_KEY, value);
        log::debug!("internal spacing set to {value}");
    }

    /// Recompute after a board resize.
    pub fn resize(&mut self, width: i8, height: i8) {
        self.board_width = width as f32;
        self.board_height = height as f32;
        self.recompute();
    }

    /// Derive the full geometry from the current dimensions and spacing.
    ///
    /// Called explicitly after any input changes; there is no observer
    /// wiring.
    fn recompute(&mut self) {
        self.x_padding = ((CONSTANT_SPACING - self.internal_spacing) / 2.0).max(0.0);
        self.board_origin = (self.x_padding, self.y_padding);
        self.board_offset = self.board_width + self.internal_spacing;
        self.world_width = self.board_width * 2.0 + self.internal_spacing + self.x_padding * 2.0;
        self.world_height = self.board_height + self.y_padding;
    }
}
