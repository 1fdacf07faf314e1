// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors (warm wellness neutrals plus grayscale)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes, including the fixed home screen dimensions
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (warm taupe scale)
    pub const TAUPE_100: Color = Color::from_rgb(0.961, 0.941, 0.933); // Screen background
    pub const TAUPE_200: Color = Color::from_rgb(0.886, 0.839, 0.812); // Surface variant
    pub const TAUPE_500: Color = Color::from_rgb(0.604, 0.545, 0.471); // Primary taupe
    pub const TAUPE_700: Color = Color::from_rgb(0.427, 0.373, 0.306); // Emphasis taupe

    // Accent colors (sage scale)
    pub const SAGE_500: Color = Color::from_rgb(0.490, 0.541, 0.435);
    pub const SAGE_700: Color = Color::from_rgb(0.329, 0.376, 0.290);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for panels that sit over the screen background.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Home screen dimensions
    /// Diameter of a circular body-element avatar.
    pub const AVATAR_DIAMETER: f32 = 88.0;
    /// Edge of the square illustration inside a collection card.
    pub const CARD_IMAGE: f32 = 80.0;
    /// Fixed width of a collection card.
    pub const CARD_WIDTH: f32 = 255.0;
    /// Total height of the two-row collections grid.
    pub const GRID_HEIGHT: f32 = 168.0;
    /// Minimum height of the search bar.
    pub const SEARCH_BAR_HEIGHT: f32 = 56.0;

    // Navigation chrome
    pub const NAV_BAR_HEIGHT: f32 = 80.0;
    pub const NAV_RAIL_WIDTH: f32 = 80.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Search input, card labels
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Avatar captions
    pub const BODY: f32 = 14.0;

    /// Caption - Navigation entry labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::AVATAR_DIAMETER > sizing::CARD_IMAGE);
    assert!(sizing::GRID_HEIGHT > sizing::CARD_IMAGE * 2.0);

    // Typography validation
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::TAUPE_500.r >= 0.0 && palette::TAUPE_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn grid_fits_two_card_rows_with_spacing() {
        assert_eq!(
            sizing::GRID_HEIGHT,
            sizing::CARD_IMAGE * 2.0 + spacing::XS
        );
    }
}
