// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the documentation shell.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use summon_docs::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.035, 0.035, 0.043);
    pub const GRAY_900: Color = Color::from_rgb(0.094, 0.094, 0.106);
    pub const GRAY_800: Color = Color::from_rgb(0.153, 0.153, 0.165);
    pub const GRAY_700: Color = Color::from_rgb(0.247, 0.247, 0.275);
    pub const GRAY_500: Color = Color::from_rgb(0.443, 0.443, 0.478);
    pub const GRAY_300: Color = Color::from_rgb(0.831, 0.831, 0.847);
    pub const GRAY_200: Color = Color::from_rgb(0.894, 0.894, 0.906);
    pub const GRAY_100: Color = Color::from_rgb(0.957, 0.957, 0.961);

    // Brand colors (violet scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.769, 0.710, 0.992);
    pub const PRIMARY_500: Color = Color::from_rgb(0.545, 0.361, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.486, 0.227, 0.929);
    pub const PRIMARY_700: Color = Color::from_rgb(0.427, 0.157, 0.851);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.12;
    /// Backdrop behind the navigation drawer
    pub const SCRIM: f32 = 0.5;
    pub const HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;

    /// Header bar height (matches the sidebar brand row)
    pub const HEADER_HEIGHT: f32 = 56.0;
    pub const SIDEBAR_WIDTH: f32 = 256.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Readable line length for page content
    pub const CONTENT_MAX_WIDTH: f32 = 860.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page title
    pub const TITLE_LG: f32 = 30.0;
    /// Section heading
    pub const TITLE_MD: f32 = 22.0;
    /// Sub-heading, card title
    pub const TITLE_SM: f32 = 17.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Code samples
    pub const CODE: f32 = 13.0;
    /// Badges, captions
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 4.0, y: 0.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CODE);
    assert!(typography::CODE > typography::CAPTION);

    assert!(sizing::SIDEBAR_WIDTH < crate::config::DESKTOP_BREAKPOINT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
