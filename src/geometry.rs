//! One-handed keyboard geometry.
//!
//! Computes the on-screen frame for the keyboard surface from the current
//! one-handed settings. Pure functions only: the host applies the returned
//! geometry to its rendering surface and re-lays-out.

use crate::settings::{KeyboardPosition, OneHandedSettings};

/// One dimension of a keyboard frame.
///
/// `Fill` and `Content` are sentinels resolved against the host surface,
/// mirroring match-parent/wrap-content layout params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Span the full screen dimension
    Fill,
    /// Size to the keyboard's intrinsic content
    Content,
    /// Fixed pixel size
    Px(i32),
}

/// Horizontal anchoring of the keyboard surface. Vertical anchoring is
/// always the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Full-width bottom strip (one-handed mode off)
    Bottom,
    /// Bottom-left corner
    BottomStart,
    /// Bottom-right corner
    BottomEnd,
}

/// Computed keyboard frame: extents plus anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub width: Extent,
    pub height: Extent,
    pub anchor: Anchor,
}

impl Frame {
    /// Resolves the frame to a concrete rectangle on the given screen.
    ///
    /// `content_height_px` substitutes for the `Content` sentinel when
    /// one-handed mode is off and the keyboard sizes to its key rows.
    pub fn resolve(&self, screen_w: i32, screen_h: i32, content_height_px: i32) -> Rect {
        let width = match self.width {
            // The keyboard never sizes its width to content.
            Extent::Fill | Extent::Content => screen_w,
            Extent::Px(px) => px,
        };
        let height = match self.height {
            Extent::Fill => screen_h,
            Extent::Content => content_height_px,
            Extent::Px(px) => px,
        };
        let x = match self.anchor {
            Anchor::Bottom | Anchor::BottomStart => 0,
            Anchor::BottomEnd => screen_w - width,
        };
        Rect {
            x,
            y: screen_h - height,
            width,
            height,
        }
    }
}

/// Computes the keyboard frame for the current settings.
///
/// With one-handed mode off the keyboard spans the full width and sizes its
/// height to content, anchored to the bottom. With it on, the width is the
/// configured percentage of the screen, the height is the configured
/// dip value converted through `dip_to_px`, and the surface hugs the
/// configured side. No failure modes: settings are clamped at load.
pub fn compute_frame(settings: &OneHandedSettings, screen_w_px: i32, dip_to_px: f32) -> Frame {
    if !settings.enabled {
        return Frame {
            width: Extent::Fill,
            height: Extent::Content,
            anchor: Anchor::Bottom,
        };
    }

    let width = screen_w_px * settings.width_percent / 100;
    let height = (settings.height_dp as f32 * dip_to_px).round() as i32;
    let anchor = match settings.position {
        KeyboardPosition::Left => Anchor::BottomStart,
        KeyboardPosition::Right => Anchor::BottomEnd,
    };

    Frame {
        width: Extent::Px(width),
        height: Extent::Px(height),
        anchor,
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Returns true if the rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{KeyboardPosition, OneHandedSettings};

    fn one_handed(position: KeyboardPosition, width_percent: i32) -> OneHandedSettings {
        OneHandedSettings {
            enabled: true,
            position,
            width_percent,
            height_dp: 250,
        }
    }

    #[test]
    fn disabled_mode_fills_width_and_anchors_bottom() {
        let settings = OneHandedSettings::default();
        let frame = compute_frame(&settings, 1080, 1.0);
        assert_eq!(frame.width, Extent::Fill);
        assert_eq!(frame.height, Extent::Content);
        assert_eq!(frame.anchor, Anchor::Bottom);
    }

    #[test]
    fn left_seventy_percent_on_1080_wide_screen() {
        let settings = one_handed(KeyboardPosition::Left, 70);
        let frame = compute_frame(&settings, 1080, 1.0);
        assert_eq!(frame.width, Extent::Px(756));
        assert_eq!(frame.height, Extent::Px(250));
        assert_eq!(frame.anchor, Anchor::BottomStart);

        let rect = frame.resolve(1080, 2400, 0);
        assert_eq!(
            rect,
            Rect {
                x: 0,
                y: 2150,
                width: 756,
                height: 250,
            }
        );
        assert!(rect.is_valid());
    }

    #[test]
    fn right_position_anchors_to_end() {
        let settings = one_handed(KeyboardPosition::Right, 50);
        let frame = compute_frame(&settings, 1000, 1.0);
        assert_eq!(frame.anchor, Anchor::BottomEnd);

        let rect = frame.resolve(1000, 2000, 0);
        assert_eq!(rect.x, 500);
        assert_eq!(rect.width, 500);
    }

    #[test]
    fn height_converts_dip_through_density() {
        let settings = one_handed(KeyboardPosition::Right, 70);
        let frame = compute_frame(&settings, 1080, 2.5);
        assert_eq!(frame.height, Extent::Px(625));
    }

    #[test]
    fn disabled_frame_resolves_with_content_height() {
        let frame = compute_frame(&OneHandedSettings::default(), 1080, 1.0);
        let rect = frame.resolve(1080, 2400, 300);
        assert_eq!(
            rect,
            Rect {
                x: 0,
                y: 2100,
                width: 1080,
                height: 300,
            }
        );
    }
}
