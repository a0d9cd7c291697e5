//! Scrollbar and scroll pane options.

use tessera_core::{Axis, ConfigError};

/// Options for a [`Scrollbar`](crate::Scrollbar).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollbarConfig {
    /// Scroll direction
    pub axis: Axis,
    /// Size across the scroll axis
    pub thickness: f64,
    /// Track length along the axis; the page size when unset
    pub axis_length: Option<f64>,
    /// Length of the visible viewport along the axis
    pub page_size: f64,
    /// Fixed thumb length; sized from the page/content ratio when unset
    pub thumb_size: Option<f64>,
    /// Hide the bar while the content fits in one page
    pub auto_hide: bool,
    /// Multiplier applied to wheel deltas
    pub wheel_scale: f64,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            thickness: 18.0,
            axis_length: None,
            page_size: 240.0,
            thumb_size: None,
            auto_hide: false,
            wheel_scale: 1.0,
        }
    }
}

impl ScrollbarConfig {
    pub fn vertical() -> Self {
        Self::default()
    }

    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            ..Self::default()
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_axis_length(mut self, length: f64) -> Self {
        self.axis_length = Some(length);
        self
    }

    pub fn with_page_size(mut self, page_size: f64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Use a fixed thumb length instead of sizing it from the content.
    pub fn with_thumb_size(mut self, thumb_size: f64) -> Self {
        self.thumb_size = Some(thumb_size);
        self
    }

    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    pub fn with_wheel_scale(mut self, scale: f64) -> Self {
        self.wheel_scale = scale;
        self
    }

    /// Length of the track the thumb moves along.
    pub fn track_length(&self) -> f64 {
        self.axis_length.unwrap_or(self.page_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_length("thickness", self.thickness)?;
        ConfigError::check_length("page size", self.page_size)?;
        if let Some(length) = self.axis_length {
            ConfigError::check_length("axis length", length)?;
        }
        if let Some(thumb) = self.thumb_size {
            ConfigError::check_length("thumb size", thumb)?;
            // The thumb travels within the page, even on a longer track.
            let track = self.track_length().min(self.page_size);
            if thumb > track {
                return Err(ConfigError::ThumbExceedsTrack { thumb, track });
            }
        }
        if !self.wheel_scale.is_finite() {
            return Err(ConfigError::InvalidWheelScale(self.wheel_scale));
        }
        Ok(())
    }
}

/// Which scrollbars a [`ScrollPane`](crate::ScrollPane) shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAxes {
    pub vertical: bool,
    pub horizontal: bool,
}

impl ScrollAxes {
    pub const NONE: Self = Self {
        vertical: false,
        horizontal: false,
    };
    pub const VERTICAL: Self = Self {
        vertical: true,
        horizontal: false,
    };
    pub const HORIZONTAL: Self = Self {
        vertical: false,
        horizontal: true,
    };
    pub const BOTH: Self = Self {
        vertical: true,
        horizontal: true,
    };

    pub fn has(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

impl Default for ScrollAxes {
    fn default() -> Self {
        Self::VERTICAL
    }
}

/// Options for a [`ScrollPane`](crate::ScrollPane).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollPaneConfig {
    pub width: f64,
    pub height: f64,
    pub axes: ScrollAxes,
    /// Space between a scrollbar and the pane's edge
    pub gutter: f64,
    /// Template for the pane's scrollbars. The axis, page size and track
    /// length are filled in by the pane.
    pub scrollbar: ScrollbarConfig,
}

impl Default for ScrollPaneConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            axes: ScrollAxes::VERTICAL,
            gutter: 2.0,
            scrollbar: ScrollbarConfig::default(),
        }
    }
}

impl ScrollPaneConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_axes(mut self, axes: ScrollAxes) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn with_scrollbar(mut self, scrollbar: ScrollbarConfig) -> Self {
        self.scrollbar = scrollbar;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollbarConfig::default();
        assert_eq!(config.axis, Axis::Vertical);
        assert!((config.thickness - 18.0).abs() < 0.001);
        assert!((config.track_length() - 240.0).abs() < 0.001);
        assert!(config.validate().is_ok());

        let pane = ScrollPaneConfig::default();
        assert_eq!(pane.axes, ScrollAxes::VERTICAL);
        assert!((pane.gutter - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_track_length_override() {
        let config = ScrollbarConfig::horizontal()
            .with_page_size(100.0)
            .with_axis_length(80.0);
        assert!((config.track_length() - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let negative = ScrollbarConfig::default().with_page_size(-5.0);
        assert_eq!(
            negative.validate(),
            Err(ConfigError::InvalidLength { field: "page size", value: -5.0 })
        );

        let thumb = ScrollbarConfig::default()
            .with_page_size(100.0)
            .with_thumb_size(150.0);
        assert_eq!(
            thumb.validate(),
            Err(ConfigError::ThumbExceedsTrack { thumb: 150.0, track: 100.0 })
        );

        let past_page = ScrollbarConfig::default()
            .with_page_size(100.0)
            .with_axis_length(200.0)
            .with_thumb_size(150.0);
        assert_eq!(
            past_page.validate(),
            Err(ConfigError::ThumbExceedsTrack { thumb: 150.0, track: 100.0 })
        );

        let wheel = ScrollbarConfig::default().with_wheel_scale(f64::INFINITY);
        assert!(matches!(wheel.validate(), Err(ConfigError::InvalidWheelScale(_))));
    }

    #[test]
    fn test_scroll_axes() {
        assert!(ScrollAxes::BOTH.has(Axis::Horizontal));
        assert!(ScrollAxes::BOTH.has(Axis::Vertical));
        assert!(!ScrollAxes::VERTICAL.has(Axis::Horizontal));
        assert_eq!(ScrollAxes::default(), ScrollAxes::VERTICAL);
    }
}
