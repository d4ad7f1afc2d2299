//! Page geometry shared by the layout and rendering passes.

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Fixed page dimensions in millimetres with a uniform margin.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PageGeometry {
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// Margin applied on all four sides.
    pub margin: f64,
}

impl PageGeometry {
    /// Creates a geometry from raw values.  Validation happens at build time.
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// A4 portrait with a 10mm margin.
    pub fn a4() -> Self {
        Self::new(210.0, 297.0, 10.0)
    }

    /// Checks that the geometry leaves a positive printable area.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidDimension { name, value });
            }
        }

        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigurationError::InvalidDimension {
                name: "margin",
                value: self.margin,
            });
        }

        if self.margin * 2.0 >= self.width || self.margin * 2.0 >= self.height {
            return Err(ConfigurationError::MarginTooLarge {
                margin: self.margin,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Offset of the first writable line from the top edge.
    pub fn top(&self) -> f64 {
        self.margin
    }

    /// Lowest offset from the top edge that content may reach.
    pub fn bottom_limit(&self) -> f64 {
        self.height - self.margin
    }

    /// Left edge of the printable area.
    pub fn left(&self) -> f64 {
        self.margin
    }

    /// Width available between the left and right margins.
    pub fn printable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height available between the top and bottom margins.
    pub fn printable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::PageGeometry;
    use crate::error::ConfigurationError;

    #[test]
    fn a4_derived_values() {
        let geometry = PageGeometry::a4();
        assert!(geometry.validate().is_ok());
        assert_eq!(geometry.top(), 10.0);
        assert_eq!(geometry.bottom_limit(), 287.0);
        assert_eq!(geometry.printable_width(), 190.0);
        assert_eq!(geometry.printable_height(), 277.0);
    }

    #[test]
    fn rejects_zero_width() {
        let err = PageGeometry::new(0.0, 297.0, 10.0).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidDimension {
                name: "width",
                value: 0.0
            }
        );
    }

    #[test]
    fn rejects_non_finite_height() {
        let err = PageGeometry::new(210.0, f64::NAN, 10.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidDimension { name: "height", .. }
        ));
    }

    #[test]
    fn rejects_negative_margin() {
        let err = PageGeometry::new(210.0, 297.0, -1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidDimension { name: "margin", .. }
        ));
    }

    #[test]
    fn rejects_margin_consuming_page() {
        let err = PageGeometry::new(20.0, 297.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, ConfigurationError::MarginTooLarge { .. }));
    }

    #[test]
    fn zero_margin_is_allowed() {
        assert!(PageGeometry::new(100.0, 100.0, 0.0).validate().is_ok());
    }
}
