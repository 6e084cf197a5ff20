//! Joystick calibration and readings

use super::analog::Axis;

/// Resting reading of the x axis on the reference joystick
pub const DEFAULT_NEUTRAL_X: u16 = 2050;

/// Resting reading of the y axis on the reference joystick
pub const DEFAULT_NEUTRAL_Y: u16 = 1950;

/// Distance from neutral before a deflection counts
pub const DEFAULT_THRESHOLD: u16 = 900;

/// Neutral band for both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoystickCalibration {
    pub neutral_x: u16,
    pub neutral_y: u16,
    pub threshold: u16,
}

impl Default for JoystickCalibration {
    fn default() -> Self {
        Self {
            neutral_x: DEFAULT_NEUTRAL_X,
            neutral_y: DEFAULT_NEUTRAL_Y,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl JoystickCalibration {
    pub fn neutral(&self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.neutral_x,
            Axis::Y => self.neutral_y,
        }
    }

    /// Direction of a raw reading: -1, 0 or +1
    ///
    /// Readings strictly above `neutral + threshold` are +1, strictly below
    /// `neutral - threshold` are -1; anything in the band is 0.
    pub fn deflection(&self, axis: Axis, raw: u16) -> i16 {
        let neutral = self.neutral(axis);
        if raw > neutral.saturating_add(self.threshold) {
            1
        } else if raw < neutral.saturating_sub(self.threshold) {
            -1
        } else {
            0
        }
    }
}

/// Latest consumed sample of each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickReading {
    pub x: u16,
    pub y: u16,
}

impl JoystickReading {
    /// A reading sitting at the calibrated center
    pub fn centered(calibration: &JoystickCalibration) -> Self {
        Self {
            x: calibration.neutral_x,
            y: calibration.neutral_y,
        }
    }

    pub fn get(&self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, raw: u16) {
        match axis {
            Axis::X => self.x = raw,
            Axis::Y => self.y = raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_band_reference_values() {
        let cal = JoystickCalibration::default();
        // Band for x is [1150, 2950]
        assert_eq!(cal.deflection(Axis::X, 2051), 0);
        assert_eq!(cal.deflection(Axis::X, 2950), 0);
        assert_eq!(cal.deflection(Axis::X, 1150), 0);
        assert_eq!(cal.deflection(Axis::X, 2960), 1);
        assert_eq!(cal.deflection(Axis::X, 1149), -1);
    }

    #[test]
    fn test_y_uses_its_own_neutral() {
        let cal = JoystickCalibration::default();
        // Band for y is [1050, 2850]
        assert_eq!(cal.deflection(Axis::Y, 2900), 1);
        assert_eq!(cal.deflection(Axis::X, 2900), 0);
        assert_eq!(cal.deflection(Axis::Y, 1000), -1);
    }

    #[test]
    fn test_band_saturates_at_range_ends() {
        let cal = JoystickCalibration {
            neutral_x: 100,
            neutral_y: 65000,
            threshold: 900,
        };
        assert_eq!(cal.deflection(Axis::X, 0), 0);
        assert_eq!(cal.deflection(Axis::Y, u16::MAX), 0);
    }

    #[test]
    fn test_reading_accessors() {
        let mut reading = JoystickReading::centered(&JoystickCalibration::default());
        assert_eq!(reading.get(Axis::X), DEFAULT_NEUTRAL_X);
        reading.set(Axis::Y, 7);
        assert_eq!(reading.y, 7);
    }
}
