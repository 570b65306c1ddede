//! Pin and servo helpers for the stock classroom firmware. Each one is a
//! call-through to [`Photon::push`] with a fixed function name.

use crate::client::error::{ClientError, Result};
use crate::client::photon::Photon;

/// Firmware variable holding the comma-separated mode of every pin.
const PIN_STATE_VARIABLE: &str = "String2";

/// Slot value meaning the pin has no mode assigned yet.
const PIN_UNSET: i64 = -1;

/// Slot value meaning the pin is currently an input.
const PIN_INPUT: i64 = 0;

/// Sentinel returned by `set_input`/`set_output` when no write was needed.
pub const NO_CHANGE: i64 = -1;

impl Photon {
    /// Move the attached servo to the given angle.
    pub fn move_servo(&self, angle: u32) -> Result<i64> {
        self.push("move", &angle.to_string())
    }

    /// Attach the servo to a pin.
    pub fn attach_servo(&self, pin: &str) -> Result<i64> {
        self.push("attachServo", pin)
    }

    /// Detach the servo.
    pub fn detach_servo(&self) -> Result<i64> {
        self.push("detachServo", "")
    }

    /// The device's index for a pin name.
    pub fn get_pin(&self, pin: &str) -> Result<i64> {
        self.push("getPin", pin)
    }

    /// Make a pin an input, skipping the write when the firmware already
    /// reports a mode for it. Returns [`NO_CHANGE`] when skipped.
    pub fn set_input(&self, pin: &str) -> Result<i64> {
        if self.pin_mode_slot(pin)? == PIN_UNSET {
            return self.push("setInput", pin);
        }
        Ok(NO_CHANGE)
    }

    /// Make a pin an output, skipping the write unless the firmware reports
    /// it as an input. Returns [`NO_CHANGE`] when skipped.
    pub fn set_output(&self, pin: &str) -> Result<i64> {
        if self.pin_mode_slot(pin)? == PIN_INPUT {
            return self.push("setOutput", pin);
        }
        Ok(NO_CHANGE)
    }

    pub fn analog_read(&self, pin: &str) -> Result<i64> {
        self.push("analogRead", pin)
    }

    pub fn digital_read(&self, pin: &str) -> Result<i64> {
        self.push("digitalRead", pin)
    }

    /// Write an analog value; the firmware parses pin and value back out of
    /// the concatenated argument.
    pub fn analog_write(&self, pin: &str, value: u32) -> Result<i64> {
        self.push("analogWrite", &format!("{pin}{value}"))
    }

    /// Write a digital level, concatenated like `analog_write`.
    pub fn digital_write(&self, pin: &str, level: u32) -> Result<i64> {
        self.push("digitalWrite", &format!("{pin}{level}"))
    }

    /// Set the analog write frequency in Hz.
    pub fn set_freq(&self, hz: u32) -> Result<i64> {
        self.push("setFreq", &hz.to_string())
    }

    /// Read the pulse length on a pin.
    pub fn get_tone(&self, pin: &str) -> Result<i64> {
        self.push("getPulse", pin)
    }

    // The mode of a pin, read by indexing the firmware's pin-state string
    // with the device's own index for that pin. The string's format is a
    // firmware-side convention the cloud does not document; violations
    // surface as Decode errors.
    fn pin_mode_slot(&self, pin: &str) -> Result<i64> {
        let states = self.fetch(PIN_STATE_VARIABLE)?;
        let states = states.as_str().ok_or_else(|| {
            ClientError::Decode(format!("{PIN_STATE_VARIABLE} did not hold a string"))
        })?;
        let slots: Vec<&str> = states.split(',').collect();

        let index = self.get_pin(pin)?;
        let slot = usize::try_from(index)
            .ok()
            .and_then(|i| slots.get(i))
            .ok_or_else(|| {
                ClientError::Decode(format!(
                    "pin index {index} out of range for {PIN_STATE_VARIABLE}"
                ))
            })?;

        slot.trim().parse().map_err(|_| {
            ClientError::Decode(format!("pin state slot {slot:?} is not an integer"))
        })
    }
}
