//! Client for the Particle cloud REST API.
//!
//! Wraps the device endpoints of `https://api.particle.io/v1/devices` behind a
//! [`Photon`] handle holding the device name and account access token:
//!
//! ```rust,ignore
//! let photon = Photon::new("class1", "abc123");
//! if photon.is_connected()? {
//!     photon.push("move", "90")?;
//!     let reading = photon.fetch("temperature")?;
//! }
//! ```

pub mod client;
pub mod config;
pub mod device;

pub use client::{ClientError, Photon, Result};
pub use device::{Device, FlashResponse};
