mod error;
mod photon;
mod pins;

pub use error::{ClientError, Result};
pub use photon::{DEFAULT_ENDPOINT, Photon};
pub use pins::NO_CHANGE;
