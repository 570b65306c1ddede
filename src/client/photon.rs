use std::fs;
use std::path::Path;
use std::time::Duration;

use indexmap::IndexMap;
use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::error::{ClientError, Result};
use crate::device::{Device, DeviceDetail, FlashResponse, FunctionResponse, VariableResponse};

/// Devices collection of the Particle cloud API.
pub const DEFAULT_ENDPOINT: &str = "https://api.particle.io/v1/devices";

/// Extensions the cloud compiler accepts for flashing.
const FIRMWARE_EXTENSIONS: &[&str] = &["ino", "cpp"];

/*
* Client for a single Particle Photon registered under a cloud account
*/
pub struct Photon {
    client: reqwest::blocking::Client,
    name: String,
    access_token: String,
    endpoint: String,
}
impl Photon {
    /// Create a client for the named device. The name and access token are
    /// stored verbatim and never validated here.
    pub fn new(name: &str, access_token: &str) -> Photon {
        Photon {
            client: Self::build_client(None),
            name: name.to_string(),
            access_token: access_token.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Point the client at a different devices collection URL.
    pub fn endpoint(mut self, url: &str) -> Photon {
        self.endpoint = url.trim_end_matches('/').to_string();
        self
    }

    /// Apply a per-request timeout. Requests wait indefinitely unless this is
    /// called.
    pub fn timeout(mut self, timeout: Duration) -> Photon {
        self.client = Self::build_client(Some(timeout));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn build_client(timeout: Option<Duration>) -> reqwest::blocking::Client {
        reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap()
    }

    /// Fetch the status of every device attached to the account.
    pub fn devices(&self) -> Result<Vec<Device>> {
        self.get("", "devices")
    }

    /// Whether this client's device shows up as connected in the account
    /// listing. Absent names report `false`.
    pub fn is_connected(&self) -> Result<bool> {
        let devices = self.devices()?;
        Ok(devices
            .iter()
            .find(|d| d.name == self.name)
            .map(|d| d.connected)
            .unwrap_or(false))
    }

    /// The remote functions the device firmware registered, in the order the
    /// cloud reports them.
    pub fn functions(&self) -> Result<Vec<String>> {
        Ok(self.detail()?.functions)
    }

    /// The variables the device firmware registered, name to declared type.
    pub fn variables(&self) -> Result<IndexMap<String, String>> {
        Ok(self.detail()?.variables)
    }

    /// Read the value of a device variable, returned with its JSON type
    /// unchanged.
    pub fn fetch(&self, variable: &str) -> Result<Value> {
        let response: VariableResponse =
            self.get(&format!("/{}/{}/", self.name, variable), variable)?;
        Ok(response.result)
    }

    /// Invoke a device function with a single string argument and return the
    /// integer the firmware handler produced.
    pub fn push(&self, function: &str, argument: &str) -> Result<i64> {
        let url = format!("{}/{}/{}/", self.endpoint, self.name, function);
        log::debug!("{}: POST {}", self.name, url);

        let response = self
            .client
            .post(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .form(&[("args", argument)])
            .send()?;

        let response: FunctionResponse = Self::decode(response, function)?;
        Ok(response.return_value)
    }

    /// Flash a firmware source file to the device. The path must exist and
    /// end in `.ino` or `.cpp`; both are checked before any network I/O.
    pub fn flash(&self, path: &str) -> Result<FlashResponse> {
        let file = Path::new(path);
        if !file.is_file() {
            return Err(ClientError::NoSuchFile(path.to_string()));
        }
        let recognized = file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| FIRMWARE_EXTENSIONS.contains(&e));
        if !recognized {
            return Err(ClientError::InvalidExtension(path.to_string()));
        }

        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("firmware.ino")
            .to_string();
        let part = Part::bytes(fs::read(file)?).file_name(file_name);
        let form = Form::new().part("file", part);

        let url = format!("{}/{}", self.endpoint, self.name);
        log::debug!("{}: PUT {}", self.name, url);

        let response = self
            .client
            .put(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .multipart(form)
            .send()?;

        Self::decode(response, &self.name)
    }

    fn detail(&self) -> Result<DeviceDetail> {
        self.get(&format!("/{}/", self.name), &self.name)
    }

    /// Do an authenticated GET request and decode the JSON body.
    fn get<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T> {
        let url = format!("{}{}", self.endpoint, path);
        log::debug!("{}: GET {}", self.name, url);

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .send()?;

        Self::decode(response, resource)
    }

    fn decode<T: DeserializeOwned>(
        response: reqwest::blocking::Response,
        resource: &str,
    ) -> Result<T> {
        match response.status() {
            s if s.is_success() => {
                let body = response.text()?;
                serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ClientError::AuthFailure),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(resource.to_string())),
            s => Err(ClientError::Status(s.as_u16())),
        }
    }
}
