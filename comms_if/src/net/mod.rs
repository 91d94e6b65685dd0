//! # Network Module
//!
//! This module provides the client for the Lokarria HTTP interface. All requests are blocking and
//! made one at a time, the robot service expects commands in the order they are issued.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::time::Duration;

use log::{debug, trace};
use nalgebra::Vector3;
use reqwest::{blocking::Client, header};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// Export the status code so users can match on unexpected responses
pub use reqwest::StatusCode;

use crate::eqpt::{
    drive::DriveDems,
    laser::{LaserEchoes, LaserProperties},
    loc::LocRep,
};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Differential drive demands endpoint
pub const DIFFERENTIAL_DRIVE_ENDPOINT: &str = "/lokarria/differentialdrive";

/// Localisation (pose) endpoint
pub const LOCALIZATION_ENDPOINT: &str = "/lokarria/localization";

/// Laser echoes endpoint
pub const LASER_ECHOES_ENDPOINT: &str = "/lokarria/laser/echoes";

/// Laser properties endpoint
pub const LASER_PROPERTIES_ENDPOINT: &str = "/lokarria/laser/properties";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Network parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetParams {
    /// Base address of the robot service, e.g. `http://localhost:50000`
    pub base_url: String,

    /// Timeout applied to each request, milliseconds
    pub timeout_ms: u64,
}

/// Client for the robot service.
pub struct LokarriaClient {
    client: Client,
    base_url: String,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LokarriaClientError {
    #[error("Could not build the HTTP client: {0}")]
    ClientBuildError(reqwest::Error),

    #[error("Request to {0} failed: {1}")]
    RequestError(String, reqwest::Error),

    #[error("Unexpected response from {endpoint} (status {status}): {body}")]
    UnexpectedResponse {
        endpoint: String,
        status: StatusCode,
        body: String,
    },

    #[error("Could not read the response body from {0}: {1}")]
    BodyReadError(String, reqwest::Error),

    #[error("Could not deserialize the response from {0}: {1}")]
    DeserializeError(String, serde_json::Error),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for NetParams {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:50000"),
            timeout_ms: 5000,
        }
    }
}

impl LokarriaClient {
    pub fn new(params: &NetParams) -> Result<Self, LokarriaClientError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("text/json"));

        let client = Client::builder()
            .timeout(Duration::from_millis(params.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(LokarriaClientError::ClientBuildError)?;

        Ok(Self {
            client,
            base_url: params.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base address requests are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a speed command to the robot.
    pub fn post_speed(
        &self,
        angular_speed: f64,
        linear_speed: f64,
    ) -> Result<(), LokarriaClientError> {
        self.send_drive_dems(&DriveDems::new(angular_speed, linear_speed))
    }

    /// Send drive demands to the robot. The service acknowledges with `204 No Content`.
    pub fn send_drive_dems(&self, dems: &DriveDems) -> Result<(), LokarriaClientError> {
        let endpoint = DIFFERENTIAL_DRIVE_ENDPOINT;

        debug!(
            "POST {}: angular {:.4} rad/s, linear {:.4} m/s",
            endpoint, dems.target_angular_speed, dems.target_linear_speed
        );

        let response = self
            .client
            .post(self.url(endpoint))
            .json(dems)
            .send()
            .map_err(|e| LokarriaClientError::RequestError(endpoint.into(), e))?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(LokarriaClientError::UnexpectedResponse {
                endpoint: endpoint.into(),
                status,
                body: response.text().unwrap_or_default(),
            });
        }

        Ok(())
    }

    /// Read the current pose of the robot.
    pub fn get_pose(&self) -> Result<LocRep, LokarriaClientError> {
        self.get_json(LOCALIZATION_ENDPOINT)
    }

    /// Read the current heading of the robot as a world frame unit vector.
    pub fn get_heading(&self) -> Result<Vector3<f64>, LokarriaClientError> {
        let rep = self.get_pose()?;

        Ok(util::maths::bearing(&rep.pose.orientation.into()))
    }

    /// Read the current laser scan.
    pub fn get_laser(&self) -> Result<LaserEchoes, LokarriaClientError> {
        self.get_json(LASER_ECHOES_ENDPOINT)
    }

    /// Read the laser's scan properties.
    pub fn get_laser_properties(&self) -> Result<LaserProperties, LokarriaClientError> {
        self.get_json(LASER_PROPERTIES_ENDPOINT)
    }

    /// Read the laser's scan properties and return the angle of each beam.
    pub fn get_laser_angles(&self) -> Result<Vec<f64>, LokarriaClientError> {
        Ok(self.get_laser_properties()?.beam_angles())
    }

    /// Perform a GET on the endpoint and deserialize the `200 OK` body.
    fn get_json<T>(&self, endpoint: &str) -> Result<T, LokarriaClientError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .map_err(|e| LokarriaClientError::RequestError(endpoint.into(), e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| LokarriaClientError::BodyReadError(endpoint.into(), e))?;

        if status != StatusCode::OK {
            return Err(LokarriaClientError::UnexpectedResponse {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        trace!("GET {}: {}", endpoint, body);

        serde_json::from_str(&body)
            .map_err(|e| LokarriaClientError::DeserializeError(endpoint.into(), e))
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
