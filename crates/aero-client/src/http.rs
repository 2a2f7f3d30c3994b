//! Blocking HTTP implementation of [`SimulationApi`].

use crate::api::SimulationApi;
use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use aero_core::{SimParams, SimResponse};
use serde::Deserialize;

pub const SIMULATE_PATH: &str = "/simulate2d";
pub const HEALTH_PATH: &str = "/health";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

pub struct HttpClient {
    config: ApiConfig,
    agent: ureq::Agent,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            config,
            agent: builder.build(),
        }
    }

    pub fn from_env() -> ClientResult<Self> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn health(&self) -> ClientResult<HealthStatus> {
        let url = self.config.endpoint(HEALTH_PATH);
        tracing::debug!(%url, "GET");
        let response = self.agent.get(&url).call().map_err(request_error)?;
        let text = read_body(response)?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode {
            message: e.to_string(),
        })
    }
}

impl SimulationApi for HttpClient {
    fn simulate(&self, params: &SimParams) -> ClientResult<SimResponse> {
        let url = self.config.endpoint(SIMULATE_PATH);
        let body = serde_json::to_string(params).map_err(|e| ClientError::Encode {
            message: e.to_string(),
        })?;

        tracing::debug!(%url, shape = %params.shape, aoa_deg = params.aoa_deg, npts = params.npts, "POST");
        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(|e| {
                let err = request_error(e);
                tracing::warn!(%url, error = %err, "simulate2d failed");
                err
            })?;
        tracing::debug!(status = response.status(), "simulate2d responded");

        let text = read_body(response)?;
        let result: SimResponse =
            serde_json::from_str(&text).map_err(|e| ClientError::Decode {
                message: e.to_string(),
            })?;
        result.validate()?;

        tracing::info!(points = result.len(), cl = result.cl, "simulate2d ok");
        Ok(result)
    }

    fn describe(&self) -> String {
        self.config.base_url.clone()
    }
}

fn read_body(response: ureq::Response) -> ClientResult<String> {
    response.into_string().map_err(|e| ClientError::Transport {
        message: e.to_string(),
    })
}

fn request_error(err: ureq::Error) -> ClientError {
    match err {
        ureq::Error::Status(status, response) => ClientError::Protocol {
            status,
            // Body is shown verbatim; an unreadable one is shown as empty.
            body: response.into_string().unwrap_or_default(),
        },
        ureq::Error::Transport(transport) => ClientError::Transport {
            message: transport.to_string(),
        },
    }
}
