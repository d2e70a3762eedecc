use clap::{Parser, ValueEnum};

use crate::error::StartupError;

pub const DEFAULT_PORT:        u16  = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_HOSTNAME:    &str = "localhost";

#[derive(Parser, Debug, Clone)]
#[command(
    name    = "fullstack-backend",
    about   = "Status, health and version endpoints for the fullstack application",
    version
)]
pub struct Config {
    /// Host address or name to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on. An empty value falls back to the default.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Deployment environment name reported by `GET /`.
    #[arg(long, env = "APP_ENV", default_value = DEFAULT_ENVIRONMENT, value_parser = environment_or_default)]
    pub environment: String,

    /// Hostname reported by `GET /`. Container runtimes set HOSTNAME to the
    /// pod or container name.
    #[arg(long, env = "HOSTNAME", default_value = DEFAULT_HOSTNAME, value_parser = hostname_or_default)]
    pub hostname: String,

    /// Which deployment the greeting and CI/CD label describe.
    #[arg(long, env = "DEPLOY_TARGET", value_enum, default_value_t = DeployTarget::Kubernetes)]
    pub deploy_target: DeployTarget,
}

// Blank values behave like unset ones, so `PORT=` in a manifest or .env
// still starts the service on the default port.
fn parse_port(raw: &str) -> Result<u16, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    raw.parse().map_err(|e| format!("`{raw}` is not a valid port: {e}"))
}

fn environment_or_default(raw: &str) -> Result<String, String> {
    Ok(non_blank_or(raw, DEFAULT_ENVIRONMENT))
}

fn hostname_or_default(raw: &str) -> Result<String, String> {
    Ok(non_blank_or(raw, DEFAULT_HOSTNAME))
}

fn non_blank_or(raw: &str, default: &str) -> String {
    match raw.trim() {
        "" => default.to_string(),
        value => value.to_string(),
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTarget {
    Kubernetes,
    DockerHub,
}

impl DeployTarget {
    pub fn greeting(self) -> &'static str {
        match self {
            DeployTarget::Kubernetes => "🚀 Fullstack Application Running in Kubernetes!",
            DeployTarget::DockerHub  => "🐳 Fullstack Application Running from Docker Hub!",
        }
    }

    pub fn ci_cd_label(self) -> &'static str {
        match self {
            DeployTarget::Kubernetes => "GitHub Actions + Kind",
            DeployTarget::DockerHub  => "GitHub Actions + Docker Hub",
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), StartupError> {
        if self.port == 0 {
            return Err(StartupError::InvalidPort);
        }
        Ok(())
    }

    /// `host:port` as shown in logs and errors; IPv6 hosts are bracketed.
    pub fn addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
