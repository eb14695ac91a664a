//! Typed view of a Landofile
//!
//! Only the keys the schema knows about are modeled. Everything else is kept
//! untouched in [`Landofile::extra`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{LandoError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landofile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub config: Map<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub proxy: BTreeMap<String, Vec<ProxyRoute>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A proxy entry as written in the Landofile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProxyRoute {
    Hostname(String),
    Detailed {
        hostname: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        port: Option<u16>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pathname: Option<String>,
    },
}

/// A proxy entry with host, port and path pulled apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub hostname: String,
    pub port: Option<u16>,
    pub pathname: String,
}

impl Landofile {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| LandoError::parse(None, None, format!("unexpected landofile shape: {e}")))
    }

    /// Every route paired with its service, in service then entry order.
    pub fn routes(&self) -> Result<Vec<(&str, Route)>> {
        let mut routes = Vec::new();
        for (service, entries) in &self.proxy {
            for entry in entries {
                routes.push((service.as_str(), entry.route()?));
            }
        }
        Ok(routes)
    }
}

impl ProxyRoute {
    /// Host part of the entry. For bare strings this strips any port or path.
    pub fn hostname(&self) -> &str {
        match self {
            Self::Hostname(raw) => {
                let host_port = raw.split_once('/').map_or(raw.as_str(), |(h, _)| h);
                host_port.split_once(':').map_or(host_port, |(h, _)| h)
            }
            Self::Detailed { hostname, .. } => hostname,
        }
    }

    pub fn route(&self) -> Result<Route> {
        match self {
            Self::Hostname(raw) => parse_bare_route(raw),
            Self::Detailed {
                hostname,
                port,
                pathname,
            } => Ok(Route {
                hostname: hostname.clone(),
                port: *port,
                pathname: pathname.clone().unwrap_or_else(|| "/".to_string()),
            }),
        }
    }
}

fn parse_bare_route(raw: &str) -> Result<Route> {
    let (host_port, pathname) = match raw.find('/') {
        Some(idx) => (&raw[..idx], raw[idx..].to_string()),
        None => (raw, "/".to_string()),
    };

    let (hostname, port) = match host_port.rsplit_once(':') {
        Some((host, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| LandoError::invalid_route(raw, format!("'{port}' is not a valid port")))?;
            if port == 0 {
                return Err(LandoError::invalid_route(raw, "port must be 1-65535"));
            }
            (host, Some(port))
        }
        None => (host_port, None),
    };

    if hostname.is_empty() {
        return Err(LandoError::invalid_route(raw, "hostname is empty"));
    }

    Ok(Route {
        hostname: hostname.to_string(),
        port,
        pathname,
    })
}

impl Route {
    pub fn url(&self) -> String {
        match self.port {
            Some(port) => format!("http://{}:{}{}", self.hostname, port, self.pathname),
            None => format!("http://{}{}", self.hostname, self.pathname),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
