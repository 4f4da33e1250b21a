use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Node budget for exhaustive requests served over HTTP when none is configured.
pub const DEFAULT_NODE_BUDGET: u64 = 50_000;

/// Caps and sizes the strategies work under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_weekly_hours: u32,
    pub max_sessions_per_course: u32,
    /// Greedy sessions attempted per course.
    pub attempts_per_course: usize,
    /// Schedule size at which the exhaustive search evaluates a candidate.
    pub target_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_weekly_hours: 5,
            max_sessions_per_course: 3,
            attempts_per_course: 5,
            target_size: 25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Caps are only checked on complete candidates.
    #[default]
    None,
    /// Branches that already break a cap are cut while descending.
    Incremental,
}

impl Pruning {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Pruning::None),
            "incremental" => Some(Pruning::Incremental),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub pruning: Pruning,
    /// Stop after visiting this many search nodes.
    pub node_budget: Option<u64>,
}

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub search: SearchOptions,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup("SCHEDULER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value.parse().map_err(|_| ConfigError::Invalid {
            key: "SCHEDULER_ADDR",
            value: addr_value.clone(),
        })?;

        let node_budget = match lookup("SCHEDULER_NODE_BUDGET") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&b| b > 0)
                .ok_or(ConfigError::Invalid {
                    key: "SCHEDULER_NODE_BUDGET",
                    value,
                })?,
            None => DEFAULT_NODE_BUDGET,
        };

        let pruning = match lookup("SCHEDULER_PRUNING") {
            Some(value) => Pruning::parse(&value).ok_or(ConfigError::Invalid {
                key: "SCHEDULER_PRUNING",
                value,
            })?,
            None => Pruning::default(),
        };

        Ok(Self {
            addr,
            search: SearchOptions {
                pruning,
                node_budget: Some(node_budget),
            },
        })
    }
}
