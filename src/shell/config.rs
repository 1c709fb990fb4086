// Runtime configuration read from the environment.
//
// Variables
// - TIME_CLOCK_ADDR      listen address, default 0.0.0.0:8080
// - TIME_CLOCK_DATABASE  SQLite file; unset keeps entries in memory
// - TIME_CLOCK_TOKENS    `token=user_id:ROLE` pairs separated by commas
//
// A `.env` file, when present, is loaded by the binary before this runs.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::shared::core::identity::{Identity, Role};

pub const ADDR_VAR: &str = "TIME_CLOCK_ADDR";
pub const DATABASE_VAR: &str = "TIME_CLOCK_DATABASE";
pub const TOKENS_VAR: &str = "TIME_CLOCK_TOKENS";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TIME_CLOCK_ADDR is not a socket address: {0:?}")]
    InvalidAddr(String),

    #[error("TIME_CLOCK_TOKENS entry {entry:?} is invalid: {reason}")]
    InvalidToken { entry: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub database: Option<PathBuf>,
    pub tokens: Vec<(String, Identity)>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let raw_addr = value(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let tokens = match value(TOKENS_VAR) {
            Some(raw) => parse_tokens(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            addr,
            database: value(DATABASE_VAR).map(PathBuf::from),
            tokens,
        })
    }
}

fn parse_tokens(raw: &str) -> Result<Vec<(String, Identity)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(entry: &str) -> Result<(String, Identity), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidToken {
        entry: entry.to_string(),
        reason,
    };
    let (token, subject) = entry
        .split_once('=')
        .ok_or_else(|| invalid("expected token=user_id:ROLE".into()))?;
    let (user_id, role) = subject
        .split_once(':')
        .ok_or_else(|| invalid("expected user_id:ROLE after '='".into()))?;

    let token = token.trim();
    if token.is_empty() {
        return Err(invalid("empty token".into()));
    }
    let user_id = user_id
        .trim()
        .parse()
        .map_err(|_| invalid(format!("user id {:?} is not an integer", user_id.trim())))?;
    let role = role.parse::<Role>().map_err(|e| invalid(e.to_string()))?;

    Ok((token.to_string(), Identity::new(user_id, role)))
}

#[cfg(test)]
mod shell_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.database, None);
        assert!(config.tokens.is_empty());
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = config(&[
            (ADDR_VAR, "127.0.0.1:3000"),
            (DATABASE_VAR, "/var/lib/time_clock.db"),
            (TOKENS_VAR, "abc=1:USER, xyz=99:admin,"),
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.database, Some(PathBuf::from("/var/lib/time_clock.db")));
        assert_eq!(
            config.tokens,
            vec![
                ("abc".to_string(), Identity::new(1, Role::User)),
                ("xyz".to_string(), Identity::new(99, Role::Admin)),
            ]
        );
    }

    #[rstest]
    fn it_should_treat_a_blank_database_as_unset() {
        assert_eq!(config(&[(DATABASE_VAR, "  ")]).unwrap().database, None);
    }

    #[rstest]
    fn it_should_reject_an_unparseable_address() {
        assert_eq!(
            config(&[(ADDR_VAR, "localhost")]),
            Err(ConfigError::InvalidAddr("localhost".into()))
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("abc=1")]
    #[case("=1:USER")]
    #[case("abc=one:USER")]
    #[case("abc=1:OWNER")]
    fn it_should_reject_malformed_token_entries(#[case] entry: &str) {
        let err = config(&[(TOKENS_VAR, entry)]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToken { entry: e, .. } if e == entry));
    }
}
