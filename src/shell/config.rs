use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const ADDR_VAR: &str = "GUARDIA_SWAP_ADDR";
pub const PHONE_COUNTRY_CODE_VAR: &str = "GUARDIA_SWAP_PHONE_COUNTRY_CODE";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PHONE_COUNTRY_CODE: &str = "34";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: `{value}`")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be 1 to 3 digits: `{value}`")]
    InvalidCountryCode { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Prepended to national numbers in contact links.
    pub phone_country_code: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            phone_country_code: DEFAULT_PHONE_COUNTRY_CODE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; missing variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let addr = match lookup(ADDR_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value,
            })?,
            None => defaults.addr,
        };

        let phone_country_code = match lookup(PHONE_COUNTRY_CODE_VAR) {
            Some(value) => {
                let code = value.trim().trim_start_matches('+');
                if code.is_empty() || code.len() > 3 || !code.chars().all(|c| c.is_ascii_digit()) {
                    return Err(ConfigError::InvalidCountryCode {
                        var: PHONE_COUNTRY_CODE_VAR,
                        value,
                    });
                }
                code.to_string()
            }
            None => defaults.phone_country_code,
        };

        Ok(Self {
            addr,
            phone_country_code,
        })
    }
}
