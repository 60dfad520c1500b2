use aws_config::{BehaviorVersion, Region, SdkConfig};
use model::env::{DYNAMODB_ENDPOINT_URL, PRODUCT_TABLE, PRODUCT_TABLE_CONSISTENT_READ, REGION};
use std::fmt::{Display, Formatter};

/// Deployment configuration, read once when the runtime is initialised.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    pub region: String,
    pub product_table: String,
    // Points the client at e.g. a local DynamoDB container
    pub endpoint_url: Option<String>,
    pub consistent_read: bool,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "Missing {} environment variable", name),
            ConfigError::Invalid { name, value } => {
                write!(f, "Invalid value '{}' for {} environment variable", value, name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl LookupConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable source, blank values count as unset.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        let region: String = lookup(REGION).ok_or(ConfigError::Missing(REGION))?;
        let product_table: String =
            lookup(PRODUCT_TABLE).ok_or(ConfigError::Missing(PRODUCT_TABLE))?;
        let endpoint_url: Option<String> = lookup(DYNAMODB_ENDPOINT_URL);

        let consistent_read: bool = match lookup(PRODUCT_TABLE_CONSISTENT_READ) {
            None => false,
            Some(value) => value.trim().to_ascii_lowercase().parse::<bool>().map_err(|_| {
                ConfigError::Invalid {
                    name: PRODUCT_TABLE_CONSISTENT_READ,
                    value,
                }
            })?,
        };

        Ok(LookupConfig {
            region,
            product_table,
            endpoint_url,
            consistent_read,
        })
    }

    pub async fn sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()));

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }
}
