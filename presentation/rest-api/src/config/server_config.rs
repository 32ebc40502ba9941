use super::error::ConfigError;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration through `lookup` (normally the process environment)
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVICE_PORT"))?,
            None => 8080,
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: 8080,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_use_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_reject_non_numeric_port() {
        let result = ServerConfig::from_lookup(|key| match key {
            "SERVICE_PORT" => Some("eighty".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("SERVICE_PORT"))
        ));
    }
}
