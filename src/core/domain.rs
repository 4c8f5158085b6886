use envconfig::Envconfig;

pub const SERVICE_NAME: &str = "pricing-service";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const CURRENCY: &str = "EUR";

// Configuration abstracts the bind options for the pricing service
#[derive(Envconfig, Debug, PartialEq, Clone)]
pub struct Configuration {
    #[envconfig(from = "PRICING_HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "PRICING_PORT", default = "8082")]
    pub port: u16,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            host: "0.0.0.0".to_string(),
            port: 8082,
        }
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use envconfig::Envconfig;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!("0.0.0.0:8082", config.bind());
    }

    #[tokio::test]
    async fn test_should_default_from_empty_env() {
        let config = Configuration::init_from_hashmap(&HashMap::new()).expect("should build config");
        assert_eq!(Configuration::new(), config);
    }

    #[tokio::test]
    async fn test_should_override_bind_from_env() {
        let env = HashMap::from([
            ("PRICING_HOST".to_string(), "127.0.0.1".to_string()),
            ("PRICING_PORT".to_string(), "9090".to_string()),
        ]);
        let config = Configuration::init_from_hashmap(&env).expect("should build config");
        assert_eq!("127.0.0.1:9090", config.bind());
    }

    #[tokio::test]
    async fn test_should_reject_bad_port() {
        let env = HashMap::from([("PRICING_PORT".to_string(), "not-a-port".to_string())]);
        assert!(Configuration::init_from_hashmap(&env).is_err());
    }
}
