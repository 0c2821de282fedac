use std::net::SocketAddr;

const ADDR_ENV_VAR: &str = "ROTAS_API_ADDR";
const SEED_ENV_VAR: &str = "ROTAS_ACO_SEED";

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    pub seed: Option<u64>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_vars(
            std::env::var(ADDR_ENV_VAR).ok(),
            std::env::var(SEED_ENV_VAR).ok(),
        )
    }

    fn from_vars(addr: Option<String>, seed: Option<String>) -> Result<Self, anyhow::Error> {
        let addr = addr.as_deref().unwrap_or(DEFAULT_ADDR);
        let addr: SocketAddr = addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {} {:?}: {}", ADDR_ENV_VAR, addr, e))?;

        let seed = match seed {
            Some(seed) => Some(
                seed.parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("Invalid {} {:?}: {}", SEED_ENV_VAR, seed, e))?,
            ),
            None => None,
        };

        Ok(Self { addr, seed })
    }
}
