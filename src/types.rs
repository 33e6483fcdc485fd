use crate::{
    modules::{dish::repository::Dish, order::repository::Order},
    utils::store::Store,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::{env, fmt, io, path::PathBuf};
use tokio::sync::Mutex;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

/// Process-wide resource stores. Each store is locked for the whole
/// validate-then-mutate sequence of a request.
#[derive(Default)]
pub struct StoreContext {
    pub dishes: Mutex<Store<Dish>>,
    pub orders: Mutex<Store<Order>>,
}

pub struct Context {
    pub app: AppContext,
    pub store: StoreContext,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    pub seed_file: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let seed_file = env::var("SEED_FILE")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            store: StoreConfig { seed_file },
        }
    }
}

/// Records the process starts with.
#[derive(Deserialize, Default)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Debug)]
pub enum ContextError {
    ReadSeed(PathBuf, io::Error),
    ParseSeed(PathBuf, serde_json::Error),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadSeed(path, err) => {
                write!(f, "Failed to read seed file {}: {}", path.display(), err)
            }
            Self::ParseSeed(path, err) => {
                write!(f, "Failed to parse seed file {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ContextError {}

async fn load_seed(path: PathBuf) -> Result<Seed, ContextError> {
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| ContextError::ReadSeed(path.clone(), err))?;

    serde_json::from_str::<Seed>(&raw).map_err(|err| ContextError::ParseSeed(path, err))
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, ContextError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, ContextError> {
        let seed = match self.store.seed_file {
            Some(path) => {
                let seed = load_seed(path.clone()).await?;
                tracing::info!(
                    "Seeded {} dishes and {} orders from {}",
                    seed.dishes.len(),
                    seed.orders.len(),
                    path.display()
                );
                seed
            }
            None => Seed::default(),
        };

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            store: StoreContext {
                dishes: Mutex::new(Store::from(seed.dishes)),
                orders: Mutex::new(Store::from(seed.orders)),
            },
        })
    }
}
