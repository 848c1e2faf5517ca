use clap::Parser;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::*;

#[derive(Deserialize, Clone)]
pub struct Config {
    pub mongodb: String,
    pub redis: String,
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub targets: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    pub whatvpn: WhatVpnOptions,
    pub save: String,
}

#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct WhatVpnOptions {
    pub enabled: bool,
    pub executable: Option<String>,
    pub timeout: u64,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, SimpleError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
    pub fn init() -> Self {
        let opts = CliOptions::parse();
        let mut config = Self::from_file(&opts.config).unwrap();
        config.redis = opts.redis.unwrap_or(config.redis);
        config.mongodb = opts.db.unwrap_or(config.mongodb);
        if opts.targets.len() > 0 {
            config.targets = opts.targets;
        }

        config
    }
}

#[derive(Parser)]
#[clap(version = "0.1.0")]
struct CliOptions {
    #[clap(short, long, default_value = "config.json")]
    config: String,

    #[clap(long, env = "VPNSCN_DB")]
    db: Option<String>,

    #[clap(long, env = "VPNSCN_REDIS")]
    redis: Option<String>,

    #[clap()]
    targets: Vec<String>,
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Config = {
        Config::init()
    };
}
