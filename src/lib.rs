#![allow(dead_code)]

pub mod error;
mod config;
mod task;
mod scheduler;
mod result_handler;
mod vpn_scanner;

use std::sync::Arc;

use config::GLOBAL_CONFIG;
use result_handler::ResultHandler;
use scheduler::WorkerScheduler;

use error::*;

pub use config::{Config, WhatVpnOptions};
pub use result_handler::{TaskReport, TaskResultRecord, TaskStatus};
pub use scheduler::{LoadRisk, TaskProcessor, WorkerRegistration};
pub use task::{ScanTask, TaskKind};
pub use vpn_scanner::WhatVpnWorker;
pub use vpn_scanner::classifier::classify;

pub struct WorkerService {
    scheduler: WorkerScheduler,
}

impl WorkerService {
    pub async fn start() -> Result<Self, SimpleError> {
        let mongodb = mongodb::Client::with_uri_str(&GLOBAL_CONFIG.mongodb).await?;
        let db = mongodb.database("vpnscn");

        let worker = WhatVpnWorker::new(&GLOBAL_CONFIG.scanner.whatvpn);
        let scheduler = WorkerScheduler::new(
            &GLOBAL_CONFIG.redis,
            ResultHandler::new(&db),
            Arc::new(worker),
        )?;

        Ok(Self {
            scheduler,
        })
    }

    pub fn config(&self) -> &'static Config {
        &GLOBAL_CONFIG
    }

    pub async fn enqueue(&self, task: &ScanTask) -> Result<(), SimpleError> {
        self.scheduler.enqueue_task(task).await
    }

    pub async fn run(&self) -> Result<(), SimpleError> {
        if !GLOBAL_CONFIG.scanner.whatvpn.enabled {
            log::warn!("what-vpn worker disabled by config");
            return Ok(());
        }
        self.scheduler.run().await
    }
}
