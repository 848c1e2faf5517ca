use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, RedisError};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::error::*;
use crate::result_handler::{ResultHandler, TaskReport};
use crate::task::{ScanTask, TaskKind};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRisk {
    Low,
    Medium,
    High,
}

/// Declarative registration record for a worker: its queue identity, the
/// task kind it accepts and the load it puts on scanned hosts.
pub struct WorkerRegistration {
    pub identity: &'static str,
    pub task_kind: TaskKind,
    pub load_risk: LoadRisk,
}

impl WorkerRegistration {
    pub fn accepts(&self, task: &ScanTask) -> bool {
        task.kind == self.task_kind
    }
}

/// A task processor produces exactly one report per accepted task. The
/// scheduling loop owns queue transport and persistence around it.
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    fn registration(&self) -> &WorkerRegistration;
    async fn process(&self, task: &ScanTask) -> Result<TaskReport, SimpleError>;
}

pub struct WorkerScheduler {
    redis: redis::Client,
    result_handler: ResultHandler,
    processor: Arc<dyn TaskProcessor>,
}

impl WorkerScheduler {
    pub fn new(redis_url: &str, result_handler: ResultHandler, processor: Arc<dyn TaskProcessor>) -> Result<Self, SimpleError> {
        Ok(Self {
            redis: redis::Client::open(redis_url)?,
            result_handler,
            processor,
        })
    }

    fn key_taskqueue(&self) -> String {
        format!("{}_taskqueue", self.processor.registration().identity)
    }
    fn key_running(&self) -> String {
        format!("{}_running", self.processor.registration().identity)
    }

    pub async fn enqueue_task(&self, task: &ScanTask) -> Result<(), SimpleError> {
        let mut redis = self.redis.get_async_connection().await?;
        redis.lpush::<_, _, ()>(self.key_taskqueue(), serde_json::to_string(task)?).await?;
        Ok(())
    }

    /// Fetch-process-acknowledge cycle, one task at a time. Blocks on the
    /// task queue and only returns on a fatal connection setup failure.
    pub async fn run(&self) -> Result<(), SimpleError> {
        let mut redis = self.redis.get_async_connection().await?;
        self.recover_tasks(&mut redis).await;
        loop {
            let result: Result<String, RedisError> = redis.brpoplpush(self.key_taskqueue(), self.key_running(), 0).await;
            let raw = match result {
                Err(err) => {
                    log::error!("Failed to pop task: {}", err);
                    sleep(Duration::from_secs(3)).await;
                    continue;
                },
                Ok(raw) => raw,
            };
            self.handle_task(&raw).await.log_error_consume("task-handler");
            let result: Result<usize, RedisError> = redis.lrem(self.key_running(), 1, &raw).await;
            match result {
                Ok(1) => (),
                Ok(n) => log::error!("Failed to remove running task: Unexpected return {}", n),
                Err(err) => log::error!("Failed to remove running task: {}", err),
            };
        }
    }

    /// Requeues tasks left on the running list by a previous crashed run.
    async fn recover_tasks(&self, redis: &mut redis::aio::Connection) {
        loop {
            let result: Result<Option<String>, RedisError> = redis.rpoplpush(self.key_running(), self.key_taskqueue()).await;
            match result {
                Ok(Some(raw)) => log::warn!("Recovered unfinished task {}", raw),
                Ok(None) => break,
                Err(err) => {
                    log::error!("Failed to recover tasks from redis: {}", err);
                    sleep(Duration::from_secs(3)).await;
                }
            }
        }
    }

    async fn handle_task(&self, raw: &str) -> Result<(), SimpleError> {
        let registration = self.processor.registration();
        let task: ScanTask = serde_json::from_str(raw)?;
        if !registration.accepts(&task) {
            log::debug!("Skipping task {} of kind {:?}", task.task_id, task.kind);
            return Ok(());
        }
        let report = self.processor.process(&task).await?;
        self.result_handler.save_task_result(&task, registration.identity, &report).await?;
        Ok(())
    }
}
