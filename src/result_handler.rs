use mongodb::{Database, bson::{self, Document}, options::UpdateOptions};
use serde::{Deserialize, Serialize};

use crate::config::GLOBAL_CONFIG;
use crate::error::*;
use crate::task::ScanTask;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Ok,
    Interesting,
}

/// The one record each consumed task produces. `data` holds the detected-VPN
/// descriptors and is non-empty exactly when `status` is `Interesting`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub status: TaskStatus,
    pub status_reason: String,
    pub data: Vec<String>,
}

impl TaskReport {
    pub fn ok(reason: &str) -> Self {
        Self {
            status: TaskStatus::Ok,
            status_reason: reason.to_owned(),
            data: Vec::new(),
        }
    }
    pub fn interesting(reason: String, data: Vec<String>) -> Self {
        Self {
            status: TaskStatus::Interesting,
            status_reason: reason,
            data,
        }
    }
}

/// Stored shape of a processed task, as kept in the results collection.
#[derive(Serialize, Deserialize, Debug)]
pub struct TaskResultRecord {
    pub task_id: String,
    pub target: String,
    pub worker: String,
    pub status: TaskStatus,
    pub status_reason: String,
    pub data: Vec<String>,
    pub time: bson::DateTime,
}

#[derive(Clone)]
pub struct ResultHandler {
    pub(crate) db: Database,
}

impl ResultHandler {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    pub async fn save_task_result(&self, task: &ScanTask, worker: &str, report: &TaskReport) -> Result<(), SimpleError> {
        let collection = self.db.collection::<Document>(&GLOBAL_CONFIG.scanner.save);
        let doc = bson::doc! {
            "$set": {
                "task_id": &task.task_id,
                "target": &task.target,
                "worker": worker,
                "status": bson::to_bson(&report.status)?,
                "status_reason": &report.status_reason,
                "data": bson::to_bson(&report.data)?,
                "time": bson::DateTime::now(),
            },
        };
        let query = bson::doc! {
            "task_id": &task.task_id,
        };
        let mut opts = UpdateOptions::default();
        opts.upsert = Some(true);
        collection.update_one(query, doc, opts).await?;

        Ok(())
    }
}
