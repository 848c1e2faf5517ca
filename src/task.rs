use serde::{Deserialize, Serialize};

use crate::error::*;

/// Task kinds dispatched on the shared queue. This worker only consumes
/// `Ip` tasks; the other kinds belong to sibling workers in the pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Ip,
    Domain,
    Url,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScanTask {
    pub task_id: String,
    pub kind: TaskKind,
    pub target: String,
}

impl ScanTask {
    pub fn new_ip(task_id: &str, target: &str) -> Self {
        Self {
            task_id: task_id.to_owned(),
            kind: TaskKind::Ip,
            target: target.to_owned(),
        }
    }

    /// Extracts the host to scan. Targets are validated/resolved upstream,
    /// so the only rejected shape is an empty one.
    pub fn target_host(&self) -> Result<&str, SimpleError> {
        match self.target.trim() {
            "" => Err(SimpleError::new("Task carries an empty target")),
            host => Ok(host),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_task_decode() {
        let data = r#"{"task_id": "61466e2d", "kind": "ip", "target": "192.0.2.7"}"#;
        let task: ScanTask = serde_json::from_str(data).unwrap();
        assert_eq!("61466e2d", task.task_id);
        assert_eq!(TaskKind::Ip, task.kind);
        assert_eq!("192.0.2.7", task.target_host().unwrap());
    }

    #[test]
    fn test_task_encode() {
        let task = ScanTask::new_ip("61466e2d", "192.0.2.7");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!("ip", json["kind"]);
        assert_eq!("192.0.2.7", json["target"]);
    }

    #[test]
    fn test_empty_target_rejected() {
        let task = ScanTask::new_ip("61466e2d", "  ");
        assert!(task.target_host().is_err());
    }
}
