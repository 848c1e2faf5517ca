pub mod classifier;
pub mod tool;

use async_trait::async_trait;

use crate::config::WhatVpnOptions;
use crate::error::*;
use crate::result_handler::TaskReport;
use crate::scheduler::{LoadRisk, TaskProcessor, WorkerRegistration};
use crate::task::{ScanTask, TaskKind};

use tool::WhatVpnTool;

/// Runs what-vpn -> SSL VPN identifier
pub struct WhatVpnWorker {
    registration: WorkerRegistration,
    tool: WhatVpnTool,
}

impl WhatVpnWorker {
    pub fn new(options: &WhatVpnOptions) -> Self {
        Self {
            registration: WorkerRegistration {
                identity: "what-vpn",
                task_kind: TaskKind::Ip,
                load_risk: LoadRisk::Low,
            },
            tool: WhatVpnTool::new(options),
        }
    }
}

#[async_trait]
impl TaskProcessor for WhatVpnWorker {
    fn registration(&self) -> &WorkerRegistration {
        &self.registration
    }

    async fn process(&self, task: &ScanTask) -> Result<TaskReport, SimpleError> {
        let host = task.target_host()?;
        log::info!("Requested to check if {} is a VPN gateway", host);

        let report = match self.tool.scan(host).await {
            Ok(output) => classifier::classify(&output),
            Err(err) => {
                // A failed invocation still yields one stored report.
                log::warn!("what-vpn invocation against {} failed: {}", host, err.msg);
                TaskReport::ok(&format!("Could not scan {}", host))
            },
        };
        Ok(report)
    }
}
