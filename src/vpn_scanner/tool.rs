use tokio::process::Command;

use crate::config::WhatVpnOptions;
use crate::error::*;

const DEFAULT_EXECUTABLE: &str = "what-vpn";

/// Wrapper around the external `what-vpn` SSL VPN identifier. The tool
/// enforces its own per-probe timeout and reports failures as text markers
/// on stdout, so the exit status carries no signal and is ignored.
pub struct WhatVpnTool {
    executable: String,
    timeout: u64,
}

impl WhatVpnTool {
    pub fn new(options: &WhatVpnOptions) -> Self {
        Self {
            executable: options.executable.clone().unwrap_or_else(|| DEFAULT_EXECUTABLE.to_owned()),
            timeout: options.timeout,
        }
    }

    fn args(&self, host: &str) -> Vec<String> {
        vec![
            "--keep-going-after-exception".to_owned(),
            "--timeout".to_owned(),
            self.timeout.to_string(),
            host.to_owned(),
        ]
    }

    pub async fn scan(&self, host: &str) -> Result<String, SimpleError> {
        let output = Command::new(&self.executable)
            .args(self.args(host))
            .output()
            .await?;
        Ok(String::from_utf8(output.stdout)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_command_args() {
        let tool = WhatVpnTool::new(&WhatVpnOptions {
            enabled: true,
            executable: None,
            timeout: 10,
        });
        assert_eq!(
            vec!["--keep-going-after-exception", "--timeout", "10", "192.0.2.7"],
            tool.args("192.0.2.7")
        );
        assert_eq!("what-vpn", tool.executable);
    }

    #[test]
    fn test_executable_override() {
        let tool = WhatVpnTool::new(&WhatVpnOptions {
            enabled: true,
            executable: Some("/opt/scanners/what-vpn".to_owned()),
            timeout: 30,
        });
        assert_eq!("/opt/scanners/what-vpn", tool.executable);
        assert_eq!("30", tool.args("h")[2]);
    }
}
