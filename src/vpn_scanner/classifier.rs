use crate::result_handler::TaskReport;

/// Markers what-vpn emits when a probe failed or matched nothing. Matched
/// as plain substrings anywhere in the output, so a gateway whose banner
/// happens to contain one of these words is classified as no detection.
const ERROR_MARKERS: [&str; 3] = ["error", "timeout", "no match"];

const NO_GATEWAY_REASON: &str = "Could not identify a VPN gateway";

/// Classifies the raw stdout of one what-vpn run.
///
/// Detection lines have the shape `scanned_host identified_VPN [version]`;
/// everything after the first space is kept as the descriptor. Output with
/// no space at all is unexpected and degrades to the no-gateway result.
pub fn classify(output: &str) -> TaskReport {
    if ERROR_MARKERS.iter().any(|msg| output.contains(msg)) {
        return TaskReport::ok(NO_GATEWAY_REASON);
    }
    match output.split_once(' ') {
        Some((_host, descriptor)) => {
            let descriptor = descriptor.trim_end_matches('\n').trim_end_matches('\r').to_owned();
            TaskReport::interesting(format!("Detected {}", descriptor), vec![descriptor])
        },
        None => TaskReport::ok(NO_GATEWAY_REASON),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::result_handler::TaskStatus;

    #[test]
    fn test_detection() {
        let report = classify("host1 OpenVPN 2.4");
        assert_eq!(TaskStatus::Interesting, report.status);
        assert_eq!(vec!["OpenVPN 2.4"], report.data);
        assert_eq!("Detected OpenVPN 2.4", report.status_reason);
    }

    #[test]
    fn test_detection_strips_line_terminator() {
        let report = classify("host1: GlobalProtect [portal]\n");
        assert_eq!(TaskStatus::Interesting, report.status);
        assert_eq!(vec!["GlobalProtect [portal]"], report.data);

        let report = classify("host1: Fortinet\r\n");
        assert_eq!(vec!["Fortinet"], report.data);
    }

    #[test]
    fn test_no_match() {
        let report = classify("host1: no match");
        assert_eq!(TaskStatus::Ok, report.status);
        assert!(report.data.is_empty());
        assert_eq!(NO_GATEWAY_REASON, report.status_reason);
    }

    #[test]
    fn test_timeout() {
        let report = classify("host1: timeout occurred");
        assert_eq!(TaskStatus::Ok, report.status);
        assert!(report.data.is_empty());
    }

    #[test]
    fn test_error() {
        let report = classify("host1: error while connecting");
        assert_eq!(TaskStatus::Ok, report.status);
        assert!(report.data.is_empty());
    }

    // Marker matching is substring-based, so a detection whose banner
    // contains a marker word is still reported as no detection.
    #[test]
    fn test_marker_inside_detection_wins() {
        let report = classify("host1: AnyConnect (timeout=30)");
        assert_eq!(TaskStatus::Ok, report.status);
        assert!(report.data.is_empty());
    }

    #[test]
    fn test_output_without_space() {
        let report = classify("hostwithnospace");
        assert_eq!(TaskStatus::Ok, report.status);
        assert!(report.data.is_empty());
    }

    #[test]
    fn test_pure() {
        let output = "host1 OpenVPN 2.4";
        assert_eq!(classify(output), classify(output));
    }
}
