use super::utils;

#[test]
#[ignore]
fn test_help() {
    let lines = utils::run(&["help"]);
    assert!(lines.contains("uaprobe cli to classify User-Agent strings"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Commands:"));
    assert!(lines.contains("Options:"));
}

#[test]
#[ignore]
fn test_help_classify() {
    let lines = utils::run(&["help", "classify"]);
    assert!(lines.contains("classify User-Agent strings"));
    assert!(lines.contains("--json"));
    assert!(lines.contains("--config"));
}
