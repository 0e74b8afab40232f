use super::utils;

#[test]
#[ignore]
fn test_classify_args_text() {
    let lines = utils::run(&[
        "classify",
        "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1; Trident/4.0)",
    ]);
    assert!(lines.contains("(id: ie, category: browser)"));
    assert!(lines.contains("true ie:  8.0"));
    assert!(lines.contains("os:       Windows XP"));
}

#[test]
#[ignore]
fn test_classify_stdin_json() {
    let output = utils::run_with_stdin(
        &["classify", "--json"],
        "User-Agent: Googlebot/2.1 (+http://www.google.com/bot.html)\n\nWget/1.21.3\n",
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let values: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["header"], "Googlebot/2.1 (+http://www.google.com/bot.html)");
    assert_eq!(values[0]["classification"]["category"], "bot");
    assert_eq!(values[1]["classification"]["browser_id"], "wget");
    assert_eq!(values[1]["classification"]["category"], "downloader");
}

#[test]
#[ignore]
fn test_classify_missing_config() {
    let output = utils::run_with_stdin(
        &["classify", "--config", "/this/path/does/not/exist.json", "curl/8.5.0"],
        "",
    );
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("🚩 exit with error: read classifier config from"));
}
