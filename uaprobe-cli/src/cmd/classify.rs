//! uaprobe classify command

use clap::Args;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};
use uaprobe::{
    error::{BoxError, ErrorContext as _},
    ua::{UaClassifier, UserAgent},
    utils::str::strip_prefix_ignore_ascii_case,
};

#[derive(Debug, Args)]
/// classify User-Agent strings
///
/// Strings are taken from the arguments, or otherwise read line by line
/// from the given file or stdin. A leading `User-Agent:` header name is ignored.
pub struct CliCommandClassify {
    /// the User-Agent strings to classify
    user_agents: Vec<String>,

    #[arg(long, short = 'f', conflicts_with = "user_agents")]
    /// read User-Agent strings from this file (one per line)
    file: Option<PathBuf>,

    #[arg(long, short = 'j')]
    /// print every classification as a single line of JSON
    json: bool,

    #[arg(long, short = 'c')]
    /// JSON file overriding (some of) the default heuristic cutoffs
    config: Option<PathBuf>,
}

/// run the uaprobe classify command
pub fn run(cfg: CliCommandClassify) -> Result<(), BoxError> {
    let config = super::load_config(cfg.config.as_deref())?;
    let classifier = UaClassifier::with_config(config);
    let format = if cfg.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut out = io::stdout().lock();

    if !cfg.user_agents.is_empty() {
        for header in &cfg.user_agents {
            if let Some(header) = normalize_input(header) {
                write_classification(&mut out, &classifier, header, format)?;
            }
        }
        return Ok(());
    }

    let count = match cfg.file {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("open User-Agent file '{}'", path.display()))?;
            classify_lines(BufReader::new(file), &mut out, &classifier, format)?
        }
        None => classify_lines(io::stdin().lock(), &mut out, &classifier, format)?,
    };

    tracing::info!(count, "classified User-Agent strings");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// Classify every non-empty line, returning how many were classified.
fn classify_lines(
    reader: impl BufRead,
    mut out: impl Write,
    classifier: &UaClassifier,
    format: OutputFormat,
) -> Result<usize, BoxError> {
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read User-Agent line #{}", index + 1))?;
        if let Some(header) = normalize_input(&line) {
            write_classification(&mut out, classifier, header, format)?;
            count += 1;
        }
    }
    Ok(count)
}

fn normalize_input(input: &str) -> Option<&str> {
    let input = input.trim();
    let input = strip_prefix_ignore_ascii_case(input, "user-agent:")
        .map(str::trim_start)
        .unwrap_or(input);
    (!input.is_empty()).then_some(input)
}

fn write_classification(
    mut out: impl Write,
    classifier: &UaClassifier,
    header: &str,
    format: OutputFormat,
) -> Result<(), BoxError> {
    let ua = UserAgent::with_classifier(header, classifier);
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &ua).context("write classification as json")?;
            writeln!(out).context("write json line terminator")?;
        }
        OutputFormat::Text => write_text(&mut out, &ua).context("write classification as text")?,
    }
    Ok(())
}

fn write_text(mut out: impl Write, ua: &UserAgent) -> io::Result<()> {
    let info = ua.classification();

    writeln!(out, "{ua}")?;
    writeln!(
        out,
        "  browser:  {} {} (id: {}, category: {})",
        info.browser_name(),
        info.browser_version(),
        info.browser_id(),
        info.category(),
    )?;
    if !info.true_ie_version().is_empty() {
        writeln!(out, "  true ie:  {}", info.true_ie_version())?;
    }

    let os = info.os();
    match (os.family, os.marketing_name()) {
        (Some(_), Some(name)) => writeln!(out, "  os:       {name}")?,
        (Some(family), None) if os.version.is_empty() => writeln!(out, "  os:       {family}")?,
        (Some(family), None) => writeln!(out, "  os:       {family} {}", os.version)?,
        (None, _) => writeln!(out, "  os:       unknown")?,
    }

    if let Some(mobile) = info.mobile() {
        writeln!(
            out,
            "  mobile:   {} (device: {}, browser: {}, os: {})",
            info.mobile_hint(),
            or_dash(mobile.device),
            or_dash(mobile.browser),
            or_dash(mobile.os),
        )?;
    }

    writeln!(
        out,
        "  dom:      {}, legacy or unsafe: {}",
        info.dom(),
        info.is_legacy_or_unsafe(),
    )
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input(""), None);
        assert_eq!(normalize_input("   "), None);
        assert_eq!(normalize_input("User-Agent:"), None);
        assert_eq!(normalize_input("  curl/8.5.0 "), Some("curl/8.5.0"));
        assert_eq!(normalize_input("user-agent: curl/8.5.0"), Some("curl/8.5.0"));
        assert_eq!(normalize_input("USER-AGENT:curl/8.5.0"), Some("curl/8.5.0"));
    }

    #[test]
    fn test_classify_lines_text() {
        let input = format!("{CHROME_WINDOWS}\n\nUser-Agent: Wget/1.21.3\n");
        let mut out = Vec::new();

        let count = classify_lines(
            input.as_bytes(),
            &mut out,
            &UaClassifier::new(),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(count, 2);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(CHROME_WINDOWS));
        assert!(out.contains("(id: chrome, category: browser)"));
        assert!(out.contains("os:       Windows 10"));
        assert!(out.contains("Wget/1.21.3"));
        assert!(out.contains("(id: wget, category: downloader)"));
        assert!(!out.contains("mobile:"));
    }

    #[test]
    fn test_classify_lines_json() {
        let input = "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1; Trident/4.0)\n";
        let mut out = Vec::new();

        let count = classify_lines(
            input.as_bytes(),
            &mut out,
            &UaClassifier::new(),
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(count, 1);

        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        let value: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert!(lines.next().is_none());

        assert_eq!(value["header"], input.trim());
        assert_eq!(value["classification"]["browser_id"], "ie");
        assert_eq!(value["classification"]["browser_version"], "7.0");
        assert_eq!(value["classification"]["true_ie_version"], "8.0");
        assert_eq!(value["classification"]["os"]["family"], "nt");
    }

    #[test]
    fn test_write_text_mobile() {
        let header = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_5 like Mac OS X) AppleWebKit/605.1.15";
        let mut out = Vec::new();
        write_classification(&mut out, &UaClassifier::new(), header, OutputFormat::Text).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("category: mobile"));
        assert!(out.contains("mobile:   iphone (device: iphone, browser: -, os: iphone os)"));
    }
}
