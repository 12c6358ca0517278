use super::parse;
use super::Cli;
use clap::Parser;

#[test]
fn cli_parse_single_url() {
    let cli = parse(&["vupr", "https://mail.example.com/inbox"]);
    assert_eq!(cli.urls, ["https://mail.example.com/inbox"]);
    assert!(cli.config.is_none());
    assert!(!cli.dry_run);
}

#[test]
fn cli_parse_no_urls() {
    let cli = parse(&["vupr"]);
    assert!(cli.urls.is_empty());
}

#[test]
fn cli_parse_config_and_dry_run() {
    let cli = parse(&[
        "vupr",
        "--config",
        "/tmp/vupr.toml",
        "--dry-run",
        "https://example.com",
    ]);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/vupr.toml")));
    assert!(cli.dry_run);
    assert_eq!(cli.urls, ["https://example.com"]);
}

#[test]
fn cli_parse_keeps_trailing_os_flags() {
    let cli = parse(&["vupr", "https://example.com", "--new-window", "-x"]);
    assert_eq!(cli.urls, ["https://example.com", "--new-window", "-x"]);
    assert!(!cli.dry_run);
}

#[test]
fn cli_parse_rejects_config_without_path() {
    assert!(Cli::try_parse_from(["vupr", "--config"]).is_err());
}
