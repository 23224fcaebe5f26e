use clap::Parser;
use get_files::cli::Args;
use get_files::{Layout, LogLevel, MatchMode};
use std::path::PathBuf;

#[test]
fn parses_full_command_line() {
    let args = Args::parse_from([
        "get_files", "repo", "-o", "out", "-f", "support", "tools", "-i", "README.md", "a.txt",
        "-k", "-m",
    ]);
    assert_eq!(args.source, PathBuf::from("repo"));
    assert_eq!(args.output, "out");
    assert_eq!(args.folders, vec!["support", "tools"]);
    assert_eq!(args.ignore, vec!["README.md", "a.txt"]);
    assert!(args.keep);
    assert!(args.substring);
}

#[test]
fn long_flags_and_defaults() {
    let args = Args::parse_from(["get_files", "repo", "--output", "out", "--folder", "x"]);
    let cfg = args.to_config();
    assert_eq!(cfg.layout, Layout::Flatten);
    assert_eq!(cfg.match_mode, MatchMode::Exact);
    assert!(cfg.ignore.is_empty());
    assert_eq!(cfg.log_level, LogLevel::Normal);
    assert!(cfg.output_parent.as_os_str().is_empty());
}

#[test]
fn to_config_maps_modes_and_lowercases_ignore() {
    let args = Args::parse_from([
        "get_files", "repo", "-o", "out", "-f", "x", "-i", "ReadMe.MD", "-k", "-m",
    ]);
    let cfg = args.to_config();
    assert_eq!(cfg.layout, Layout::KeepStructure);
    assert_eq!(cfg.match_mode, MatchMode::Substring);
    assert!(cfg.ignore.contains("readme.md"));
}

#[test]
fn folder_and_output_are_required() {
    assert!(Args::try_parse_from(["get_files", "repo", "-o", "out"]).is_err());
    assert!(Args::try_parse_from(["get_files", "repo", "-f", "x"]).is_err());
    assert!(Args::try_parse_from(["get_files", "-o", "out", "-f", "x"]).is_err());
    assert!(Args::try_parse_from(["get_files", "repo", "-o", "out", "-f"]).is_err());
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from([
        "get_files", "repo", "-o", "out", "-f", "x", "--debug", "--log-level", "quiet",
    ]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["get_files", "repo", "-o", "out", "-f", "x", "--log-level", "info"]);
    assert_eq!(args.to_config().log_level, LogLevel::Info);

    let args = Args::parse_from(["get_files", "repo", "-o", "out", "-f", "x", "--log-level", "loud"]);
    assert_eq!(args.effective_log_level(), None);
}
