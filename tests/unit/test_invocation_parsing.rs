//! Unit tests for command-token and invocation parsing

use jts_bridge::{Command, Invocation};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_all_four_commands_parse_with_prefix() {
    assert_eq!(Command::parse("--initialize"), Some(Command::Initialize));
    assert_eq!(Command::parse("--set-output"), Some(Command::SetOutput));
    assert_eq!(Command::parse("--display-msg"), Some(Command::DisplayMsg));
    assert_eq!(Command::parse("--set-result"), Some(Command::SetResult));
}

#[test]
fn test_prefix_is_optional() {
    assert_eq!(Command::parse("initialize"), Some(Command::Initialize));
    assert_eq!(Command::parse("set-result"), Some(Command::SetResult));
}

#[test]
fn test_parsing_is_case_insensitive() {
    assert_eq!(Command::parse("--Initialize"), Some(Command::Initialize));
    assert_eq!(Command::parse("--SET-OUTPUT"), Some(Command::SetOutput));
    assert_eq!(Command::parse("Display-Msg"), Some(Command::DisplayMsg));
}

#[test]
fn test_unknown_tokens_do_not_parse() {
    assert_eq!(Command::parse("--shutdown"), None);
    assert_eq!(Command::parse("initialise"), None);
    assert_eq!(Command::parse("--"), None);
    assert_eq!(Command::parse(""), None);
}

#[test]
fn test_expected_argument_counts() {
    assert_eq!(Command::Initialize.expected_args(), Some(1));
    assert_eq!(Command::SetOutput.expected_args(), Some(2));
    assert_eq!(Command::DisplayMsg.expected_args(), None);
    assert_eq!(Command::SetResult.expected_args(), Some(1));
}

#[test]
fn test_invocation_splits_first_token() {
    let invocation = Invocation::parse(&strings(&["--initialize", "SN123"])).unwrap();
    assert_eq!(invocation.token, "--initialize");
    assert_eq!(invocation.args, strings(&["SN123"]));
    assert_eq!(invocation.command(), Some(Command::Initialize));
}

#[test]
fn test_invocation_with_no_args() {
    let invocation = Invocation::parse(&strings(&["--display-msg"])).unwrap();
    assert!(invocation.args.is_empty());
    assert_eq!(invocation.command(), Some(Command::DisplayMsg));
}

#[test]
fn test_empty_argv_yields_no_invocation() {
    assert!(Invocation::parse(&[]).is_none());
}

#[test]
fn test_unrecognized_token_keeps_raw_form() {
    let invocation = Invocation::parse(&strings(&["--reboot", "now"])).unwrap();
    assert_eq!(invocation.command(), None);
    assert_eq!(invocation.token, "--reboot");
}
