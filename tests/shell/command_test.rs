/*!
 * Command Parsing Tests
 */

use memsim::memory::Strategy;
use memsim::shell::{Command, CommandError};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_allocate() {
    assert_eq!(
        "alloc P1 300".parse::<Command>().unwrap(),
        Command::Allocate {
            owner: "P1".to_string(),
            size: 300,
            strategy: None,
        }
    );
    assert_eq!(
        "ALLOCATE P2 128 best-fit".parse::<Command>().unwrap(),
        Command::Allocate {
            owner: "P2".to_string(),
            size: 128,
            strategy: Some(Strategy::BestFit),
        }
    );
}

#[test]
fn test_parse_deallocate_and_simple_commands() {
    assert_eq!(
        "free P1".parse::<Command>().unwrap(),
        Command::Deallocate {
            owner: "P1".to_string()
        }
    );
    assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
    assert_eq!("stats".parse::<Command>().unwrap(), Command::Stats);
    assert_eq!("json".parse::<Command>().unwrap(), Command::Json);
    assert_eq!("reset".parse::<Command>().unwrap(), Command::Reset);
    assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
    assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
}

#[test]
fn test_missing_arguments() {
    assert_eq!(
        "alloc".parse::<Command>(),
        Err(CommandError::IncompleteAllocation)
    );
    assert_eq!(
        "alloc P1".parse::<Command>(),
        Err(CommandError::IncompleteAllocation)
    );
    assert_eq!(
        "free".parse::<Command>(),
        Err(CommandError::MissingProcessId)
    );
}

#[test]
fn test_missing_argument_messages_name_the_command() {
    assert_eq!(
        CommandError::IncompleteAllocation.to_string(),
        "Please provide a valid Process ID and Size."
    );
    assert_eq!(
        "free".parse::<Command>().unwrap_err().to_string(),
        "Please provide a Process ID to deallocate."
    );
}

#[test]
fn test_invalid_size() {
    for raw in ["0", "-1", "ten", "1.5"] {
        assert_eq!(
            format!("alloc P1 {}", raw).parse::<Command>(),
            Err(CommandError::InvalidSize(raw.to_string()))
        );
    }
}

#[test]
fn test_invalid_strategy_and_extra_arguments() {
    assert_eq!(
        "alloc P1 10 next".parse::<Command>(),
        Err(CommandError::InvalidStrategy("next".to_string()))
    );
    assert_eq!(
        "free P1 P2".parse::<Command>(),
        Err(CommandError::UnexpectedArgument("P2".to_string()))
    );
    assert_eq!(
        "defrag".parse::<Command>(),
        Err(CommandError::Unknown("defrag".to_string()))
    );
}

#[test]
fn test_blank_lines_and_comments_ignored() {
    assert!(Command::parse_line("").is_none());
    assert!(Command::parse_line("   ").is_none());
    assert!(Command::parse_line("# setup").is_none());
    assert!(matches!(Command::parse_line(" show "), Some(Ok(Command::Show))));
}
