use super::input::{InputError, Prompter};
use super::{bond, investment};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const WELCOME: &str = "Welcome to your Financial Calculator!\n";
const FAREWELL: &str = "\nThank you for using Financial Calculator. Goodbye!";
const MENU: &str = "Please type your option:
Investment - Calculate investment returns
Bond       - Calculate home loan repayments
Exit       - Exit calculator";
const CHOICE_PROMPT: &str = "\nEnter your choice: ";

/// A command typed at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Investment,
    Bond,
    Exit,
    /// Anything else. The menu is shown again without complaint.
    Unrecognized,
}

impl MenuCommand {
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "investment" => MenuCommand::Investment,
            "bond" => MenuCommand::Bond,
            "exit" => MenuCommand::Exit,
            _ => MenuCommand::Unrecognized,
        }
    }
}

/// Runs the main menu until the user exits or input runs out.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    prompter.say(WELCOME)?;

    loop {
        prompter.say(MENU)?;
        let line = match prompter.read_line(CHOICE_PROMPT) {
            Ok(line) => line,
            Err(InputError::Closed) => {
                debug!("Input closed at menu, ending session");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let command = MenuCommand::parse(&line);
        debug!(input = %line, ?command, "Menu selection");

        match command {
            MenuCommand::Investment => {
                investment::run(prompter)?;
            }
            MenuCommand::Bond => {
                bond::run(prompter)?;
            }
            MenuCommand::Exit => {
                prompter.say(FAREWELL)?;
                return Ok(());
            }
            MenuCommand::Unrecognized => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Result<()>, String) {
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = run(&mut prompter);
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(MenuCommand::parse("investment"), MenuCommand::Investment);
        assert_eq!(MenuCommand::parse("  INVESTMENT \t"), MenuCommand::Investment);
        assert_eq!(MenuCommand::parse("Bond"), MenuCommand::Bond);
        assert_eq!(MenuCommand::parse("EXIT"), MenuCommand::Exit);
        assert_eq!(MenuCommand::parse("quit"), MenuCommand::Unrecognized);
        assert_eq!(MenuCommand::parse(""), MenuCommand::Unrecognized);
        assert_eq!(MenuCommand::parse("invest ment"), MenuCommand::Unrecognized);
    }

    #[test_log::test]
    fn exit_prints_farewell() {
        let (result, output) = run_script("exit\n");
        assert!(result.is_ok());
        assert!(output.starts_with("Welcome to your Financial Calculator!"));
        assert!(output.contains("Thank you for using Financial Calculator. Goodbye!"));
        assert_eq!(output.matches("Please type your option:").count(), 1);
    }

    #[test]
    fn unknown_commands_redisplay_menu_silently() {
        let (result, output) = run_script("help\n42\n\nexit\n");
        assert!(result.is_ok());
        assert_eq!(output.matches("Please type your option:").count(), 4);
        assert!(!output.contains("Invalid"));
    }

    #[test]
    fn mixed_case_routes_to_investment() {
        let (result, output) = run_script("  INVESTMENT  \n1000\n8\n5\nsimple\nexit\n");
        assert!(result.is_ok());
        assert!(output.contains("Investment Calculator:"));
        assert!(output.contains("£1,400.00"));
        assert_eq!(output.matches("Please type your option:").count(), 2);
    }

    #[test]
    fn end_of_input_at_menu_ends_quietly() {
        let (result, output) = run_script("bond\n200000\n7\n240\n");
        assert!(result.is_ok());
        assert!(output.contains("£1,550.60"));
        assert!(!output.contains("Goodbye"));
    }

    #[test]
    fn end_of_input_inside_handler_is_an_error() {
        let (result, _) = run_script("bond\n200000\n");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Closed)
        ));
    }
}
