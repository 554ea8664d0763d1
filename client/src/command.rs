#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Reset,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "Commands: 0-8 place a mark, r reset, h help, q quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let input = line.trim().to_ascii_lowercase();
    if input.is_empty() {
        return Ok(None);
    }

    let command = match input.as_str() {
        "r" | "reset" => Command::Reset,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(index) => Command::Place(index),
            Err(_) => return Err(format!("Unknown command: {}", line.trim())),
        },
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_index() {
        assert_eq!(parse_command("4"), Ok(Some(Command::Place(4))));
        assert_eq!(parse_command("  0\n"), Ok(Some(Command::Place(0))));
        assert_eq!(parse_command("12"), Ok(Some(Command::Place(12))));
    }

    #[test]
    fn test_parse_keywords_case_insensitive() {
        assert_eq!(parse_command("R"), Ok(Some(Command::Reset)));
        assert_eq!(parse_command("reset"), Ok(Some(Command::Reset)));
        assert_eq!(parse_command("Help"), Ok(Some(Command::Help)));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("EXIT"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(parse_command("-1"), Err("Unknown command: -1".to_string()));
        assert_eq!(parse_command("move 3"), Err("Unknown command: move 3".to_string()));
    }
}
