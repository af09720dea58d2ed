use vocabi_types::AppearanceMode;

/// One line typed into the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Language(String),
    Font(String),
    Theme(AppearanceMode),
    Copy,
    Help,
    Quit,
    Invalid(String),
    Empty,
}

pub const HELP: &str = "\
Type a word and press Enter to look it up.
  :lang <language>   translate definitions into <language> (name or code)
  :font <name>       change the results font
  :theme <mode>      Dark, Light or System
  :copy              copy the results panel to the clipboard
  :help              show this help
  :quit              exit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Command::Search(line.to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name.to_lowercase().as_str() {
        "lang" | "language" => {
            if arg.is_empty() {
                Command::Invalid("usage: :lang <language>".to_string())
            } else {
                Command::Language(arg.to_string())
            }
        }
        // an empty name is passed on and rejected by the backend like any bad font
        "font" => Command::Font(arg.to_string()),
        "theme" => match arg.parse() {
            Ok(mode) => Command::Theme(mode),
            Err(e) => Command::Invalid(e),
        },
        "copy" => Command::Copy,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command ':{other}', try :help")),
    }
}
