//! Parsing of stdin lines.
//!
//! A line that starts with `{` is a directive envelope from the controller;
//! anything else is a command typed by the local user.

use crate::directive::Directive;
use crate::playlist::TransportAction;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Transport(TransportAction),
    /// Jump to an index and play it.
    Select(usize),
    Remove(usize),
    Clear,
    Search(String),
    /// Append the search result at this index to the playlist.
    AddResult(usize),
    Results,
    List,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Directive(Directive),
    /// A directive line that failed to parse or validate.
    Rejected(String),
    Command(Command),
    /// A command line nobody understood.
    Unknown(String),
}

fn index_arg(cmd: &str, arg: &str) -> Input {
    match arg.trim().parse::<usize>() {
        Ok(i) if cmd == "select" || cmd == "play" => Input::Command(Command::Select(i)),
        Ok(i) if cmd == "remove" || cmd == "rm" => Input::Command(Command::Remove(i)),
        Ok(i) => Input::Command(Command::AddResult(i)),
        Err(_) => Input::Unknown(format!("{cmd} {arg}")),
    }
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.starts_with('{') {
        return Some(match Directive::parse(line) {
            Ok(d) => Input::Directive(d),
            Err(e) => Input::Rejected(e.to_string()),
        });
    }

    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };
    let cmd = cmd.to_ascii_lowercase();

    let input = match (cmd.as_str(), arg.is_empty()) {
        ("play", true) => Input::Command(Command::Transport(TransportAction::Play)),
        ("pause", true) => Input::Command(Command::Transport(TransportAction::Pause)),
        ("toggle" | "p", true) => Input::Command(Command::Transport(TransportAction::Toggle)),
        ("next" | "n", true) => Input::Command(Command::Transport(TransportAction::Next)),
        ("prev" | "previous", true) => {
            Input::Command(Command::Transport(TransportAction::Previous))
        }
        ("play" | "select" | "remove" | "rm" | "add", false) => index_arg(&cmd, arg),
        ("clear", true) => Input::Command(Command::Clear),
        ("search" | "s", false) => Input::Command(Command::Search(arg.to_string())),
        ("results", true) => Input::Command(Command::Results),
        ("list" | "ls", true) => Input::Command(Command::List),
        ("status", true) => Input::Command(Command::Status),
        ("help" | "?", true) => Input::Command(Command::Help),
        ("quit" | "q" | "exit", true) => Input::Command(Command::Quit),
        _ => Input::Unknown(line.to_string()),
    };
    Some(input)
}

pub const HELP: &str = "\
commands:
  play | pause | toggle | next | prev   transport
  play N | select N                     jump to track N and play
  remove N                              remove track N
  clear                                 empty the playlist
  search QUERY                          search for songs
  results                               show the last search results
  add N                                 append search result N
  list | status                         show the playlist / now playing
  quit
  {json}                                controller directive";
