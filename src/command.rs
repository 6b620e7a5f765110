//! Command script parsing
//!
//! One creation command per non-empty line:
//!
//! ```text
//! DIR <id> [<parentId>] <name>
//! FILE <parentId> <T|F> <owner> <group> <sizeKb> <name>
//! ```
//!
//! `DIR` without a parent id attaches under the root. A first line consisting
//! of a single integer is an optional record-count header; when present,
//! exactly that many commands must follow. Name tokens may be wrapped in
//! double quotes, which are stripped.

use crate::error::ParseError;
use crate::tree::ROOT_ID;

/// A parsed creation command, ready for `TreeBuilder::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dir {
        id: u32,
        parent_id: u32,
        name: String,
    },
    File {
        parent_id: u32,
        read_only: bool,
        owner: String,
        group: String,
        size_kb: f64,
        name: String,
    },
}

/// Parse a whole command script into a command sequence.
///
/// Blank lines are skipped. Errors carry the 1-based line number of the
/// offending record.
pub fn parse_script(input: &str) -> Result<Vec<Command>, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let mut commands = Vec::new();
    let mut declared: Option<usize> = None;

    if let Some((index, line)) = lines.next() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [count] if count.parse::<usize>().is_ok() => {
                declared = count.parse().ok();
            }
            _ => commands.push(parse_line(index + 1, &tokens)?),
        }
    }

    for (index, line) in lines {
        if let Some(count) = declared {
            if commands.len() == count {
                return Err(ParseError::TrailingCommands { line: index + 1 });
            }
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        commands.push(parse_line(index + 1, &tokens)?);
    }

    if let Some(count) = declared {
        if commands.len() < count {
            return Err(ParseError::MissingCommands {
                expected: count,
                found: commands.len(),
            });
        }
    }

    Ok(commands)
}

fn parse_line(line: usize, tokens: &[&str]) -> Result<Command, ParseError> {
    match tokens.first() {
        Some(&"DIR") => parse_dir(line, tokens),
        Some(&"FILE") => parse_file(line, tokens),
        Some(other) => Err(ParseError::UnknownCommand {
            line,
            found: (*other).to_string(),
        }),
        None => unreachable!("blank lines are filtered before parsing"),
    }
}

fn parse_dir(line: usize, tokens: &[&str]) -> Result<Command, ParseError> {
    let (id, parent_id, name) = match tokens {
        [_, id, name] => (parse_id(line, id)?, ROOT_ID, name),
        [_, id, parent, name] => (parse_id(line, id)?, parse_id(line, parent)?, name),
        _ => {
            return Err(ParseError::WrongArgCount {
                line,
                command: "DIR".to_string(),
                expected: "2 or 3".to_string(),
            });
        }
    };
    Ok(Command::Dir {
        id,
        parent_id,
        name: unquote(name).to_string(),
    })
}

fn parse_file(line: usize, tokens: &[&str]) -> Result<Command, ParseError> {
    let &[_, parent, read_only, owner, group, size, name] = tokens else {
        return Err(ParseError::WrongArgCount {
            line,
            command: "FILE".to_string(),
            expected: "6".to_string(),
        });
    };
    Ok(Command::File {
        parent_id: parse_id(line, parent)?,
        read_only: read_only == "T",
        owner: owner.to_string(),
        group: group.to_string(),
        size_kb: parse_size(line, size)?,
        name: unquote(name).to_string(),
    })
}

fn parse_id(line: usize, token: &str) -> Result<u32, ParseError> {
    token.parse().map_err(|_| ParseError::MalformedInt {
        line,
        token: token.to_string(),
    })
}

fn parse_size(line: usize, token: &str) -> Result<f64, ParseError> {
    let size: f64 = token.parse().map_err(|_| ParseError::MalformedSize {
        line,
        token: token.to_string(),
    })?;
    if !size.is_finite() || size < 0.0 {
        return Err(ParseError::MalformedSize {
            line,
            token: token.to_string(),
        });
    }
    Ok(size)
}

/// Strip one pair of surrounding double quotes from a name token.
fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}
