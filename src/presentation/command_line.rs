//! Command line decoding
//!
//! Turns one line of user input into a typed [`Command`]. Command and
//! subcommand words are case-insensitive; parameters keep their case and
//! any trailing extras are ignored.

use crate::application::Command;
use crate::domain::value_objects::EntityId;
use crate::error::{RosterError, RosterResult};

/// Split a line into whitespace-separated tokens.
///
/// A token wrapped in double quotes may contain spaces. The quotes are
/// stripped, so `""` yields an empty token.
pub fn tokenize(line: &str) -> RosterResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if c == '"' {
            chars.next();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(RosterError::validation("Unterminated quote"));
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_ascii_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// Decode a command line. Blank lines decode to `None`.
pub fn parse_command(line: &str) -> RosterResult<Option<Command>> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() < 2 {
        return Err(RosterError::InvalidCommand);
    }

    let subcommand = tokens[1].to_ascii_uppercase();
    let params = &tokens[2..];

    let command = match tokens[0].to_ascii_uppercase().as_str() {
        "TRAINEE" => parse_trainee(&subcommand, params)?,
        "COURSE" => parse_course(&subcommand, params)?,
        _ => return Err(RosterError::InvalidCommand),
    };

    Ok(Some(command))
}

fn parse_trainee(subcommand: &str, params: &[String]) -> RosterResult<Command> {
    match subcommand {
        "ADD" => match params {
            [first, last, ..] => Ok(Command::TraineeAdd {
                first_name: first.clone(),
                last_name: last.clone(),
            }),
            _ => Err(RosterError::validation("Must provide first and last name")),
        },
        "GET" => Ok(Command::TraineeGet {
            id: single_id(params)?,
        }),
        "GETALL" | "LIST" => Ok(Command::TraineeList),
        "UPDATE" => match params {
            [id, first, last, ..] => Ok(Command::TraineeUpdate {
                id: EntityId::parse(id)?,
                first_name: first.clone(),
                last_name: last.clone(),
            }),
            _ => Err(RosterError::validation(
                "Must provide ID, first name and last name",
            )),
        },
        "DELETE" => Ok(Command::TraineeDelete {
            id: single_id(params)?,
        }),
        _ => Err(RosterError::InvalidSubcommand {
            command: "TRAINEE".to_string(),
        }),
    }
}

fn parse_course(subcommand: &str, params: &[String]) -> RosterResult<Command> {
    match subcommand {
        "ADD" => match params {
            [name, start_date, ..] => Ok(Command::CourseAdd {
                name: name.clone(),
                start_date: start_date.clone(),
            }),
            _ => Err(RosterError::validation(
                "Must provide course name and start date",
            )),
        },
        "GET" => Ok(Command::CourseGet {
            id: single_id(params)?,
        }),
        "GETALL" | "LIST" => Ok(Command::CourseList),
        "UPDATE" => match params {
            [id, name, start_date, ..] => Ok(Command::CourseUpdate {
                id: EntityId::parse(id)?,
                name: name.clone(),
                start_date: start_date.clone(),
            }),
            _ => Err(RosterError::validation(
                "Must provide ID, course name and start date",
            )),
        },
        "DELETE" => Ok(Command::CourseDelete {
            id: single_id(params)?,
        }),
        "JOIN" | "LEAVE" => {
            let [course_id, trainee_id, ..] = params else {
                return Err(RosterError::validation(
                    "Must provide course ID and trainee ID",
                ));
            };
            let course_id = EntityId::parse(course_id)?;
            let trainee_id = EntityId::parse(trainee_id)?;
            if subcommand == "JOIN" {
                Ok(Command::CourseJoin {
                    course_id,
                    trainee_id,
                })
            } else {
                Ok(Command::CourseLeave {
                    course_id,
                    trainee_id,
                })
            }
        }
        _ => Err(RosterError::InvalidSubcommand {
            command: "COURSE".to_string(),
        }),
    }
}

fn single_id(params: &[String]) -> RosterResult<EntityId> {
    match params.first() {
        Some(raw) => EntityId::parse(raw),
        None => Err(RosterError::validation("Must provide ID")),
    }
}
