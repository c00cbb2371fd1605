//! Line command parsing and dispatch for the grade book shell.

use gradebook_core::{GradeBook, GradeBookError, StudentId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStudent { name: String, id: StudentId },
    AddGrade { course: String, id: StudentId, grade: i32 },
    Average { id: StudentId },
    Print { id: StudentId },
    PrintAll,
    Dump,
    Version,
}

#[derive(Debug)]
pub enum CommandError {
    Empty,
    Unknown(String),
    Usage(&'static str),
    InvalidNumber { field: &'static str, value: String },
    Book(GradeBookError),
    Encode(serde_json::Error),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(name) => write!(f, "unknown command `{name}`"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
            Self::InvalidNumber { field, value } => {
                write!(f, "{field} must be an integer, got `{value}`")
            }
            Self::Book(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Book(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GradeBookError> for CommandError {
    fn from(value: GradeBookError) -> Self {
        Self::Book(value)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

const ADD_STUDENT_USAGE: &str = "add_student <name> <id>";
const ADD_GRADE_USAGE: &str = "add_grade <course> <id> <grade>";

/// Parses one whitespace-separated command line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Err(CommandError::Empty);
    };

    match (name, args) {
        ("add_student", [student, id]) => Ok(Command::AddStudent {
            name: (*student).to_string(),
            id: parse_number("id", id)?,
        }),
        ("add_student", _) => Err(CommandError::Usage(ADD_STUDENT_USAGE)),
        ("add_grade", [course, id, grade]) => Ok(Command::AddGrade {
            course: (*course).to_string(),
            id: parse_number("id", id)?,
            grade: parse_number("grade", grade)?,
        }),
        ("add_grade", _) => Err(CommandError::Usage(ADD_GRADE_USAGE)),
        ("avg", [id]) => Ok(Command::Average {
            id: parse_number("id", id)?,
        }),
        ("avg", _) => Err(CommandError::Usage("avg <id>")),
        ("print", [id]) => Ok(Command::Print {
            id: parse_number("id", id)?,
        }),
        ("print", _) => Err(CommandError::Usage("print <id>")),
        ("print_all", []) => Ok(Command::PrintAll),
        ("dump", []) => Ok(Command::Dump),
        ("version", []) => Ok(Command::Version),
        (other, _) => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Runs `command` against `book` and returns the text to print, if any.
pub fn execute(book: &mut GradeBook, command: Command) -> Result<Option<String>, CommandError> {
    let output = match command {
        Command::AddStudent { name, id } => {
            book.add_student(&name, id)?;
            None
        }
        Command::AddGrade { course, id, grade } => {
            book.add_grade(&course, id, grade)?;
            None
        }
        Command::Average { id } => {
            let result = book.calc_avg(id)?;
            Some(format!("{}: {}\n", result.name, result.average))
        }
        Command::Print { id } => Some(book.print_student(id)?),
        Command::PrintAll => Some(book.print_all()),
        Command::Dump => Some(format!("{}\n", serde_json::to_string_pretty(&*book)?)),
        Command::Version => Some(format!(
            "gradebook_core version={}\n",
            gradebook_core::core_version()
        )),
    };
    Ok(output)
}

fn parse_number(field: &'static str, value: &str) -> Result<i32, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
