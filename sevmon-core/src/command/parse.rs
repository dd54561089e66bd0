use crate::command::{Command, CommandKind, Direction, ParseError};

/// Parses one command line. Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    let kind = match head {
        "1" => CommandKind::Record,
        "2" => CommandKind::CategorySummary,
        "3" => CommandKind::GlobalRelative,
        "4" => CommandKind::CategoryRelative,
        other => {
            return Err(ParseError::UnknownKind {
                kind: other.to_string(),
            });
        }
    };

    let command = match kind {
        CommandKind::Record => parse_record(rest)?,
        CommandKind::CategorySummary => {
            let mut fields = Fields::whitespace(kind, rest);
            let category = fields.next("category")?;
            fields.finish()?;
            Command::CategorySummary { category }
        }
        CommandKind::GlobalRelative => {
            let mut fields = Fields::whitespace(kind, rest);
            let direction = fields.next("direction")?.parse::<Direction>()?;
            let timestamp = fields.next("timestamp")?;
            fields.finish()?;
            Command::GlobalRelative {
                direction,
                timestamp,
            }
        }
        CommandKind::CategoryRelative => {
            let mut fields = Fields::whitespace(kind, rest);
            let direction = fields.next("direction")?.parse::<Direction>()?;
            let category = fields.next("category")?;
            let timestamp = fields.next("timestamp")?;
            fields.finish()?;
            Command::CategoryRelative {
                direction,
                category,
                timestamp,
            }
        }
    };

    Ok(Some(command))
}

/// Parses a whole command stream, pairing each command with its 1-based line
/// number. Blank lines are dropped.
pub fn parse_commands(input: &str) -> Result<Vec<(usize, Command)>, (usize, ParseError)> {
    let mut commands = Vec::new();
    for (i, line) in input.lines().enumerate() {
        if let Some(command) = parse_command(line).map_err(|e| (i + 1, e))? {
            commands.push((i + 1, command));
        }
    }
    Ok(commands)
}

// Record fields are `;`-separated, but the names they carry must stay single
// tokens so commands 2, 3 and 4 can refer to them.
fn parse_record(rest: &str) -> Result<Command, ParseError> {
    let kind = CommandKind::Record;
    let mut parts = rest.split(';').map(str::trim);

    let mut field = |name: &'static str| match parts.next() {
        Some(value) if value.contains(char::is_whitespace) => Err(ParseError::InvalidField {
            kind: kind.code(),
            field: name,
            value: value.to_string(),
        }),
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ParseError::MissingField {
            kind: kind.code(),
            field: name,
        }),
    };

    let timestamp = field("timestamp")?;
    let category = field("category")?;
    let raw = field("severity")?;

    if let Some(extra) = parts.next() {
        return Err(ParseError::UnexpectedField {
            kind: kind.code(),
            value: extra.to_string(),
        });
    }

    let severity = raw.parse::<f64>().map_err(|source| ParseError::InvalidSeverity {
        value: raw.clone(),
        source,
    })?;
    if !severity.is_finite() {
        return Err(ParseError::NonFiniteSeverity { value: raw });
    }

    Ok(Command::Record {
        timestamp,
        category,
        severity,
    })
}

struct Fields<'a> {
    kind: CommandKind,
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn whitespace(kind: CommandKind, rest: &'a str) -> Self {
        Self {
            kind,
            inner: rest.split_whitespace(),
        }
    }

    fn next(&mut self, field: &'static str) -> Result<String, ParseError> {
        self.inner
            .next()
            .map(str::to_string)
            .ok_or(ParseError::MissingField {
                kind: self.kind.code(),
                field,
            })
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.inner.next() {
            Some(extra) => Err(ParseError::UnexpectedField {
                kind: self.kind.code(),
                value: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}
