use udict_config::lookup::LookupConfig;

use crate::error::CommandError;

pub const USAGE: &str = "[--disableexamples | --showvotes | --num # | --showtags] <term>";

/// Flags recognised in front of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFlag {
    DisableExamples,
    ShowVotes,
    Num(i64),
    ShowTags,
}

/// How one reply is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub include_examples: bool,
    pub include_votes: bool,
    pub include_tags: bool,
    pub max_records: usize,
    pub plain_text: bool,
}

impl DisplayOptions {
    pub fn new(max_records: usize, plain_text: bool) -> Self {
        Self {
            include_examples: true,
            include_votes: false,
            include_tags: false,
            max_records,
            plain_text,
        }
    }

    /// Apply user flags on top of the configured defaults.
    ///
    /// A `Num` outside `0..=max_number_of_definitions` is ignored and the
    /// configured default stays in place.
    pub fn from_flags(flags: &[QueryFlag], lookup: &LookupConfig, plain_text: bool) -> Self {
        let ceiling = lookup.max_number_of_definitions;
        let mut options = Self::new(ceiling, plain_text);

        for flag in flags {
            match *flag {
                QueryFlag::DisableExamples => options.include_examples = false,
                QueryFlag::ShowVotes => options.include_votes = true,
                QueryFlag::ShowTags => options.include_tags = true,
                QueryFlag::Num(value) => match usize::try_from(value) {
                    Ok(n) if n <= ceiling => options.max_records = n,
                    _ => tracing::debug!("Ignoring --num {} (allowed 0..={})", value, ceiling),
                },
            }
        }

        options
    }
}

/// A chat line split into flags and term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub flags: Vec<QueryFlag>,
    pub term: String,
}

/// Split `[--flag ...] <term>` into a [`Command`].
///
/// Flags must precede the term; the first other token (or anything after a
/// bare `--`) starts the term, which runs to the end of the line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace().peekable();
    let mut flags = Vec::new();

    while let Some(token) = tokens.peek().copied() {
        let Some(name) = token.strip_prefix("--") else {
            break;
        };
        tokens.next();

        match name {
            "" => break,
            "disableexamples" => flags.push(QueryFlag::DisableExamples),
            "showvotes" => flags.push(QueryFlag::ShowVotes),
            "showtags" => flags.push(QueryFlag::ShowTags),
            "num" => {
                let value = tokens
                    .next()
                    .ok_or_else(|| CommandError::MissingValue(name.to_string()))?;
                match value.parse::<i64>() {
                    Ok(n) => flags.push(QueryFlag::Num(n)),
                    Err(e) => tracing::debug!("Ignoring --num {:?}: {}", value, e),
                }
            }
            other => return Err(CommandError::UnknownOption(other.to_string())),
        }
    }

    let term = tokens.collect::<Vec<_>>().join(" ");
    if term.is_empty() {
        return Err(CommandError::MissingTerm);
    }

    Ok(Command { flags, term })
}
