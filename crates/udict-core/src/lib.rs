pub mod definition;
pub mod error;
pub mod options;
pub mod preprocess;
pub mod responder;
pub mod style;

pub use definition::{DefinitionRecord, LookupResult};
pub use error::{CommandError, ParseError, QueryError};
pub use options::{Command, DisplayOptions, QueryFlag, USAGE, parse_command};
pub use responder::Responder;
pub use style::{Color, PlainStyler, TextStyler};
