// Module Declarations
mod cfgtypes; // Rust representations of the dialect's values
pub mod comments; // Block comment removal
mod constants; // Markers of the dialect
mod error;
mod evaluate; // Value expressions
pub mod parserline; // Line classification
mod render; // TOML output
mod translate; // The translator

// Imports
use std::path::Path;

pub use cfgtypes::{ConfigTable, ConstantTable, Value};
pub use comments::strip_comments;
pub use error::{Error, ErrorKind, SyntaxError};
pub use render::to_toml;
pub use translate::Translator;

/// Translates configuration text to TOML with a fresh [`Translator`].
///
/// ```
/// let toml = cfgtoml::translate("port := 8080\n$[\nport:@(port)\n]").unwrap();
/// assert_eq!(toml, "port = 8080\n");
/// ```
pub fn translate(text: &str) -> Result<String, SyntaxError> {
    let mut translator = Translator::new();
    let table = translator.parse(text)?;
    Ok(to_toml(&table))
}

/// Reads a configuration file and translates it to TOML with a fresh [`Translator`].
pub fn translate_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let mut translator = Translator::new();
    let table = translator.parse_file(path)?;
    Ok(to_toml(&table))
}
