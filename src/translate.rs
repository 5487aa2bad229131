// stdlib imports
use std::fs;
use std::path::Path;
// third-party imports
use log::{debug, trace};
// my imports
use crate::cfgtypes::{ConfigTable, ConstantTable, Value};
use crate::comments;
use crate::error::{Error, ErrorKind, SyntaxError};
use crate::evaluate::evaluate;
use crate::parserline::{LineCursor, LineKind, ParserLine, Scope};
use crate::render;


/// Translates the configuration dialect into a [`ConfigTable`].
///
/// A translator owns its [`ConstantTable`]: constants declared by one `parse` call stay visible
/// to every later call on the same instance. Parsing needs `&mut self`, so one instance cannot
/// be driven from several threads at once; share it behind a `Mutex` if you must.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    constants: ConstantTable,
}
impl Translator {
    ////////////////////////
    // Creation/Access
    ////////////////////////
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    ////////////////////
    // Parsing Functions
    ////////////////////

    /// Reads `path` as UTF-8 and parses it.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ConfigTable, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::FileError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(self.parse(&text)?)
    }

    /// Parses `text`, returning the merged contents of its dictionary blocks.
    ///
    /// The first error aborts the parse and the partial table is dropped. Constants declared
    /// before the failing line stay declared.
    pub fn parse(&mut self, text: &str) -> Result<ConfigTable, SyntaxError> {
        let stripped = comments::strip(text);
        let mut cursor = LineCursor::new(&stripped);
        let mut table = ConfigTable::new();

        while let Some(pline) = cursor.next() {
            match pline.classify(Scope::TopLevel) {
                LineKind::Blank => continue,
                LineKind::ConstantDecl { name, expr } => {
                    let val = Self::evaluate_on(&pline, expr, &self.constants)?;
                    trace!("Line {}: {} := {} ({})", pline.line_num(), name, val, val.kind());
                    self.constants.declare(name, val);
                }
                LineKind::DictStart => {
                    trace!("Line {}: dictionary opened", pline.line_num());
                    Self::parse_dictionary(&mut cursor, &self.constants, &mut table)?;
                }
                _ => {
                    return Err(SyntaxError::at(
                        pline.line_num(),
                        ErrorKind::InvalidLine(pline.text().to_string()),
                    ))
                }
            }
        }

        debug!(
            "Parsed {} key(s) over {} line(s); {} constant(s) known",
            table.len(),
            cursor.position(),
            self.constants.len()
        );
        Ok(table)
    }

    /// Consumes entry lines up to and including the closing `]`. A block left open at the end
    /// of the input is closed there.
    fn parse_dictionary(
        cursor: &mut LineCursor<'_>,
        constants: &ConstantTable,
        table: &mut ConfigTable,
    ) -> Result<(), SyntaxError> {
        for pline in cursor.by_ref() {
            match pline.classify(Scope::Dictionary) {
                LineKind::DictEnd => {
                    trace!("Line {}: dictionary closed", pline.line_num());
                    return Ok(());
                }
                LineKind::DictEntry { key, expr } => {
                    let val = Self::evaluate_on(&pline, expr, constants)?;
                    // a repeated key keeps its first position and takes the new value
                    table.insert(key.to_string(), val);
                }
                _ => {
                    return Err(SyntaxError::at(
                        pline.line_num(),
                        ErrorKind::InvalidEntry(pline.text().to_string()),
                    ))
                }
            }
        }
        debug!("Dictionary block not closed before end of input");
        Ok(())
    }

    fn evaluate_on(
        pline: &ParserLine<'_>,
        expr: &str,
        constants: &ConstantTable,
    ) -> Result<Value, SyntaxError> {
        evaluate(expr, constants).map_err(|err| err.on_line(pline.line_num()))
    }

    /// Evaluates a single value expression against the constants declared so far.
    pub fn evaluate(&self, expr: &str) -> Result<Value, SyntaxError> {
        evaluate(expr, &self.constants)
    }

    ////////////
    // Rendering
    ////////////

    /// See [`to_toml`](crate::to_toml).
    pub fn to_toml(&self, table: &ConfigTable) -> String {
        render::to_toml(table)
    }
}
