// Markers of the configuration dialect.

/// Opens a block comment. May span lines.
pub const COMMENT_OPEN: &str = "#=";
/// Closes the nearest preceding [`COMMENT_OPEN`].
pub const COMMENT_CLOSE: &str = "=#";

pub const DICT_OPEN: &str = "$[";
pub const DICT_CLOSE: &str = "]";

/// `name := value`
pub const DECL_SEP: &str = ":=";
/// `key : value`
pub const KEY_VAL_SEP: &str = ":";
pub const ENTRY_DELIM: &str = ",";

pub const CONST_REF_OPEN: &str = "@(";
pub const CONST_REF_CLOSE: &str = ")";

pub const STR_TOKEN: &str = "'";

pub const TRUE_TOKEN: &str = "true";
pub const FALSE_TOKEN: &str = "false";
