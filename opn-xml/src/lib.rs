//! Read-only XML tree parsing for OPNsense `config.xml` documents.

pub mod parser;
pub mod tree;

pub use parser::{parse, parse_file, ParseError};
pub use tree::XmlNode;
