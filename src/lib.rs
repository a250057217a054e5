#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod literal;
mod operands;
mod parser;

pub use self::literal::{DecimalLiteral, NumericValue, Sign};
pub use self::operands::PluralOperands;
pub use self::parser::ParseNumericLiteralError;
