//! Markdown heading disambiguation.
//!
//! Appends the label of the enclosing job range to repeated fourth-level
//! headings (`#### 配置详解` becomes `#### 配置详解 - 单元测试`), so each
//! heading in a long README gets a unique anchor.
//!
//! - [`Disambiguator`]: the pure document transform
//! - [`read_document`] / [`write_document`]: UTF-8 I/O over `Read`/`Write`
//! - [`fix_file`]: read, transform, and overwrite a file in place

mod disambiguate;
mod io;

pub use disambiguate::{Disambiguation, Disambiguator};
pub use io::{fix_file, read_document, write_document};
