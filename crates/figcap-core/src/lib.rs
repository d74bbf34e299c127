//! figcap-core: Backend-independent data types and algorithms.
//!
//! This crate provides the foundational types ([`TextLine`], [`HtmlPage`],
//! [`CountTuple`], [`Point`]) and the pure geometric/statistical primitives
//! (line intersection, frequency ranking, natural filename ordering) used to
//! reason about the layout of a rendered PDF page. It performs no I/O and
//! knows nothing about rendering backends.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod natural;
pub mod ranking;

pub use error::GeometryError;
pub use geometry::{Point, intersect_lines};
pub use layout::{HtmlPage, TextLine};
pub use natural::{NaturalToken, natural_key, natural_sort};
pub use ranking::{CountTuple, sort_by_most_common_value_desc};
