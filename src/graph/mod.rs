//! Derivation of a render-ready graph from the parser's raw output.

pub mod degree;
pub mod layout;
pub mod leaf;
pub mod model;
pub mod raw;
pub mod style;

pub use degree::DegreeIndex;
pub use layout::{Cooling, DragMachine, LayoutConfig, Pin};
pub use leaf::is_leaf;
pub use model::{DisplayEdge, DisplayNode, GraphModel};
pub use raw::{RawEdge, RawGraph, RawNode};
pub use style::StyleVariant;
