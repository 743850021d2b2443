//! Convert floor-plan documents into layered DXF drawings.
//!
//! A plan is a JSON document of walls (with their doors and windows), rooms, furniture items,
//! ventilation ducts and rulers. Each element is turned into plain geometry (closed and open
//! polylines, lines and text) on a layer chosen by what the element is, scaled from plan
//! decimetres to millimetres.
//!
//! One document may describe several overlapping floor plans, told apart by single character
//! sub-plan codes. [`discover_codes`] finds them and [`build`] draws the part of the plan
//! belonging to one code.
//!
//! ```rust
//! # use plandxf::*;
//! let plan = Plan::from_json_str(r#"{ "plan": { "rulers": {
//!     "r1": { "p1": { "x": 0, "y": 0 }, "p2": { "x": 5, "y": 0 } }
//! } } }"#).unwrap();
//!
//! let mut prims = Vec::new();
//! let bounds = build(&mut prims, &plan, None, &Options::default());
//!
//! assert_eq!(prims, [Primitive::line(Layer::Rulers, [0.0, 0.0], [50.0, 0.0])]);
//! assert_eq!(bounds.extents().unwrap().max, [50.0, 0.0]);
//! ```

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod convert;
mod error;
mod extents;
#[cfg(feature = "io")]
pub mod io;
mod layer;
mod partition;
mod point;
mod primitive;
mod record;
mod units;

pub use convert::*;
pub use error::*;
pub use extents::*;
pub use layer::*;
pub use partition::*;
pub use point::*;
pub use primitive::*;
pub use record::*;
pub use units::*;

pub trait Envelops<O> {
    fn envelops(&self, object: O) -> bool;
}
