//! Drawing output.
//! Writes converted plans as DXF documents through the `dxf` crate.
use crate::*;

mod drawing;
mod output;

pub use drawing::*;
pub use output::*;

fn to_dxf_point(p: Point2) -> ::dxf::Point {
    let [x, y] = p;
    ::dxf::Point::new(x, y, 0.0)
}
