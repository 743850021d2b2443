//! Conversion of floor-plan elements into drawing primitives.
//!
//! Each element kind has a pure function taking one record to its primitives (`None` when the
//! record is skipped), and an `add_*` function running it over the whole collection, drawing
//! onto a [`Canvas`] and growing the document [`Bounds`].
use crate::*;
use serde_json::Value;

/// Signature shared by the collection converters.
pub type Converter<C> = fn(&mut C, &Plan, &mut Bounds, Option<&str>, &Options);

/// The collection converters in drawing order.
pub fn converters<C: Canvas>() -> [(Kind, Converter<C>); 5] {
    [
        (Kind::Walls, add_walls::<C>),
        (Kind::Rooms, add_rooms::<C>),
        (Kind::Items, add_items::<C>),
        (Kind::Ducts, add_ducts::<C>),
        (Kind::Rulers, add_rulers::<C>),
    ]
}

/// Draw the whole plan, or the part of it belonging to sub-plan `code`, onto `canvas`.
///
/// Returns the extents of everything drawn.
pub fn build<C: Canvas>(canvas: &mut C, plan: &Plan, code: Option<&str>, opts: &Options) -> Bounds {
    let mut bounds = Bounds::new();
    for (kind, convert) in converters::<C>() {
        log::trace!("converting {}", kind.key());
        convert(canvas, plan, &mut bounds, code, opts);
    }
    bounds
}

fn emit<C: Canvas>(canvas: &mut C, bounds: &mut Bounds, prim: Primitive) {
    bounds.extend(prim.points());
    canvas.draw(prim);
}

fn skipped(kind: Kind, r: &Record) {
    log::debug!("skipped {} '{}': missing or malformed fields", kind.key(), r.id);
}

/// The `l1, l2, r2, r1` quadrilateral of a wall or hole, scaled.
fn quad(r: &Record, opts: &Options) -> Option<Vec<Point2>> {
    let l1 = r.point("l1")?;
    let l2 = r.point("l2")?;
    let r1 = r.point("r1")?;
    let r2 = r.point("r2")?;
    Some(
        [l1, l2, r2, r1]
            .into_iter()
            .map(|p| opts.scale_point(p))
            .collect(),
    )
}

/// A hole cut into a wall: door, window or other opening.
///
/// An explicit `polygon` takes precedence over the corner points, even when it is empty.
pub fn hole(r: Record, opts: &Options) -> Option<Primitive> {
    let points = if r.has("polygon") {
        let ps = r.get("polygon").and_then(point_list)?;
        ps.into_iter().map(|p| opts.scale_point(p)).collect()
    } else {
        quad(&r, opts)?
    };

    if points.is_empty() {
        return None;
    }

    let layer = Layer::hole(r.str("group").unwrap_or_default());
    Some(Primitive::polygon(layer, points))
}

/// A wall outline followed by those of its holes that belong to `code`.
pub fn wall(r: Record, code: Option<&str>, opts: &Options) -> Option<Vec<Primitive>> {
    if r.str("role") != Some("wall") {
        return None;
    }

    let outline = quad(&r, opts)?;
    let mut prims = vec![Primitive::polygon(Layer::walls(r.tag()), outline)];

    for h in r.children("holes").filter(|h| h.belongs_to(code)) {
        match hole(h, opts) {
            Some(p) => prims.push(p),
            None => log::debug!("skipped hole '{}' of wall '{}'", h.id, r.id),
        }
    }

    Some(prims)
}

pub fn add_walls<C: Canvas>(
    canvas: &mut C,
    plan: &Plan,
    bounds: &mut Bounds,
    code: Option<&str>,
    opts: &Options,
) {
    for r in plan.records(Kind::Walls).filter(|r| r.belongs_to(code)) {
        match wall(r, code, opts) {
            Some(prims) => prims.into_iter().for_each(|p| emit(canvas, bounds, p)),
            None => skipped(Kind::Walls, &r),
        }
    }
}

/// A converted room.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomShape {
    pub outline: Primitive,
    /// Label position, the mean of the outline vertices.
    pub anchor: Point2,
    pub label: Option<Primitive>,
}

/// Label text of a room.
///
/// A numeric `area` is printed in square metres, after the name if there is a meaningful one.
/// A missing or non-numeric area leaves just the name.
pub fn room_label(name: &str, area: Option<&Value>) -> String {
    let name = name.trim();
    let area = area.filter(|v| !v.is_null()).and_then(number);

    match area {
        Some(a) if !name.is_empty() && !name.eq_ignore_ascii_case("none") => {
            format!("{} {:.2} m2", name, a)
        }
        Some(a) => format!("{:.2} m2", a),
        None => name.to_string(),
    }
}

pub fn room(r: Record, opts: &Options) -> Option<RoomShape> {
    let list = r
        .get("polygon")
        .filter(|v| truthy(v))
        .or_else(|| r.get("points").filter(|v| truthy(v)))?;

    let points = point_list(list)?
        .into_iter()
        .map(|p| opts.scale_point(p))
        .collect::<Vec<_>>();
    let anchor = mean(&points)?;

    let label = room_label(r.str("name").unwrap_or_default(), r.get("area"));
    let label = (!label.is_empty())
        .then(|| Primitive::text(Layer::RoomsText, label, opts.text_height, anchor));

    Some(RoomShape {
        outline: Primitive::polygon(Layer::Rooms, points),
        anchor,
        label,
    })
}

pub fn add_rooms<C: Canvas>(
    canvas: &mut C,
    plan: &Plan,
    bounds: &mut Bounds,
    code: Option<&str>,
    opts: &Options,
) {
    for r in plan.records(Kind::Rooms).filter(|r| r.belongs_to(code)) {
        let Some(room) = room(r, opts) else {
            skipped(Kind::Rooms, &r);
            continue;
        };

        emit(canvas, bounds, room.outline);
        bounds.add(room.anchor);
        if let Some(label) = room.label {
            emit(canvas, bounds, label);
        }
    }
}

/// Furniture footprint: a `width` x `height` box about its centre, turned by `angle` degrees.
pub fn item(r: Record, opts: &Options) -> Option<Primitive> {
    let width = r.number("width")?;
    let height = r.number("height")?;
    let centre = r.point("icon_center").or_else(|| r.point("pc"))?;
    let angle = match r.value("angle") {
        Some(v) => number(v)?,
        None => 0.0,
    };

    let corners = rotated_rect(
        opts.scale_point(centre),
        opts.scale_len(width),
        opts.scale_len(height),
        angle,
    );

    Some(Primitive::polygon(Layer::Furniture, corners.to_vec()))
}

pub fn add_items<C: Canvas>(
    canvas: &mut C,
    plan: &Plan,
    bounds: &mut Bounds,
    code: Option<&str>,
    opts: &Options,
) {
    for r in plan.records(Kind::Items).filter(|r| r.belongs_to(code)) {
        match item(r, opts) {
            Some(p) => emit(canvas, bounds, p),
            None => skipped(Kind::Items, &r),
        }
    }
}

/// Scaled points of a duct's vertices, dropping vertices without a `point`.
pub fn duct_points(r: Record, opts: &Options) -> Option<Vec<Point2>> {
    let verts = r
        .get("vertexes")
        .filter(|v| truthy(v))
        .or_else(|| r.get("vertices").filter(|v| truthy(v)))?
        .as_array()?;

    let points = verts
        .iter()
        .filter_map(|v| v.get("point").and_then(point))
        .map(|p| opts.scale_point(p))
        .collect();
    Some(points)
}

/// Ventilation duct as an open polyline through its vertices.
///
/// Fewer than two usable vertices skips the duct.
pub fn duct(r: Record, opts: &Options) -> Option<Primitive> {
    let points = duct_points(r, opts)?;
    (points.len() >= 2).then(|| Primitive::polyline(Layer::Ventilation, points))
}

pub fn add_ducts<C: Canvas>(
    canvas: &mut C,
    plan: &Plan,
    bounds: &mut Bounds,
    code: Option<&str>,
    opts: &Options,
) {
    for r in plan.records(Kind::Ducts).filter(|r| r.belongs_to(code)) {
        match duct_points(r, opts) {
            Some(points) if points.len() >= 2 => {
                emit(canvas, bounds, Primitive::polyline(Layer::Ventilation, points))
            }
            Some(points) => {
                // a lone vertex is not drawn but still counts toward the extents
                bounds.extend(points);
                skipped(Kind::Ducts, &r);
            }
            None => skipped(Kind::Ducts, &r),
        }
    }
}

pub fn ruler(r: Record, opts: &Options) -> Option<Primitive> {
    let p1 = r.point("p1")?;
    let p2 = r.point("p2")?;
    Some(Primitive::line(
        Layer::Rulers,
        opts.scale_point(p1),
        opts.scale_point(p2),
    ))
}

pub fn add_rulers<C: Canvas>(
    canvas: &mut C,
    plan: &Plan,
    bounds: &mut Bounds,
    code: Option<&str>,
    opts: &Options,
) {
    for r in plan.records(Kind::Rulers).filter(|r| r.belongs_to(code)) {
        match ruler(r, opts) {
            Some(p) => emit(canvas, bounds, p),
            None => skipped(Kind::Rulers, &r),
        }
    }
}
