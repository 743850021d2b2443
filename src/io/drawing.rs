use super::*;
use ::dxf::entities::{Entity, EntityType, Line, LwPolyline, Text};
use ::dxf::enums::{AcadVersion, DrawingUnits, Units};
use ::dxf::{Color, Drawing, LwPolylineVertex};
use std::path::Path;

/// Format version of written drawings.
pub const DXF_VERSION: AcadVersion = AcadVersion::R2010;

/// A DXF drawing being built up from primitives.
///
/// Layers are declared as primitives arrive. Entities are held back until the drawing is
/// finished, so the layer table is written first and each layer appears in it once.
pub struct DxfDocument {
    drawing: Drawing,
    layers: LayerTable,
    entities: Vec<Entity>,
}

impl Default for DxfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfDocument {
    /// An empty drawing in millimetres.
    pub fn new() -> Self {
        let mut drawing = Drawing::new();
        drawing.header.version = DXF_VERSION;
        drawing.header.default_drawing_units = Units::Millimeters;
        drawing.header.drawing_units = DrawingUnits::Metric;

        Self {
            drawing,
            layers: LayerTable::new(),
            entities: Vec::new(),
        }
    }

    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// Declare a layer ahead of drawing on it.
    pub fn ensure_layer(&mut self, name: &str, color: Option<u8>) {
        self.layers.ensure(name, color);
    }

    /// Record the drawing extents in the header (`$EXTMIN`/`$EXTMAX`).
    pub fn set_extents(&mut self, e: Extents2) {
        self.drawing.header.minimum_drawing_extents = to_dxf_point(e.min);
        self.drawing.header.maximum_drawing_extents = to_dxf_point(e.max);
    }

    /// Finish the drawing, writing out the layer table and then the entities.
    pub fn into_drawing(self) -> Drawing {
        let DxfDocument {
            mut drawing,
            layers,
            entities,
        } = self;

        for def in layers.iter() {
            let mut layer = ::dxf::tables::Layer::default();
            layer.name = def.name.clone();
            if let Some(c) = def.color {
                layer.color = Color::from_index(c);
            }
            drawing.add_layer(layer);
        }

        // layers exist by now, so adding entities creates no default ones
        for e in entities {
            drawing.add_entity(e);
        }

        drawing.normalize();
        drawing
    }

    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.into_drawing()
            .save_file(path)
            .map_err(|e| Error::Write {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

impl Canvas for DxfDocument {
    fn draw(&mut self, prim: Primitive) {
        let Primitive { layer, shape } = prim;
        let name = layer.name();
        self.layers.ensure(&name, Some(layer.color()));

        let specific = match shape {
            Shape::Polyline { points, closed } => {
                let mut polyline = LwPolyline::default();
                polyline.vertices = points
                    .into_iter()
                    .map(|[x, y]| LwPolylineVertex {
                        x,
                        y,
                        ..Default::default()
                    })
                    .collect();
                polyline.set_is_closed(closed);
                EntityType::LwPolyline(polyline)
            }
            Shape::Line { from, to } => {
                EntityType::Line(Line::new(to_dxf_point(from), to_dxf_point(to)))
            }
            Shape::Text {
                value,
                height,
                insert,
            } => {
                let mut text = Text::default();
                text.location = to_dxf_point(insert);
                text.text_height = height;
                text.value = value;
                EntityType::Text(text)
            }
        };

        let mut entity = Entity::new(specific);
        entity.common.layer = name.into_owned();
        self.entities.push(entity);
    }
}

/// Draw `plan` (or its sub-plan `code`) into a new drawing and save it to `path`.
///
/// Extents are only written to the header if something was drawn.
pub fn write_plan<P: AsRef<Path>>(
    plan: &Plan,
    path: P,
    code: Option<&str>,
    opts: &Options,
) -> Result<Bounds> {
    let mut doc = DxfDocument::new();
    let bounds = build(&mut doc, plan, code, opts);

    if let Some(e) = bounds.extents() {
        doc.set_extents(e);
    }

    doc.save(path)?;
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_declared_once_with_colour() {
        let mut doc = DxfDocument::new();
        doc.draw(Primitive::line(Layer::Rulers, [0.0, 0.0], [1.0, 1.0]));
        doc.draw(Primitive::line(Layer::Rulers, [2.0, 0.0], [3.0, 1.0]));
        doc.draw(Primitive::polygon(
            Layer::Walls(Some('a')),
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        ));

        let layers = doc.layers().iter().cloned().collect::<Vec<_>>();
        assert_eq!(
            layers,
            [
                LayerDef {
                    name: "Rulers".into(),
                    color: Some(5)
                },
                LayerDef {
                    name: "Walls_A".into(),
                    color: Some(7)
                },
            ]
        );

        let drawing = doc.into_drawing();
        for (name, color) in [("Rulers", 5), ("Walls_A", 7)] {
            let found = drawing
                .layers()
                .filter(|l| l.name == name)
                .map(|l| l.color.index())
                .collect::<Vec<_>>();
            assert_eq!(found, [Some(color)], "layer {}", name);
        }
        assert_eq!(drawing.entities().count(), 3);
    }

    #[test]
    fn predeclared_layer_takes_drawn_colour() {
        let mut doc = DxfDocument::new();
        doc.ensure_layer("Rooms", None);
        doc.ensure_layer("Notes", Some(1));
        doc.draw(Primitive::polygon(
            Layer::Rooms,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        ));

        assert_eq!(doc.layers().len(), 2);
        assert_eq!(doc.layers().get("Rooms").unwrap().color, Some(252));
        assert_eq!(doc.layers().get("Notes").unwrap().color, Some(1));

        let drawing = doc.into_drawing();
        let rooms = drawing
            .layers()
            .filter(|l| l.name == "Rooms")
            .map(|l| l.color.index())
            .collect::<Vec<_>>();
        assert_eq!(rooms, [Some(252)]);
    }

    #[test]
    fn saved_layers_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rulers.dxf");

        let mut doc = DxfDocument::new();
        doc.draw(Primitive::line(Layer::Rulers, [0.0, 0.0], [1.0, 0.0]));
        doc.draw(Primitive::line(Layer::Rulers, [0.0, 1.0], [1.0, 1.0]));
        doc.draw(Primitive::polygon(
            Layer::Doors,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        ));
        doc.save(&path).unwrap();

        let drawing = Drawing::load_file(&path).unwrap();
        let mut layers = drawing
            .layers()
            .map(|l| (l.name.clone(), l.color.index()))
            .filter(|(name, _)| name != "0")
            .collect::<Vec<_>>();
        layers.sort();
        assert_eq!(
            layers,
            [
                ("Doors".to_string(), Some(3)),
                ("Rulers".to_string(), Some(5))
            ]
        );
    }

    #[test]
    fn header_units_and_extents() {
        let mut doc = DxfDocument::new();
        doc.set_extents(Extents2::from_min_max([-1.0, -2.0], [3.0, 4.0]));
        let drawing = doc.into_drawing();

        assert_eq!(drawing.header.version, AcadVersion::R2010);
        assert_eq!(drawing.header.default_drawing_units, Units::Millimeters);
        assert_eq!(drawing.header.drawing_units, DrawingUnits::Metric);
        assert_eq!(
            drawing.header.minimum_drawing_extents,
            ::dxf::Point::new(-1.0, -2.0, 0.0)
        );
        assert_eq!(
            drawing.header.maximum_drawing_extents,
            ::dxf::Point::new(3.0, 4.0, 0.0)
        );
    }

    #[test]
    fn shapes_become_entities() {
        let mut doc = DxfDocument::new();
        doc.draw(Primitive::polyline(
            Layer::Ventilation,
            vec![[0.0, 0.0], [5.0, 0.0], [5.0, 5.0]],
        ));
        doc.draw(Primitive::text(
            Layer::RoomsText,
            "Hall".into(),
            150.0,
            [2.0, 3.0],
        ));
        let drawing = doc.into_drawing();
        let es = drawing.entities().collect::<Vec<_>>();

        assert_eq!(es[0].common.layer, "Ventilation");
        match &es[0].specific {
            EntityType::LwPolyline(p) => {
                assert!(!p.is_closed());
                assert_eq!(p.vertices.len(), 3);
                assert_eq!((p.vertices[2].x, p.vertices[2].y), (5.0, 5.0));
            }
            e => panic!("unexpected entity {:?}", e),
        }

        assert_eq!(es[1].common.layer, "Rooms_Text");
        match &es[1].specific {
            EntityType::Text(t) => {
                assert_eq!(t.value, "Hall");
                assert_eq!(t.text_height, 150.0);
                assert_eq!(t.location, ::dxf::Point::new(2.0, 3.0, 0.0));
            }
            e => panic!("unexpected entity {:?}", e),
        }
    }
}
