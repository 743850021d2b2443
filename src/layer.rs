use crate::*;
use rustc_hash::FxHashMap as HashMap;
use std::borrow::Cow;
use std::fmt;

/// Output layers, named and coloured by what they hold.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Wall outlines, optionally split per sub-plan letter.
    Walls(Option<char>),
    Doors,
    Windows,
    Openings,
    Rooms,
    RoomsText,
    Furniture,
    Ventilation,
    Rulers,
}

impl Layer {
    /// Wall layer for a wall tagged with `tag`.
    ///
    /// A single letter string tag gets its own `Walls_<LETTER>` layer.
    pub fn walls(tag: PlanTag) -> Self {
        Layer::Walls(tag.letter())
    }

    /// Hole layer from the free text `group` of a hole.
    pub fn hole(group: &str) -> Self {
        let group = group.to_lowercase();
        if group.contains("door") {
            Layer::Doors
        } else if group.contains("window") {
            Layer::Windows
        } else {
            Layer::Openings
        }
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Layer::Walls(None) => "Walls".into(),
            Layer::Walls(Some(c)) => format!("Walls_{}", c.to_uppercase()).into(),
            Layer::Doors => "Doors".into(),
            Layer::Windows => "Windows".into(),
            Layer::Openings => "Openings".into(),
            Layer::Rooms => "Rooms".into(),
            Layer::RoomsText => "Rooms_Text".into(),
            Layer::Furniture => "Furniture".into(),
            Layer::Ventilation => "Ventilation".into(),
            Layer::Rulers => "Rulers".into(),
        }
    }

    /// AutoCAD colour index.
    pub fn color(&self) -> u8 {
        match self {
            Layer::Walls(_) | Layer::RoomsText => 7,
            Layer::Doors | Layer::Windows | Layer::Openings => 3,
            Layer::Rooms => 252,
            Layer::Furniture => 2,
            Layer::Ventilation => 4,
            Layer::Rulers => 5,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A declared layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerDef {
    pub name: String,
    /// `None` leaves the colour to the drawing's default.
    pub color: Option<u8>,
}

/// Layers declared in one document, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct LayerTable {
    layers: Vec<LayerDef>,
    index: HashMap<String, usize>,
}

impl LayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a layer if it does not exist yet.
    ///
    /// Re-declaring never duplicates a layer. A supplied colour replaces the existing one, a
    /// `None` colour leaves it alone.
    pub fn ensure(&mut self, name: &str, color: Option<u8>) -> &LayerDef {
        let i = match self.index.get(name) {
            Some(&i) => {
                if color.is_some() {
                    self.layers[i].color = color;
                }
                i
            }
            None => {
                let i = self.layers.len();
                self.layers.push(LayerDef {
                    name: name.to_string(),
                    color,
                });
                self.index.insert(name.to_string(), i);
                i
            }
        };

        &self.layers[i]
    }

    pub fn get(&self, name: &str) -> Option<&LayerDef> {
        self.index.get(name).map(|&i| &self.layers[i])
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &LayerDef> {
        self.layers.iter()
    }
}
