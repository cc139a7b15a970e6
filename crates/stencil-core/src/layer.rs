//! Layer tree types.
//!
//! A page owns a list of top-level [`Layer`]s. Symbol masters and groups own
//! further layers, which is how symbols nest inside other symbols: a master
//! whose layer tree contains a [`SymbolInstance`] depends on the master that
//! instance references.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{geometry::Rect, identifier::Id};

/// Custom key/value data stored on a layer.
///
/// This is where import identity (`import_id`, `import_name`) is persisted so
/// that a later import can recognize symbols it already brought in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A reusable component definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMaster {
    symbol_id: Id,
    name: String,
    frame: Rect,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    layers: Vec<Layer>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    user_info: Metadata,
}

impl SymbolMaster {
    /// Creates a master with no layers and no metadata.
    pub fn new(symbol_id: impl Into<Id>, name: impl Into<String>, frame: Rect) -> Self {
        Self {
            symbol_id: symbol_id.into(),
            name: name.into(),
            frame,
            layers: Vec::new(),
            user_info: Metadata::new(),
        }
    }

    /// Sets the child layers (builder style).
    pub fn with_layers(mut self, layers: Vec<Layer>) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the metadata (builder style).
    pub fn with_user_info(mut self, user_info: Metadata) -> Self {
        self.user_info = user_info;
        self
    }

    /// Returns the permanent unique identifier of this symbol.
    pub fn symbol_id(&self) -> Id {
        self.symbol_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn user_info(&self) -> &Metadata {
        &self.user_info
    }

    pub fn user_info_mut(&mut self) -> &mut Metadata {
        &mut self.user_info
    }
}

/// A placement of a symbol master, referencing it by symbol identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolInstance {
    name: String,
    frame: Rect,
    symbol_id: Id,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    overrides: BTreeMap<String, String>,
}

impl SymbolInstance {
    pub fn new(name: impl Into<String>, frame: Rect, symbol_id: impl Into<Id>) -> Self {
        Self {
            name: name.into(),
            frame,
            symbol_id: symbol_id.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Adds an override value (builder style).
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Returns the identifier of the referenced master.
    pub fn symbol_id(&self) -> Id {
        self.symbol_id
    }

    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// Points this instance at another master. Everything else is left as is.
    pub fn change_symbol(&mut self, symbol_id: Id) {
        self.symbol_id = symbol_id;
    }
}

/// A plain container of layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    name: String,
    frame: Rect,
    #[serde(default)]
    layers: Vec<Layer>,
}

impl Group {
    pub fn new(name: impl Into<String>, frame: Rect, layers: Vec<Layer>) -> Self {
        Self {
            name: name.into(),
            frame,
            layers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

/// Any other visual layer (paths, text, bitmaps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    name: String,
    frame: Rect,
}

impl Shape {
    pub fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }
}

/// A node in a page's layer tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    SymbolMaster(SymbolMaster),
    SymbolInstance(SymbolInstance),
    Group(Group),
    Shape(Shape),
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Self::SymbolMaster(master) => master.name(),
            Self::SymbolInstance(instance) => instance.name(),
            Self::Group(group) => group.name(),
            Self::Shape(shape) => shape.name(),
        }
    }

    pub fn frame(&self) -> Rect {
        match self {
            Self::SymbolMaster(master) => master.frame(),
            Self::SymbolInstance(instance) => instance.frame(),
            Self::Group(group) => group.frame(),
            Self::Shape(shape) => shape.frame(),
        }
    }

    /// Returns the direct children of a master or group; empty for leaves.
    pub fn layers(&self) -> &[Layer] {
        match self {
            Self::SymbolMaster(master) => master.layers(),
            Self::Group(group) => group.layers(),
            Self::SymbolInstance(_) | Self::Shape(_) => &[],
        }
    }

    fn layers_mut(&mut self) -> &mut [Layer] {
        match self {
            Self::SymbolMaster(master) => &mut master.layers,
            Self::Group(group) => &mut group.layers,
            Self::SymbolInstance(_) | Self::Shape(_) => &mut [],
        }
    }

    pub fn as_master(&self) -> Option<&SymbolMaster> {
        match self {
            Self::SymbolMaster(master) => Some(master),
            _ => None,
        }
    }

    /// Calls `f` for this layer and every layer below it that is an instance.
    pub fn visit_instances<'a>(&'a self, f: &mut impl FnMut(&'a SymbolInstance)) {
        if let Self::SymbolInstance(instance) = self {
            f(instance);
        }
        for child in self.layers() {
            child.visit_instances(f);
        }
    }

    /// Mutable counterpart of [`Layer::visit_instances`].
    pub fn visit_instances_mut(&mut self, f: &mut impl FnMut(&mut SymbolInstance)) {
        if let Self::SymbolInstance(instance) = self {
            f(instance);
        }
        for child in self.layers_mut() {
            child.visit_instances_mut(f);
        }
    }
}

impl From<SymbolMaster> for Layer {
    fn from(master: SymbolMaster) -> Self {
        Self::SymbolMaster(master)
    }
}

impl From<SymbolInstance> for Layer {
    fn from(instance: SymbolInstance) -> Self {
        Self::SymbolInstance(instance)
    }
}

impl From<Group> for Layer {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Shape> for Layer {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}
