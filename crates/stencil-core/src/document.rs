//! In-memory design documents.
//!
//! A [`Document`] is an ordered list of [`Page`]s, each owning a list of
//! top-level layers. Symbol masters live at the top level of a page; the
//! document-wide symbol collection is every such master in page order, then
//! layer order.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    identifier::Id,
    layer::{Layer, SymbolInstance, SymbolMaster},
};

/// Position of a top-level layer: page index and index within that page.
///
/// Appending layers or pages never invalidates a location; removing a layer
/// invalidates locations after it on the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolLocation {
    page: usize,
    index: usize,
}

impl SymbolLocation {
    pub fn new(page: usize, index: usize) -> Self {
        Self { page, index }
    }

    pub fn page(self) -> usize {
        self.page
    }

    pub fn index(self) -> usize {
        self.index
    }
}

/// A named page holding top-level layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    name: String,
    #[serde(default)]
    layers: Vec<Layer>,
}

impl Page {
    /// Creates a blank page.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
        }
    }

    /// Sets the top-level layers (builder style).
    pub fn with_layers(mut self, layers: Vec<Layer>) -> Self {
        self.layers = layers;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

/// A symbol master moved out of its document, along with where it lived.
#[derive(Debug, Clone, PartialEq)]
pub struct DetachedSymbol {
    location: SymbolLocation,
    page_name: String,
    master: SymbolMaster,
}

impl DetachedSymbol {
    /// Location the master had in its former document.
    pub fn location(&self) -> SymbolLocation {
        self.location
    }

    /// Name of the page the master was on.
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    pub fn master(&self) -> &SymbolMaster {
        &self.master
    }

    pub fn into_master(self) -> SymbolMaster {
        self.master
    }
}

/// A design document.
///
/// # Examples
///
/// ```
/// use stencil_core::{
///     document::{Document, Page},
///     geometry::Rect,
///     layer::SymbolMaster,
/// };
///
/// let doc = Document::new().with_page(
///     Page::new("Symbols").with_layers(vec![
///         SymbolMaster::new("1", "Button", Rect::default()).into(),
///     ]),
/// );
///
/// assert_eq!(doc.symbols().count(), 1);
/// assert!(doc.master("1".into()).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pages: Vec<Page>,
    #[serde(default)]
    current_page: usize,
}

impl Document {
    /// Creates a document without pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page (builder style).
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Returns the index of the first page named exactly `name`.
    pub fn page_named(&self, name: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.name == name)
    }

    /// Appends a blank page named `name` and returns its index.
    pub fn add_page(&mut self, name: &str) -> usize {
        debug!(page = name; "Creating page");
        self.pages.push(Page::new(name));
        self.pages.len() - 1
    }

    /// Returns the index of the page named `name`, creating it when absent.
    pub fn page_or_create(&mut self, name: &str) -> usize {
        match self.page_named(name) {
            Some(index) => index,
            None => self.add_page(name),
        }
    }

    /// Appends `layer` to the top level of a page and returns its location.
    ///
    /// # Panics
    ///
    /// Panics if `page` is not a valid page index.
    pub fn add_layer(&mut self, page: usize, layer: impl Into<Layer>) -> SymbolLocation {
        let layers = &mut self.pages[page].layers;
        layers.push(layer.into());
        SymbolLocation::new(page, layers.len() - 1)
    }

    /// Removes the top-level layer at `location`.
    pub fn remove_layer(&mut self, location: SymbolLocation) -> Option<Layer> {
        let layers = &mut self.pages.get_mut(location.page)?.layers;
        (location.index < layers.len()).then(|| layers.remove(location.index))
    }

    /// Iterates over every top-level symbol master in document order.
    pub fn symbols(&self) -> impl Iterator<Item = (SymbolLocation, &SymbolMaster)> {
        self.pages.iter().enumerate().flat_map(|(page_idx, page)| {
            page.layers
                .iter()
                .enumerate()
                .filter_map(move |(index, layer)| {
                    layer
                        .as_master()
                        .map(|master| (SymbolLocation::new(page_idx, index), master))
                })
        })
    }

    /// Returns the master at `location`, if that layer is a master.
    pub fn symbol_at(&self, location: SymbolLocation) -> Option<&SymbolMaster> {
        self.pages
            .get(location.page)?
            .layers
            .get(location.index)?
            .as_master()
    }

    /// Resolves a symbol identifier to the first master carrying it.
    pub fn master(&self, symbol_id: Id) -> Option<(SymbolLocation, &SymbolMaster)> {
        self.symbols()
            .find(|(_, master)| master.symbol_id() == symbol_id)
    }

    /// Returns every instance referencing `symbol_id`, anywhere in the document.
    pub fn instances_of(&self, symbol_id: Id) -> Vec<&SymbolInstance> {
        let mut found = Vec::new();
        for layer in self.pages.iter().flat_map(|page| page.layers.iter()) {
            layer.visit_instances(&mut |instance| {
                if instance.symbol_id() == symbol_id {
                    found.push(instance);
                }
            });
        }
        found
    }

    /// Repoints every instance referencing `old` at `new` and returns how
    /// many instances were changed.
    pub fn repoint_instances(&mut self, old: Id, new: Id) -> usize {
        let mut count = 0;
        for layer in self.pages.iter_mut().flat_map(|page| page.layers.iter_mut()) {
            layer.visit_instances_mut(&mut |instance| {
                if instance.symbol_id() == old {
                    instance.change_symbol(new);
                    count += 1;
                }
            });
        }
        count
    }

    /// Moves every symbol master out of the document, in document order.
    ///
    /// Other layers stay where they are. Locations in the returned symbols
    /// refer to the document as it was before the call.
    pub fn take_symbols(&mut self) -> Vec<DetachedSymbol> {
        let mut detached = Vec::new();
        for (page_idx, page) in self.pages.iter_mut().enumerate() {
            let mut kept = Vec::with_capacity(page.layers.len());
            for (index, layer) in page.layers.drain(..).enumerate() {
                match layer {
                    Layer::SymbolMaster(master) => detached.push(DetachedSymbol {
                        location: SymbolLocation::new(page_idx, index),
                        page_name: page.name.clone(),
                        master,
                    }),
                    other => kept.push(other),
                }
            }
            page.layers = kept;
        }
        detached
    }

    /// Returns the page that is currently shown, if any.
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current_page)
    }

    /// Switches the current page. Out-of-range indices are ignored.
    pub fn set_current_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current_page = index;
        }
    }
}
