//! Placement of incoming symbols in the target document.

use log::debug;

use stencil_core::{
    document::{Document, SymbolLocation},
    geometry::Point,
    layer::SymbolMaster,
};

/// Moves `master` onto the page named `page_name`, at `position`.
///
/// The page is looked up by exact name (first match) and created blank when
/// missing. The origin of the master's frame is overwritten with `position`;
/// its size is kept.
pub fn place(
    target: &mut Document,
    mut master: SymbolMaster,
    page_name: &str,
    position: Point,
) -> SymbolLocation {
    let page = target.page_or_create(page_name);
    master.set_frame(master.frame().with_origin(position));

    debug!(
        symbol = master.name(),
        page = page_name,
        x = position.x(),
        y = position.y();
        "Placing symbol"
    );
    target.add_layer(page, master)
}

#[cfg(test)]
mod tests {
    use stencil_core::{
        document::Page,
        geometry::{Rect, Size},
    };

    use super::*;

    #[test]
    fn test_place_on_existing_page() {
        let mut doc = Document::new()
            .with_page(Page::new("Cover"))
            .with_page(Page::new("Symbols"));
        let master = SymbolMaster::new(
            "1",
            "A",
            Rect::new(Point::new(1.0, 2.0), Size::new(30.0, 40.0)),
        );

        let loc = place(&mut doc, master, "Symbols", Point::new(100.0, 200.0));

        assert_eq!(loc, SymbolLocation::new(1, 0));
        assert_eq!(doc.pages().len(), 2);
        let placed = doc.symbol_at(loc).unwrap();
        assert_eq!(placed.frame().origin(), Point::new(100.0, 200.0));
        assert_eq!(placed.frame().size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_place_creates_missing_page() {
        let mut doc = Document::new().with_page(Page::new("Cover"));
        let master = SymbolMaster::new("1", "A", Rect::default());

        let loc = place(&mut doc, master, "Icons", Point::new(5.0, 5.0));

        assert_eq!(loc, SymbolLocation::new(1, 0));
        assert_eq!(doc.pages()[1].name(), "Icons");
    }

    #[test]
    fn test_page_names_are_exact() {
        let mut doc = Document::new().with_page(Page::new("symbols"));
        place(&mut doc, SymbolMaster::new("1", "A", Rect::default()), "Symbols", Point::default());

        assert_eq!(doc.pages().len(), 2);
    }
}
