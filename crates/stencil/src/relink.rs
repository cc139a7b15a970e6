//! Repair of instances after a symbol has been replaced.

use log::debug;

use stencil_core::{
    document::{Document, SymbolLocation},
    identifier::Id,
};

/// Repoints every instance of the master at `old` to `new_symbol_id`, then
/// removes the old master from the document.
///
/// Instances keep their frame and overrides. Returns the number of
/// instances that were repointed; zero if `old` is not a master.
pub fn relink(target: &mut Document, old: SymbolLocation, new_symbol_id: Id) -> usize {
    let Some(old_symbol_id) = target.symbol_at(old).map(|master| master.symbol_id()) else {
        return 0;
    };

    let repointed = target.repoint_instances(old_symbol_id, new_symbol_id);
    target.remove_layer(old);

    debug!(
        old:% = old_symbol_id,
        new:% = new_symbol_id,
        repointed;
        "Relinked instances"
    );
    repointed
}

#[cfg(test)]
mod tests {
    use stencil_core::{
        document::Page,
        geometry::{Point, Rect, Size},
        layer::{Layer, SymbolInstance, SymbolMaster},
    };

    use super::*;

    #[test]
    fn test_relink_repoints_and_removes() {
        let frame = Rect::new(Point::new(7.0, 8.0), Size::new(9.0, 10.0));
        let mut doc = Document::new()
            .with_page(Page::new("Symbols").with_layers(vec![
                SymbolMaster::new("old", "Button", Rect::default()).into(),
                SymbolMaster::new("new", "Button", Rect::default()).into(),
            ]))
            .with_page(Page::new("Screens").with_layers(vec![
                SymbolInstance::new("cta", frame, "old")
                    .with_override("label", "Buy")
                    .into(),
                SymbolInstance::new("other", Rect::default(), "unrelated").into(),
            ]));

        let count = relink(&mut doc, SymbolLocation::new(0, 0), Id::new("new"));

        assert_eq!(count, 1);
        assert!(doc.master(Id::new("old")).is_none());
        let instances = doc.instances_of(Id::new("new"));
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].frame(), frame);
        assert_eq!(instances[0].overrides().get("label").map(String::as_str), Some("Buy"));
        assert_eq!(doc.instances_of(Id::new("unrelated")).len(), 1);
    }

    #[test]
    fn test_relink_non_master_is_noop() {
        let mut doc = Document::new().with_page(Page::new("P").with_layers(vec![
            Layer::from(SymbolInstance::new("i", Rect::default(), "x")),
        ]));

        assert_eq!(relink(&mut doc, SymbolLocation::new(0, 0), Id::new("y")), 0);
        assert_eq!(doc.pages()[0].layers().len(), 1);
    }
}
