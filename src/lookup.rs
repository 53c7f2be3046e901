//! Named control lookup.
//!
//! Depth-first, pre-order search over a control list. The first control whose
//! name matches ends the search of the list it was found in: if it is not a
//! `T`, that list reports nothing, even when a deeper control with the same
//! name has the right type. A parent whose child list reports nothing moves
//! on to its next sibling.

use crate::controls::Control;

/// Find the first control named `name` if it is a `T`.
pub fn find_control<'a, T: Control>(controls: &'a [Box<dyn Control>], name: &str) -> Option<&'a T> {
    for control in controls {
        if control.name() == Some(name) {
            return control.downcast_ref::<T>();
        }

        if let Some(found) = find_control::<T>(control.children(), name) {
            return Some(found);
        }
    }

    None
}

/// Mutable variant of [`find_control`] with identical matching rules.
pub fn find_control_mut<'a, T: Control>(
    controls: &'a mut [Box<dyn Control>],
    name: &str,
) -> Option<&'a mut T> {
    for control in controls {
        if control.name() == Some(name) {
            return control.downcast_mut::<T>();
        }

        if let Some(found) = find_control_mut::<T>(control.children_mut(), name) {
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Button, ControlBase, Label, Panel};

    fn labelled(name: &str, text: &str) -> Box<dyn Control> {
        Box::new(Label {
            base: ControlBase::named(name),
            text: text.to_string(),
        })
    }

    fn panel(name: &str, children: Vec<Box<dyn Control>>) -> Box<dyn Control> {
        let mut panel = Panel::named(name);
        for child in children {
            panel.add_control(child).unwrap();
        }
        Box::new(panel)
    }

    #[test]
    fn test_finds_nested_control() {
        let graph = vec![panel("root", vec![panel("inner", vec![labelled("ok", "found")])])];

        let label = find_control::<Label>(&graph, "ok").unwrap();
        assert_eq!(label.text, "found");
        assert!(find_control::<Label>(&graph, "missing").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let graph = vec![
            panel("a", vec![labelled("dup", "first")]),
            labelled("dup", "second"),
        ];
        assert_eq!(find_control::<Label>(&graph, "dup").unwrap().text, "first");
    }

    #[test]
    fn test_wrong_type_shadows_deeper_match() {
        // "x" is a Panel; a Label named "x" lives inside it
        let graph = vec![panel("x", vec![labelled("x", "hidden")])];
        assert!(find_control::<Label>(&graph, "x").is_none());
        assert!(find_control::<Panel>(&graph, "x").is_some());
    }

    #[test]
    fn test_shadowed_branch_falls_through_to_sibling() {
        // inside "outer" the first "x" is a Button, so that branch reports
        // nothing and the search continues with the next top-level control
        let button: Box<dyn Control> = Box::new(Button {
            base: ControlBase::named("x"),
            text: String::new(),
        });
        let graph = vec![panel("outer", vec![button]), labelled("x", "sibling")];
        assert_eq!(find_control::<Label>(&graph, "x").unwrap().text, "sibling");
    }

    #[test]
    fn test_top_level_wrong_type_stops_search() {
        let graph = vec![labelled("x", "label"), panel("p", vec![])];
        assert!(find_control::<Panel>(&graph, "x").is_none());
    }

    #[test]
    fn test_find_control_mut() {
        let mut graph = vec![panel("root", vec![labelled("title", "old")])];

        find_control_mut::<Label>(&mut graph, "title").unwrap().text = "new".into();
        assert_eq!(find_control::<Label>(&graph, "title").unwrap().text, "new");
    }
}
