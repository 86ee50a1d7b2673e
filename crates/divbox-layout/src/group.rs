// ABOUTME: Finds the run of dividers and pinned boxes that must move as one.
// ABOUTME: A pinned box between two dividers keeps its size by travelling with both.

use crate::model::Slot;
use crate::topology::{next_box, next_divider, prev_box, prev_divider};

/// Dividers that move together when one of them is dragged, plus the boxes
/// on either end that absorb the movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerGroup {
    /// Divider slots in layout order
    pub dividers: Vec<usize>,
    /// Pinned box slots carried along, in layout order
    pub pinned: Vec<usize>,
    /// Box before the first divider; grows when the group moves forward
    pub prev: Option<usize>,
    /// Box after the last divider; shrinks when the group moves forward
    pub next: Option<usize>,
}

impl DividerGroup {
    /// Both end boxes, if the group can move at all
    pub fn ends(&self) -> Option<(usize, usize)> {
        Some((self.prev?, self.next?))
    }
}

pub(crate) fn resolve<E>(slots: &[Slot<E>], divider: usize) -> DividerGroup {
    let mut dividers = vec![divider];
    let mut pinned = Vec::new();

    let next = walk(slots, divider, true, &mut dividers, &mut pinned);
    let prev = walk(slots, divider, false, &mut dividers, &mut pinned);

    dividers.sort_unstable();
    pinned.sort_unstable();
    DividerGroup {
        dividers,
        pinned,
        prev,
        next,
    }
}

/// Follow pinned boxes away from `divider`, collecting them and the dividers
/// past them. Returns the first unpinned box, or None at a boundary.
fn walk<E>(
    slots: &[Slot<E>],
    divider: usize,
    forward: bool,
    dividers: &mut Vec<usize>,
    pinned: &mut Vec<usize>,
) -> Option<usize> {
    let mut cursor = divider;
    loop {
        let neighbour = if forward {
            next_box(slots, cursor)
        } else {
            prev_box(slots, cursor)
        }?;
        let is_pinned = slots[neighbour].as_box().is_some_and(|pane| pane.is_pinned());
        if !is_pinned {
            return Some(neighbour);
        }
        pinned.push(neighbour);
        cursor = if forward {
            next_divider(slots, neighbour)
        } else {
            prev_divider(slots, neighbour)
        }?;
        dividers.push(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::tests::slots;

    #[test]
    fn unpinned_neighbours_give_single_divider() {
        let s = slots("B|B|B");
        let group = resolve(&s, 1);
        assert_eq!(group.dividers, vec![1]);
        assert!(group.pinned.is_empty());
        assert_eq!(group.ends(), Some((0, 2)));
    }

    #[test]
    fn fixed_box_pulls_in_far_divider() {
        let s = slots("B|F|B");
        let group = resolve(&s, 1);
        assert_eq!(group.dividers, vec![1, 3]);
        assert_eq!(group.pinned, vec![2]);
        assert_eq!(group.ends(), Some((0, 4)));

        // Same group from the other side
        assert_eq!(resolve(&s, 3), group);
    }

    #[test]
    fn runs_of_pinned_boxes() {
        let s = slots("B|F|F|B|F|B");
        let group = resolve(&s, 5);
        assert_eq!(group.dividers, vec![1, 3, 5]);
        assert_eq!(group.pinned, vec![2, 4]);
        assert_eq!(group.ends(), Some((0, 6)));

        let group = resolve(&s, 7);
        assert_eq!(group.dividers, vec![7, 9]);
        assert_eq!(group.pinned, vec![8]);
        assert_eq!(group.ends(), Some((6, 10)));
    }

    #[test]
    fn pinned_run_to_boundary_has_no_end() {
        let s = slots("B|F");
        let group = resolve(&s, 1);
        assert_eq!(group.dividers, vec![1]);
        assert_eq!(group.pinned, vec![2]);
        assert_eq!(group.prev, Some(0));
        assert_eq!(group.next, None);
        assert_eq!(group.ends(), None);
    }

    #[test]
    fn keep_size_pins_like_fixed() {
        let mut s = slots("B|B|B");
        s[2].as_box_mut().unwrap().keep = true;
        let group = resolve(&s, 1);
        assert_eq!(group.dividers, vec![1, 3]);
        assert_eq!(group.ends(), Some((0, 4)));
    }

    #[test]
    fn resolves_over_owned_elements() {
        use crate::model::{Divider, Pane};
        use divbox_core::{BoxConfig, BoxId, DividerId};

        let pane = |id: u64, fixed: bool| {
            Slot::Box(Pane {
                id: BoxId(id),
                element: format!("pane-{id}"),
                config: BoxConfig::default(),
                fixed,
                keep: false,
                hidden: false,
                virtual_size: None,
                managed: true,
                hidden_divider: None,
                needs_divider_claim: false,
            })
        };
        let s: Vec<Slot<String>> = vec![
            pane(0, false),
            Slot::Divider(Divider::new(DividerId(1), 1.0)),
            pane(2, true),
            Slot::Divider(Divider::new(DividerId(3), 1.0)),
            pane(4, false),
        ];
        let group = resolve(&s, 1);
        assert_eq!(group.dividers, vec![1, 3]);
        assert_eq!(group.ends(), Some((0, 4)));
    }

    #[test]
    fn hidden_boxes_are_stepped_over() {
        let s = slots("B|h:F|B");
        let group = resolve(&s, 1);
        assert_eq!(group.dividers, vec![1, 5]);
        assert_eq!(group.pinned, vec![4]);
        assert_eq!(group.ends(), Some((0, 6)));
    }
}
