// ABOUTME: Neighbour queries over the interleaved box/divider sequence.
// ABOUTME: Skips hidden boxes and hidden dividers; derived fresh on every call.

use divbox_core::{BoxId, DividerId};

use crate::model::Slot;

/// Nearest visible box before `divider`
pub(crate) fn prev_box<E>(slots: &[Slot<E>], divider: usize) -> Option<usize> {
    (0..divider.min(slots.len()))
        .rev()
        .find(|&i| matches!(&slots[i], Slot::Box(pane) if !pane.hidden))
}

/// Nearest visible box after `divider`
pub(crate) fn next_box<E>(slots: &[Slot<E>], divider: usize) -> Option<usize> {
    (divider + 1..slots.len()).find(|&i| matches!(&slots[i], Slot::Box(pane) if !pane.hidden))
}

/// Nearest visible divider before `box_slot`, unless the box is hidden
pub(crate) fn prev_divider<E>(slots: &[Slot<E>], box_slot: usize) -> Option<usize> {
    if is_hidden_box(slots, box_slot) {
        return None;
    }
    adjacent_divider(slots, box_slot, false)
}

/// Nearest visible divider after `box_slot`, unless the box is hidden
pub(crate) fn next_divider<E>(slots: &[Slot<E>], box_slot: usize) -> Option<usize> {
    if is_hidden_box(slots, box_slot) {
        return None;
    }
    adjacent_divider(slots, box_slot, true)
}

/// Walk away from `box_slot` past hidden boxes and hidden dividers until a
/// visible divider turns up. A visible box in the way means there is none.
pub(crate) fn adjacent_divider<E>(slots: &[Slot<E>], box_slot: usize, forward: bool) -> Option<usize> {
    let step = |i: usize| -> Option<usize> {
        if forward {
            (i + 1 < slots.len()).then_some(i + 1)
        } else {
            i.checked_sub(1)
        }
    };
    let mut cursor = step(box_slot);
    while let Some(i) = cursor {
        match &slots[i] {
            Slot::Divider(divider) if divider.visible => return Some(i),
            Slot::Box(pane) if !pane.hidden => return None,
            _ => cursor = step(i),
        }
    }
    None
}

fn is_hidden_box<E>(slots: &[Slot<E>], slot: usize) -> bool {
    matches!(slots.get(slot), Some(Slot::Box(pane)) if pane.hidden)
}

/// Slot indices of every box, hidden or not, in layout order
pub(crate) fn box_slots<E>(slots: &[Slot<E>]) -> impl Iterator<Item = usize> + '_ {
    slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_box())
        .map(|(i, _)| i)
}

/// Slot index of the `index`-th box
pub(crate) fn nth_box<E>(slots: &[Slot<E>], index: usize) -> Option<usize> {
    box_slots(slots).nth(index)
}

pub(crate) fn find_box<E>(slots: &[Slot<E>], id: BoxId) -> Option<usize> {
    slots
        .iter()
        .position(|slot| matches!(slot, Slot::Box(pane) if pane.id == id))
}

pub(crate) fn find_divider<E>(slots: &[Slot<E>], id: DividerId) -> Option<usize> {
    slots
        .iter()
        .position(|slot| matches!(slot, Slot::Divider(divider) if divider.id == id))
}
