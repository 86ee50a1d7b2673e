// ABOUTME: Spreads a container size change across unfixed boxes in proportion to their size.
// ABOUTME: Boxes that hit a bound are pinned for the rest of the call and the shortfall re-spread.

use crate::engine::{DividedBox, LayoutError};
use crate::host::BoxHost;
use crate::model::Slot;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PassOutcome {
    applied: f64,
    pinned: usize,
}

impl<H: BoxHost> DividedBox<H> {
    /// Distribute `delta` over the unfixed boxes. Returns the part no box
    /// could take without leaving its bounds.
    pub(crate) fn redistribute(&mut self, delta: f64) -> Result<f64, LayoutError> {
        let tolerance = self.settings.tolerance;
        let cap = self
            .settings
            .max_redistribute_passes
            .unwrap_or(self.box_count() + 1)
            .max(1);

        let mut pinned = Vec::new();
        let mut remain = delta;
        let mut passes = 0;
        let result = loop {
            if remain.abs() <= tolerance {
                break Ok(());
            }
            if passes == cap {
                tracing::warn!("Redistribution stopped after {} passes with {} left", passes, remain);
                break Ok(());
            }
            passes += 1;
            match self.redistribute_pass(remain, &mut pinned) {
                Ok(outcome) => {
                    tracing::trace!(
                        "Pass {} placed {} of {}, pinned {}",
                        passes,
                        outcome.applied,
                        remain,
                        outcome.pinned
                    );
                    remain -= outcome.applied;
                    if outcome.pinned == 0 {
                        break Ok(());
                    }
                }
                Err(e) => break Err(e),
            }
        };

        for slot in pinned {
            if let Some(pane) = self.slots[slot].as_box_mut() {
                pane.keep = false;
            }
        }
        result.map(|()| remain)
    }

    /// One proportional pass. Boxes whose share would break a bound take
    /// exactly up to the bound and are pinned (recorded in `pinned`).
    fn redistribute_pass(&mut self, delta: f64, pinned: &mut Vec<usize>) -> Result<PassOutcome, LayoutError> {
        let unfixed: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| matches!(slot, Slot::Box(pane) if pane.is_unfixed()))
            .map(|(i, _)| i)
            .collect();
        if unfixed.is_empty() {
            return Ok(PassOutcome {
                applied: 0.0,
                pinned: 0,
            });
        }

        let sizes = unfixed
            .iter()
            .map(|&slot| self.outer_size(slot))
            .collect::<Result<Vec<_>, _>>()?;
        let total: f64 = sizes.iter().sum();
        let count = unfixed.len();

        let mut shares: Vec<f64> = if total > self.settings.tolerance {
            sizes.iter().map(|size| delta * size / total).collect()
        } else {
            vec![delta / count as f64; count]
        };
        // Rounding residue lands on the last box
        let assigned: f64 = shares[..count - 1].iter().sum();
        shares[count - 1] = delta - assigned;

        let mut newly_pinned = 0;
        for (k, &slot) in unfixed.iter().enumerate() {
            let Some(pane) = self.slots[slot].as_box_mut() else {
                continue;
            };
            let target = sizes[k] + shares[k];
            let bound = if target > pane.config.upper() {
                Some(pane.config.upper())
            } else if target < pane.config.lower() {
                Some(pane.config.lower())
            } else {
                None
            };
            if let Some(bound) = bound {
                shares[k] = bound - sizes[k];
                pane.keep = true;
                pinned.push(slot);
                newly_pinned += 1;
            }
        }

        let mut offset = 0.0;
        let mut next = 0;
        for slot in 0..self.slots.len() {
            if offset != 0.0 {
                self.shift(slot, offset)?;
            }
            if next < count && unfixed[next] == slot {
                if shares[next] != 0.0 {
                    self.set_outer_size(slot, sizes[next] + shares[next])?;
                }
                offset += shares[next];
                next += 1;
            }
        }

        Ok(PassOutcome {
            applied: shares.iter().sum(),
            pinned: newly_pinned,
        })
    }
}
