//! Color Applicator
//!
//! Repaints the material slots resolved for a category:
//!
//! - a node with one slot has that slot painted;
//! - a node with several slots has only the slot mapped to the category
//!   painted, and is skipped when the category owns no slot or the slot is
//!   out of range.
//!
//! Skips are per node and never abort the remaining nodes. Membership in the
//! [`PartIndex`] is never modified.

use glam::Vec3;

use crate::parts::config::ClassifierConfig;
use crate::parts::{Category, PartIndex};
use crate::scene::SceneGraph;

/// What one application touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub painted: usize,
    pub skipped: usize,
}

impl ApplyReport {
    #[inline]
    #[must_use]
    pub fn changed_anything(&self) -> bool {
        self.painted > 0
    }
}

impl std::ops::AddAssign for ApplyReport {
    fn add_assign(&mut self, rhs: Self) {
        self.painted += rhs.painted;
        self.skipped += rhs.skipped;
    }
}

/// Paints every slot resolved for `category` with `color`.
///
/// A category with no members is a no-op.
pub fn apply_color(
    scene: &mut SceneGraph,
    index: &PartIndex,
    config: &ClassifierConfig,
    category: Category,
    color: Vec3,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    let slot = config.slot_for(category);

    for &handle in index.get(category) {
        let Some(binding) = scene.material_mut(handle) else {
            log::warn!("Stale or non-renderable node in '{category}' list, skipping");
            report.skipped += 1;
            continue;
        };

        if let Some(material) = binding.sole_slot_mut() {
            material.set_color(color);
            report.painted += 1;
            continue;
        }

        let slot_count = binding.slot_count();
        match slot.and_then(|i| binding.slot_mut(i)) {
            Some(material) => {
                material.set_color(color);
                report.painted += 1;
            }
            None => {
                log::debug!(
                    "No slot for '{category}' (mapped {slot:?}) on mesh with {slot_count} slots, skipping"
                );
                report.skipped += 1;
            }
        }
    }

    report
}

/// Applies several category colors in the given order.
pub fn apply_all_colors<I>(
    scene: &mut SceneGraph,
    index: &PartIndex,
    config: &ClassifierConfig,
    colors: I,
) -> ApplyReport
where
    I: IntoIterator<Item = (Category, Vec3)>,
{
    let mut report = ApplyReport::default();
    for (category, color) in colors {
        report += apply_color(scene, index, config, category, color);
    }
    report
}
