use crate::domain::ClipDescriptor;
use indexmap::IndexMap;
use std::sync::Arc;

/// category -> subcategory -> clips, in sorted directory order
#[derive(Default)]
pub struct Catalog {
    pub categories: IndexMap<String, Category>,
}

#[derive(Default)]
pub struct Category {
    pub groups: IndexMap<String, ClipGroup>,
}

/// Clips of one subcategory.
///
/// `visible` holds at most one page; everything past it waits in
/// `deferred` until the user asks for more.
#[derive(Default)]
pub struct ClipGroup {
    pub visible: Vec<Arc<ClipDescriptor>>,
    pub deferred: Vec<Arc<ClipDescriptor>>,
}

impl Catalog {
    pub fn clip_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|c| c.groups.values())
            .map(ClipGroup::len)
            .sum()
    }

    pub fn get_group(&self, category: &str, group: &str) -> Option<&ClipGroup> {
        self.categories.get(category)?.groups.get(group)
    }
}

impl ClipGroup {
    pub(super) fn push(&mut self, clip: ClipDescriptor, page_size: usize) {
        match self.visible.len() < page_size {
            true => self.visible.push(Arc::new(clip)),
            false => self.deferred.push(Arc::new(clip)),
        }
    }

    pub fn len(&self) -> usize {
        self.visible.len() + self.deferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_more(&self) -> bool {
        !self.deferred.is_empty()
    }
}
