use super::{Catalog, Category, ClipGroup};
use crate::{Config, domain::ClipDescriptor};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const CATEGORY_DEPTH: usize = 1;
const GROUP_DEPTH: usize = 2;
const CLIP_DEPTH: usize = 3;

pub struct Library {
    root: PathBuf,
    page_size: usize,
    label_width: usize,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>, page_size: usize, label_width: usize) -> Self {
        Library {
            root: root.into(),
            page_size: page_size.max(1),
            label_width,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.sounds_root()?,
            config.page_size,
            config.label_width,
        ))
    }

    /// Walk `<root>/<category>/<subcategory>/<clip>`.
    ///
    /// Entries at every level are visited in sorted file name order, so the
    /// catalog's insertion order is the display order. A missing root or an
    /// unreadable directory fails the whole scan.
    pub fn scan(&self) -> Result<Catalog> {
        if !self.root.is_dir() {
            bail!("Sound directory not found: {}", self.root.display());
        }

        let mut catalog = Catalog::default();

        let walker = WalkDir::new(&self.root)
            .min_depth(CATEGORY_DEPTH)
            .max_depth(CLIP_DEPTH)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            let entry = entry
                .with_context(|| format!("Could not read {}", self.root.display()))?;
            let is_dir = entry.file_type().is_dir();

            match entry.depth() {
                CATEGORY_DEPTH if is_dir => {
                    catalog
                        .categories
                        .insert(entry_name(&entry), Category::default());
                }
                GROUP_DEPTH if is_dir => {
                    if let Some((_, category)) = catalog.categories.last_mut() {
                        category
                            .groups
                            .insert(entry_name(&entry), ClipGroup::default());
                    }
                }
                CLIP_DEPTH if entry.file_type().is_file() => {
                    let clip = ClipDescriptor::from_path(entry.path(), self.label_width);

                    if let Some(group) = catalog
                        .categories
                        .last_mut()
                        .and_then(|(_, c)| c.groups.last_mut())
                        .map(|(_, g)| g)
                    {
                        group.push(clip, self.page_size);
                    }
                }
                _ => (),
            }
        }

        tracing::info!(
            root = %self.root.display(),
            categories = catalog.categories.len(),
            clips = catalog.clip_count(),
            "Scanned sound library"
        );

        Ok(catalog)
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}
