use std::path::Path;

use count_chars_domain::pattern::GlobPattern;
use count_chars_ports::filesystem::{BookEntryDto, BookEnumerator, ListingPlan};
use count_chars_shared_kernel::{InfrastructureError, Result};
use ignore::WalkBuilder;
use log::debug;

/// Filesystem adapter implementing the `BookEnumerator` port on top of the
/// `ignore` walker.
///
/// Without `recursive`, every direct entry of the root is reported, files and
/// directories alike, and the caller decides what to do with non-files. With
/// `recursive`, directories are descended and only their leaves are reported.
/// Entries come back sorted by file name within each directory.
#[derive(Debug, Default)]
pub struct DirectoryEnumerator;

impl DirectoryEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(plan: &ListingPlan) -> Result<Vec<BookEntryDto>> {
        ensure_directory(&plan.root)?;
        let matcher = PlanMatcher::new(plan)?;

        let mut builder = WalkBuilder::new(&plan.root);
        // No ignore files: the listing is plain, only hidden-ness is optional.
        builder
            .standard_filters(false)
            .hidden(!plan.include_hidden)
            .follow_links(plan.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !plan.recursive {
            builder.max_depth(Some(1));
        }

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|err| InfrastructureError::DirectoryRead {
                path: plan.root.clone(),
                details: err.to_string(),
            })?;
            if entry.depth() == 0 {
                continue;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if plan.recursive && is_dir {
                continue;
            }

            let path = entry.into_path();
            let name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
            if !matcher.matches(&name, &path) {
                debug!("filtered out {}", path.display());
                continue;
            }
            let is_file = is_regular_file(&path);
            entries.push(BookEntryDto { path, name, is_file });
        }
        Ok(entries)
    }
}

impl BookEnumerator for DirectoryEnumerator {
    fn collect(&self, plan: &ListingPlan) -> Result<Vec<BookEntryDto>> {
        Self::enumerate(plan)
    }
}

fn ensure_directory(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|err| InfrastructureError::DirectoryRead {
        path: root.to_path_buf(),
        details: err.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::DirectoryRead {
            path: root.to_path_buf(),
            details: "not a directory".to_string(),
        }
        .into());
    }
    Ok(())
}

// Resolves symlinks: a link to a regular file is a book, a broken link is not.
// `follow_links` only governs descent into linked directories.
fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|md| md.is_file())
}

struct PlanMatcher {
    include: Vec<GlobPattern>,
    exclude: Vec<GlobPattern>,
    extensions: Vec<String>,
}

impl PlanMatcher {
    fn new(plan: &ListingPlan) -> Result<Self> {
        Ok(Self {
            include: GlobPattern::compile_all(&plan.include_patterns)?,
            exclude: GlobPattern::compile_all(&plan.exclude_patterns)?,
            extensions: plan
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        })
    }

    fn matches(&self, name: &str, path: &Path) -> bool {
        if !self.extensions.is_empty() {
            let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
            if !ext.is_some_and(|ext| self.extensions.contains(&ext)) {
                return false;
            }
        }
        if !self.include.is_empty() && !self.include.iter().any(|p| p.matches(name)) {
            return false;
        }
        !self.exclude.iter().any(|p| p.matches(name))
    }
}
