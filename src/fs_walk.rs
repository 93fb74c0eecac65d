//! Directory loader: turns a folder of markdown files into the `id -> content` mapping.

use crate::ignore::is_ignored_path;
use crate::model::is_document_name;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path};

pub type Mapping = BTreeMap<String, String>;

/// Walks `root` and keys each document as `prefix` + its `/`-separated path relative to `root`.
/// A missing root yields an empty mapping.
pub fn load_dir(root: &Path, prefix: &str, extra_ignores: &[String]) -> Mapping {
    let mut out = Mapping::new();
    if !root.is_dir() {
        warn!("document root {} not found; no documents loaded", root.display());
        return out;
    }
    walk(root, root, prefix, extra_ignores, &mut out);
    debug!("loaded {} documents from {}", out.len(), root.display());
    out
}

fn walk(dir: &Path, root: &Path, prefix: &str, extra: &[String], out: &mut Mapping) {
    let entries = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => { warn!("cannot read {}: {}", dir.display(), e); return; }
    };
    let mut paths: Vec<_> = entries
        .filter_map(|e| e.ok().map(|d| d.path()))
        .filter(|p| !is_ignored_path(p, extra))
        .collect();
    paths.sort();
    for child in paths {
        let is_link = fs::symlink_metadata(&child).map(|m| m.file_type().is_symlink()).unwrap_or(false);
        if child.is_dir() {
            // linked directories may point back at an ancestor
            if is_link { debug!("not following directory link {}", child.display()); continue; }
            walk(&child, root, prefix, extra, out);
            continue;
        }
        let fname = child.file_name().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        if !is_document_name(&fname) { continue; }
        let id = match document_id(&child, root, prefix) { Some(id) => id, None => continue };
        match fs::read_to_string(&child) {
            Ok(content) => { out.insert(id, content); }
            Err(e) => warn!("skipping unreadable document {}: {}", child.display(), e),
        }
    }
}

/// `prefix` + relative path joined with `/`, whatever the platform separator.
pub fn document_id(path: &Path, root: &Path, prefix: &str) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let segs: Vec<String> = rel.components()
        .filter_map(|c| match c { Component::Normal(s) => Some(s.to_string_lossy().to_string()), _ => None })
        .collect();
    if segs.is_empty() { return None; }
    Some(format!("{}{}", prefix, segs.join("/")))
}
