//! Deterministic first document and the expand-map that reveals it.

use crate::model::{FileEntry, FolderNode, Tree, ROOT_KEY};
use std::collections::BTreeMap;

/// Parent key -> the single child folder expanded under it.
pub type OpenMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection<'a> {
    pub file: Option<&'a FileEntry>,
    /// Folder names from the top level down to the folder holding `file`.
    pub parent_chain: Vec<String>,
}

/// Depth-first over the sorted tree; a node's own files win over its subfolders.
pub fn select_initial(tree: &Tree) -> Selection<'_> {
    fn walk<'a>(nodes: &'a [FolderNode], parents: &mut Vec<String>) -> Option<&'a FileEntry> {
        for node in nodes {
            parents.push(node.name.clone());
            if let Some(first) = node.files.first() { return Some(first); }
            if let Some(found) = walk(&node.folders, parents) { return Some(found); }
            parents.pop();
        }
        None
    }
    let mut parents = Vec::new();
    match walk(&tree.folders, &mut parents) {
        Some(file) => Selection { file: Some(file), parent_chain: parents },
        None => Selection::default(),
    }
}

pub fn initial_open_map(parent_chain: &[String]) -> OpenMap {
    let mut open = OpenMap::new();
    if let Some(first) = parent_chain.first() { open.insert(ROOT_KEY.to_string(), first.clone()); }
    for pair in parent_chain.windows(2) {
        open.insert(pair[0].clone(), pair[1].clone());
    }
    open
}
