//! Turns a flat `id -> content` mapping into the nested folder tree.
//!
//! Construction runs in two phases. `insert` accumulates folders into an
//! arena keyed by their segment chain; `finish` drains the arena from the
//! root down and emits the immutable, sorted [`Tree`].

use crate::model::{FileEntry, FolderNode, Tree};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

struct Scratch {
    name: String,
    path: String,
    children: BTreeSet<String>,
    files: Vec<FileEntry>,
}

impl Scratch {
    fn new(name: &str, path: String) -> Self {
        Scratch { name: name.to_string(), path, children: BTreeSet::new(), files: Vec::new() }
    }
}

/// Output of a build, including the inputs the tree cannot show.
#[derive(Debug, Default)]
pub struct Built {
    pub tree: Tree,
    /// Files with no folder segment. They hang off the synthetic root and are not part of `tree`.
    pub loose: Vec<FileEntry>,
    /// Ids that lacked the root prefix and went through the fallback derivation.
    pub malformed: Vec<String>,
}

pub struct TreeBuilder {
    prefix: String,
    // empty chain is the synthetic root
    nodes: BTreeMap<Vec<String>, Scratch>,
    malformed: Vec<String>,
}

impl TreeBuilder {
    pub fn new(prefix: &str) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(Vec::new(), Scratch::new("root", String::new()));
        TreeBuilder { prefix: prefix.to_string(), nodes, malformed: Vec::new() }
    }

    pub fn insert(&mut self, id: &str, content: &str) {
        let rel = match strip_root(id, &self.prefix) {
            Some(rel) => rel,
            None => {
                let rel = fallback_relative(id, &self.prefix);
                warn!("document id {:?} lacks prefix {:?}; using {:?}", id, self.prefix, rel);
                self.malformed.push(id.to_string());
                rel
            }
        };
        let mut parts: Vec<&str> = rel.split('/').collect();
        // split always yields at least one segment
        let filename = parts.pop().unwrap_or_default();
        // doubled slashes add no folder level
        parts.retain(|seg| !seg.is_empty());
        let entry = FileEntry::new(id, filename, content);

        let mut chain: Vec<String> = Vec::with_capacity(parts.len());
        let mut cur_path = String::new();
        for seg in parts {
            cur_path = if cur_path.is_empty() { seg.to_string() } else { format!("{}/{}", cur_path, seg) };
            let parent = chain.clone();
            chain.push(seg.to_string());
            if !self.nodes.contains_key(&chain) {
                self.nodes.insert(chain.clone(), Scratch::new(seg, cur_path.clone()));
                if let Some(p) = self.nodes.get_mut(&parent) { p.children.insert(seg.to_string()); }
            }
        }
        if let Some(node) = self.nodes.get_mut(&chain) { node.files.push(entry); }
    }

    pub fn finish(mut self) -> Built {
        let root = self.nodes.remove(&Vec::<String>::new()).unwrap_or_else(|| Scratch::new("root", String::new()));
        let mut chain = Vec::new();
        let folders = root.children.iter().map(|name| normalize(&mut self.nodes, &mut chain, name)).collect();
        let mut loose = root.files;
        loose.sort_by(|a, b| a.filename.cmp(&b.filename));
        for f in &loose { warn!("top-level document {:?} has no folder and is not listed", f.id); }
        let tree = Tree { folders };
        debug!("built tree: {} folders, {} documents", tree.folder_count(), tree.files().len());
        Built { tree, loose, malformed: self.malformed }
    }
}

fn normalize(nodes: &mut BTreeMap<Vec<String>, Scratch>, chain: &mut Vec<String>, name: &str) -> FolderNode {
    chain.push(name.to_string());
    let scratch = nodes.remove(chain.as_slice()).unwrap_or_else(|| Scratch::new(name, chain.join("/")));
    let folders = scratch.children.iter().map(|c| normalize(nodes, chain, c)).collect();
    chain.pop();
    let mut files = scratch.files;
    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    FolderNode { name: scratch.name, path: scratch.path, folders, files }
}

pub fn build<I, K, V>(prefix: &str, mapping: I) -> Built
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut b = TreeBuilder::new(prefix);
    for (id, content) in mapping { b.insert(id.as_ref(), content.as_ref()); }
    b.finish()
}

#[cfg(test)]
pub fn build_tree<I, K, V>(prefix: &str, mapping: I) -> Tree
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    build(prefix, mapping).tree
}

pub fn strip_root<'a>(id: &'a str, prefix: &str) -> Option<&'a str> { id.strip_prefix(prefix) }

/// Best-effort relative path for an id without the root prefix: text after an
/// embedded prefix, else after an embedded `/src/`, else the id minus leading slashes.
pub fn fallback_relative<'a>(id: &'a str, prefix: &str) -> &'a str {
    if !prefix.is_empty() {
        if let Some(i) = id.find(prefix) { return &id[i + prefix.len()..]; }
    }
    if let Some(i) = id.find("/src/") { return &id[i + "/src/".len()..]; }
    id.trim_start_matches('/')
}
