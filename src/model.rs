use serde::{Serialize, Deserialize};
use regex::Regex;

pub const DEFAULT_PREFIX: &str = "/src/data/";
pub const ROOT_KEY: &str = "root";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileEntry {
    pub id: String,       // full document id, prefix included
    pub label: String,
    #[serde(rename = "file")]
    pub filename: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(id: &str, filename: &str, content: &str) -> Self {
        FileEntry { id: id.to_string(), label: derive_label(filename), filename: filename.to_string(), content: content.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FolderNode {
    pub name: String,
    pub path: String,     // '/'-joined chain from the top level, never empty
    pub folders: Vec<FolderNode>,
    pub files: Vec<FileEntry>,
}

/// Ordered top-level folders. Serializes as a bare array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Tree { pub folders: Vec<FolderNode> }

impl Tree {
    pub fn is_empty(&self) -> bool { self.folders.is_empty() }

    pub fn find_file(&self, id: &str) -> Option<&FileEntry> {
        fn walk<'a>(node: &'a FolderNode, id: &str) -> Option<&'a FileEntry> {
            if let Some(f) = node.files.iter().find(|f| f.id == id) { return Some(f); }
            node.folders.iter().find_map(|c| walk(c, id))
        }
        self.folders.iter().find_map(|r| walk(r, id))
    }

    /// Returns the folder at `path` together with its parent (None at top level).
    pub fn find_folder(&self, path: &str) -> Option<(Option<&FolderNode>, &FolderNode)> {
        fn walk<'a>(parent: Option<&'a FolderNode>, node: &'a FolderNode, path: &str) -> Option<(Option<&'a FolderNode>, &'a FolderNode)> {
            if node.path == path { return Some((parent, node)); }
            node.folders.iter().find_map(|c| walk(Some(node), c, path))
        }
        self.folders.iter().find_map(|r| walk(None, r, path))
    }

    /// Every file in depth-first order, files of a node before its subfolders.
    pub fn files(&self) -> Vec<&FileEntry> {
        fn walk<'a>(node: &'a FolderNode, acc: &mut Vec<&'a FileEntry>) {
            acc.extend(node.files.iter());
            for ch in &node.folders { walk(ch, acc); }
        }
        let mut v = Vec::new();
        for r in &self.folders { walk(r, &mut v); }
        v
    }

    pub fn folder_count(&self) -> usize {
        fn count(node: &FolderNode) -> usize { 1 + node.folders.iter().map(count).sum::<usize>() }
        self.folders.iter().map(count).sum()
    }
}

/// `025_The_final_design.md` -> `025 The final design`
pub fn derive_label(filename: &str) -> String {
    static EXT: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| Regex::new(r"(?i)\.md$").unwrap());
    let spaced = filename.replace('_', " ");
    EXT.replace(&spaced, "").into_owned()
}

pub fn is_document_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".md")
}

pub fn folder_display_name(name: &str) -> String { name.replace('_', " ") }

/// Key under which a folder's open state is recorded: `root` at the top level, else the parent's name.
pub fn parent_key(parent: Option<&FolderNode>) -> &str {
    parent.map(|p| p.name.as_str()).unwrap_or(ROOT_KEY)
}
