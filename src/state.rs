use crate::error::{DocError, DocResult};
use crate::io::atomic_write;
use crate::model::{FileEntry, Tree};
use crate::select::{initial_open_map, select_initial, OpenMap};
use log::{debug, warn};
use serde::{Serialize, Deserialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Navigator state owned by the presentation side: the active document and the expand-map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default)]
    pub open: OpenMap,
}

impl UiState {
    pub fn initial(tree: &Tree) -> Self {
        let sel = select_initial(tree);
        UiState { active: sel.file.map(|f| f.id.clone()), open: initial_open_map(&sel.parent_chain) }
    }

    pub fn is_open(&self, parent_key: &str, name: &str) -> bool {
        self.open.get(parent_key).map(|n| n == name).unwrap_or(false)
    }

    /// Opens `name` under `parent_key`, closing its open sibling; collapses it if already open.
    pub fn toggle(&mut self, parent_key: &str, name: &str) {
        if self.is_open(parent_key, name) {
            self.open.remove(parent_key);
        } else {
            self.open.insert(parent_key.to_string(), name.to_string());
        }
    }

    pub fn select(&mut self, tree: &Tree, id: &str) -> DocResult<()> {
        if tree.find_file(id).is_none() { return Err(DocError::UnknownDocument(id.to_string())); }
        self.active = Some(id.to_string());
        Ok(())
    }

    pub fn active_file<'a>(&self, tree: &'a Tree) -> Option<&'a FileEntry> {
        self.active.as_deref().and_then(|id| tree.find_file(id))
    }
}

pub fn default_state_path() -> PathBuf {
    let cache = home::home_dir().unwrap_or_else(|| PathBuf::from("."));
    cache.join(".cache").join("docnav").join("state.json")
}

/// None when the file is missing or unreadable as state.
pub fn load_state(path: &Path) -> Option<UiState> {
    let bytes = fs::read(path).ok()?;
    match serde_json::from_slice::<UiState>(&bytes) {
        Ok(st) => Some(st),
        Err(e) => { warn!("ignoring unreadable state {}: {}", path.display(), e); None }
    }
}

/// Saved state if present, else the initial selection for `tree`. A saved
/// active id that left the tree is dropped.
pub fn load_state_or_initial(path: &Path, tree: &Tree) -> UiState {
    match load_state(path) {
        Some(mut st) => {
            if st.active.is_some() && st.active_file(tree).is_none() {
                debug!("saved active document {:?} no longer exists", st.active);
                st.active = None;
            }
            st
        }
        None => UiState::initial(tree),
    }
}

pub fn save_state(path: &Path, st: &UiState) -> DocResult<()> {
    atomic_write(path, &serde_json::to_vec_pretty(st)?)
}
