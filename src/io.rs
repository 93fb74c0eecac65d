use crate::error::{DocError, DocResult};
use crate::fs_walk::Mapping;
use crate::model::Tree;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const INDEX_FILE_NAME: &str = ".docnav_index.json";

/// Reads a pre-bundled `{ "id": "content", ... }` JSON object. Keys are kept verbatim.
pub fn read_bundle(path: &Path) -> DocResult<Mapping> {
    let bytes = fs::read(path).map_err(|source| DocError::BundleRead { path: path.to_path_buf(), source })?;
    let mapping: Mapping = serde_json::from_slice(&bytes).map_err(|source| DocError::BundleParse { path: path.to_path_buf(), source })?;
    debug!("loaded {} documents from bundle {}", mapping.len(), path.display());
    Ok(mapping)
}

#[derive(Default)]
pub struct IndexIo;

impl IndexIo {
    /// Writes the tree JSON to `out`, or to `.docnav_index.json` inside the document root.
    pub fn write_index(&self, out: Option<&PathBuf>, root: &Path, tree: &Tree) -> DocResult<PathBuf> {
        let out_path = match out { Some(p) => p.clone(), None => root.join(INDEX_FILE_NAME) };
        let data = serde_json::to_vec_pretty(tree)?;
        atomic_write(&out_path, &data)?;
        Ok(out_path)
    }
}

pub fn atomic_write(out_path: &Path, data: &[u8]) -> DocResult<()> {
    let wrap = |source| DocError::Write { path: out_path.to_path_buf(), source };
    if let Some(dir) = out_path.parent() {
        if !dir.as_os_str().is_empty() { fs::create_dir_all(dir).map_err(wrap)?; }
    }
    let tmp = out_path.with_extension("tmp");
    {
        let mut f = fs::File::create(&tmp).map_err(wrap)?;
        f.write_all(data).map_err(wrap)?;
        f.sync_all().map_err(wrap)?;
    }
    fs::rename(&tmp, out_path).map_err(wrap)?;
    Ok(())
}
