use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

mod builder;
mod config;
mod error;
mod fs_walk;
mod ignore;
mod io;
mod model;
mod preview;
mod select;
mod sidebar;
mod state;
#[cfg(test)]
mod tests_unit;

#[derive(Parser, Debug)]
#[command(name = "docnav", version, about = "Folder-tree navigator for markdown documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the document tree as JSON
    Scan(SourceArgs),
    /// Print the navigator rows
    Tree(TreeCmd),
    /// Print the content pane for the active (or given) document
    Show(ShowCmd),
    /// Print the initial selection and expand-map
    Initial(SourceArgs),
    /// Make a document the active one
    Select(SelectCmd),
    /// Expand or collapse a folder
    Toggle(ToggleCmd),
    /// Replace the saved state with the initial selection
    ResetState(StateCmd),
    /// Write the tree JSON to an index file
    WriteIndex(WriteIndexCmd),
    /// Report documents the navigator cannot place normally
    Check(SourceArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Directory holding the documents
    #[arg(required_unless_present = "bundle")]
    root: Option<PathBuf>,
    /// JSON object of id -> content used instead of a directory
    #[arg(long, conflicts_with = "root")]
    bundle: Option<PathBuf>,
    #[arg(long)]
    prefix: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StateCmd {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    state: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TreeCmd {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    state: Option<PathBuf>,
    #[arg(long)]
    filter: Option<String>,
    #[arg(long, help = "List all rows regardless of expand state")]
    all: bool,
}

#[derive(Args, Debug)]
struct ShowCmd {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    state: Option<PathBuf>,
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    lines: Option<usize>,
}

#[derive(Args, Debug)]
struct SelectCmd {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    state: Option<PathBuf>,
    #[arg(long)]
    id: String,
}

#[derive(Args, Debug)]
struct ToggleCmd {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    state: Option<PathBuf>,
    /// Folder path as printed in the navigator key column, e.g. `Unit_1/Part_A`
    #[arg(long)]
    path: String,
}

#[derive(Args, Debug)]
struct WriteIndexCmd {
    #[command(flatten)]
    source: SourceArgs,
    #[arg(long)]
    out: Option<PathBuf>,
}

struct Loaded {
    settings: config::Settings,
    built: builder::Built,
}

fn load(src: &SourceArgs, state: Option<PathBuf>, preview_lines: Option<usize>) -> Result<Loaded> {
    let file_cfg = config::load_config(src.config.as_deref(), src.root.as_deref())?;
    let settings = config::resolve(file_cfg, config::Overrides { prefix: src.prefix.clone(), state, preview_lines });
    let mapping = match (&src.bundle, &src.root) {
        (Some(bundle), _) => io::read_bundle(bundle)?,
        (None, Some(root)) => fs_walk::load_dir(root, &settings.prefix, &settings.ignore),
        (None, None) => bail!("either a document root or --bundle is required"),
    };
    let built = builder::build(&settings.prefix, &mapping);
    Ok(Loaded { settings, built })
}

#[derive(Serialize)]
struct InitialOut<'a> {
    file: Option<&'a str>,
    parent_chain: &'a [String],
    open: select::OpenMap,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Scan(src) => {
            let l = load(&src, None, None)?;
            println!("{}", serde_json::to_string_pretty(&l.built.tree)?);
        }
        Commands::Tree(cmd) => {
            let l = load(&cmd.source, cmd.state, None)?;
            let st = state::load_state_or_initial(&l.settings.state, &l.built.tree);
            let opts = sidebar::SidebarOptions { filter: cmd.filter.as_deref(), show_all: cmd.all };
            for line in sidebar::render_rows(&l.built.tree, &st, &opts) { println!("{}", line); }
        }
        Commands::Show(cmd) => {
            let l = load(&cmd.source, cmd.state, cmd.lines)?;
            let tree = &l.built.tree;
            let file = match cmd.id.as_deref() {
                Some(id) => Some(tree.find_file(id).ok_or_else(|| error::DocError::UnknownDocument(id.to_string()))?),
                None => state::load_state_or_initial(&l.settings.state, tree).active_file(tree),
            };
            print!("{}", preview::render_pane(file, l.settings.preview_lines));
        }
        Commands::Initial(src) => {
            let l = load(&src, None, None)?;
            let sel = select::select_initial(&l.built.tree);
            let out = InitialOut {
                file: sel.file.map(|f| f.id.as_str()),
                parent_chain: &sel.parent_chain,
                open: select::initial_open_map(&sel.parent_chain),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Select(cmd) => {
            let l = load(&cmd.source, cmd.state, None)?;
            let mut st = state::load_state_or_initial(&l.settings.state, &l.built.tree);
            st.select(&l.built.tree, &cmd.id)?;
            state::save_state(&l.settings.state, &st)?;
        }
        Commands::Toggle(cmd) => {
            let l = load(&cmd.source, cmd.state, None)?;
            let tree = &l.built.tree;
            let (parent, node) = tree.find_folder(&cmd.path).ok_or_else(|| error::DocError::UnknownFolder(cmd.path.clone()))?;
            let mut st = state::load_state_or_initial(&l.settings.state, tree);
            st.toggle(model::parent_key(parent), &node.name);
            state::save_state(&l.settings.state, &st)?;
        }
        Commands::ResetState(cmd) => {
            let l = load(&cmd.source, cmd.state, None)?;
            state::save_state(&l.settings.state, &state::UiState::initial(&l.built.tree))?;
        }
        Commands::WriteIndex(cmd) => {
            let l = load(&cmd.source, None, None)?;
            let root = match (cmd.out.as_ref(), cmd.source.root.as_ref()) {
                (None, None) => bail!("--out is required with --bundle"),
                (_, root) => root.cloned().unwrap_or_default(),
            };
            let out = io::IndexIo::default().write_index(cmd.out.as_ref(), &root, &l.built.tree)?;
            println!("{}", out.display());
        }
        Commands::Check(src) => {
            let l = load(&src, None, None)?;
            let built = &l.built;
            println!("documents\t{}", built.tree.files().len());
            println!("folders\t{}", built.tree.folder_count());
            for f in &built.loose { println!("loose\t{}", f.id); }
            for id in &built.malformed { println!("malformed\t{}", id); }
        }
    }
    Ok(())
}
