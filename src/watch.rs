//! Re-render a parameter file whenever it changes on disk.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Event, RecursiveMode, Watcher};

use crate::config::{load_overrides, resolve};
use crate::error::{BubbleError, Result};
use crate::params::Kind;

/// Files written by one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub markup: PathBuf,
    pub stylesheet: PathBuf,
}

/// Resolve `config` against `fallback` and write `{class}.html` and
/// `{class}.css` into `outdir`.
pub fn render_to_dir(config: &Path, fallback: Kind, outdir: &Path) -> Result<WrittenFiles> {
    let (kind, params) = resolve(fallback, load_overrides(config)?)?;
    let output = crate::render(&params, kind);

    fs::create_dir_all(outdir)?;
    let markup = outdir.join(format!("{}.html", kind.class_name()));
    let stylesheet = outdir.join(format!("{}.css", kind.class_name()));
    fs::write(&markup, &output.markup)?;
    fs::write(&stylesheet, &output.stylesheet)?;
    Ok(WrittenFiles { markup, stylesheet })
}

/// Render once, then again on every modification of `config`. Blocks until
/// the watcher shuts down. A bad edit is logged and the previous files stay.
pub fn watch_file(config: &Path, fallback: Kind, outdir: &Path) -> Result<()> {
    rerender(config, fallback, outdir);

    let name: OsString = config
        .file_name()
        .ok_or_else(|| BubbleError::server(format!("not a file: {}", config.display())))?
        .to_os_string();

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            if touches_config(&event, &name) {
                let _ = tx.send(());
            }
        }
    })
    .map_err(BubbleError::server)?;

    // Editors often replace the file, so watch the directory rather than the inode.
    let dir = config.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(BubbleError::server)?;
    log::info!("watching {} for changes...", config.display());

    while rx.recv().is_ok() {
        // Coalesce the burst of events a single save produces.
        while rx.try_recv().is_ok() {}
        rerender(config, fallback, outdir);
    }

    drop(watcher);
    Ok(())
}

/// Whether `event` is a write to the watched file. The directory may also hold
/// the rendered output, and writes to those files must not trigger a render.
fn touches_config(event: &Event, name: &OsStr) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event.paths.iter().any(|p| p.file_name() == Some(name))
}

fn rerender(config: &Path, fallback: Kind, outdir: &Path) {
    match render_to_dir(config, fallback, outdir) {
        Ok(files) => log::info!(
            "{} -> {}, {}",
            config.display(),
            files.markup.display(),
            files.stylesheet.display()
        ),
        Err(e) => log::error!("{}: {e}", config.display()),
    }
}
