//! `import`: bring backed-up SD-WAN objects into terraform state.
//!
//! # Steps
//!
//! 1. Scan `<source>/inventory/*.json`
//! 2. Write `<basename>-config.tf` (empty resource blocks) and `<basename>.sh`
//! 3. Unless `--no-apply`: back up `terraform.tfstate`, `terraform init -upgrade`,
//!    then run the import script
//!
//! Everything runs in the destination directory, where the skeleton lives.

use crate::{
    cli::DirArgs,
    config::Config,
    debug,
    decompile::TextStreams,
    generator::skeleton::{CONFIG_STREAM, import_script, skeleton_lines},
    hcl::provider_header,
    inventory::Inventory,
    log,
    utils::exec::Cmd,
};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Source directory when `--source-dir` is absent.
pub const DEFAULT_SOURCE: &str = "./data";

/// State file replaced by the import.
const STATE_FILE: &str = "terraform.tfstate";

/// Suffix of the state backup taken before importing.
const BACKUP_SUFFIX: &str = ".~~~bck";

/// Files produced by [`prepare_import`].
#[derive(Debug)]
pub struct ImportPlan {
    pub dest: PathBuf,
    pub config: PathBuf,
    pub script: PathBuf,
    pub objects: usize,
}

/// Run the `import` command.
pub fn import_objects(dirs: &DirArgs, no_apply: bool, config: &Config) -> Result<()> {
    let plan = prepare_import(dirs, config)?;

    if no_apply {
        log!(
            "import";
            "skipping terraform, review {} and run {} to import",
            plan.config.display(),
            plan.script.display()
        );
        return Ok(());
    }

    apply_import(&plan, &config.import.terraform)?;
    log!("import"; "{} objects imported into {}", plan.objects, STATE_FILE);
    Ok(())
}

/// Scan the backup and write the skeleton configuration and import script.
pub fn prepare_import(dirs: &DirArgs, config: &Config) -> Result<ImportPlan> {
    let inventory_dir = dirs.source(DEFAULT_SOURCE).join("inventory");
    log!("import"; "reading {}", inventory_dir.display());

    let inventory = Inventory::scan(&inventory_dir, config.import.skip_defaults)?;
    log!(
        "import";
        "{} objects to import, {} skipped",
        inventory.objects.len(),
        inventory.skipped
    );

    let dest = dirs.destination();
    let mut streams = TextStreams::new(dest.clone(), &config.output.basename);
    if config.output.header {
        streams.add(CONFIG_STREAM, &provider_header(&config.provider));
    }
    streams.extend(CONFIG_STREAM, skeleton_lines(&inventory.objects));
    let config_path = streams.path_for(CONFIG_STREAM);
    streams.flush()?;

    let script = dest.join(format!("{}.sh", config.output.basename));
    fs::write(&script, import_script(&inventory.objects, &config.import.terraform))
        .with_context(|| format!("Unable to write to {}", script.display()))?;
    make_executable(&script)?;
    log!("write"; "{}", script.file_name().unwrap_or_default().to_string_lossy());

    Ok(ImportPlan {
        dest,
        config: config_path,
        script,
        objects: inventory.objects.len(),
    })
}

/// Back up the old state, initialize the provider, and run the import script.
fn apply_import(plan: &ImportPlan, terraform: &str) -> Result<()> {
    if which::which(terraform).is_err() {
        bail!("`{terraform}` not found in PATH, install terraform or pass --no-apply");
    }

    backup_state(&plan.dest)?;

    log!("import"; "{} init -upgrade", terraform);
    Cmd::new(terraform)
        .args(["init", "-upgrade"])
        .cwd(&plan.dest)
        .run()
        .context("Terraform init failed")?;

    log!("import"; "running {}", plan.script.display());
    Cmd::new(&plan.script)
        .cwd(&plan.dest)
        .run()
        .context("Terraform import script failed")?;

    Ok(())
}

/// Move `terraform.tfstate` out of the way so the import starts clean.
fn backup_state(dir: &Path) -> Result<()> {
    let state = dir.join(STATE_FILE);
    if !state.exists() {
        return Ok(());
    }

    let backup = dir.join(format!("{STATE_FILE}{BACKUP_SUFFIX}"));
    fs::rename(&state, &backup)
        .with_context(|| format!("Failed to back up {}", state.display()))?;
    debug!("import"; "moved {} to {}", state.display(), backup.display());
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    fs::set_permissions(path, permissions)
        .with_context(|| format!("Failed to make {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
