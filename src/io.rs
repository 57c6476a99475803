use anyhow::{Context, Result};
use patrol_designer_common::{store_from_json, ExportOptions, PlanStore};
use std::fs;
use std::path::Path;

/// Opens an export document as an editable store
pub fn load_plan(path: &Path) -> Result<PlanStore> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let store = store_from_json(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(store)
}

/// Serializes the projected store
pub fn render_plan(store: &PlanStore, options: &ExportOptions) -> Result<String> {
    Ok(options.render(store.positions())?)
}

pub fn save_plan(path: &Path, store: &PlanStore, options: &ExportOptions) -> Result<()> {
    let content = render_plan(store, options)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
