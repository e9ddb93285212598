//! Name-based lookup of the built-in yield models.

use crate::absolute::AbsoluteMassModel;
use crate::fink_2014;
use crate::provider::{YieldError, YieldModel};
use crate::ratio::MassRatioModel;

/// A built-in model under its registry key.
pub struct RegistryEntry {
    /// Lookup key, e.g. `"graur_2016"` or `"fink_2014_n5def"`.
    pub key: String,
    pub model: Box<dyn YieldModel>,
}

/// Every built-in yield model.
pub fn available() -> Vec<RegistryEntry> {
    let mut entries: Vec<RegistryEntry> = vec![
        entry(MassRatioModel::graur_2016()),
        entry(MassRatioModel::dave_ddt()),
        entry(MassRatioModel::dave_gcd_ratio()),
        entry(AbsoluteMassModel::dave_gcd()),
        entry(MassRatioModel::narrow_test()),
    ];
    entries.extend(fink_2014::MODELS.iter().map(|m| RegistryEntry {
        key: m.registry_name(),
        model: Box::new(*m),
    }));
    entries
}

fn entry<M: YieldModel + 'static>(model: M) -> RegistryEntry {
    RegistryEntry {
        key: model.name().to_string(),
        model: Box::new(model),
    }
}

/// Resolve a model by registry key (case-insensitive).
pub fn lookup(key: &str) -> Result<Box<dyn YieldModel>, YieldError> {
    let wanted = key.trim();
    let found = available()
        .into_iter()
        .find(|e| e.key.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| YieldError::UnknownModel(key.to_string()))?;
    log::debug!("Resolved yield model '{}' ({})", found.key, found.model.reference());
    Ok(found.model)
}
