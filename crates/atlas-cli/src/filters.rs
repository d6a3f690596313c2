//! `key=value` filter arguments.

use anyhow::{anyhow, Result};
use atlas_core::Filterable;

pub fn split_pair(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| anyhow!("filter must look like key=value, got {raw:?}"))
}

/// Applies every `key=value` pair in order; the first bad pair aborts.
pub fn apply_pairs<E: Filterable>(filters: &mut E::Filters, pairs: &[String]) -> Result<()> {
    for raw in pairs {
        let (key, value) = split_pair(raw)?;
        E::set_control(filters, key, value)?;
    }
    Ok(())
}
