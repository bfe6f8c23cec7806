//! Parsing of comma-separated command-line values.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

/// Split a comma-separated list of refs, trimming and dropping empty entries.
///
/// Returns `None` when nothing is left, so an empty flag means "not given".
pub fn parse_csv_refs(value: Option<&str>) -> Option<Vec<String>> {
  let refs: Vec<String> = value?
    .split(',')
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .map(str::to_string)
    .collect();

  (!refs.is_empty()).then_some(refs)
}

/// Parse `key=value,key2=value2` into a map.
///
/// Keys and values are trimmed and split at the first `=`. Later duplicates
/// win. Returns `None` when nothing is left.
pub fn parse_custom_fields(value: Option<&str>) -> Result<Option<BTreeMap<String, String>>> {
  let Some(value) = value else {
    return Ok(None);
  };

  let mut fields = BTreeMap::new();
  for pair in value.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
    let Some((key, val)) = pair.split_once('=') else {
      bail!("Invalid custom fields format. Use: key=value,key2=value2");
    };
    fields.insert(key.trim().to_string(), val.trim().to_string());
  }

  Ok((!fields.is_empty()).then_some(fields))
}
