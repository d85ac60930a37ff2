//! Per-effect configuration record and its sanitization rules.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound for `input_channels` and `output_channels`.
pub const MAX_CHANNELS: i64 = 2;

/// Range `unique_id` is drawn from when an effect is first configured.
pub const UNIQUE_ID_RANGE: Range<i64> = 1000..100_000;

/// Default `vendor_version` for a fresh effect.
pub const DEFAULT_VENDOR_VERSION: i64 = 1000;

/// Effect record persisted as `<ClassName>-config.json`.
///
/// Keys this type does not know about are kept in `extra` and written back
/// unchanged, so templates can read hand-added settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectRecord {
    pub input_channels: i64,
    pub output_channels: i64,
    pub class_name: String,
    pub product_name: String,
    pub program_name: String,
    pub effect_name: String,
    pub vendor_name: String,
    pub vendor_version: i64,
    /// VST plugin id; rolled once at creation and stable afterwards.
    pub unique_id: i64,
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One automatable parameter exposed by the generated plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    /// Display name shown by the host.
    pub name: String,
    /// Unit label (e.g. `dB`).
    pub label: String,
    /// C++ member name in the generated class.
    pub variable_name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Parameter {
    pub fn new(name: &str, label: &str, variable_name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            variable_name: variable_name.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl EffectRecord {
    /// Default record for an effect named `name`.
    pub fn new(name: &str, class_name: String, unique_id: i64) -> Self {
        Self {
            input_channels: MAX_CHANNELS,
            output_channels: MAX_CHANNELS,
            class_name,
            product_name: name.to_string(),
            program_name: name.to_string(),
            effect_name: name.to_string(),
            vendor_name: name.to_string(),
            vendor_version: DEFAULT_VENDOR_VERSION,
            unique_id,
            parameters: vec![Parameter::new("Gain", "dB", "gain")],
            extra: BTreeMap::new(),
        }
    }

    /// Clamp channel counts and strip characters that would break the C++
    /// string literals the templates embed these names in.
    pub fn sanitize(&mut self) {
        self.input_channels = self.input_channels.min(MAX_CHANNELS);
        self.output_channels = self.output_channels.min(MAX_CHANNELS);
        for field in [
            &mut self.product_name,
            &mut self.program_name,
            &mut self.effect_name,
            &mut self.vendor_name,
        ] {
            field.retain(|c| c != '"');
        }
    }
}
