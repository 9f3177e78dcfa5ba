use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::menu::menu_model::{PageGeometry, Rect};
use crate::rules::option_map::OptionValueMap;

/// The parts of a rendered page both components attach to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Element id -> bounding box in document coordinates
    #[serde(default)]
    pub elements: BTreeMap<String, Rect>,

    /// Vertical scroll offset; viewport rects are document rects minus this
    #[serde(default)]
    pub scroll_y: f64,

    /// Option lookup supplied by the server-rendered page
    #[serde(default)]
    pub option_values: OptionValueMap,

    /// Initial form fields as `[name, value]` pairs
    #[serde(default)]
    pub fields: Vec<(String, String)>,
}

impl PageGeometry for PageSnapshot {
    fn bounding_rect(&self, id: &str) -> Option<Rect> {
        self.elements.get(id).map(|r| r.shifted(-self.scroll_y))
    }
}

/// Load a snapshot from a YAML (or JSON) file.
pub fn load_snapshot(path: &str) -> Result<PageSnapshot, UiError> {
    let content = std::fs::read_to_string(path).map_err(|source| UiError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| UiError::YamlParse {
        context: format!("page snapshot {}", path),
        source,
    })
}
