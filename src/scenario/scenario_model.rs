use serde::{Deserialize, Serialize};

use crate::menu::menu_model::MenuBinding;
use crate::page::snapshot::PageSnapshot;
use crate::rules::row_model::{Collection, NumericField};

/// A scripted interaction with the storefront page, replayed against the
/// components and checked with expectations. Usually loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Page the components attach to
    #[serde(default)]
    pub page: PageSnapshot,

    /// Menu bindings; the configured ones when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Vec<MenuBinding>>,

    pub steps: Vec<ScenarioStep>,
}

/// Rows are addressed by their live position, the way a user sees them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    PointerEnter {
        element: String,
    },

    PointerLeave {
        element: String,
    },

    /// Let clock units pass
    Advance {
        ms: u64,
    },

    Scroll {
        y: f64,
    },

    AddRow {
        collection: Collection,
    },

    DeleteRow {
        collection: Collection,
        position: usize,
    },

    SelectOption {
        collection: Collection,
        position: usize,
        option: String,
    },

    SelectValue {
        collection: Collection,
        position: usize,
        value: String,
    },

    SetInput {
        collection: Collection,
        position: usize,
        field: NumericField,
        value: String,
    },

    Expect {
        expectations: Vec<Expectation>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    MenuShown { menu: String },

    MenuHidden { menu: String },

    /// Inline top position in px
    MenuTop { menu: String, expected: f64 },

    RowCount {
        collection: Collection,
        expected: usize,
    },

    /// Display label such as "Rule 2"
    RowLabel {
        collection: Collection,
        position: usize,
        expected: String,
    },

    /// Hidden `option=value` field
    Composite {
        collection: Collection,
        position: usize,
        expected: String,
    },

    ValueChoices {
        collection: Collection,
        position: usize,
        expected: Vec<String>,
    },

    /// A submitted form field, by full name
    FieldValue { name: String, expected: String },
}

impl Expectation {
    pub fn kind(&self) -> &'static str {
        match self {
            Expectation::MenuShown { .. } => "MenuShown",
            Expectation::MenuHidden { .. } => "MenuHidden",
            Expectation::MenuTop { .. } => "MenuTop",
            Expectation::RowCount { .. } => "RowCount",
            Expectation::RowLabel { .. } => "RowLabel",
            Expectation::Composite { .. } => "Composite",
            Expectation::ValueChoices { .. } => "ValueChoices",
            Expectation::FieldValue { .. } => "FieldValue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpectationResult {
    /// Step the expectation belongs to (0-indexed)
    pub step_index: usize,

    pub expectation: Expectation,

    pub passed: bool,

    pub actual: Option<String>,

    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,

    pub passed: bool,

    pub steps_run: usize,

    pub expectation_results: Vec<ExpectationResult>,

    /// Set when a step could not be executed (unknown element, bad row, ...)
    pub error: Option<String>,
}
