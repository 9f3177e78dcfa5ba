use std::fmt;

use serde::{Deserialize, Serialize};

/// The two repeatable row lists on the product wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    PricingRules,
    Modifiers,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::PricingRules, Collection::Modifiers];

    /// Form field name prefix, as in `pricing_rules-0-option_name`.
    pub fn prefix(self) -> &'static str {
        match self {
            Collection::PricingRules => "pricing_rules",
            Collection::Modifiers => "modifiers",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            Collection::PricingRules => "rules-container",
            Collection::Modifiers => "modifiers-container",
        }
    }

    pub fn entry_class(self) -> &'static str {
        match self {
            Collection::PricingRules => "rule-entry",
            Collection::Modifiers => "modifier-entry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Collection::PricingRules => "Rule",
            Collection::Modifiers => "Modifier",
        }
    }

    /// Suffix of the hidden `option=value` field.
    pub fn composite_suffix(self) -> &'static str {
        match self {
            Collection::PricingRules => "match_conditions",
            Collection::Modifiers => "value_name",
        }
    }

    pub fn input_suffix(self, field: NumericField) -> &'static str {
        match (self, field) {
            (Collection::PricingRules, NumericField::Price) => "base_price",
            (Collection::PricingRules, NumericField::Impact) => "base_impact",
            (Collection::PricingRules, NumericField::Stock) => "stock",
            (Collection::Modifiers, NumericField::Price) => "price_modifier",
            (Collection::Modifiers, NumericField::Impact) => "impact_modifier",
            (Collection::Modifiers, NumericField::Stock) => "stock_modifier",
        }
    }

    /// Visible label of a numeric input.
    pub fn input_label(self, field: NumericField) -> &'static str {
        match (self, field) {
            (Collection::PricingRules, NumericField::Price) => "Price",
            (Collection::PricingRules, NumericField::Impact) => "Impact",
            (Collection::PricingRules, NumericField::Stock) => "Stock",
            (Collection::Modifiers, NumericField::Price) => "+£",
            (Collection::Modifiers, NumericField::Impact) => "+kg CO₂",
            (Collection::Modifiers, NumericField::Stock) => "+ Stock",
        }
    }

    /// Resolve a field suffix to the numeric input it names.
    pub fn numeric_field(self, suffix: &str) -> Option<NumericField> {
        NumericField::ALL
            .into_iter()
            .find(|f| self.input_suffix(*f) == suffix)
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.prefix() == prefix)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

pub const OPTION_NAME_SUFFIX: &str = "option_name";
pub const OPTION_VALUE_SUFFIX: &str = "option_value";

/// Price / impact / stock inputs, named per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Price,
    Impact,
    Stock,
}

impl NumericField {
    pub const ALL: [NumericField; 3] = [NumericField::Price, NumericField::Impact, NumericField::Stock];
}

/// Stable row identity, assigned once at creation and never reused within a
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Current state of a row's cascading selector pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub option_name: String,
    /// Empty when the option has no values
    pub option_value: String,
    pub value_choices: Vec<String>,
}

impl Selection {
    pub fn composite(&self) -> String {
        format!("{}={}", self.option_name, self.option_value)
    }
}

/// Numeric inputs with `<input type="number">` semantics: text that is not a
/// valid floating-point number reads as no value and submits as empty. Valid
/// text is submitted exactly as typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NumericInputs {
    pub price: Option<f64>,
    pub impact: Option<f64>,
    pub stock: Option<i64>,

    #[serde(skip)]
    text: [String; 3],
}

impl NumericInputs {
    pub fn set(&mut self, field: NumericField, text: &str) {
        let text = text.trim();
        let number = parse_number(text);
        let accepted = match field {
            NumericField::Price => {
                self.price = number;
                number.is_some()
            }
            NumericField::Impact => {
                self.impact = number;
                number.is_some()
            }
            NumericField::Stock => {
                self.stock = number.and_then(as_integer);
                self.stock.is_some()
            }
        };
        self.text[slot(field)] = if accepted { text.to_string() } else { String::new() };
    }

    /// The value as the browser would submit it.
    pub fn field_text(&self, field: NumericField) -> String {
        self.text[slot(field)].clone()
    }
}

fn slot(field: NumericField) -> usize {
    match field {
        NumericField::Price => 0,
        NumericField::Impact => 1,
        NumericField::Stock => 2,
    }
}

/// HTML floating-point number: optional `-`, digits and/or `.digits`, then an
/// optional exponent. No leading `+`, no trailing `.`.
fn parse_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_digits = digits(&mut i);
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        frac_digits = digits(&mut i);
        if frac_digits == 0 {
            return None;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }

    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn as_integer(v: f64) -> Option<i64> {
    (v.fract() == 0.0 && v.abs() <= i64::MAX as f64).then_some(v as i64)
}

/// One pricing-rule or modifier row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRow {
    pub id: RowId,

    /// Display number baked in at creation (`Rule 3`); not renumbered after
    /// deletions.
    pub number: usize,

    /// `None` when the row was rendered without both selectors; such rows are
    /// never wired into the cascade.
    pub selection: Option<Selection>,

    pub inputs: NumericInputs,

    /// Hidden `option=value` field
    pub composite: Option<String>,
}

impl RuleRow {
    pub fn is_wired(&self) -> bool {
        self.selection.is_some()
    }

    pub fn option_name(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.option_name.as_str())
    }

    pub fn option_value(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.option_value.as_str())
    }

    pub fn value_choices(&self) -> &[String] {
        self.selection
            .as_ref()
            .map(|s| s.value_choices.as_slice())
            .unwrap_or(&[])
    }
}
