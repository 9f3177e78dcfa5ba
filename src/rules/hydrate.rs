use std::collections::{BTreeMap, HashMap};

use crate::rules::builder::RowList;
use crate::rules::option_map::OptionValueMap;
use crate::rules::row_model::{
    Collection, NumericInputs, OPTION_NAME_SUFFIX, OPTION_VALUE_SUFFIX, Selection,
};

impl RowList {
    /// Rebuild a collection from the form fields of a server-rendered page.
    ///
    /// Fields named `{prefix}-{index}-{suffix}` are grouped by index and
    /// turned into rows in index order. A row lacking either selector is kept
    /// but left unwired. Ends with one cascade refresh so every hidden field
    /// matches its selectors before any interaction.
    pub fn from_form_fields(
        collection: Collection,
        fields: &[(String, String)],
        options: &OptionValueMap,
    ) -> Self {
        let mut list = RowList::new(collection);

        for (_, group) in group_by_index(collection, fields) {
            let selection = match (group.get(OPTION_NAME_SUFFIX), group.get(OPTION_VALUE_SUFFIX)) {
                (Some(name), Some(value)) => Some(Selection {
                    option_name: name.clone(),
                    option_value: value.clone(),
                    value_choices: Vec::new(),
                }),
                _ => None,
            };

            let mut inputs = NumericInputs::default();
            for (suffix, value) in &group {
                if let Some(field) = collection.numeric_field(suffix) {
                    inputs.set(field, value);
                }
            }

            let composite = group.get(collection.composite_suffix()).cloned();
            list.push_row(selection, inputs, composite);
        }

        list.refresh_cascade(options);
        list
    }
}

/// index -> (suffix -> value) for every field carrying the collection prefix.
/// Names whose index segment is not a number are ignored.
fn group_by_index<'a>(
    collection: Collection,
    fields: &'a [(String, String)],
) -> BTreeMap<usize, HashMap<&'a str, String>> {
    let prefix = format!("{}-", collection.prefix());
    let mut groups: BTreeMap<usize, HashMap<&str, String>> = BTreeMap::new();

    for (name, value) in fields {
        let Some(rest) = name.strip_prefix(prefix.as_str()) else {
            continue;
        };
        let Some((index, suffix)) = rest.split_once('-') else {
            continue;
        };
        let Ok(index) = index.parse::<usize>() else {
            continue;
        };

        groups.entry(index).or_default().insert(suffix, value.clone());
    }

    groups
}
