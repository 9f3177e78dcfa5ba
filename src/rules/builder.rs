use crate::error::UiError;
use crate::rules::option_map::OptionValueMap;
use crate::rules::row_model::{
    Collection, NumericField, NumericInputs, OPTION_NAME_SUFFIX, OPTION_VALUE_SUFFIX, RowId,
    RuleRow, Selection,
};

/// Ordered rows of one collection; the single source of truth the form is
/// rendered and encoded from.
#[derive(Debug, Clone)]
pub struct RowList {
    collection: Collection,
    rows: Vec<RuleRow>,
    next_id: u64,
}

impl RowList {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            rows: Vec::new(),
            next_id: 0,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn rows(&self) -> &[RuleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: RowId) -> Option<&RuleRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Live 0-based position of a row.
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    /// Id of the row currently rendered at `position`.
    pub fn id_at(&self, position: usize) -> Result<RowId, UiError> {
        self.rows
            .get(position)
            .map(|r| r.id)
            .ok_or_else(|| UiError::PositionOutOfRange {
                collection: self.collection.to_string(),
                position,
                len: self.rows.len(),
            })
    }

    /// Re-derive every wired row's value choices and hidden field from the
    /// current selections. Unwired rows are left alone.
    pub fn refresh_cascade(&mut self, options: &OptionValueMap) {
        for row in &mut self.rows {
            let Some(selection) = row.selection.as_mut() else {
                continue;
            };

            selection.value_choices = options.values(&selection.option_name).to_vec();
            if !selection.value_choices.contains(&selection.option_value) {
                selection.option_value = selection.value_choices.first().cloned().unwrap_or_default();
            }
            row.composite = Some(selection.composite());
        }
    }

    /// Append a row defaulting to the map's first option and its first value.
    pub fn add_row(&mut self, options: &OptionValueMap) -> RowId {
        let option_name = options.first_option().unwrap_or_default().to_string();
        let value_choices = options.values(&option_name).to_vec();
        let option_value = value_choices.first().cloned().unwrap_or_default();

        let selection = Selection {
            option_name,
            option_value,
            value_choices,
        };
        let id = self.push_row(Some(selection), NumericInputs::default(), None);

        self.refresh_cascade(options);
        id
    }

    /// Remove exactly the given row. Remaining rows keep their ids and
    /// display numbers.
    pub fn delete_row(&mut self, id: RowId) -> Result<RuleRow, UiError> {
        let pos = self.position(id).ok_or_else(|| self.not_found(id))?;
        Ok(self.rows.remove(pos))
    }

    /// Change the option selector: reload value choices, select the first one
    /// and recompute the hidden field.
    pub fn select_option(&mut self, id: RowId, option: &str, options: &OptionValueMap) -> Result<(), UiError> {
        let row = self.row_mut(id)?;
        // No selector to change on an unwired row.
        let Some(selection) = row.selection.as_mut() else {
            return Ok(());
        };

        selection.option_name = option.to_string();
        selection.value_choices = options.values(option).to_vec();
        selection.option_value = selection.value_choices.first().cloned().unwrap_or_default();
        row.composite = Some(selection.composite());
        Ok(())
    }

    /// Change the value selector; the value must be one of the current choices.
    pub fn select_value(&mut self, id: RowId, value: &str) -> Result<(), UiError> {
        let row = self.row_mut(id)?;
        let Some(selection) = row.selection.as_mut() else {
            return Ok(());
        };

        if !selection.value_choices.iter().any(|v| v == value) {
            return Err(UiError::InvalidChoice {
                value: value.to_string(),
                option: selection.option_name.clone(),
            });
        }

        selection.option_value = value.to_string();
        row.composite = Some(selection.composite());
        Ok(())
    }

    pub fn set_input(&mut self, id: RowId, field: NumericField, text: &str) -> Result<(), UiError> {
        let pos = self.position(id).ok_or_else(|| self.not_found(id))?;
        self.rows[pos].inputs.set(field, text);
        Ok(())
    }

    /// `{prefix}-{position}-{suffix}`
    pub fn field_name(&self, position: usize, suffix: &str) -> String {
        format!("{}-{}-{}", self.collection.prefix(), position, suffix)
    }

    /// Encode the rows as submitted form fields.
    ///
    /// Names use each row's live position, so they stay dense and 0-based no
    /// matter which rows were deleted before.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();

        for (pos, row) in self.rows.iter().enumerate() {
            if let Some(selection) = &row.selection {
                fields.push((self.field_name(pos, OPTION_NAME_SUFFIX), selection.option_name.clone()));
                fields.push((self.field_name(pos, OPTION_VALUE_SUFFIX), selection.option_value.clone()));
            }
            for field in NumericField::ALL {
                fields.push((
                    self.field_name(pos, self.collection.input_suffix(field)),
                    row.inputs.field_text(field),
                ));
            }
            if let Some(composite) = &row.composite {
                fields.push((self.field_name(pos, self.collection.composite_suffix()), composite.clone()));
            }
        }

        fields
    }

    pub(crate) fn push_row(
        &mut self,
        selection: Option<Selection>,
        inputs: NumericInputs,
        composite: Option<String>,
    ) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;

        self.rows.push(RuleRow {
            id,
            number: self.rows.len() + 1,
            selection,
            inputs,
            composite,
        });
        id
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut RuleRow, UiError> {
        let pos = self.position(id).ok_or_else(|| self.not_found(id))?;
        Ok(&mut self.rows[pos])
    }

    fn not_found(&self, id: RowId) -> UiError {
        UiError::RowNotFound {
            collection: self.collection.to_string(),
            id,
        }
    }
}
