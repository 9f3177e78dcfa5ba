use crate::rules::builder::RowList;
use crate::rules::option_map::OptionValueMap;
use crate::rules::row_model::{
    Collection, NumericField, OPTION_NAME_SUFFIX, OPTION_VALUE_SUFFIX, RuleRow,
};

// ============================================================================
// Row markup — what the host inserts into the rules/modifiers containers
// ============================================================================

/// Render the whole container with every row in live order.
pub fn render_container(list: &RowList, options: &OptionValueMap) -> String {
    let rows: String = list
        .rows()
        .iter()
        .enumerate()
        .map(|(pos, row)| render_row(list.collection(), pos, row, options))
        .collect();

    format!(
        "<div id=\"{}\">\n{}</div>\n",
        list.collection().container_id(),
        rows
    )
}

/// Render one row card. Field names carry the row's live position.
pub fn render_row(collection: Collection, position: usize, row: &RuleRow, options: &OptionValueMap) -> String {
    let name = |suffix: &str| format!("{}-{}-{}", collection.prefix(), position, suffix);
    let card_bg = match collection {
        Collection::PricingRules => "bg-light",
        Collection::Modifiers => "bg-white",
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"card mb-2 p-3 {} border {}\" data-row-id=\"{}\">\n",
        card_bg,
        collection.entry_class(),
        row.id
    ));
    out.push_str(&format!(
        "  <div class=\"d-flex justify-content-between align-items-start\">\n    <strong>{} {}</strong>\n    <button type=\"button\" class=\"btn btn-sm btn-danger\" data-delete-row=\"{}\">Delete</button>\n  </div>\n",
        collection.label(),
        row.number,
        row.id
    ));
    out.push_str("  <div class=\"row mt-2\">\n");

    if let Some(selection) = &row.selection {
        let mut option_list: Vec<&str> = options.options().collect();
        // Hydrated rows may name an option the map no longer has; keep it
        // selectable so the rendered select submits what the row holds.
        if !options.contains(&selection.option_name) {
            option_list.insert(0, &selection.option_name);
        }
        let value_list: Vec<&str> = selection.value_choices.iter().map(String::as_str).collect();
        out.push_str(&render_select(
            "Option",
            &name(OPTION_NAME_SUFFIX),
            &option_list,
            &selection.option_name,
        ));
        out.push_str(&render_select(
            "Value",
            &name(OPTION_VALUE_SUFFIX),
            &value_list,
            &selection.option_value,
        ));
    }

    for field in NumericField::ALL {
        let step = match field {
            NumericField::Stock => "",
            _ => " step=\"0.01\"",
        };
        out.push_str(&format!(
            "    <div class=\"col-md-2 mb-2\">\n      <label class=\"form-label\">{}</label>\n      <input class=\"form-control\" name=\"{}\" type=\"number\"{} value=\"{}\" />\n    </div>\n",
            escape_html(collection.input_label(field)),
            name(collection.input_suffix(field)),
            step,
            escape_html(&row.inputs.field_text(field)),
        ));
    }

    out.push_str("  </div>\n");
    out.push_str(&format!(
        "  <input type=\"hidden\" name=\"{}\" value=\"{}\" />\n",
        name(collection.composite_suffix()),
        escape_html(row.composite.as_deref().unwrap_or_default())
    ));
    out.push_str("</div>\n");
    out
}

fn render_select(label: &str, name: &str, choices: &[&str], selected: &str) -> String {
    let options: String = choices
        .iter()
        .map(|c| {
            let attr = if *c == selected { " selected" } else { "" };
            format!(
                "<option value=\"{v}\"{attr}>{v}</option>",
                v = escape_html(c),
                attr = attr
            )
        })
        .collect();

    format!(
        "    <div class=\"col-md-3 mb-2\">\n      <label class=\"form-label\">{}</label>\n      <select name=\"{}\" class=\"form-select\">{}</select>\n    </div>\n",
        label, name, options
    )
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
