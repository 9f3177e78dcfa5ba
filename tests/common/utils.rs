#![allow(dead_code)]

use storefront_ui::menu::menu_model::{Rect, default_bindings};
use storefront_ui::page::snapshot::PageSnapshot;
use storefront_ui::rules::option_map::OptionValueMap;

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    base.join("tests").join("fixtures").join(name).display().to_string()
}

pub fn size_color_map() -> OptionValueMap {
    OptionValueMap::new()
        .with_option("Size", ["S", "M", "L"])
        .with_option("Color", ["Red", "Blue"])
}

pub fn rect(top: f64, bottom: f64) -> Rect {
    Rect {
        top,
        bottom,
        left: 0.0,
        right: 0.0,
    }
}

/// Page with all three navigation triggers at y 80..100 and their panels.
pub fn nav_page() -> PageSnapshot {
    let mut page = PageSnapshot {
        option_values: size_color_map(),
        ..Default::default()
    };
    for binding in default_bindings() {
        page.elements.insert(binding.trigger_id, rect(80.0, 100.0));
        page.elements.insert(binding.menu_id, rect(0.0, 400.0));
    }
    page
}

pub fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}
