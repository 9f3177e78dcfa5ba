use serde::{Deserialize, Serialize};

/// A navigation trigger and the mega-menu panel it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuBinding {
    pub trigger_id: String,
    pub menu_id: String,
}

impl MenuBinding {
    pub fn new(trigger_id: &str, menu_id: &str) -> Self {
        Self {
            trigger_id: trigger_id.to_string(),
            menu_id: menu_id.to_string(),
        }
    }
}

/// The storefront's navigation bar: men's, women's and gear.
pub fn default_bindings() -> Vec<MenuBinding> {
    vec![
        MenuBinding::new("mens-nav", "mega-menu-mens"),
        MenuBinding::new("womens-nav", "mega-menu-womens"),
        MenuBinding::new("gear-nav", "mega-menu-gear"),
    ]
}

/// Viewport-space bounding box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub right: f64,
}

impl Rect {
    pub fn shifted(self, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            bottom: self.bottom + dy,
            ..self
        }
    }
}

/// Element lookup and layout, supplied by whatever hosts the page.
pub trait PageGeometry {
    /// Current bounding box of the element, `None` when the id is absent.
    fn bounding_rect(&self, id: &str) -> Option<Rect>;

    fn has_element(&self, id: &str) -> bool {
        self.bounding_rect(id).is_some()
    }
}

/// Which half of a menu's pointer region an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Trigger,
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Hidden,
    Shown,
}

/// A visible change of a menu, reported back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum MenuTransition {
    Shown { menu_id: String, top: f64, at: u64 },
    Hidden { menu_id: String, at: u64 },
}

impl MenuTransition {
    pub fn menu_id(&self) -> &str {
        match self {
            MenuTransition::Shown { menu_id, .. } | MenuTransition::Hidden { menu_id, .. } => menu_id,
        }
    }
}

/// Settings for hover behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverSettings {
    /// Grace period between leaving the pointer region and hiding
    #[serde(default = "default_hide_delay")]
    pub hide_delay_ms: u64,

    /// Gap between the trigger's bottom edge and the menu's top
    #[serde(default = "default_offset")]
    pub offset: f64,
}

impl Default for HoverSettings {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay(),
            offset: default_offset(),
        }
    }
}

fn default_hide_delay() -> u64 { 200 }
fn default_offset() -> f64 { 27.0 }

/// CSS class applied to a menu while it is shown.
pub const SHOW_CLASS: &str = "show";
