use crate::error::UiError;
use crate::menu::hover::HoverController;
use crate::menu::menu_model::{HoverSettings, MenuBinding, MenuTransition};
use crate::page::snapshot::PageSnapshot;
use crate::rules::builder::RowList;
use crate::rules::option_map::OptionValueMap;
use crate::rules::row_model::{Collection, NumericField, RowId, RuleRow};

/// Both storefront components attached to one page.
///
/// The hover controller and the two row lists never touch each other; this
/// type only owns them side by side and routes host events to the right one.
#[derive(Debug)]
pub struct Storefront {
    page: PageSnapshot,
    menus: HoverController,
    pricing_rules: RowList,
    modifiers: RowList,
}

impl Storefront {
    /// Page-ready initialization: attach the menus and wire every row already
    /// present in the rendered form.
    pub fn init(page: PageSnapshot, bindings: &[MenuBinding], settings: HoverSettings) -> Result<Self, UiError> {
        let menus = HoverController::attach(bindings, &page, settings)?;
        let pricing_rules = RowList::from_form_fields(Collection::PricingRules, &page.fields, &page.option_values);
        let modifiers = RowList::from_form_fields(Collection::Modifiers, &page.fields, &page.option_values);

        Ok(Self {
            page,
            menus,
            pricing_rules,
            modifiers,
        })
    }

    pub fn menus(&self) -> &HoverController {
        &self.menus
    }

    pub fn options(&self) -> &OptionValueMap {
        &self.page.option_values
    }

    pub fn rows(&self, collection: Collection) -> &RowList {
        match collection {
            Collection::PricingRules => &self.pricing_rules,
            Collection::Modifiers => &self.modifiers,
        }
    }

    // ---- Menu events ----

    pub fn pointer_enter(&mut self, element_id: &str) -> Result<Option<MenuTransition>, UiError> {
        self.menus.pointer_enter(element_id, &self.page)
    }

    pub fn pointer_leave(&mut self, element_id: &str) -> Result<(), UiError> {
        self.menus.pointer_leave(element_id)
    }

    pub fn advance(&mut self, units: u64) -> Vec<MenuTransition> {
        self.menus.advance(units)
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.page.scroll_y = y;
    }

    // ---- Row events ----

    pub fn add_row(&mut self, collection: Collection) -> RowId {
        let (list, options) = self.split(collection);
        list.add_row(options)
    }

    pub fn delete_row(&mut self, collection: Collection, id: RowId) -> Result<RuleRow, UiError> {
        self.split(collection).0.delete_row(id)
    }

    pub fn select_option(&mut self, collection: Collection, id: RowId, option: &str) -> Result<(), UiError> {
        let (list, options) = self.split(collection);
        list.select_option(id, option, options)
    }

    pub fn select_value(&mut self, collection: Collection, id: RowId, value: &str) -> Result<(), UiError> {
        self.split(collection).0.select_value(id, value)
    }

    pub fn set_input(&mut self, collection: Collection, id: RowId, field: NumericField, text: &str) -> Result<(), UiError> {
        self.split(collection).0.set_input(id, field, text)
    }

    /// Every row field of both collections, as the surrounding form submits
    /// them.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = self.pricing_rules.form_fields();
        fields.extend(self.modifiers.form_fields());
        fields
    }

    fn split(&mut self, collection: Collection) -> (&mut RowList, &OptionValueMap) {
        let list = match collection {
            Collection::PricingRules => &mut self.pricing_rules,
            Collection::Modifiers => &mut self.modifiers,
        };
        (list, &self.page.option_values)
    }
}
