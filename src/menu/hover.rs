use crate::error::UiError;
use crate::menu::menu_model::{
    HoverSettings, MenuBinding, MenuTransition, PageGeometry, Region, SHOW_CLASS, Visibility,
};
use crate::menu::scheduler::{Scheduler, TaskId};

#[derive(Debug)]
struct BoundMenu {
    binding: MenuBinding,
    visibility: Visibility,
    top: Option<f64>,
    pending_hide: Option<TaskId>,
}

/// Shows mega-menus beneath their triggers and hides them after the pointer
/// has left the trigger/panel region for the grace period.
///
/// Each binding owns one pointer region (trigger plus panel) with at most one
/// pending hide task. Entering either half cancels it; leaving either half
/// replaces it.
#[derive(Debug)]
pub struct HoverController {
    menus: Vec<BoundMenu>,
    scheduler: Scheduler<usize>,
    settings: HoverSettings,
}

impl HoverController {
    /// Resolve every binding against the page. All trigger and menu ids must
    /// exist; a missing one fails the whole attach.
    pub fn attach(
        bindings: &[MenuBinding],
        geometry: &dyn PageGeometry,
        settings: HoverSettings,
    ) -> Result<Self, UiError> {
        let mut menus = Vec::with_capacity(bindings.len());

        for binding in bindings {
            for id in [&binding.trigger_id, &binding.menu_id] {
                if !geometry.has_element(id) {
                    return Err(UiError::MissingElement {
                        id: id.clone(),
                        binding: format!("{} -> {}", binding.trigger_id, binding.menu_id),
                    });
                }
            }

            menus.push(BoundMenu {
                binding: binding.clone(),
                visibility: Visibility::Hidden,
                top: None,
                pending_hide: None,
            });
        }

        Ok(Self {
            menus,
            scheduler: Scheduler::new(),
            settings,
        })
    }

    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn bindings(&self) -> impl Iterator<Item = &MenuBinding> {
        self.menus.iter().map(|m| &m.binding)
    }

    /// Pointer entered a trigger or a menu panel.
    ///
    /// Entering a trigger repositions and shows its menu. Entering a panel only
    /// keeps the menu alive. Returns a transition when the menu became visible.
    pub fn pointer_enter(
        &mut self,
        element_id: &str,
        geometry: &dyn PageGeometry,
    ) -> Result<Option<MenuTransition>, UiError> {
        let (idx, region) = self.locate(element_id)?;
        self.cancel_pending(idx);

        if region == Region::Panel {
            return Ok(None);
        }

        let offset = self.settings.offset;
        let now = self.scheduler.now();
        let menu = &mut self.menus[idx];

        let rect = geometry
            .bounding_rect(&menu.binding.trigger_id)
            .ok_or_else(|| UiError::MissingElement {
                id: menu.binding.trigger_id.clone(),
                binding: format!("{} -> {}", menu.binding.trigger_id, menu.binding.menu_id),
            })?;
        let top = rect.bottom + offset;
        menu.top = Some(top);

        if menu.visibility == Visibility::Shown {
            return Ok(None);
        }
        menu.visibility = Visibility::Shown;

        Ok(Some(MenuTransition::Shown {
            menu_id: menu.binding.menu_id.clone(),
            top,
            at: now,
        }))
    }

    /// Pointer left a trigger or a menu panel: start the grace period.
    pub fn pointer_leave(&mut self, element_id: &str) -> Result<(), UiError> {
        let (idx, _) = self.locate(element_id)?;
        self.cancel_pending(idx);

        let task = self.scheduler.schedule(self.settings.hide_delay_ms, idx);
        self.menus[idx].pending_hide = Some(task);
        Ok(())
    }

    /// Advance the clock, hiding every menu whose grace period ran out.
    pub fn advance(&mut self, units: u64) -> Vec<MenuTransition> {
        let mut transitions = Vec::new();

        for fired in self.scheduler.advance(units) {
            let menu = &mut self.menus[fired.payload];
            menu.pending_hide = None;

            if menu.visibility == Visibility::Shown {
                menu.visibility = Visibility::Hidden;
                transitions.push(MenuTransition::Hidden {
                    menu_id: menu.binding.menu_id.clone(),
                    at: fired.at,
                });
            }
        }

        transitions
    }

    pub fn visibility(&self, menu_id: &str) -> Option<Visibility> {
        self.find_menu(menu_id).map(|m| m.visibility)
    }

    pub fn is_shown(&self, menu_id: &str) -> bool {
        self.visibility(menu_id) == Some(Visibility::Shown)
    }

    /// Whether a hide is currently scheduled for this menu.
    pub fn hide_pending(&self, menu_id: &str) -> bool {
        self.find_menu(menu_id)
            .and_then(|m| m.pending_hide)
            .is_some_and(|task| self.scheduler.is_pending(task))
    }

    /// Last computed top position; `None` until the menu was first shown.
    pub fn menu_top(&self, menu_id: &str) -> Option<f64> {
        self.find_menu(menu_id).and_then(|m| m.top)
    }

    /// Inline `top` style value, e.g. `"127px"`.
    pub fn style_top(&self, menu_id: &str) -> Option<String> {
        self.menu_top(menu_id).map(|top| format!("{}px", top))
    }

    /// State classes the host should apply to the menu element.
    pub fn class_list(&self, menu_id: &str) -> Vec<&'static str> {
        if self.is_shown(menu_id) {
            vec![SHOW_CLASS]
        } else {
            vec![]
        }
    }

    fn cancel_pending(&mut self, idx: usize) {
        if let Some(task) = self.menus[idx].pending_hide.take() {
            self.scheduler.cancel(task);
        }
    }

    fn find_menu(&self, menu_id: &str) -> Option<&BoundMenu> {
        self.menus.iter().find(|m| m.binding.menu_id == menu_id)
    }

    fn locate(&self, element_id: &str) -> Result<(usize, Region), UiError> {
        self.menus
            .iter()
            .enumerate()
            .find_map(|(i, m)| {
                if m.binding.trigger_id == element_id {
                    Some((i, Region::Trigger))
                } else if m.binding.menu_id == element_id {
                    Some((i, Region::Panel))
                } else {
                    None
                }
            })
            .ok_or_else(|| UiError::UnknownBinding(element_id.to_string()))
    }
}
