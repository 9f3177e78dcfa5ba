use storefront_ui::error::UiError;
use storefront_ui::menu::hover::HoverController;
use storefront_ui::menu::menu_model::{
    HoverSettings, MenuBinding, MenuTransition, Visibility, default_bindings,
};
use storefront_ui::menu::scheduler::Scheduler;
use storefront_ui::page::storefront::Storefront;

mod common;
use common::utils::nav_page;

fn controller() -> (HoverController, storefront_ui::page::snapshot::PageSnapshot) {
    let page = nav_page();
    let ctl = HoverController::attach(&default_bindings(), &page, HoverSettings::default())
        .expect("all default bindings exist on the nav page");
    (ctl, page)
}

// =========================================================================
// Scheduler
// =========================================================================

#[test]
fn scheduler_fires_in_deadline_order() {
    let mut s = Scheduler::new();
    s.schedule(300, "late");
    s.schedule(100, "early");
    s.schedule(200, "middle");

    let fired: Vec<_> = s.advance(250).into_iter().map(|f| (f.at, f.payload)).collect();
    assert_eq!(fired, vec![(100, "early"), (200, "middle")]);
    assert_eq!(s.now(), 250);
    assert_eq!(s.pending_count(), 1);

    let rest: Vec<_> = s.advance(50).into_iter().map(|f| f.payload).collect();
    assert_eq!(rest, vec!["late"]);
}

#[test]
fn scheduler_same_deadline_fires_in_scheduling_order() {
    let mut s = Scheduler::new();
    s.schedule(10, 1);
    s.schedule(10, 2);
    s.schedule(10, 3);

    let fired: Vec<_> = s.advance(10).into_iter().map(|f| f.payload).collect();
    assert_eq!(fired, vec![1, 2, 3]);
}

#[test]
fn scheduler_cancelled_task_never_fires() {
    let mut s = Scheduler::new();
    let a = s.schedule(100, "a");
    let b = s.schedule(100, "b");

    assert_eq!(s.cancel(a), Some("a"));
    assert_eq!(s.cancel(a), None, "second cancel is a no-op");
    assert!(!s.is_pending(a));
    assert!(s.is_pending(b));

    let fired: Vec<_> = s.advance(1000).into_iter().map(|f| f.payload).collect();
    assert_eq!(fired, vec!["b"]);
    assert!(!s.is_pending(b));
}

#[test]
fn scheduler_deadline_is_relative_to_current_clock() {
    let mut s = Scheduler::new();
    s.advance(500);
    s.schedule(200, ());
    assert!(s.advance(199).is_empty());
    let fired = s.advance(1);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].at, 700);
}

// =========================================================================
// Attach
// =========================================================================

#[test]
fn attach_fails_when_menu_element_is_missing() {
    let mut page = nav_page();
    page.elements.remove("mega-menu-gear");

    let err = HoverController::attach(&default_bindings(), &page, HoverSettings::default())
        .expect_err("missing menu must fail attach");
    match err {
        UiError::MissingElement { id, .. } => assert_eq!(id, "mega-menu-gear"),
        other => panic!("Expected MissingElement, got {:?}", other),
    }
}

#[test]
fn attach_fails_when_trigger_is_missing() {
    let page = nav_page();
    let bindings = vec![MenuBinding::new("sale-nav", "mega-menu-sale")];
    let err = HoverController::attach(&bindings, &page, HoverSettings::default()).unwrap_err();
    assert!(err.to_string().contains("sale-nav"), "Got: {}", err);
}

#[test]
fn menus_start_hidden() {
    let (ctl, _) = controller();
    for binding in default_bindings() {
        assert_eq!(ctl.visibility(&binding.menu_id), Some(Visibility::Hidden));
        assert_eq!(ctl.menu_top(&binding.menu_id), None);
        assert!(ctl.class_list(&binding.menu_id).is_empty());
    }
}

// =========================================================================
// Show / hide state machine
// =========================================================================

#[test]
fn entering_trigger_shows_menu_below_it() {
    let (mut ctl, page) = controller();

    let transition = ctl.pointer_enter("mens-nav", &page).unwrap();
    assert_eq!(
        transition,
        Some(MenuTransition::Shown {
            menu_id: "mega-menu-mens".into(),
            top: 127.0,
            at: 0,
        })
    );
    assert!(ctl.is_shown("mega-menu-mens"));
    assert_eq!(ctl.style_top("mega-menu-mens").as_deref(), Some("127px"));
    assert_eq!(ctl.class_list("mega-menu-mens"), vec!["show"]);
}

#[test]
fn repeated_enter_repositions_without_new_transition() {
    let (mut ctl, page) = controller();

    assert!(ctl.pointer_enter("mens-nav", &page).unwrap().is_some());
    assert!(ctl.pointer_enter("mens-nav", &page).unwrap().is_none());
    assert_eq!(ctl.menu_top("mega-menu-mens"), Some(127.0));
}

#[test]
fn leaving_trigger_hides_after_grace_period() {
    let (mut ctl, page) = controller();
    ctl.pointer_enter("mens-nav", &page).unwrap();
    ctl.pointer_leave("mens-nav").unwrap();
    assert!(ctl.hide_pending("mega-menu-mens"));

    assert!(ctl.advance(199).is_empty());
    assert!(ctl.is_shown("mega-menu-mens"), "Still inside grace period");

    let transitions = ctl.advance(1);
    assert_eq!(
        transitions,
        vec![MenuTransition::Hidden {
            menu_id: "mega-menu-mens".into(),
            at: 200,
        }]
    );
    assert!(!ctl.is_shown("mega-menu-mens"));
    assert!(!ctl.hide_pending("mega-menu-mens"));
}

#[test]
fn reentering_trigger_within_grace_period_keeps_menu_shown() {
    let (mut ctl, page) = controller();
    ctl.pointer_enter("mens-nav", &page).unwrap();
    ctl.pointer_leave("mens-nav").unwrap();
    assert!(ctl.advance(100).is_empty());

    ctl.pointer_enter("mens-nav", &page).unwrap();
    assert!(ctl.advance(1000).is_empty(), "No hide may ever fire");
    assert!(ctl.is_shown("mega-menu-mens"));
}

#[test]
fn moving_from_trigger_into_panel_keeps_menu_shown() {
    let (mut ctl, page) = controller();
    ctl.pointer_enter("womens-nav", &page).unwrap();
    ctl.pointer_leave("womens-nav").unwrap();
    ctl.advance(50);
    ctl.pointer_enter("mega-menu-womens", &page).unwrap();

    assert!(ctl.advance(500).is_empty());
    assert!(ctl.is_shown("mega-menu-womens"));

    ctl.pointer_leave("mega-menu-womens").unwrap();
    ctl.advance(200);
    assert!(!ctl.is_shown("mega-menu-womens"));
}

#[test]
fn entering_panel_of_hidden_menu_does_not_show_it() {
    let (mut ctl, page) = controller();
    assert_eq!(ctl.pointer_enter("mega-menu-gear", &page).unwrap(), None);
    assert!(!ctl.is_shown("mega-menu-gear"));
}

#[test]
fn second_leave_replaces_pending_hide() {
    let (mut ctl, page) = controller();
    ctl.pointer_enter("gear-nav", &page).unwrap();
    ctl.pointer_leave("gear-nav").unwrap();
    ctl.advance(150);
    ctl.pointer_leave("mega-menu-gear").unwrap();

    // The first deadline (200) was cancelled; the new one is 350.
    assert!(ctl.advance(60).is_empty());
    assert!(ctl.is_shown("mega-menu-gear"));

    let transitions = ctl.advance(140);
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].menu_id(), "mega-menu-gear");
}

#[test]
fn bindings_do_not_interact() {
    let (mut ctl, page) = controller();
    ctl.pointer_enter("mens-nav", &page).unwrap();
    ctl.pointer_enter("womens-nav", &page).unwrap();
    ctl.pointer_leave("mens-nav").unwrap();
    ctl.advance(200);

    assert!(!ctl.is_shown("mega-menu-mens"));
    assert!(ctl.is_shown("mega-menu-womens"));
    assert!(!ctl.is_shown("mega-menu-gear"));
}

#[test]
fn unknown_element_is_rejected() {
    let (mut ctl, page) = controller();
    assert!(matches!(
        ctl.pointer_enter("footer", &page),
        Err(UiError::UnknownBinding(id)) if id == "footer"
    ));
    assert!(ctl.pointer_leave("footer").is_err());
}

#[test]
fn custom_settings_change_delay_and_offset() {
    let page = nav_page();
    let settings = HoverSettings {
        hide_delay_ms: 50,
        offset: 10.0,
    };
    let mut ctl = HoverController::attach(&default_bindings(), &page, settings).unwrap();

    ctl.pointer_enter("mens-nav", &page).unwrap();
    assert_eq!(ctl.menu_top("mega-menu-mens"), Some(110.0));
    ctl.pointer_leave("mens-nav").unwrap();
    assert_eq!(ctl.advance(50).len(), 1);
}

// =========================================================================
// Position follows the page on every show
// =========================================================================

#[test]
fn top_is_recomputed_from_viewport_position_on_each_show() {
    let mut storefront = Storefront::init(nav_page(), &default_bindings(), HoverSettings::default()).unwrap();

    storefront.pointer_enter("mens-nav").unwrap();
    assert_eq!(storefront.menus().menu_top("mega-menu-mens"), Some(127.0));
    storefront.pointer_leave("mens-nav").unwrap();
    storefront.advance(200);

    storefront.scroll_to(40.0);
    storefront.pointer_enter("mens-nav").unwrap();
    assert_eq!(storefront.menus().menu_top("mega-menu-mens"), Some(87.0));
    assert_eq!(storefront.menus().style_top("mega-menu-mens").as_deref(), Some("87px"));
}
