use clap::Parser;
use storefront_ui::cli::commands::{parse_collections, partition_bindings};
use storefront_ui::cli::config::{AppConfig, Cli, Commands, load_config, resolve_hover_settings};
use storefront_ui::menu::menu_model::{MenuBinding, Rect, default_bindings};
use storefront_ui::page::snapshot::PageSnapshot;
use storefront_ui::rules::row_model::Collection;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_run_minimal() {
    let cli = Cli::parse_from(["storefront-ui", "run", "--scenario", "wizard.yaml"]);
    match cli.command {
        Commands::Run {
            scenario,
            format,
            output,
        } => {
            assert_eq!(scenario, "wizard.yaml");
            assert_eq!(format, None);
            assert_eq!(output, None);
        }
        _ => panic!("Expected Run command"),
    }
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.hide_delay_ms, None);
}

#[test]
fn cli_parse_run_all_args() {
    let cli = Cli::parse_from([
        "storefront-ui",
        "-vv",
        "run",
        "--scenario",
        "scenarios/",
        "--format",
        "junit",
        "-o",
        "report.xml",
        "--trace",
        "trace.jsonl",
        "--hide-delay-ms",
        "350",
    ]);
    match cli.command {
        Commands::Run {
            scenario,
            format,
            output,
        } => {
            assert_eq!(scenario, "scenarios/");
            assert_eq!(format.as_deref(), Some("junit"));
            assert_eq!(output.as_deref(), Some("report.xml"));
        }
        _ => panic!("Expected Run command"),
    }
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.trace.as_deref(), Some("trace.jsonl"));
    assert_eq!(cli.hide_delay_ms, Some(350));
}

#[test]
fn cli_parse_render_with_collection() {
    let cli = Cli::parse_from([
        "storefront-ui",
        "render",
        "--page",
        "page.yaml",
        "--collection",
        "modifiers",
    ]);
    match cli.command {
        Commands::Render { page, collection } => {
            assert_eq!(page, "page.yaml");
            assert_eq!(collection.as_deref(), Some("modifiers"));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_parse_fields() {
    let cli = Cli::parse_from(["storefront-ui", "fields", "--page", "page.json"]);
    assert!(matches!(cli.command, Commands::Fields { page } if page == "page.json"));
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["storefront-ui"]).is_err());
    assert!(Cli::try_parse_from(["storefront-ui", "run"]).is_err(), "--scenario is required");
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn missing_config_file_gives_defaults() {
    let config = load_config(Some("/nonexistent/storefront-ui.yaml"));
    assert_eq!(config.menu.hide_delay_ms, 200);
    assert_eq!(config.menu.offset, 27.0);
    assert_eq!(config.menu.bindings.len(), 3);
    assert_eq!(config.menu.bindings[0].trigger_id, "mens-nav");
    assert_eq!(config.run.format, "console");
    assert!(config.trace.path.is_none());
}

#[test]
fn partial_config_file_keeps_other_defaults() {
    let path = std::env::temp_dir().join(format!("storefront-ui-config-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "menu:\n  hide_delay_ms: 400\n  bindings:\n    - trigger_id: sale-nav\n      menu_id: mega-menu-sale\ntrace:\n  path: ui.jsonl\n",
    )
    .unwrap();

    let config = load_config(path.to_str());
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.menu.hide_delay_ms, 400);
    assert_eq!(config.menu.offset, 27.0);
    assert_eq!(config.menu.bindings.len(), 1);
    assert_eq!(config.menu.bindings[0].menu_id, "mega-menu-sale");
    assert_eq!(config.trace.path.as_deref(), Some("ui.jsonl"));
    assert_eq!(config.run.format, "console");
}

#[test]
fn cli_hide_delay_overrides_config() {
    let mut config = AppConfig::default();
    config.menu.hide_delay_ms = 400;

    assert_eq!(resolve_hover_settings(&config, None).hide_delay_ms, 400);
    assert_eq!(resolve_hover_settings(&config, Some(50)).hide_delay_ms, 50);
    assert_eq!(resolve_hover_settings(&config, Some(50)).offset, 27.0);
}

#[test]
fn collection_names_parse() {
    assert_eq!(parse_collections(None).unwrap(), Collection::ALL.to_vec());
    assert_eq!(parse_collections(Some("pricing_rules")).unwrap(), vec![Collection::PricingRules]);
    assert!(parse_collections(Some("rules")).is_err());
}

#[test]
fn bindings_missing_from_snapshot_are_partitioned_out() {
    let mut page = PageSnapshot::default();
    let r = Rect {
        top: 0.0,
        bottom: 10.0,
        left: 0.0,
        right: 0.0,
    };
    page.elements.insert("mens-nav".into(), r);
    page.elements.insert("mega-menu-mens".into(), r);
    page.elements.insert("gear-nav".into(), r);

    let (kept, skipped) = partition_bindings(&default_bindings(), &page);
    assert_eq!(kept, vec![MenuBinding::new("mens-nav", "mega-menu-mens")]);
    let skipped: Vec<&str> = skipped.iter().map(|b| b.trigger_id.as_str()).collect();
    assert_eq!(skipped, vec!["womens-nav", "gear-nav"]);
}
