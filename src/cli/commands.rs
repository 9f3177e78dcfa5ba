use crate::cli::config::{AppConfig, resolve_hover_settings};
use crate::error::UiError;
use crate::menu::menu_model::MenuBinding;
use crate::page::snapshot::{PageSnapshot, load_snapshot};
use crate::page::storefront::Storefront;
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::SuiteReport;
use crate::rules::render::render_container;
use crate::rules::row_model::Collection;
use crate::scenario::runner::ScenarioRunner;
use crate::scenario::scenario_model::Scenario;
use crate::trace::logger::TraceLogger;

// ============================================================================
// run subcommand
// ============================================================================

/// Run scenarios and return whether all passed.
pub fn cmd_run(
    scenario_path: &str,
    format: Option<&str>,
    output: Option<&str>,
    config: &AppConfig,
    hide_delay_ms: Option<u64>,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scenarios = load_scenarios(scenario_path)?;

    if scenarios.is_empty() {
        eprintln!("No scenarios found at: {}", scenario_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Running {} scenarios...", scenarios.len());
    }

    let settings = resolve_hover_settings(config, hide_delay_ms);
    let runner = ScenarioRunner::new(&config.menu.bindings, settings, tracer);
    let start = std::time::Instant::now();

    let mut results = Vec::new();
    for scenario in &scenarios {
        if verbose > 0 {
            eprintln!("  Running: {}", scenario.name);
        }
        results.push(runner.run(scenario));
    }

    let report = SuiteReport::from_results("storefront-ui", results)
        .with_duration(start.elapsed().as_millis());
    let all_passed = report.all_passed();

    let format = format.unwrap_or(config.run.format.as_str());
    let output_content = match format {
        "junit" => generate_junit_xml(&report),
        _ => format_console_report(&report),
    };

    match output.or(config.run.output.as_deref()) {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

/// Load scenarios from a single YAML file or a directory of YAML files.
pub fn load_scenarios(path: &str) -> Result<Vec<Scenario>, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        let mut scenarios = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let p = entry?.path();
            if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
                scenarios.push(parse_scenario(&std::fs::read_to_string(&p)?, &p.display().to_string())?);
            }
        }
        // Sort by name for deterministic order
        scenarios.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(scenarios)
    } else {
        Ok(vec![parse_scenario(&std::fs::read_to_string(path)?, path)?])
    }
}

pub fn parse_scenario(content: &str, origin: &str) -> Result<Scenario, UiError> {
    serde_yaml::from_str(content).map_err(|source| UiError::YamlParse {
        context: format!("scenario {}", origin),
        source,
    })
}

// ============================================================================
// render / fields subcommands
// ============================================================================

pub fn cmd_render(
    page_path: &str,
    collection: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let collections = parse_collections(collection)?;
    let storefront = init_storefront(page_path, config, verbose)?;

    for c in collections {
        print!("{}", render_container(storefront.rows(c), storefront.options()));
    }
    Ok(())
}

pub fn cmd_fields(page_path: &str, config: &AppConfig, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let storefront = init_storefront(page_path, config, verbose)?;
    let json = serde_json::to_string_pretty(&storefront.form_fields()).map_err(|source| {
        UiError::JsonSerialize {
            context: "form fields".into(),
            source,
        }
    })?;
    println!("{}", json);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// `None` selects both collections.
pub fn parse_collections(name: Option<&str>) -> Result<Vec<Collection>, String> {
    match name {
        None => Ok(Collection::ALL.to_vec()),
        Some(n) => Collection::from_prefix(n)
            .map(|c| vec![c])
            .ok_or_else(|| format!("Unknown collection '{}' (expected pricing_rules or modifiers)", n)),
    }
}

/// Split configured bindings into those the snapshot can host and those
/// naming a trigger or menu id it lacks.
pub fn partition_bindings(bindings: &[MenuBinding], page: &PageSnapshot) -> (Vec<MenuBinding>, Vec<MenuBinding>) {
    bindings
        .iter()
        .cloned()
        .partition(|b| page.elements.contains_key(&b.trigger_id) && page.elements.contains_key(&b.menu_id))
}

/// `render` and `fields` only need the row lists, so bindings the snapshot
/// cannot host are skipped (reported with `-v`) instead of failing attach.
fn init_storefront(page_path: &str, config: &AppConfig, verbose: u8) -> Result<Storefront, UiError> {
    let page = load_snapshot(page_path)?;
    let (bindings, skipped) = partition_bindings(&config.menu.bindings, &page);

    if verbose > 0 {
        for b in &skipped {
            eprintln!(
                "Warning: skipping menu binding {} -> {}: element missing from {}",
                b.trigger_id, b.menu_id, page_path
            );
        }
    }

    let storefront = Storefront::init(page, &bindings, resolve_hover_settings(config, None))?;
    if verbose > 1 {
        for b in storefront.menus().bindings() {
            eprintln!("  Attached menu {} -> {}", b.trigger_id, b.menu_id);
        }
    }
    Ok(storefront)
}
