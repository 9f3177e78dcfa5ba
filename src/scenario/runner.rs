use crate::error::UiError;
use crate::menu::menu_model::{HoverSettings, MenuBinding};
use crate::page::storefront::Storefront;
use crate::rules::row_model::{Collection, RowId};
use crate::scenario::context::ScenarioContext;
use crate::scenario::scenario_model::{
    Expectation, ExpectationResult, Scenario, ScenarioResult, ScenarioStep,
};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Menu positions are CSS pixels; scroll arithmetic leaves float noise far
/// below this.
const TOP_TOLERANCE_PX: f64 = 1e-6;

/// Replays scenarios against a freshly initialized `Storefront`.
pub struct ScenarioRunner<'a> {
    bindings: &'a [MenuBinding],
    settings: HoverSettings,
    tracer: &'a TraceLogger,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(bindings: &'a [MenuBinding], settings: HoverSettings, tracer: &'a TraceLogger) -> Self {
        Self {
            bindings,
            settings,
            tracer,
        }
    }

    /// Run every step in order. Execution stops at the first step that fails
    /// with an error; failed expectations do not stop the run.
    pub fn run(&self, scenario: &Scenario) -> ScenarioResult {
        let mut ctx = ScenarioContext::new();
        let bindings = scenario.bindings.as_deref().unwrap_or(self.bindings);

        let mut storefront = match Storefront::init(scenario.page.clone(), bindings, self.settings) {
            Ok(s) => s,
            Err(e) => {
                return ScenarioResult {
                    scenario_name: scenario.name.clone(),
                    passed: false,
                    steps_run: 0,
                    expectation_results: ctx.expectation_results,
                    error: Some(format!("Page initialization failed: {}", e)),
                };
            }
        };

        for (i, step) in scenario.steps.iter().enumerate() {
            ctx.current_step = i;

            if let Err(e) = self.execute_step(step, i, &mut storefront, &mut ctx) {
                return ScenarioResult {
                    scenario_name: scenario.name.clone(),
                    passed: false,
                    steps_run: i + 1,
                    expectation_results: ctx.expectation_results,
                    error: Some(format!("Step {} failed: {}", i, e)),
                };
            }
        }

        let passed = ctx.all_passed();
        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed,
            steps_run: scenario.steps.len(),
            expectation_results: ctx.expectation_results,
            error: None,
        }
    }

    fn execute_step(
        &self,
        step: &ScenarioStep,
        step_index: usize,
        storefront: &mut Storefront,
        ctx: &mut ScenarioContext,
    ) -> Result<(), UiError> {
        match step {
            ScenarioStep::PointerEnter { element } => {
                if let Some(transition) = storefront.pointer_enter(element)? {
                    let clock = storefront.menus().now();
                    self.tracer.log(&TraceEvent::menu(ctx.next_seq(), clock, &transition));
                }
                Ok(())
            }

            ScenarioStep::PointerLeave { element } => storefront.pointer_leave(element),

            ScenarioStep::Advance { ms } => {
                let transitions = storefront.advance(*ms);
                let clock = storefront.menus().now();
                self.tracer.log_transitions(&transitions, clock, || ctx.next_seq());
                Ok(())
            }

            ScenarioStep::Scroll { y } => {
                storefront.scroll_to(*y);
                Ok(())
            }

            ScenarioStep::AddRow { collection } => {
                let id = storefront.add_row(*collection);
                self.trace_row(ctx, storefront, "add_row", *collection, id);
                Ok(())
            }

            ScenarioStep::DeleteRow { collection, position } => {
                let id = storefront.rows(*collection).id_at(*position)?;
                storefront.delete_row(*collection, id)?;
                self.trace_row(ctx, storefront, "delete_row", *collection, id);
                Ok(())
            }

            ScenarioStep::SelectOption {
                collection,
                position,
                option,
            } => {
                let id = storefront.rows(*collection).id_at(*position)?;
                storefront.select_option(*collection, id, option)?;
                self.trace_row(ctx, storefront, "select_option", *collection, id);
                Ok(())
            }

            ScenarioStep::SelectValue {
                collection,
                position,
                value,
            } => {
                let id = storefront.rows(*collection).id_at(*position)?;
                storefront.select_value(*collection, id, value)?;
                self.trace_row(ctx, storefront, "select_value", *collection, id);
                Ok(())
            }

            ScenarioStep::SetInput {
                collection,
                position,
                field,
                value,
            } => {
                let id = storefront.rows(*collection).id_at(*position)?;
                storefront.set_input(*collection, id, *field, value)
            }

            ScenarioStep::Expect { expectations } => {
                let storefront: &Storefront = storefront;
                let results = expectations
                    .iter()
                    .map(|expectation| Self::evaluate_one(expectation, step_index, storefront))
                    .collect();
                ctx.record(results);
                Ok(())
            }
        }
    }

    fn trace_row(
        &self,
        ctx: &mut ScenarioContext,
        storefront: &Storefront,
        event: &str,
        collection: Collection,
        id: RowId,
    ) {
        if !self.tracer.is_enabled() {
            return;
        }
        let mut ev = TraceEvent::row(ctx.next_seq(), storefront.menus().now(), event, collection, id);
        if let Some(composite) = storefront.rows(collection).get(id).and_then(|r| r.composite.as_ref()) {
            ev = ev.with_detail(composite);
        }
        self.tracer.log(&ev);
    }

    /// Evaluate a single expectation against the current component state.
    pub fn evaluate_one(expectation: &Expectation, step_index: usize, storefront: &Storefront) -> ExpectationResult {
        let (passed, actual, failure) = match expectation {
            Expectation::MenuShown { menu } => {
                let shown = storefront.menus().is_shown(menu);
                (shown, Some(visibility_text(shown)), format!("Menu '{}' is not shown", menu))
            }

            Expectation::MenuHidden { menu } => {
                let shown = storefront.menus().is_shown(menu);
                (!shown, Some(visibility_text(shown)), format!("Menu '{}' is not hidden", menu))
            }

            Expectation::MenuTop { menu, expected } => {
                let top = storefront.menus().menu_top(menu);
                (
                    top.is_some_and(|t| (t - expected).abs() < TOP_TOLERANCE_PX),
                    top.map(|t| format!("{}px", t)),
                    format!("Menu '{}' top is not {}px", menu, expected),
                )
            }

            Expectation::RowCount { collection, expected } => {
                let len = storefront.rows(*collection).len();
                (
                    len == *expected,
                    Some(len.to_string()),
                    format!("{} has {} rows, expected {}", collection, len, expected),
                )
            }

            Expectation::RowLabel {
                collection,
                position,
                expected,
            } => {
                let label = storefront
                    .rows(*collection)
                    .rows()
                    .get(*position)
                    .map(|r| format!("{} {}", collection.label(), r.number));
                (
                    label.as_deref() == Some(expected.as_str()),
                    label,
                    format!("{} row {} label is not '{}'", collection, position, expected),
                )
            }

            Expectation::Composite {
                collection,
                position,
                expected,
            } => {
                let composite = storefront
                    .rows(*collection)
                    .rows()
                    .get(*position)
                    .and_then(|r| r.composite.clone());
                (
                    composite.as_deref() == Some(expected.as_str()),
                    composite,
                    format!("{} row {} composite is not '{}'", collection, position, expected),
                )
            }

            Expectation::ValueChoices {
                collection,
                position,
                expected,
            } => {
                let choices = storefront
                    .rows(*collection)
                    .rows()
                    .get(*position)
                    .map(|r| r.value_choices().to_vec());
                (
                    choices.as_ref() == Some(expected),
                    choices.map(|c| format!("{:?}", c)),
                    format!("{} row {} value choices differ", collection, position),
                )
            }

            Expectation::FieldValue { name, expected } => {
                let value = storefront
                    .form_fields()
                    .into_iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| v);
                (
                    value.as_deref() == Some(expected.as_str()),
                    value,
                    format!("Field '{}' is not '{}'", name, expected),
                )
            }
        };

        ExpectationResult {
            step_index,
            expectation: expectation.clone(),
            passed,
            actual,
            message: if passed { None } else { Some(failure) },
        }
    }
}

fn visibility_text(shown: bool) -> String {
    let text = if shown { "shown" } else { "hidden" };
    text.to_string()
}
