use crate::report::report_model::SuiteReport;

// ============================================================================
// JUnit XML reporter — CI integration format
// ============================================================================

/// Generate a JUnit XML report, one `<testcase>` per scenario.
pub fn generate_junit_xml(report: &SuiteReport) -> String {
    let time_attr = report
        .duration_ms
        .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
        .unwrap_or_default();

    let mut cases = String::new();
    for result in &report.scenario_results {
        if result.passed {
            cases.push_str(&format!(
                "  <testcase name=\"{}\" classname=\"storefront-ui\" />\n",
                escape_xml(&result.scenario_name)
            ));
            continue;
        }

        let mut body_parts: Vec<String> = result
            .expectation_results
            .iter()
            .filter(|er| !er.passed)
            .map(|er| {
                let msg = er.message.as_deref().unwrap_or("expectation failed");
                format!("Step {}: {}", er.step_index, msg)
            })
            .collect();
        let failure_count = body_parts.len();

        if let Some(error) = &result.error {
            body_parts.push(format!("Error: {}", error));
        }

        let failure_message = if failure_count > 0 {
            format!("{} expectation(s) failed", failure_count)
        } else {
            "execution error".to_string()
        };

        cases.push_str(&format!(
            "  <testcase name=\"{name}\" classname=\"storefront-ui\">\n    <failure message=\"{message}\" type=\"ExpectationFailure\">{body}</failure>\n  </testcase>\n",
            name = escape_xml(&result.scenario_name),
            message = escape_xml(&failure_message),
            body = escape_xml(&body_parts.join("\n")),
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\"{time}>\n{cases}</testsuite>\n",
        name = escape_xml(&report.suite_name),
        tests = report.total,
        failures = report.failed,
        time = time_attr,
        cases = cases,
    )
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
