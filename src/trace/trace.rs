use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::menu::menu_model::MenuTransition;
use crate::rules::row_model::{Collection, RowId};

/// One JSONL trace line.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    /// Virtual clock of the hover controller
    pub clock: u64,
    pub step: u64,

    pub component: &'static str,
    pub event: String,

    pub target: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, clock: u64, component: &'static str, event: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            clock,
            step,
            component,
            event: event.to_string(),
            target: None,
            detail: None,
        }
    }

    pub fn menu(step: u64, clock: u64, transition: &MenuTransition) -> Self {
        let event = match transition {
            MenuTransition::Shown { .. } => "shown",
            MenuTransition::Hidden { .. } => "hidden",
        };
        let mut ev = Self::now(step, clock, "menu", event).with_target(transition.menu_id());
        if let MenuTransition::Shown { top, .. } = transition {
            ev = ev.with_detail(format!("top={}px", top));
        }
        ev
    }

    pub fn row(step: u64, clock: u64, event: &str, collection: Collection, id: RowId) -> Self {
        Self::now(step, clock, "rules", event).with_target(format!("{}/{}", collection, id))
    }

    pub fn with_target(mut self, target: impl ToString) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
