use leptos::*;

use crate::domain::market_data::{Symbol, TimeWindow};

/// UI selections owned by the presentation layer.
///
/// The core never reads these directly; they are passed into service queries.
/// `revision` ticks on every cache write so reactive views know to re-pull.
#[derive(Clone, Copy)]
pub struct DashboardViewState {
    pub selected_symbol: RwSignal<Option<Symbol>>,
    pub time_window: RwSignal<TimeWindow>,
    pub hovered_symbol: RwSignal<Option<Symbol>>,
    pub revision: RwSignal<u64>,
}

impl DashboardViewState {
    pub fn new(time_window: TimeWindow) -> Self {
        Self {
            selected_symbol: create_rw_signal(None),
            time_window: create_rw_signal(time_window),
            hovered_symbol: create_rw_signal(None),
            revision: create_rw_signal(0),
        }
    }

    pub fn selected_symbol(&self) -> Option<Symbol> {
        self.selected_symbol.get_untracked()
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window.get_untracked()
    }

    pub fn hovered_symbol(&self) -> Option<Symbol> {
        self.hovered_symbol.get_untracked()
    }

    pub fn revision(&self) -> u64 {
        self.revision.get_untracked()
    }

    /// Returns `true` when the selection actually changed.
    pub fn select_symbol(&self, symbol: Symbol) -> bool {
        if self.selected_symbol.with_untracked(|current| current.as_ref() == Some(&symbol)) {
            return false;
        }
        self.selected_symbol.set(Some(symbol));
        true
    }

    /// Returns `true` when the window actually changed.
    pub fn select_window(&self, window: TimeWindow) -> bool {
        if self.time_window.get_untracked() == window {
            return false;
        }
        self.time_window.set(window);
        true
    }

    pub fn hover(&self, symbol: Option<Symbol>) {
        self.hovered_symbol.set(symbol);
    }

    pub fn bump_revision(&self) -> u64 {
        self.revision.update(|revision| *revision += 1);
        self.revision.get_untracked()
    }
}

impl Default for DashboardViewState {
    fn default() -> Self {
        Self::new(TimeWindow::default())
    }
}
