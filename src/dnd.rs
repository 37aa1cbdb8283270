use leptos::prelude::*;

use crate::models::{DragLocation, DragResult};

// Reactive state for the drag gesture currently in flight. The browser owns
// the gesture itself (pointer tracking, drag image, drop hit testing); this
// context only remembers where the drag started and which slot the pointer
// was last over, then turns the terminal event into a DragResult.
#[derive(Clone, Copy)]
pub struct DragContext {
    source: RwSignal<Option<DragLocation>>,
    over: RwSignal<Option<DragLocation>>,
}

impl DragContext {
    pub fn new() -> Self {
        Self {
            source: RwSignal::new(None),
            over: RwSignal::new(None),
        }
    }

    // dragstart on a card.
    pub fn begin(&self, from: DragLocation) {
        self.source.set(Some(from));
        self.over.set(None);
    }

    // dragover on a card or on a column's open area. Ignores stray dragover
    // events that belong to no board drag (e.g. a file dragged in from the
    // desktop), and skips the signal write while the slot is unchanged since
    // dragover fires continuously.
    pub fn drag_over(&self, at: DragLocation) {
        if self.source.get_untracked().is_none() {
            return;
        }
        if self.over.get_untracked().as_ref() != Some(&at) {
            self.over.set(Some(at));
        }
    }

    // drop on a column. Yields the finished gesture and resets, so the
    // dragend that follows finds nothing left to report.
    pub fn complete_drop(&self) -> Option<DragResult> {
        let source = self.source.get_untracked()?;
        let destination = self.over.get_untracked();
        self.clear();
        Some(DragResult {
            source,
            destination,
        })
    }

    // dragend on the card. Only yields a result when no drop consumed the
    // gesture first, which is how a release outside every column shows up.
    pub fn abandon(&self) -> Option<DragResult> {
        let source = self.source.get_untracked()?;
        self.clear();
        Some(DragResult {
            source,
            destination: None,
        })
    }

    fn clear(&self) {
        self.source.set(None);
        self.over.set(None);
    }

    // Reactive accessors for the visual feedback classes.
    pub fn is_dragging_from(&self, column_id: &str, index: usize) -> bool {
        self.source.with(|source| {
            matches!(source, Some(loc) if loc.column_id == column_id && loc.index == index)
        })
    }

    pub fn is_over_column(&self, column_id: &str) -> bool {
        self.over
            .with(|over| matches!(over, Some(loc) if loc.column_id == column_id))
    }
}

// Installs a fresh context for the page; components below it pick it up
// with use_drag_context.
pub fn provide_drag_context() -> DragContext {
    let drag = DragContext::new();
    provide_context(drag);
    drag
}

pub fn use_drag_context() -> DragContext {
    use_context::<DragContext>().expect("drag context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_yields_the_hovered_slot_as_destination() {
        let drag = DragContext::new();
        drag.begin(DragLocation::new("todo", 1));
        drag.drag_over(DragLocation::new("doing", 0));

        let result = drag.complete_drop().unwrap();
        assert_eq!(result.source, DragLocation::new("todo", 1));
        assert_eq!(result.destination, Some(DragLocation::new("doing", 0)));
    }

    #[test]
    fn drop_consumes_the_gesture() {
        let drag = DragContext::new();
        drag.begin(DragLocation::new("todo", 0));
        drag.drag_over(DragLocation::new("todo", 2));

        assert!(drag.complete_drop().is_some());
        // The dragend that follows a handled drop reports nothing.
        assert!(drag.abandon().is_none());
        assert!(drag.complete_drop().is_none());
    }

    #[test]
    fn abandoned_drag_has_no_destination() {
        let drag = DragContext::new();
        drag.begin(DragLocation::new("todo", 1));
        drag.drag_over(DragLocation::new("done", 0));

        let result = drag.abandon().unwrap();
        assert_eq!(result.source, DragLocation::new("todo", 1));
        assert_eq!(result.destination, None);
    }

    #[test]
    fn hover_tracks_the_latest_slot() {
        let drag = DragContext::new();
        drag.begin(DragLocation::new("todo", 0));

        drag.drag_over(DragLocation::new("todo", 2));
        assert!(drag.is_over_column("todo"));

        drag.drag_over(DragLocation::new("done", 1));
        assert!(drag.is_over_column("done"));
        assert!(!drag.is_over_column("todo"));
    }

    #[test]
    fn dragover_without_an_active_drag_is_ignored() {
        let drag = DragContext::new();
        drag.drag_over(DragLocation::new("todo", 0));

        assert!(!drag.is_over_column("todo"));
        assert!(drag.complete_drop().is_none());
    }

    #[test]
    fn source_slot_reports_as_dragging() {
        let drag = DragContext::new();
        drag.begin(DragLocation::new("todo", 1));

        assert!(drag.is_dragging_from("todo", 1));
        assert!(!drag.is_dragging_from("todo", 0));
        assert!(!drag.is_dragging_from("done", 1));
    }
}
