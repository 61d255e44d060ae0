//! Brush palette and selection state.

/// A single selectable brush: an identifier plus a stroke diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// Identifier used by selection events and host UI controls
    pub id: String,
    /// Stroke diameter in pixels
    pub size: f64,
}

/// Fixed set of brushes with exactly one selected at all times.
///
/// The palette is created once from validated configuration and never grows
/// or shrinks during the widget lifetime. Selection is a single index into
/// the brush list, so the exactly-one-selected invariant holds by
/// construction rather than by keeping a flag on every entry in sync.
#[derive(Debug, Clone)]
pub struct BrushPalette {
    brushes: Vec<Brush>,
    selected: usize,
}

impl BrushPalette {
    /// Builds a palette from an already-validated brush list.
    ///
    /// Callers (the config layer) guarantee a non-empty list, unique ids,
    /// and `selected` in bounds.
    pub(crate) fn new(brushes: Vec<Brush>, selected: usize) -> Self {
        debug_assert!(selected < brushes.len());
        Self { brushes, selected }
    }

    /// Selects the brush with the given id and returns its size.
    ///
    /// Reselecting the current brush is a no-op state-wise but still returns
    /// the size so callers can re-apply it. Returns `None` for an id outside
    /// the configured set; the set of valid ids is closed at construction.
    pub fn select(&mut self, id: &str) -> Option<f64> {
        let index = self.brushes.iter().position(|brush| brush.id == id)?;
        if index != self.selected {
            log::debug!(
                "Brush selection changed: {} -> {}",
                self.brushes[self.selected].id,
                id
            );
        }
        self.selected = index;
        Some(self.brushes[index].size)
    }

    /// The currently selected brush.
    pub fn selected(&self) -> &Brush {
        &self.brushes[self.selected]
    }

    /// Iterates over `(brush, is_selected)` pairs in configuration order.
    ///
    /// Exactly one pair has `is_selected == true`; a host UI renders its
    /// selected marker from this.
    pub fn entries(&self) -> impl Iterator<Item = (&Brush, bool)> {
        self.brushes
            .iter()
            .enumerate()
            .map(|(index, brush)| (brush, index == self.selected))
    }

    /// Number of configured brushes.
    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    /// The palette is never empty; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> BrushPalette {
        BrushPalette::new(
            vec![
                Brush {
                    id: "fine".into(),
                    size: 8.0,
                },
                Brush {
                    id: "medium".into(),
                    size: 16.0,
                },
                Brush {
                    id: "broad".into(),
                    size: 24.0,
                },
            ],
            1,
        )
    }

    fn selected_count(palette: &BrushPalette) -> usize {
        palette.entries().filter(|(_, selected)| *selected).count()
    }

    #[test]
    fn exactly_one_selected_after_any_selection_sequence() {
        let mut palette = palette();
        assert_eq!(selected_count(&palette), 1);

        for id in ["fine", "broad", "broad", "medium", "fine"] {
            assert!(palette.select(id).is_some());
            assert_eq!(selected_count(&palette), 1);
            assert_eq!(palette.selected().id, id);
        }
    }

    #[test]
    fn reselecting_current_brush_returns_size() {
        let mut palette = palette();
        assert_eq!(palette.select("medium"), Some(16.0));
        assert_eq!(palette.select("medium"), Some(16.0));
        assert_eq!(palette.selected().id, "medium");
    }

    #[test]
    fn unknown_id_leaves_selection_untouched() {
        let mut palette = palette();
        assert_eq!(palette.select("bogus"), None);
        assert_eq!(palette.selected().id, "medium");
        assert_eq!(selected_count(&palette), 1);
    }

    #[test]
    fn entries_follow_configuration_order() {
        let palette = palette();
        let ids: Vec<&str> = palette.entries().map(|(brush, _)| brush.id.as_str()).collect();
        assert_eq!(ids, ["fine", "medium", "broad"]);
    }
}
