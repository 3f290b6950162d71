// LogMonitor - core/scroll.rs
//
// Display/scroll reconciliation. When the displayed block is replaced, the
// view either jumps to the bottom (auto-scroll) or returns to the offset it
// had immediately before the replacement.

/// Where the log view should be scrolled after its content is replaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    /// Maximum offset: the last line is in view.
    Bottom,
    /// A specific vertical offset in points, captured before the update.
    Offset(f32),
}

impl ScrollTarget {
    /// Resolve to a concrete offset for a viewport whose largest valid
    /// offset is `max_offset`.
    ///
    /// A restored offset beyond the new maximum (content shrank) is clamped.
    pub fn resolve(self, max_offset: f32) -> f32 {
        let max_offset = max_offset.max(0.0);
        match self {
            Self::Bottom => max_offset,
            Self::Offset(offset) => offset.clamp(0.0, max_offset),
        }
    }
}

/// Decide the scroll target for a content replacement.
///
/// `captured_offset` must be read before the content is swapped.
pub fn reconcile(captured_offset: f32, auto_scroll: bool) -> ScrollTarget {
    if auto_scroll {
        ScrollTarget::Bottom
    } else {
        ScrollTarget::Offset(captured_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_scroll_goes_to_maximum() {
        let target = reconcile(40.0, true);
        assert_eq!(target, ScrollTarget::Bottom);
        assert_eq!(target.resolve(900.0), 900.0);
    }

    #[test]
    fn test_manual_mode_restores_captured_offset() {
        let target = reconcile(123.5, false);
        assert_eq!(target, ScrollTarget::Offset(123.5));
        assert_eq!(target.resolve(900.0), 123.5);
    }

    #[test]
    fn test_restored_offset_clamped_when_content_shrinks() {
        assert_eq!(reconcile(500.0, false).resolve(200.0), 200.0);
    }

    #[test]
    fn test_content_shorter_than_viewport() {
        // Negative max (content fits) resolves to the top.
        assert_eq!(ScrollTarget::Bottom.resolve(-30.0), 0.0);
        assert_eq!(ScrollTarget::Offset(10.0).resolve(-30.0), 0.0);
    }
}
