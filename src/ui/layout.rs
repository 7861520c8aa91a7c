//! Responsive layout helpers.
//!
//! The list and the stats panel sit side by side on wide terminals and stack
//! vertically on narrow ones.

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this width the stats panel moves under the list
    pub const SM_WIDTH: u16 = 80;
    /// Preferred stats panel width on wide terminals
    pub const STATS_PANEL_WIDTH: u16 = 36;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Stack panels vertically when the terminal is narrower than 80 columns.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Width of the stats panel in side-by-side mode.
    pub fn stats_panel_width(&self) -> u16 {
        self.bounded_width(35, 24, breakpoints::STATS_PANEL_WIDTH + 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(LayoutContext::new(1, 1).percent_width(10), 1);
    }

    #[test]
    fn test_stacking_breakpoint() {
        assert!(LayoutContext::new(79, 30).should_stack_panels());
        assert!(!LayoutContext::new(80, 30).should_stack_panels());
    }

    #[test]
    fn test_stats_panel_width_is_bounded() {
        assert_eq!(LayoutContext::new(80, 24).stats_panel_width(), 28);
        assert_eq!(LayoutContext::new(400, 24).stats_panel_width(), 48);
        assert_eq!(LayoutContext::new(60, 24).stats_panel_width(), 24);
    }
}
