//! Row configuration: list-level defaults merged with per-row overrides,
//! action panels, and consumer callbacks.

use std::rc::Rc;

use swiperow_core::PanelEnd;

use crate::direction::SwipeDirection;

/// Behavioral preset for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    /// No buttons in the revealed content; a full swipe triggers the action.
    #[default]
    Android,
    /// Buttons in the revealed content; panels pin open and full swipe is
    /// an opt-in (`full_swipe`).
    Ios,
    /// Like Android, but the return plays a flick-back keyframe animation
    /// and arming scales the revealed action for emphasis.
    Outlook,
}

/// List-level defaults, inherited by every row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    pub style: ListStyle,
    /// Only consulted for [`ListStyle::Ios`]; other styles always commit on
    /// a full swipe.
    pub full_swipe: bool,
    /// Delay before a destructive action's callback runs, letting the
    /// removal animation play first.
    pub destructive_delay_ms: u64,
    /// Horizontal travel needed before a drag classifies as a swipe.
    pub swipe_start_threshold_px: f32,
    /// Vertical travel needed before a drag classifies as a scroll.
    pub scroll_start_threshold_px: f32,
    /// Fraction of the content width the offset must cross to arm a commit.
    pub commit_threshold_fraction: f32,
    /// Cap on the drag displacement as a fraction of the content width;
    /// `None` allows dragging across the full width.
    pub max_swipe_fraction: Option<f32>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            style: ListStyle::Android,
            full_swipe: false,
            destructive_delay_ms: 1000,
            swipe_start_threshold_px: 10.0,
            scroll_start_threshold_px: 10.0,
            commit_threshold_fraction: 0.5,
            max_swipe_fraction: None,
        }
    }
}

/// Per-row overrides. Any field left `None` inherits the list default;
/// a set field wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowOverrides {
    pub style: Option<ListStyle>,
    pub full_swipe: Option<bool>,
    pub destructive_delay_ms: Option<u64>,
    pub swipe_start_threshold_px: Option<f32>,
    pub scroll_start_threshold_px: Option<f32>,
    pub commit_threshold_fraction: Option<f32>,
    pub max_swipe_fraction: Option<f32>,
    /// Blocks all swipe handling on this row. Scrolling is unaffected.
    pub block_swipe: bool,
}

/// The merged, validated, immutable configuration one row runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowConfig {
    pub style: ListStyle,
    pub full_swipe: bool,
    pub destructive_delay_ms: u64,
    pub swipe_start_threshold_px: f32,
    pub scroll_start_threshold_px: f32,
    pub commit_threshold_fraction: f32,
    pub max_swipe_fraction: Option<f32>,
    pub block_swipe: bool,
}

impl RowConfig {
    /// Merges list defaults with row overrides (row wins) and validates the
    /// result. Invalid thresholds are caller contract violations.
    pub fn resolve(list: &ListConfig, row: RowOverrides) -> Self {
        let config = Self {
            style: row.style.unwrap_or(list.style),
            full_swipe: row.full_swipe.unwrap_or(list.full_swipe),
            destructive_delay_ms: row
                .destructive_delay_ms
                .unwrap_or(list.destructive_delay_ms),
            swipe_start_threshold_px: row
                .swipe_start_threshold_px
                .unwrap_or(list.swipe_start_threshold_px),
            scroll_start_threshold_px: row
                .scroll_start_threshold_px
                .unwrap_or(list.scroll_start_threshold_px),
            commit_threshold_fraction: row
                .commit_threshold_fraction
                .unwrap_or(list.commit_threshold_fraction),
            max_swipe_fraction: row.max_swipe_fraction.or(list.max_swipe_fraction),
            block_swipe: row.block_swipe,
        };

        assert!(
            config.commit_threshold_fraction > 0.0 && config.commit_threshold_fraction <= 1.0,
            "commit threshold fraction must be in (0, 1], got {}",
            config.commit_threshold_fraction
        );
        assert!(
            config.swipe_start_threshold_px.is_finite() && config.swipe_start_threshold_px >= 0.0,
            "swipe start threshold must be finite and non-negative"
        );
        assert!(
            config.scroll_start_threshold_px.is_finite()
                && config.scroll_start_threshold_px >= 0.0,
            "scroll start threshold must be finite and non-negative"
        );
        if let Some(fraction) = config.max_swipe_fraction {
            assert!(
                fraction > 0.0 && fraction <= 1.0,
                "max swipe fraction must be in (0, 1], got {}",
                fraction
            );
        }

        config
    }

    /// Whether a full swipe commits for this row. Only iOS style consults
    /// the `full_swipe` flag; Android and Outlook always commit.
    pub fn full_swipe_active(&self) -> bool {
        match self.style {
            ListStyle::Ios => self.full_swipe,
            ListStyle::Android | ListStyle::Outlook => true,
        }
    }
}

/// One action behind a row.
#[derive(Clone)]
pub struct SwipeAction {
    pub destructive: bool,
    pub on_click: Rc<dyn Fn()>,
}

impl SwipeAction {
    pub fn new(on_click: impl Fn() + 'static) -> Self {
        Self {
            destructive: false,
            on_click: Rc::new(on_click),
        }
    }

    /// Marks the action destructive: its callback is delayed so the
    /// removal animation plays first.
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

impl std::fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeAction")
            .field("destructive", &self.destructive)
            .finish_non_exhaustive()
    }
}

/// The actions revealed on one end of a row.
#[derive(Debug, Clone, Default)]
pub struct PanelConfig {
    pub actions: Vec<SwipeAction>,
}

impl PanelConfig {
    pub fn new(actions: Vec<SwipeAction>) -> Self {
        Self { actions }
    }
}

/// Leading and trailing panels for one row.
#[derive(Debug, Clone, Default)]
pub struct RowPanels {
    pub leading: Option<PanelConfig>,
    pub trailing: Option<PanelConfig>,
}

impl RowPanels {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn panel(&self, end: PanelEnd) -> Option<&PanelConfig> {
        match end {
            PanelEnd::Leading => self.leading.as_ref(),
            PanelEnd::Trailing => self.trailing.as_ref(),
        }
    }

    pub fn has(&self, end: PanelEnd) -> bool {
        self.panel(end).is_some()
    }

    /// The action a full swipe triggers: the first action of the leading
    /// panel, the last action of the trailing panel.
    pub fn main_action(&self, end: PanelEnd) -> Option<&SwipeAction> {
        let panel = self.panel(end)?;
        match end {
            PanelEnd::Leading => panel.actions.first(),
            PanelEnd::Trailing => panel.actions.last(),
        }
    }
}

/// Optional consumer notifications for one row.
#[derive(Clone, Default)]
pub struct RowCallbacks {
    pub on_swipe_start: Option<Rc<dyn Fn(SwipeDirection)>>,
    pub on_swipe_progress: Option<Rc<dyn Fn(u8, SwipeDirection)>>,
    pub on_swipe_end: Option<Rc<dyn Fn(SwipeDirection)>>,
    pub on_action_triggered: Option<Rc<dyn Fn(bool)>>,
    pub on_click: Option<Rc<dyn Fn()>>,
}

impl RowCallbacks {
    pub(crate) fn swipe_start(&self, direction: SwipeDirection) {
        if let Some(callback) = &self.on_swipe_start {
            callback(direction);
        }
    }

    pub(crate) fn swipe_progress(&self, percent: u8, direction: SwipeDirection) {
        if let Some(callback) = &self.on_swipe_progress {
            callback(percent, direction);
        }
    }

    pub(crate) fn swipe_end(&self, direction: SwipeDirection) {
        if let Some(callback) = &self.on_swipe_end {
            callback(direction);
        }
    }

    pub(crate) fn action_triggered(&self, destructive: bool) {
        if let Some(callback) = &self.on_action_triggered {
            callback(destructive);
        }
    }

    pub(crate) fn click(&self) {
        if let Some(callback) = &self.on_click {
            callback();
        }
    }
}

impl std::fmt::Debug for RowCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCallbacks")
            .field("on_swipe_start", &self.on_swipe_start.is_some())
            .field("on_swipe_progress", &self.on_swipe_progress.is_some())
            .field("on_swipe_end", &self.on_swipe_end.is_some())
            .field("on_action_triggered", &self.on_action_triggered.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
