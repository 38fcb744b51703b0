//! Application state management for the TUI.

use std::path::PathBuf;
use std::time::Instant;

use backend::{AnalysisClient, DemoDataset};
use triage::{
    page_segments, ClientConfig, OverviewConfig, Segment, SortField, TriageSession, ViewConfig,
};

use crate::services::data_loader;

/// Where the current session's viewed toggles go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Demonstration or file-loaded data; toggles stay in memory.
    #[default]
    Local,
    /// Live analysis results; toggles go to the triage service.
    Remote,
}

impl SessionMode {
    pub fn name(self) -> &'static str {
        match self {
            SessionMode::Local => "local data",
            SessionMode::Remote => "live analysis",
        }
    }
}

/// What the file dialog input is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDialogKind {
    /// Path to a saved results JSON file.
    LoadResults,
    /// Comma-separated inspection CSV paths to submit for analysis.
    RunAnalysis,
}

/// Main application state.
pub struct App {
    /// Current active tab
    pub current_tab: Tab,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Active triage session, if any
    pub session: Option<TriageSession>,
    /// Viewed-store mode of the active session
    pub mode: SessionMode,
    /// Current input mode
    pub input_mode: InputMode,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// File dialog text buffer
    pub file_input: String,
    /// What the file dialog will do on confirm
    pub dialog: FileDialogKind,
    /// Overview grid page
    pub overview_page: usize,
    /// Selected index into the full segment sequence
    pub selected_segment: usize,
    /// Selected row within the current results page
    pub selected_row: usize,
    /// Overview paging configuration
    pub overview: OverviewConfig,
    /// Results table configuration
    pub view_config: ViewConfig,
}

impl Default for App {
    fn default() -> Self {
        Self {
            current_tab: Tab::Load,
            should_quit: false,
            session: None,
            mode: SessionMode::Local,
            input_mode: InputMode::Normal,
            status_message: None,
            file_input: String::new(),
            dialog: FileDialogKind::LoadResults,
            overview_page: 0,
            selected_segment: 0,
            selected_row: 0,
            overview: OverviewConfig::default(),
            view_config: ViewConfig::default(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Move to next tab.
    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    /// Move to previous tab.
    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// Jump to a specific tab by number (1-3).
    pub fn goto_tab(&mut self, num: u8) {
        self.current_tab = Tab::from_num(num);
    }

    /// Check if an analysis session is active.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Start a local-mode session over the demonstration dataset.
    pub fn load_demo(&mut self) {
        match DemoDataset::new().load().and_then(TriageSession::local) {
            Ok(session) => {
                self.start_session(session, SessionMode::Local);
                self.set_status("Demonstration data loaded (local mode)");
            }
            Err(e) => self.set_status(format!("Demo load failed: {e}")),
        }
    }

    /// Start a local-mode session from a saved results JSON file.
    pub fn load_results_file(&mut self, path: &str) {
        let path = PathBuf::from(path.trim());
        match data_loader::load_results_file(&path) {
            Ok(records) => match TriageSession::local(records) {
                Ok(session) => {
                    self.start_session(session, SessionMode::Local);
                    self.set_status(format!("Loaded {}", path.display()));
                }
                Err(e) => self.set_status(format!("Invalid result set: {e}")),
            },
            Err(e) => self.set_status(format!("Load failed: {e}")),
        }
    }

    /// Submit inspection CSVs to the analysis service and start a
    /// remote-mode session over the returned records. Blocks until the
    /// service answers; the analysis can take a while.
    pub fn run_remote_analysis(&mut self, input: &str) {
        let files: Vec<PathBuf> = input
            .split(',')
            .map(|p| PathBuf::from(p.trim()))
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if files.is_empty() {
            self.set_status("No input files given");
            return;
        }

        let client = AnalysisClient::new(ClientConfig::from_env());
        self.set_status("Running analysis...");
        match client.run_analysis_blocking(&files) {
            Ok(records) => {
                match TriageSession::new(records, Box::new(client)) {
                    Ok(session) => {
                        self.start_session(session, SessionMode::Remote);
                        self.set_status("Analysis complete");
                    }
                    Err(e) => self.set_status(format!("Analysis rejected: {e}")),
                }
            }
            Err(e) => self.set_status(format!("{e}")),
        }
    }

    fn start_session(&mut self, mut session: TriageSession, mode: SessionMode) {
        session.set_page_size(self.view_config.page_size);
        self.session = Some(session);
        self.mode = mode;
        self.current_tab = Tab::Overview;
        self.overview_page = 0;
        self.selected_segment = 0;
        self.selected_row = 0;
    }

    /// New-analysis reset: discard the session and all view state and
    /// return to the load screen.
    pub fn reset(&mut self) {
        self.session = None;
        self.current_tab = Tab::Load;
        self.overview_page = 0;
        self.selected_segment = 0;
        self.selected_row = 0;
        self.set_status("Session discarded");
    }

    /// Segments of the active session, or an empty list when none.
    pub fn segments(&self) -> Vec<Segment> {
        self.session
            .as_ref()
            .and_then(|s| s.segments().ok())
            .unwrap_or_default()
    }

    /// Total overview pages for the active session.
    pub fn overview_pages(&self) -> usize {
        let segments = self.segments();
        page_segments(&segments, 0, self.overview.segments_per_page).total_pages
    }

    /// Move the overview selection by `delta` positions, clamped to the
    /// segment sequence, following the page.
    pub fn move_segment_selection(&mut self, delta: i64) {
        let count = self.segments().len();
        if count == 0 {
            return;
        }
        let target = self.selected_segment as i64 + delta;
        self.selected_segment = target.clamp(0, count as i64 - 1) as usize;
        self.overview_page = self.selected_segment / self.overview.segments_per_page;
    }

    /// Flip to an adjacent overview page, moving the selection with it.
    pub fn change_overview_page(&mut self, forward: bool) {
        let pages = self.overview_pages();
        if forward && self.overview_page + 1 < pages {
            self.overview_page += 1;
        } else if !forward && self.overview_page > 0 {
            self.overview_page -= 1;
        } else {
            return;
        }
        self.selected_segment = self.overview_page * self.overview.segments_per_page;
    }

    /// Segment click: filter the results table from the selected segment
    /// onward, then follow the pending scroll request to the table.
    pub fn select_segment(&mut self) {
        let segments = self.segments();
        let Some(segment) = segments.get(self.selected_segment) else {
            return;
        };
        let number = segment.segment_number;
        if let Some(session) = self.session.as_mut() {
            session.select_segment(number);
            self.selected_row = 0;
            // The filter is applied; now honor the scroll-into-view
            // request by jumping to the table.
            if session.take_scroll_request() {
                self.current_tab = Tab::Results;
            }
            self.set_status(format!("Filtering from segment {number}"));
        }
    }

    /// Move the results-row selection, clamped to the current page.
    pub fn move_row_selection(&mut self, delta: i64) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let rows = session.current_page().rows.len();
        if rows == 0 {
            return;
        }
        let target = self.selected_row as i64 + delta;
        self.selected_row = target.clamp(0, rows as i64 - 1) as usize;
    }

    /// Toggle the viewed flag of the selected results row.
    pub fn toggle_selected_viewed(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(row) = session.current_page().rows.get(self.selected_row).cloned() else {
            return;
        };
        match session.toggle_viewed(row.anomaly_number) {
            Ok(viewed) => {
                let state = if viewed { "viewed" } else { "unviewed" };
                self.set_status(format!("Anomaly #{} marked {state}", row.anomaly_number));
                // Hiding a row can shrink the page under the cursor.
                self.move_row_selection(0);
            }
            Err(e) => self.set_status(format!("{e}")),
        }
    }
}

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Load,
    Overview,
    Results,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Load => Tab::Overview,
            Tab::Overview => Tab::Results,
            Tab::Results => Tab::Load,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Load => Tab::Results,
            Tab::Overview => Tab::Load,
            Tab::Results => Tab::Overview,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            1 => Tab::Load,
            2 => Tab::Overview,
            3 => Tab::Results,
            _ => Tab::Load,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Load => 0,
            Tab::Overview => 1,
            Tab::Results => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Load => "Load",
            Tab::Overview => "Overview",
            Tab::Results => "Results",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Load, Tab::Overview, Tab::Results]
    }
}

/// Input mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    FileDialog,
}

/// Per-tab sort-key bindings for the results table.
pub fn sort_key_field(c: char) -> Option<SortField> {
    match c {
        'j' => Some(SortField::JointNumber),
        't' => Some(SortField::AnomalyType),
        'c' => Some(SortField::Confidence),
        's' => Some(SortField::Severity),
        'e' => Some(SortField::Persistence),
        'g' => Some(SortField::GrowthRate),
        _ => None,
    }
}
