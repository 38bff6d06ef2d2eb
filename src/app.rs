//! Application state management.
//!
//! Owns the view session: which view is showing, the state that belongs to
//! it, the input mode and the status line.

use crate::catalog::ResultRecord;
use crate::prompts::{CALLS_TO_ACTION, PROMPT_SUGGESTIONS, next_seed, pick_random};
use crate::ranker::{SortKey, rank_or_identity};
use crate::route::Route;

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Keys navigate
    Browse,
    /// Keys edit the search text
    Input,
    /// Sort selector is open
    SortMenu,
}

/// Which view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Search,
    About,
    Results,
}

/// State of the search prompt view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Text typed so far
    pub input: String,
    /// Suggested prompt currently shown
    pub suggestion: &'static str,
}

/// State of the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsState {
    /// Query the view was opened with (display only)
    pub query: String,
    /// Active ordering; None when opened with an unrecognized sort name
    pub sort_key: Option<SortKey>,
    /// Records in display order, always derived from the full catalog
    pub ranked: Vec<&'static ResultRecord>,
    /// Selected index in `ranked`
    pub selected_index: usize,
    /// Highlighted entry in the sort selector
    pub menu_key: SortKey,
}

/// Per-view state; replaced wholesale on navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing { call_to_action: &'static str },
    Search(SearchState),
    About,
    Results(ResultsState),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Fixed record collection
    records: &'static [ResultRecord],
    /// Current view and its state
    pub screen: Screen,
    /// Current input mode
    pub mode: UiMode,
    /// Ordering applied when the results view opens
    pub default_sort: SortKey,
    /// Year used for "N years ago" labels
    pub current_year: i32,
    /// Seed for rotating text
    seed: u64,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application state on the landing view.
    ///
    /// # Arguments
    /// * `records` - Record collection shown by the results view
    /// * `default_sort` - Ordering applied when results open
    /// * `seed` - Seed for rotating call-to-action and prompt text
    /// * `current_year` - Year used for age labels
    pub fn new(
        records: &'static [ResultRecord],
        default_sort: SortKey,
        seed: u64,
        current_year: i32,
    ) -> Self {
        let call_to_action = pick_random(CALLS_TO_ACTION, seed).copied().unwrap_or_default();
        Self {
            records,
            screen: Screen::Landing { call_to_action },
            mode: UiMode::Browse,
            default_sort,
            current_year,
            seed,
            status_message: None,
        }
    }

    /// Total number of records in the catalog.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Get the current view.
    pub fn view(&self) -> View {
        match self.screen {
            Screen::Landing { .. } => View::Landing,
            Screen::Search(_) => View::Search,
            Screen::About => View::About,
            Screen::Results(_) => View::Results,
        }
    }

    /// Navigate to a route.
    ///
    /// # Details
    /// Discards the state of the view being left. Landing re-rolls its
    /// call-to-action and Search re-rolls its suggestion.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(intent = %route.to_intent(), "navigate");
        self.clear_status();
        self.mode = UiMode::Browse;
        self.screen = match route {
            Route::Home => Screen::Landing {
                call_to_action: self.roll(CALLS_TO_ACTION),
            },
            Route::Search => {
                self.mode = UiMode::Input;
                Screen::Search(SearchState {
                    input: String::new(),
                    suggestion: self.roll(PROMPT_SUGGESTIONS),
                })
            }
            Route::About => Screen::About,
            Route::Results { query, sort } => {
                let sort_key = match sort {
                    None => Some(self.default_sort),
                    Some(name) => match name.parse::<SortKey>() {
                        Ok(key) => Some(key),
                        Err(e) => {
                            tracing::warn!("{}, showing source order", e);
                            None
                        }
                    },
                };
                let records = self.records;
                Screen::Results(ResultsState {
                    query,
                    sort_key,
                    ranked: rank_or_identity(records, sort_key),
                    selected_index: 0,
                    menu_key: sort_key.unwrap_or_default(),
                })
            }
        };
    }

    /// Advance the seed and pick from `options`.
    fn roll(&mut self, options: &[&'static str]) -> &'static str {
        self.seed = next_seed(self.seed);
        pick_random(options, self.seed).copied().unwrap_or_default()
    }

    /// Get the results view state, if showing.
    pub fn results(&self) -> Option<&ResultsState> {
        match &self.screen {
            Screen::Results(state) => Some(state),
            _ => None,
        }
    }

    /// Get the search view state, if showing.
    pub fn search(&self) -> Option<&SearchState> {
        match &self.screen {
            Screen::Search(state) => Some(state),
            _ => None,
        }
    }

    /// Select a sort key for the results view.
    ///
    /// # Details
    /// Re-ranks from the full catalog, never from the previous ordering,
    /// and keeps the selected record selected.
    pub fn select_sort(&mut self, key: SortKey) {
        let records = self.records;
        let Screen::Results(state) = &mut self.screen else {
            return;
        };
        let selected_id = state.ranked.get(state.selected_index).map(|r| r.id);
        state.sort_key = Some(key);
        state.ranked = rank_or_identity(records, Some(key));
        state.selected_index = selected_id
            .and_then(|id| state.ranked.iter().position(|r| r.id == id))
            .unwrap_or(0);
        tracing::debug!(sort = %key, "re-ranked results");
        self.set_status(format!("Sort: {}", key.label()));
    }

    /// Cycle to the next sort key.
    ///
    /// # Details
    /// Cycles: Relevance -> Citations -> Year -> Relevance. Unsorted results
    /// move to Relevance.
    pub fn cycle_sort(&mut self) {
        if let Some(state) = self.results() {
            let key = state.sort_key.map(SortKey::next).unwrap_or_default();
            self.select_sort(key);
        }
    }

    /// Get the current sort key as a label.
    pub fn sort_name(&self) -> &'static str {
        match self.results().map(|state| state.sort_key) {
            Some(Some(key)) => key.label(),
            Some(None) => "Unsorted",
            None => "",
        }
    }

    /// Open the sort selector on the active key.
    pub fn open_sort_menu(&mut self) {
        if let Screen::Results(state) = &mut self.screen {
            state.menu_key = state.sort_key.unwrap_or_default();
            self.mode = UiMode::SortMenu;
        }
    }

    /// Move the sort selector highlight.
    pub fn move_sort_menu(&mut self, down: bool) {
        if let Screen::Results(state) = &mut self.screen {
            state.menu_key = if down {
                state.menu_key.next()
            } else {
                state.menu_key.prev()
            };
        }
    }

    /// Apply the highlighted sort key and close the selector.
    pub fn confirm_sort_menu(&mut self) {
        if let Some(state) = self.results() {
            let key = state.menu_key;
            self.select_sort(key);
        }
        self.mode = UiMode::Browse;
    }

    /// Close the sort selector without changing the ordering.
    pub fn close_sort_menu(&mut self) {
        self.mode = UiMode::Browse;
    }

    /// Move selection up.
    ///
    /// # Details
    /// Decrements selected index, wrapping to bottom if at top.
    pub fn move_up(&mut self) {
        if let Screen::Results(state) = &mut self.screen {
            if state.ranked.is_empty() {
                return;
            }
            if state.selected_index == 0 {
                state.selected_index = state.ranked.len() - 1;
            } else {
                state.selected_index -= 1;
            }
        }
    }

    /// Move selection down.
    ///
    /// # Details
    /// Increments selected index, wrapping to top if at bottom.
    pub fn move_down(&mut self) {
        if let Screen::Results(state) = &mut self.screen {
            if state.ranked.is_empty() {
                return;
            }
            state.selected_index = (state.selected_index + 1) % state.ranked.len();
        }
    }

    /// Select a result by its display position, ignoring out-of-range indices.
    pub fn select_index(&mut self, index: usize) {
        if let Screen::Results(state) = &mut self.screen
            && index < state.ranked.len()
        {
            state.selected_index = index;
        }
    }

    /// Get the currently selected result.
    pub fn selected_record(&self) -> Option<&'static ResultRecord> {
        self.results()
            .and_then(|state| state.ranked.get(state.selected_index).copied())
    }

    /// Add a character to the search input.
    ///
    /// # Details
    /// Only works in Input mode.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Input
            && let Screen::Search(state) = &mut self.screen
        {
            state.input.push(ch);
        }
    }

    /// Remove last character from the search input.
    ///
    /// # Details
    /// Only works in Input mode.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Input
            && let Screen::Search(state) = &mut self.screen
        {
            state.input.pop();
        }
    }

    /// Copy the shown suggestion into the search input.
    pub fn use_suggestion(&mut self) {
        if let Screen::Search(state) = &mut self.screen {
            state.input = state.suggestion.to_string();
        }
    }

    /// Show a different suggestion.
    pub fn reroll_suggestion(&mut self) {
        if self.view() == View::Search {
            let suggestion = self.roll(PROMPT_SUGGESTIONS);
            if let Screen::Search(state) = &mut self.screen {
                state.suggestion = suggestion;
            }
        }
    }

    /// Submit the search input and open the results view.
    ///
    /// # Details
    /// An empty input submits the shown suggestion.
    pub fn submit_search(&mut self) {
        let Some(state) = self.search() else {
            return;
        };
        let query = match state.input.trim() {
            "" => state.suggestion.to_string(),
            typed => typed.to_string(),
        };
        self.navigate(Route::results(query));
        let found = self.results().map_or(0, |state| state.ranked.len());
        self.set_status(format!("Found {} publications", found));
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RECORDS;
    use crate::ranker::rank;

    fn create_test_app() -> App {
        App::new(&RECORDS, SortKey::Relevance, 42, 2025)
    }

    fn ranked_ids(app: &App) -> Vec<u32> {
        app.results()
            .map(|state| state.ranked.iter().map(|r| r.id).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_app_new() {
        let app = create_test_app();
        assert_eq!(app.view(), View::Landing);
        assert_eq!(app.mode, UiMode::Browse);
        assert_eq!(app.record_count(), 5);
        match app.screen {
            Screen::Landing { call_to_action } => {
                assert!(CALLS_TO_ACTION.contains(&call_to_action))
            }
            _ => panic!("expected landing"),
        }
    }

    #[test]
    fn test_app_is_deterministic_per_seed() {
        let mut a = create_test_app();
        let mut b = create_test_app();
        a.navigate(Route::Search);
        b.navigate(Route::Search);
        assert_eq!(a.search(), b.search());
    }

    #[test]
    fn test_results_default_order() {
        let mut app = create_test_app();
        app.navigate(Route::results("microgravity"));
        assert_eq!(app.view(), View::Results);
        assert_eq!(ranked_ids(&app), vec![1, 2, 3, 4, 5]);
        assert_eq!(app.results().unwrap().query, "microgravity");
    }

    #[test]
    fn test_results_query_does_not_filter() {
        let mut app = create_test_app();
        app.navigate(Route::results("no such topic"));
        assert_eq!(ranked_ids(&app).len(), RECORDS.len());
    }

    #[test]
    fn test_results_configured_default_sort() {
        let mut app = App::new(&RECORDS, SortKey::Citations, 1, 2025);
        app.navigate(Route::results("x"));
        assert_eq!(ranked_ids(&app), vec![2, 1, 5, 3, 4]);
    }

    #[test]
    fn test_results_intent_sort() {
        let mut app = create_test_app();
        app.navigate(Route::parse("results?q=x&sort=year").unwrap());
        assert_eq!(ranked_ids(&app), vec![2, 4, 1, 3, 5]);
        assert_eq!(app.sort_name(), "Year");
    }

    #[test]
    fn test_results_unrecognized_sort_keeps_source_order() {
        let records: &'static [ResultRecord] =
            Box::leak(vec![RECORDS[4], RECORDS[1], RECORDS[3]].into_boxed_slice());
        let mut app = App::new(records, SortKey::Relevance, 0, 2025);
        app.navigate(Route::parse("results?q=x&sort=downloads").unwrap());
        assert_eq!(ranked_ids(&app), vec![5, 2, 4]);
        assert_eq!(app.sort_name(), "Unsorted");

        app.cycle_sort();
        assert_eq!(ranked_ids(&app), vec![2, 4, 5]);
        assert_eq!(app.sort_name(), "Relevance");
    }

    #[test]
    fn test_cycle_sort() {
        let mut app = create_test_app();
        app.navigate(Route::results("x"));
        app.cycle_sort();
        assert_eq!(ranked_ids(&app), vec![2, 1, 5, 3, 4]);
        app.cycle_sort();
        assert_eq!(ranked_ids(&app), vec![2, 4, 1, 3, 5]);
        app.cycle_sort();
        assert_eq!(ranked_ids(&app), vec![1, 2, 3, 4, 5]);
        assert_eq!(app.status_message.as_deref(), Some("Sort: Relevance"));
    }

    #[test]
    fn test_resort_uses_source_order() {
        // Sorting the citation order by year would put 5 before 3.
        let mut app = create_test_app();
        app.navigate(Route::results("x"));
        app.select_sort(SortKey::Citations);
        app.select_sort(SortKey::Year);
        assert_eq!(ranked_ids(&app), vec![2, 4, 1, 3, 5]);
        let direct: Vec<u32> = rank(&RECORDS, SortKey::Year).iter().map(|r| r.id).collect();
        assert_eq!(ranked_ids(&app), direct);
    }

    #[test]
    fn test_select_sort_keeps_selected_record() {
        let mut app = create_test_app();
        app.navigate(Route::results("x"));
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_record().map(|r| r.id), Some(3));
        app.select_sort(SortKey::Citations);
        assert_eq!(app.selected_record().map(|r| r.id), Some(3));
        assert_eq!(app.results().unwrap().selected_index, 3);
    }

    #[test]
    fn test_sort_menu() {
        let mut app = create_test_app();
        app.navigate(Route::results("x"));
        app.open_sort_menu();
        assert_eq!(app.mode, UiMode::SortMenu);
        app.move_sort_menu(false);
        app.confirm_sort_menu();
        assert_eq!(app.mode, UiMode::Browse);
        assert_eq!(app.results().unwrap().sort_key, Some(SortKey::Year));

        app.open_sort_menu();
        app.move_sort_menu(true);
        app.close_sort_menu();
        assert_eq!(app.results().unwrap().sort_key, Some(SortKey::Year));
    }

    #[test]
    fn test_app_move_selection() {
        let mut app = create_test_app();
        app.navigate(Route::results("x"));
        app.move_down();
        assert_eq!(app.results().unwrap().selected_index, 1);
        app.move_up();
        app.move_up(); // Should wrap to end
        assert_eq!(app.results().unwrap().selected_index, 4);
        app.select_index(9);
        assert_eq!(app.results().unwrap().selected_index, 4);
        app.select_index(2);
        assert_eq!(app.selected_record().map(|r| r.id), Some(3));
    }

    #[test]
    fn test_navigation_resets_view_state() {
        let mut app = create_test_app();
        app.navigate(Route::results("x"));
        app.select_sort(SortKey::Year);
        app.move_down();
        app.navigate(Route::About);
        assert_eq!(app.view(), View::About);
        assert!(app.results().is_none());
        app.navigate(Route::results("x"));
        let state = app.results().unwrap();
        assert_eq!(state.sort_key, Some(SortKey::Relevance));
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_search_input_and_submit() {
        let mut app = create_test_app();
        app.navigate(Route::Search);
        assert_eq!(app.mode, UiMode::Input);
        for c in "bone loss!".chars() {
            app.add_search_char(c);
        }
        app.remove_search_char();
        assert_eq!(app.search().unwrap().input, "bone loss");
        app.submit_search();
        assert_eq!(app.view(), View::Results);
        assert_eq!(app.mode, UiMode::Browse);
        assert_eq!(app.results().unwrap().query, "bone loss");
        assert_eq!(app.status_message.as_deref(), Some("Found 5 publications"));
    }

    #[test]
    fn test_search_ignores_typing_outside_input_mode() {
        let mut app = create_test_app();
        app.navigate(Route::Search);
        app.mode = UiMode::Browse;
        app.add_search_char('x');
        assert_eq!(app.search().unwrap().input, "");
    }

    #[test]
    fn test_empty_search_submits_suggestion() {
        let mut app = create_test_app();
        app.navigate(Route::Search);
        let suggestion = app.search().unwrap().suggestion;
        app.submit_search();
        assert_eq!(app.results().unwrap().query, suggestion);
    }

    #[test]
    fn test_suggestions() {
        let mut app = create_test_app();
        app.navigate(Route::Search);
        app.use_suggestion();
        let state = app.search().unwrap();
        assert_eq!(state.input, state.suggestion);

        for _ in 0..10 {
            app.reroll_suggestion();
            assert!(PROMPT_SUGGESTIONS.contains(&app.search().unwrap().suggestion));
        }
    }
}
