//! Application controller
//!
//! Owns the collection, settings, and session state, and processes commands
//! from the TUI and worker threads through a single crossbeam channel. Every
//! mutation funnels through `commit`, which persists and refreshes the
//! shared snapshot, so stored and in-memory state never drift apart.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use quoth::config::ui::BANNER_SECS;
use quoth::data::collection::QUOTES_FILE;
use quoth::data::settings::SETTINGS_FILE;
use quoth::data::{Quote, QuoteCollection, SessionStore, Settings};
use quoth::remote::QuoteSource;
use quoth::{exchange, select};

use super::state::{AppCommand, AppSnapshot, Banner, QuoteDisplay};

/// Banner shown when a sync cycle appended new quotes
const SYNC_BANNER: &str = "New quotes synced from server.";

/// Alert shown when the add form is submitted with an empty field
const EMPTY_FIELD_ALERT: &str = "Please enter both quote and category.";

pub struct AppController {
    cmd_rx: Receiver<AppCommand>,
    cmd_tx: Sender<AppCommand>,
    shared_state: Arc<Mutex<AppSnapshot>>,
    collection: QuoteCollection,
    settings: Settings,
    session: SessionStore,
    source: Arc<dyn QuoteSource>,
    data_dir: PathBuf,
    sync_interval: Duration,
    /// When the current banner should disappear
    banner_expires_at: Option<Instant>,
    /// When the most recent sync cycle was started
    last_sync_started: Option<Instant>,
}

impl AppController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cmd_rx: Receiver<AppCommand>,
        cmd_tx: Sender<AppCommand>,
        shared_state: Arc<Mutex<AppSnapshot>>,
        source: Arc<dyn QuoteSource>,
        data_dir: PathBuf,
        settings: Settings,
        session: SessionStore,
    ) -> Self {
        let collection = QuoteCollection::load_from(&data_dir.join(QUOTES_FILE));
        let sync_interval = Duration::from_secs(settings.sync_interval_secs);

        Self {
            cmd_rx,
            cmd_tx,
            shared_state,
            collection,
            settings,
            session,
            source,
            data_dir,
            sync_interval,
            banner_expires_at: None,
            last_sync_started: None,
        }
    }

    /// Run the controller event loop (blocking, call from a dedicated thread)
    pub fn run(&mut self) {
        self.refresh_snapshot();
        self.restore_session();

        // The first sync cycle fires one full interval after startup, then
        // the schedule never stops for the lifetime of the UI.
        self.last_sync_started = Some(Instant::now());

        loop {
            match self.cmd_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                }
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }
    }

    /// Handle a single command. Returns true if the loop should exit.
    fn handle_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Shutdown => return true,

            AppCommand::ShowRandom => self.show_random(),
            AppCommand::SetFilter(category) => self.set_filter(category),
            AppCommand::CycleFilter { backward } => self.cycle_filter(backward),
            AppCommand::AddQuote { text, category } => self.add_quote(text, category),
            AppCommand::Import(path) => self.import(&path),
            AppCommand::Export(path) => self.export(&path),
            AppCommand::SyncNow => self.start_sync(),
            AppCommand::InternalSyncFetched(result) => self.apply_sync_result(result),
        }
        false
    }

    /// Periodic work between commands: banner expiry and sync scheduling
    fn tick(&mut self) {
        if let Some(expires) = self.banner_expires_at {
            if Instant::now() >= expires {
                self.banner_expires_at = None;
                self.lock_state().banner = None;
            }
        }

        let due = self
            .last_sync_started
            .map_or(true, |started| started.elapsed() >= self.sync_interval);
        if due {
            self.start_sync();
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, AppSnapshot> {
        self.shared_state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Re-display the last quote shown this session, if there is one
    fn restore_session(&mut self) {
        if let Some(quote) = self.session.last_quote() {
            let quote = quote.clone();
            self.lock_state().display = QuoteDisplay::Quote(quote);
        }
    }

    fn show_random(&mut self) {
        let filtered = select::filter_by_category(
            self.collection.quotes(),
            &self.settings.selected_category,
        );

        match select::pick_random(&filtered) {
            Some(picked) => {
                let quote = (*picked).clone();
                self.session.set_last_quote(quote.clone());
                self.lock_state().display = QuoteDisplay::Quote(quote);
            }
            None => {
                self.lock_state().display = QuoteDisplay::EmptyCategory;
            }
        }
    }

    fn set_filter(&mut self, category: String) {
        self.settings.set_selected_category(category);
        if let Err(e) = self.settings.save_to(&self.data_dir.join(SETTINGS_FILE)) {
            tracing::warn!("failed to save settings: {e}");
        }

        self.lock_state().filter = self.settings.selected_category.clone();

        // Re-apply the filter: pick a quote from the new selection
        self.show_random();
    }

    fn cycle_filter(&mut self, backward: bool) {
        let mut options = vec![select::ALL_CATEGORIES.to_string()];
        options.extend(self.collection.categories());

        let current = options
            .iter()
            .position(|c| *c == self.settings.selected_category)
            .unwrap_or(0);
        let next = if backward {
            (current + options.len() - 1) % options.len()
        } else {
            (current + 1) % options.len()
        };

        self.set_filter(options[next].clone());
    }

    fn add_quote(&mut self, text: String, category: String) {
        let quote = Quote::new(text.trim(), category.trim());

        match self.collection.add(quote.clone()) {
            Ok(()) => {
                self.commit();
                self.set_banner("Quote added successfully!", false);
                self.publish(quote);
            }
            Err(_) => self.set_banner(EMPTY_FIELD_ALERT, true),
        }
    }

    /// Post the new quote to the server on a worker thread, fire-and-forget
    fn publish(&self, quote: Quote) {
        let source = Arc::clone(&self.source);
        std::thread::Builder::new()
            .name("quote-publish".into())
            .spawn(move || match source.publish_quote(&quote) {
                Ok(()) => tracing::debug!("quote posted to server"),
                Err(e) => tracing::warn!("failed to post quote: {e}"),
            })
            .expect("failed to spawn quote-publish thread");
    }

    fn import(&mut self, path: &Path) {
        match exchange::import_file(path) {
            Ok(quotes) => {
                self.collection.append_all(quotes);
                self.commit();
                self.set_banner("Quotes imported successfully!", false);
            }
            Err(e) => self.set_banner(format!("Import failed: {e}"), true),
        }
    }

    fn export(&mut self, path: &Path) {
        match exchange::export_to_file(path, self.collection.quotes()) {
            Ok(()) => self.set_banner(
                format!(
                    "Exported {} quotes to {}",
                    self.collection.len(),
                    path.display()
                ),
                false,
            ),
            Err(e) => self.set_banner(format!("Export failed: {e}"), true),
        }
    }

    /// Start a sync cycle on a worker thread
    ///
    /// Cycles may overlap when the fetch outlasts the interval; every
    /// completed fetch is merged, and the merge is idempotent per record, so
    /// interleavings converge.
    fn start_sync(&mut self) {
        self.last_sync_started = Some(Instant::now());

        let source = Arc::clone(&self.source);
        let cmd_tx = self.cmd_tx.clone();
        std::thread::Builder::new()
            .name("quote-sync".into())
            .spawn(move || {
                let result = source.fetch_quotes().map_err(|e| e.to_string());
                let _ = cmd_tx.send(AppCommand::InternalSyncFetched(result));
            })
            .expect("failed to spawn quote-sync thread");
    }

    fn apply_sync_result(&mut self, result: Result<Vec<Quote>, String>) {
        match result {
            Ok(remote) => {
                let added = self.collection.merge(remote);
                if added > 0 {
                    self.commit();
                    self.set_banner(SYNC_BANNER, false);
                    tracing::info!(added, "merged quotes from server");
                }
            }
            Err(e) => {
                // Treated as an empty remote list; the next cycle retries.
                tracing::warn!("sync fetch failed: {e}");
            }
        }
    }

    /// Persist the collection and refresh the shared snapshot
    fn commit(&mut self) {
        if let Err(e) = self.collection.save_to(&self.data_dir.join(QUOTES_FILE)) {
            tracing::warn!("failed to save quotes: {e}");
        }
        self.refresh_snapshot();

        // Re-apply the current filter to the changed collection once the
        // display is in use; a merge can turn an empty category non-empty.
        let engaged = self.lock_state().display != QuoteDisplay::Idle;
        if engaged {
            self.show_random();
        }
    }

    fn refresh_snapshot(&mut self) {
        let categories = self.collection.categories();
        let count = self.collection.len();

        let mut state = self.lock_state();
        state.categories = categories;
        state.quote_count = count;
        state.filter = self.settings.selected_category.clone();
    }

    fn set_banner(&mut self, message: impl Into<String>, is_error: bool) {
        self.banner_expires_at = Some(Instant::now() + Duration::from_secs(BANNER_SECS));
        self.lock_state().banner = Some(Banner {
            message: message.into(),
            is_error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use quoth::error::Result as QuothResult;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    struct StaticSource {
        quotes: Vec<Quote>,
    }

    impl QuoteSource for StaticSource {
        fn name(&self) -> &'static str {
            "static"
        }

        fn fetch_quotes(&self) -> QuothResult<Vec<Quote>> {
            Ok(self.quotes.clone())
        }

        fn publish_quote(&self, _quote: &Quote) -> QuothResult<()> {
            Ok(())
        }
    }

    fn controller() -> (AppController, Arc<Mutex<AppSnapshot>>, PathBuf) {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = temp_dir().join(format!("quoth_controller_test_{}", id));
        fs::create_dir_all(&dir).unwrap();

        let (tx, rx) = unbounded();
        let state = Arc::new(Mutex::new(AppSnapshot::default()));
        let ctrl = AppController::new(
            rx,
            tx,
            state.clone(),
            Arc::new(StaticSource { quotes: Vec::new() }),
            dir.clone(),
            Settings::default(),
            SessionStore::new(),
        );
        (ctrl, state, dir)
    }

    fn cleanup(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_add_with_empty_text_alerts_and_persists_nothing() {
        let (mut ctrl, state, dir) = controller();
        let before = ctrl.collection.len();

        ctrl.handle_command(AppCommand::AddQuote {
            text: "   ".to_string(),
            category: "Courage".to_string(),
        });

        assert_eq!(ctrl.collection.len(), before);
        assert!(!dir.join(QUOTES_FILE).exists());

        let banner = state.lock().unwrap().banner.clone().unwrap();
        assert!(banner.is_error);

        cleanup(&dir);
    }

    #[test]
    fn test_add_commits_and_notifies() {
        let (mut ctrl, state, dir) = controller();

        ctrl.handle_command(AppCommand::AddQuote {
            text: "Be bold".to_string(),
            category: "Courage".to_string(),
        });

        assert!(ctrl.collection.contains(&Quote::new("Be bold", "Courage")));
        assert!(dir.join(QUOTES_FILE).exists());

        let snapshot = state.lock().unwrap().clone();
        assert!(snapshot.categories.contains(&"Courage".to_string()));
        assert!(!snapshot.banner.unwrap().is_error);

        cleanup(&dir);
    }

    #[test]
    fn test_sync_result_notifies_once() {
        let (mut ctrl, state, dir) = controller();
        let remote = vec![Quote::new("New one", "B")];

        ctrl.handle_command(AppCommand::InternalSyncFetched(Ok(remote.clone())));
        assert!(state.lock().unwrap().banner.is_some());

        // Clear the banner, replay the same remote list: nothing new, no banner
        ctrl.banner_expires_at = None;
        state.lock().unwrap().banner = None;
        let before = ctrl.collection.len();

        ctrl.handle_command(AppCommand::InternalSyncFetched(Ok(remote)));
        assert_eq!(ctrl.collection.len(), before);
        assert!(state.lock().unwrap().banner.is_none());

        cleanup(&dir);
    }

    #[test]
    fn test_sync_failure_is_silent() {
        let (mut ctrl, state, dir) = controller();
        let before = ctrl.collection.len();

        ctrl.handle_command(AppCommand::InternalSyncFetched(Err("down".to_string())));

        assert_eq!(ctrl.collection.len(), before);
        assert!(state.lock().unwrap().banner.is_none());

        cleanup(&dir);
    }

    #[test]
    fn test_cycle_filter_walks_category_index() {
        let (mut ctrl, state, dir) = controller();

        // Seed collection: categories are [Motivation, Wisdom]
        ctrl.handle_command(AppCommand::CycleFilter { backward: false });
        assert_eq!(state.lock().unwrap().filter, "Motivation");

        ctrl.handle_command(AppCommand::CycleFilter { backward: false });
        assert_eq!(state.lock().unwrap().filter, "Wisdom");

        ctrl.handle_command(AppCommand::CycleFilter { backward: false });
        assert_eq!(state.lock().unwrap().filter, "all");

        // The selection is persisted for the next session
        assert!(dir.join(SETTINGS_FILE).exists());

        cleanup(&dir);
    }

    #[test]
    fn test_filter_with_no_matches_shows_empty_message() {
        let (mut ctrl, state, dir) = controller();

        ctrl.handle_command(AppCommand::SetFilter("NoSuchCategory".to_string()));

        assert_eq!(state.lock().unwrap().display, QuoteDisplay::EmptyCategory);

        cleanup(&dir);
    }

    #[test]
    fn test_session_restore_redisplays_last_quote() {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = temp_dir().join(format!("quoth_controller_test_{}", id));
        fs::create_dir_all(&dir).unwrap();

        let mut session = SessionStore::new();
        session.set_last_quote(Quote::new("Be bold", "Courage"));

        let (tx, rx) = unbounded();
        let state = Arc::new(Mutex::new(AppSnapshot::default()));
        let mut ctrl = AppController::new(
            rx,
            tx,
            state.clone(),
            Arc::new(StaticSource { quotes: Vec::new() }),
            dir.clone(),
            Settings::default(),
            session,
        );

        ctrl.restore_session();
        assert_eq!(
            state.lock().unwrap().display,
            QuoteDisplay::Quote(Quote::new("Be bold", "Courage"))
        );

        cleanup(&dir);
    }
}
