use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use indexmap::IndexMap;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::list_io::load_list;
use crate::io::watcher::ListWatcher;
use crate::model::{DragConfig, Item, ItemPosition, ListFile, UiConfig};
use crate::ops::{InteractionMonitor, OrderStore, Reordered, StoreError};

use super::flash::Flash;
use super::input;
use super::input::PointerTracker;
use super::item_view::ItemView;
use super::layout::ListLayout;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    pub title: String,
    pub store: OrderStore,
    /// One view per item, in list order, keyed by item id
    pub views: IndexMap<String, ItemView>,
    pub monitor: InteractionMonitor,
    pub pointer: PointerTracker,
    /// Focused item id. Focus follows the item when it moves.
    pub focus: Option<String>,
    pub flash: Option<Flash>,
    /// Layout of the last rendered frame
    pub layout: ListLayout,
    /// Index of the first visible item
    pub scroll: usize,
    pub theme: Theme,
    pub ui: UiConfig,
    pub drag: DragConfig,
    /// File the list came from, for live reload
    pub list_path: Option<PathBuf>,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(file: ListFile, list_path: Option<PathBuf>) -> Result<Self, StoreError> {
        let mut store = OrderStore::new(file.items)?;
        store.subscribe(|items| {
            let order: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
            tracing::info!(?order, "list changed");
        });

        let focus = store.get(0).map(|item| item.id.clone());
        let theme = Theme::from_config(&file.ui);

        let mut app = App {
            title: file.list.title,
            store,
            views: IndexMap::new(),
            monitor: InteractionMonitor::new(),
            pointer: PointerTracker::default(),
            focus,
            flash: None,
            layout: ListLayout::default(),
            scroll: 0,
            theme,
            ui: file.ui,
            drag: file.drag,
            list_path,
            status_message: None,
            show_help: false,
            should_quit: false,
        };
        app.sync_views();
        Ok(app)
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn view(&self, id: &str) -> Option<&ItemView> {
        self.views.get(id)
    }

    pub fn view_mut(&mut self, id: &str) -> Option<&mut ItemView> {
        self.views.get_mut(id)
    }

    /// Index of the focused item in the current order
    pub fn focus_index(&self) -> Option<usize> {
        self.focus.as_deref().and_then(|id| self.store.index_of(id))
    }

    pub fn position_of(&self, index: usize) -> ItemPosition {
        ItemPosition::of(index, self.store.len())
    }

    pub fn set_focus_index(&mut self, index: usize) {
        if let Some(item) = self.store.get(index) {
            self.focus = Some(item.id.clone());
        }
    }

    /// Move focus by `delta` rows, clamped to the list.
    pub fn move_focus(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let cur = self.focus_index().unwrap_or(0);
        let next = cur.saturating_add_signed(delta).min(len - 1);
        self.set_focus_index(next);
    }

    /// True while the focused item is held via the keyboard
    pub fn keyboard_dragging(&self) -> bool {
        !self.pointer.is_dragging()
            && self
                .focus
                .as_deref()
                .and_then(|id| self.views.get(id))
                .is_some_and(ItemView::is_dragging)
    }

    /// Bring the per-item views in line with the store: mount views for new
    /// ids, unmount views for ids that are gone, keep state for the rest,
    /// and order them like the list.
    pub fn sync_views(&mut self) {
        let mut old = std::mem::take(&mut self.views);
        self.views = self
            .store
            .items()
            .iter()
            .map(|item| {
                let view = old.shift_remove(&item.id).unwrap_or_default();
                (item.id.clone(), view)
            })
            .collect();

        if self.focus_index().is_none() {
            let len = self.store.len();
            self.focus = if len == 0 {
                None
            } else {
                let fallback = self.layout.scroll.min(len - 1);
                self.store.get(fallback).map(|item| item.id.clone())
            };
        }
    }

    /// Re-read the list file after an external change.
    pub fn reload_list(&mut self) {
        let Some(path) = self.list_path.clone() else {
            return;
        };
        match load_list(&path) {
            Ok(file) => match self.store.replace(file.items) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "list reloaded");
                    self.title = file.list.title;
                    self.sync_views();
                    self.status_message = Some("list reloaded".to_string());
                }
                Err(e) => self.status_message = Some(format!("reload failed: {}", e)),
            },
            Err(e) => {
                tracing::debug!(error = %e, "ignoring invalid list file");
                self.status_message = Some(format!("reload failed: {}", e));
            }
        }
    }

    /// Tell the user where a moved item ended up.
    pub fn announce_move(&mut self, moved: &Reordered) {
        let label = self
            .store
            .get(moved.to)
            .map_or(moved.id.as_str(), |item| item.label.as_str());
        self.status_message = Some(format!(
            "{} moved to position {} of {}",
            label,
            moved.to + 1,
            self.store.len()
        ));
    }

    /// Start the post-move flash on `id`.
    pub fn start_flash(&mut self, id: &str) {
        self.flash = Some(Flash::new(id, Duration::from_millis(self.drag.flash_ms)));
    }

    /// Active flash, if it hasn't run out yet.
    pub fn active_flash(&self, now: Instant) -> Option<&Flash> {
        self.flash.as_ref().filter(|f| f.is_active_at(now))
    }

    /// Per-frame housekeeping.
    pub fn tick(&mut self, now: Instant) {
        if self.flash.as_ref().is_some_and(|f| !f.is_active_at(now)) {
            self.flash = None;
        }
    }
}

/// Run the TUI. Returns the final order.
pub fn run(file: ListFile, list_path: Option<PathBuf>) -> Result<Vec<Item>, Box<dyn std::error::Error>> {
    let mut app = App::new(file, list_path)?;

    let watcher = match &app.list_path {
        Some(path) => match ListWatcher::start(path) {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::warn!(error = %e, "live reload disabled");
                None
            }
        },
        None => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result.map(|()| app.items().to_vec())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&ListWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll so the flash fades without input
        if event::poll(Duration::from_millis(50))? {
            handle_event(app, event::read()?);
        }

        if watcher.and_then(ListWatcher::poll).is_some() {
            app.reload_list();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
        Event::Mouse(mouse) => input::handle_mouse(app, mouse),
        // A release outside the window never arrives
        Event::FocusLost => input::cancel_pointer_drag(app),
        _ => {}
    }
}
