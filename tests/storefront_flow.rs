use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use storefront::{
    core::state::AppState,
    domain::{
        location::Location,
        product::{Product, ProductId},
        query::FetchRequest,
    },
    infrastructure::{
        cache::{FileCache, MemoryCache, OfflineCache},
        catalog::Catalog,
        config::Config,
        product_source::{FetchError, ProductSource},
        tui::{test::TestTui, TuiLike},
    },
    presentation::{
        components::Components,
        config::keybindings::{parse_key_event, Action},
    },
    RawMsg, Runtime,
};

const WAIT: Duration = Duration::from_secs(2);

/// Serves 20 products on page 1 and 3 on page 2; filtered listings get 2.
/// Fails every request while `down` is set.
#[derive(Default)]
struct ShopSource {
    requests: Mutex<Vec<FetchRequest>>,
    calls: AtomicUsize,
    down: AtomicBool,
}

impl ShopSource {
    fn requests(&self) -> Vec<FetchRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| panic!("poisoned: {e}"))
            .clone()
    }
}

#[async_trait]
impl ProductSource for ShopSource {
    async fn fetch_products(&self, request: &FetchRequest) -> Result<Vec<Product>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|e| panic!("poisoned: {e}"))
            .push(request.clone());
        if self.down.load(Ordering::SeqCst) {
            return Err(FetchError::Status {
                status: 503,
                body: "maintenance".to_string(),
            });
        }
        let count = if !request.category.is_empty() || !request.search.is_empty() {
            2
        } else if request.page == 1 {
            20
        } else {
            3
        };
        Ok((1..=count)
            .map(|i| Product {
                id: ProductId::Number(u64::from(request.page) * 100 + i),
                title: format!("Item {}-{i}", request.page),
                price: 9.5,
                category: "shoes".to_string(),
                ..Default::default()
            })
            .collect())
    }
}

fn create_config() -> Config {
    let mut config = Config::default();
    for (key, action) in [
        ("<q>", Action::Quit),
        ("<n>", Action::NextPage),
        ("<p>", Action::PreviousPage),
        ("<c>", Action::CycleCategory),
        ("</>", Action::EditSearch),
        ("<enter>", Action::ApplyFilters),
        ("<x>", Action::ResetFilters),
        ("<backspace>", Action::Back),
        ("<shift-r>", Action::Reload),
    ] {
        let key = parse_key_event(key).unwrap_or_else(|e| panic!("{e}"));
        config.keybindings.insert(key, action);
    }
    config.carousel.images = vec!["/banners/a.jpg".into(), "/banners/b.jpg".into()];
    config.listing.categories = vec!["shoes".into(), "hats".into()];
    config
}

fn create_runtime(
    source: &Arc<ShopSource>,
    cache: Arc<dyn OfflineCache>,
    online: bool,
) -> Runtime {
    let mut state = AppState::new(create_config());
    state.system.is_online = online;
    let catalog = Catalog::new(Arc::clone(source) as Arc<dyn ProductSource>, cache);
    Runtime::new_with_executor(state, catalog, Location::root())
}

fn press(runtime: &mut Runtime, c: char) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
}

fn press_code(runtime: &mut Runtime, code: KeyCode) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

async fn settle(runtime: &mut Runtime, done: impl FnMut(&AppState) -> bool) -> Result<()> {
    let reached = runtime.run_until(done, WAIT).await?;
    assert!(reached, "state never settled: {:?}", runtime.get_stats());
    Ok(())
}

fn loaded(state: &AppState) -> bool {
    !state.grid.is_loading()
}

#[tokio::test]
async fn test_browse_pages_and_go_back() -> Result<()> {
    let source = Arc::new(ShopSource::default());
    let mut runtime = create_runtime(&source, Arc::new(MemoryCache::new()), true);

    runtime.start()?;
    settle(&mut runtime, loaded).await?;
    assert_eq!(runtime.state().grid.products().len(), 20);
    assert!(runtime.state().grid.has_more());

    press(&mut runtime, 'n');
    settle(&mut runtime, |s| s.grid.page() == 2 && loaded(s)).await?;
    assert_eq!(runtime.state().grid.products().len(), 3);
    assert!(!runtime.state().grid.has_more());

    // The last page has no successor
    press(&mut runtime, 'n');
    runtime.run_update_cycle()?;
    assert_eq!(runtime.state().grid.page(), 2);
    assert_eq!(
        runtime.state().system.status_message.as_deref(),
        Some("No more products")
    );

    press_code(&mut runtime, KeyCode::Backspace);
    settle(&mut runtime, |s| s.grid.page() == 1 && loaded(s)).await?;
    assert_eq!(runtime.state().grid.location(), &Location::root());

    let pages: Vec<u32> = source.requests().iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![1, 2, 1]);
    Ok(())
}

#[tokio::test]
async fn test_apply_search_and_category() -> Result<()> {
    let source = Arc::new(ShopSource::default());
    let mut runtime = create_runtime(&source, Arc::new(MemoryCache::new()), true);
    runtime.start()?;
    settle(&mut runtime, loaded).await?;

    press(&mut runtime, 'c');
    press(&mut runtime, '/');
    for c in "lamp".chars() {
        press(&mut runtime, c);
    }
    press_code(&mut runtime, KeyCode::Enter);
    settle(&mut runtime, |s| s.grid.is_filter_active() && loaded(s)).await?;

    let state = runtime.state();
    assert_eq!(state.grid.location().param("category"), Some("shoes"));
    assert_eq!(state.grid.location().param("search"), Some("lamp"));
    assert_eq!(state.grid.location().param("page"), None);
    assert_eq!(state.grid.products().len(), 2);

    let last = source
        .requests()
        .pop()
        .unwrap_or_else(|| panic!("no request recorded"));
    assert_eq!(last.category, "shoes");
    assert_eq!(last.search, "lamp");
    assert_eq!(last.page, 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_reset_filters_clears_filter_bar() -> Result<()> {
    let source = Arc::new(ShopSource::default());
    let mut runtime = create_runtime(&source, Arc::new(MemoryCache::new()), true);
    runtime.start()?;
    settle(&mut runtime, loaded).await?;

    // Nothing to reset yet
    press(&mut runtime, 'x');
    runtime.run_update_cycle()?;
    assert!(!runtime.state().grid.is_reset());

    press(&mut runtime, 'c');
    press_code(&mut runtime, KeyCode::Enter);
    settle(&mut runtime, |s| s.grid.is_filter_active() && loaded(s)).await?;
    assert_eq!(runtime.state().filter.category(), Some("shoes"));

    press(&mut runtime, 'x');
    runtime.run_update_cycle()?;
    assert!(runtime.state().grid.is_reset());
    assert_eq!(runtime.state().filter.category(), None);

    settle(&mut runtime, |s| !s.grid.is_reset() && !s.grid.is_filter_active() && loaded(s))
        .await?;
    assert_eq!(runtime.state().grid.location(), &Location::root());
    assert_eq!(runtime.state().grid.products().len(), 20);
    Ok(())
}

#[tokio::test]
async fn test_failure_shows_error_boundary_until_reload() -> Result<()> {
    let source = Arc::new(ShopSource::default());
    source.down.store(true, Ordering::SeqCst);
    let mut runtime = create_runtime(&source, Arc::new(MemoryCache::new()), true);
    runtime.start()?;
    settle(&mut runtime, |s| s.grid.error().is_some()).await?;
    assert!(!runtime.state().grid.is_loading());

    let mut tui = TestTui::new(80, 30)?;
    let components = Components::new();
    tui.draw(&mut |f| components.render(f, runtime.state()))?;
    assert!(tui.screen_contains("Failed to load products. Please try again later."));
    assert!(tui.screen_contains("Press R to reload"));

    source.down.store(false, Ordering::SeqCst);
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
        KeyCode::Char('R'),
        KeyModifiers::SHIFT,
    )));
    settle(&mut runtime, |s| s.grid.error().is_none() && loaded(s)).await?;
    assert_eq!(runtime.state().grid.products().len(), 20);

    tui.draw(&mut |f| components.render(f, runtime.state()))?;
    assert!(!tui.screen_contains("Failed to load products"));
    assert!(tui.screen_contains("Item 1-1"));
    Ok(())
}

#[tokio::test]
async fn test_offline_session_reads_snapshot_from_previous_run() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let online_source = Arc::new(ShopSource::default());
    {
        let cache = Arc::new(FileCache::in_dir(dir.path())?);
        let mut runtime = create_runtime(&online_source, cache, true);
        runtime.start()?;
        settle(&mut runtime, loaded).await?;
        runtime.shutdown()?;
    }

    let offline_source = Arc::new(ShopSource::default());
    let cache = Arc::new(FileCache::in_dir(dir.path())?);
    let mut runtime = create_runtime(&offline_source, cache, false);
    runtime.start()?;
    settle(&mut runtime, |s| !s.grid.products().is_empty()).await?;

    assert_eq!(runtime.state().grid.products().len(), 20);
    assert_eq!(offline_source.calls.load(Ordering::SeqCst), 0);

    // Page 2 was never visited online
    press(&mut runtime, 'n');
    settle(&mut runtime, |s| s.grid.page() == 2 && loaded(s)).await?;
    assert!(runtime.state().grid.is_empty_result());
    Ok(())
}

#[tokio::test]
async fn test_going_offline_switches_to_cache() -> Result<()> {
    let source = Arc::new(ShopSource::default());
    let mut runtime = create_runtime(&source, Arc::new(MemoryCache::new()), true);
    runtime.start()?;
    settle(&mut runtime, loaded).await?;

    runtime
        .get_raw_sender()
        .send(RawMsg::ConnectivityChanged(false))?;
    settle(&mut runtime, |s| !s.system.is_online).await?;

    press(&mut runtime, 'n');
    settle(&mut runtime, |s| s.grid.page() == 2 && loaded(s)).await?;

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert!(runtime.state().grid.is_empty_result());
    Ok(())
}
