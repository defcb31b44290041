// Entrypoint for the watchlist tracker.
// - Keeps `main` small: load the list, then hand it to the menu loop.
// - Save failures bubble up as `anyhow::Error` and end the process.

use watchlist_tracker::{console::Terminal, store::WatchlistStore, ui::{main_menu, APP_TITLE}};

fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines don't interleave with the menu;
    // RUST_LOG=debug shows load/save activity.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let store = WatchlistStore::in_install_dir();
    let watchlist = store.load();
    log::info!("using {} ({} items)", store.path().display(), watchlist.len());

    let mut terminal = Terminal::new();
    terminal.set_title(APP_TITLE);

    // Blocks until the user picks Exit.
    main_menu(terminal, store, watchlist)?;
    Ok(())
}
