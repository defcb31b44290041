// Library root
// -----------
// The binary (`main.rs`) wires these modules into the interactive tracker.
//
// Module responsibilities:
// - `model`: watch items, their type/status enums and the ordered list.
// - `store`: loads and saves the watchlist JSON file.
// - `console`: terminal I/O behind a trait, plus a scripted console.
// - `prompt`: validation loops that keep asking until input is valid.
// - `ui`: the main menu and the five watchlist actions.
pub mod console;
pub mod model;
pub mod prompt;
pub mod store;
pub mod ui;
