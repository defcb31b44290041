// UI layer: the numbered main menu and the five watchlist actions.
//
// The controller owns the watchlist for the whole session and saves it
// through `Persistence` after every change. Console and persistence are
// type parameters so tests can script the session and count saves.

use crate::console::Console;
use crate::model::{WatchItem, WatchItemType, Watchlist, EPISODE_MAX, EPISODE_MIN};
use crate::prompt::{confirm, pause, prompt_enum, prompt_index, prompt_int, prompt_non_empty};
use crate::store::Persistence;
use anyhow::Result;

/// Window title shown while the tracker runs.
pub const APP_TITLE: &str = "Watchlist Tracker";

const RETURN_PROMPT: &str = "Press Enter to return...";

/// Entries of the main menu, numbered as shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit = 0,
    Add = 1,
    View = 2,
    UpdateProgress = 3,
    Resume = 4,
    Remove = 5,
}

impl MenuChoice {
    const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::UpdateProgress,
        MenuChoice::Resume,
        MenuChoice::Remove,
        MenuChoice::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add watch item",
            MenuChoice::View => "View watch list",
            MenuChoice::UpdateProgress => "Update watching progress",
            MenuChoice::Resume => "Resume watching (show last progress)",
            MenuChoice::Remove => "Remove watch item",
            MenuChoice::Exit => "Exit",
        }
    }

    fn from_number(n: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| *c as i64 == n)
    }
}

/// Interactive session over one watchlist.
pub struct Controller<C, P> {
    console: C,
    store: P,
    watchlist: Watchlist,
}

impl<C: Console, P: Persistence> Controller<C, P> {
    pub fn new(console: C, store: P, watchlist: Watchlist) -> Self {
        Controller {
            console,
            store,
            watchlist,
        }
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Run the main menu until the user picks Exit. The list is saved one
    /// last time on the way out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.clear()?;
            self.console.print(&format!("=== {} ===", APP_TITLE))?;
            for choice in MenuChoice::ALL {
                self.console.print(&format!("{}) {}", choice as i64, choice.label()))?;
            }
            self.console.print("")?;

            let picked = prompt_int(&mut self.console, "Select an option", 0, 5)?;
            match MenuChoice::from_number(picked) {
                Some(MenuChoice::Add) => self.add_item()?,
                Some(MenuChoice::View) => self.view_list()?,
                Some(MenuChoice::UpdateProgress) => self.update_progress()?,
                Some(MenuChoice::Resume) => self.resume_watching()?,
                Some(MenuChoice::Remove) => self.remove_item()?,
                Some(MenuChoice::Exit) => {
                    self.store.save(&self.watchlist)?;
                    self.console.print("")?;
                    self.console.print("Saved. Goodbye!")?;
                    return Ok(());
                }
                // prompt_int already bounds the value
                None => {}
            }
        }
    }

    /// Collect a title and type, warn on a duplicate, then append and save.
    pub fn add_item(&mut self) -> Result<()> {
        self.page("Add Watch Item")?;

        let title = prompt_non_empty(&mut self.console, "Title")?;
        let kind: WatchItemType = prompt_enum(&mut self.console, "Type (Movie/TVShow)")?;

        if self.watchlist.contains_title(&title, kind) {
            self.console.print("")?;
            self.console.print("Note: An item with the same title/type already exists.")?;
            if !confirm(&mut self.console, "Add anyway?")? {
                return self.finish("Cancelled.");
            }
        }

        let item = WatchItem::new(&title, kind);
        log::debug!("adding {} ({})", item.title, item.id);
        self.watchlist.push(item);
        self.store.save(&self.watchlist)?;

        self.finish("Added and saved.")
    }

    /// Print the numbered list, or a note when there is nothing to show.
    pub fn view_list(&mut self) -> Result<()> {
        self.page("Watch List")?;

        if self.watchlist.is_empty() {
            self.console.print("No items yet.")?;
        } else {
            self.print_list()?;
        }
        self.console.print("")?;
        pause(&mut self.console, RETURN_PROMPT)
    }

    /// Pick an item, then either record an episode or mark it completed.
    pub fn update_progress(&mut self) -> Result<()> {
        self.page("Update Watching Progress")?;
        if self.watchlist.is_empty() {
            return self.nothing_to_show("No items to update.");
        }

        self.print_list()?;
        self.console.print("")?;
        let index = prompt_index(
            &mut self.console,
            "Choose an item number to update",
            self.watchlist.len(),
        )?;
        let Some(item) = self.watchlist.get(index).cloned() else {
            return Ok(());
        };
        let kind = item.kind;

        self.page("Update Item")?;
        self.console.print(&item.heading())?;
        self.console.print(&format!("Current Status: {}", item.status))?;
        let episode = item
            .last_watched_episode
            .map(|ep| ep.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        self.console.print(&format!("Last Watched Episode: {}", episode))?;
        self.console.print("")?;
        self.console.print("1) Update last watched episode")?;
        self.console.print("2) Mark as completed")?;
        self.console.print("0) Cancel")?;
        self.console.print("")?;

        match prompt_int(&mut self.console, "Select an action", 0, 2)? {
            1 => {
                if kind == WatchItemType::Movie {
                    self.console.print("")?;
                    self.console.print(
                        "This is a Movie. Episode tracking may not apply, but you can still store a number (e.g., part/segment).",
                    )?;
                }
                let ep = prompt_int(
                    &mut self.console,
                    "Enter last watched episode number (>= 1)",
                    EPISODE_MIN as i64,
                    EPISODE_MAX as i64,
                )? as u32;
                if let Some(item) = self.watchlist.get_mut(index) {
                    item.record_episode(ep);
                }
                self.store.save(&self.watchlist)?;
                self.finish("Updated and saved.")
            }
            2 => {
                if let Some(item) = self.watchlist.get_mut(index) {
                    item.mark_completed();
                }
                self.store.save(&self.watchlist)?;
                self.finish("Marked completed and saved.")
            }
            _ => Ok(()),
        }
    }

    /// Show where to pick an item up again. Read-only.
    pub fn resume_watching(&mut self) -> Result<()> {
        self.page("Resume Watching")?;
        if self.watchlist.is_empty() {
            return self.nothing_to_show("No items yet.");
        }

        self.print_list()?;
        self.console.print("")?;
        let index = prompt_index(
            &mut self.console,
            "Choose an item number to view progress",
            self.watchlist.len(),
        )?;
        let Some(item) = self.watchlist.get(index) else {
            return Ok(());
        };

        self.console.clear()?;
        self.console.print("=== Progress Details ===")?;
        self.console.print(&item.heading())?;
        self.console.print(&format!("Status: {}", item.status))?;
        match item.last_watched_episode {
            Some(ep) => self.console.print(&format!("Resume at episode: {}", ep))?,
            None => self.console.print("No episode progress recorded yet.")?,
        }
        self.console.print("")?;
        pause(&mut self.console, RETURN_PROMPT)
    }

    /// Pick an item and delete it after confirmation.
    pub fn remove_item(&mut self) -> Result<()> {
        self.page("Remove Watch Item")?;
        if self.watchlist.is_empty() {
            return self.nothing_to_show("No items to remove.");
        }

        self.print_list()?;
        self.console.print("")?;
        let index = prompt_index(
            &mut self.console,
            "Choose an item number to remove",
            self.watchlist.len(),
        )?;
        let title = match self.watchlist.get(index) {
            Some(item) => item.title.clone(),
            None => return Ok(()),
        };

        self.console.print("")?;
        if !confirm(&mut self.console, &format!("Remove '{}'?", title))? {
            return self.finish("Cancelled.");
        }

        if let Some(removed) = self.watchlist.remove(index) {
            log::debug!("removed {} ({})", removed.title, removed.id);
        }
        self.store.save(&self.watchlist)?;

        self.finish("Removed and saved.")
    }

    fn print_list(&mut self) -> Result<()> {
        for (i, w) in self.watchlist.iter().enumerate() {
            self.console.print(&format!(
                "{}) {}  |  Status: {}  |  {}",
                i + 1,
                w.heading(),
                w.status,
                w.progress_label()
            ))?;
        }
        Ok(())
    }

    fn page(&mut self, title: &str) -> Result<()> {
        self.console.clear()?;
        self.console.print(&format!("=== {} ===", title))
    }

    /// Empty-list notice: message first, then a blank line and the pause.
    fn nothing_to_show(&mut self, message: &str) -> Result<()> {
        self.console.print(message)?;
        self.console.print("")?;
        pause(&mut self.console, RETURN_PROMPT)
    }

    /// Print a closing message and wait for Enter.
    fn finish(&mut self, message: &str) -> Result<()> {
        self.console.print("")?;
        self.console.print(message)?;
        pause(&mut self.console, RETURN_PROMPT)
    }
}

/// Entry point used by the binary: run one session with the given console
/// and store, starting from `watchlist`.
pub fn main_menu<C: Console, P: Persistence>(console: C, store: P, watchlist: Watchlist) -> Result<()> {
    Controller::new(console, store, watchlist).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_back_to_choices() {
        assert_eq!(MenuChoice::from_number(0), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(3), Some(MenuChoice::UpdateProgress));
        assert_eq!(MenuChoice::from_number(6), None);
    }
}
