//! # Commands Module
//!
//! Menu options and the handlers they dispatch to.
//!
//! ## Dispatch Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Dispatch                                        │
//! │                                                                         │
//! │  "Option: 3" ──► MenuOption::from_index(3) ──► MenuOption::AddItem      │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                     MenuOption::handler() ──► item::add │
//! │                                                                         │
//! │  Option  Handler                   Module                               │
//! │  ──────  ───────                   ──────                               │
//! │  0       exit                      (this file)                          │
//! │  1       list_all                  listing.rs                           │
//! │  2       list_by_substring         listing.rs                           │
//! │  3       add                       item.rs                              │
//! │  4       delete                    item.rs                              │
//! │  5       update                    item.rs                              │
//! │  6       list_by_name              listing.rs                           │
//! │  7       list_expiring             listing.rs                           │
//! │  8       undo                      history.rs                           │
//! │  9       redo                      history.rs                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod history;
pub mod item;
pub mod listing;

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::state::{AppConfig, InventoryState};

/// Everything a handler needs: the console plus shared state.
#[derive(Debug)]
pub struct Session<R, W> {
    pub console: Console<R, W>,
    pub state: InventoryState,
    pub config: AppConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, state: InventoryState, config: AppConfig) -> Self {
        Session {
            console,
            state,
            config,
        }
    }
}

/// Signature shared by every menu handler.
pub type Handler<R, W> = fn(&mut Session<R, W>) -> AppResult<()>;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    ListAll,
    ListBySubstring,
    AddItem,
    DeleteItem,
    UpdateItem,
    ListByName,
    ListExpiring,
    Undo,
    Redo,
}

impl MenuOption {
    pub const ALL: [MenuOption; 10] = [
        MenuOption::Exit,
        MenuOption::ListAll,
        MenuOption::ListBySubstring,
        MenuOption::AddItem,
        MenuOption::DeleteItem,
        MenuOption::UpdateItem,
        MenuOption::ListByName,
        MenuOption::ListExpiring,
        MenuOption::Undo,
        MenuOption::Redo,
    ];

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Menu line shown to the user.
    pub const fn label(self) -> &'static str {
        match self {
            MenuOption::Exit => "0. Exit",
            MenuOption::ListAll => "1. List all products",
            MenuOption::ListBySubstring => {
                "2. Display products containing text (empty = all) sorted in ascending order by quantity"
            }
            MenuOption::AddItem => "3. Add a product",
            MenuOption::DeleteItem => "4. Delete a product",
            MenuOption::UpdateItem => "5. Update a product",
            MenuOption::ListByName => "6. List products sorted in ascending order by name",
            MenuOption::ListExpiring => {
                "7. Display all products in given category (none = all) that have expired or expire in the given number of days"
            }
            MenuOption::Undo => "8. Undo the previous operation",
            MenuOption::Redo => "9. Redo the previously undone operation",
        }
    }

    /// Looks up the handler for this option.
    pub fn handler<R: BufRead, W: Write>(self) -> Handler<R, W> {
        match self {
            MenuOption::Exit => exit,
            MenuOption::ListAll => listing::list_all,
            MenuOption::ListBySubstring => listing::list_by_substring,
            MenuOption::AddItem => item::add,
            MenuOption::DeleteItem => item::delete,
            MenuOption::UpdateItem => item::update,
            MenuOption::ListByName => listing::list_by_name,
            MenuOption::ListExpiring => listing::list_expiring,
            MenuOption::Undo => history::undo,
            MenuOption::Redo => history::redo,
        }
    }
}

fn exit<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    session.console.say("INFO: Quitting.")
}

/// Runs the menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    session
        .console
        .say("Welcome to the Admin Panel of the Intelligent Refrigerator by Home SmartApps.")?;

    loop {
        for option in MenuOption::ALL {
            session.console.say(option.label())?;
        }

        let selection = match session.console.read_integer("Option: ") {
            Ok(selection) => selection,
            Err(AppError::InputClosed) => break,
            Err(err) => return Err(err),
        };

        match MenuOption::from_index(selection) {
            Some(option) => {
                debug!(?option, "Menu option selected");
                match (option.handler())(session) {
                    Ok(()) => {}
                    Err(AppError::InputClosed) => break,
                    Err(err) => return Err(err),
                }
                if option == MenuOption::Exit {
                    session.console.say("")?;
                    break;
                }
            }
            None => session.console.say("ERROR: Invalid menu option!")?,
        }

        session.console.say("")?;
    }

    info!("Menu loop finished");
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use fridge_core::InventoryService;

    use super::*;

    pub type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    /// Session over scripted input, with "today" pinned to 2022-03-10.
    pub fn session(service: InventoryService, input: &str) -> TestSession {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let config = AppConfig {
            sample_data: false,
            today: NaiveDate::from_ymd_opt(2022, 3, 10),
        };
        Session::new(console, InventoryState::new(service), config)
    }

    pub fn output(session: TestSession) -> String {
        String::from_utf8(session.console.into_output()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use fridge_core::InventoryService;

    use super::test_support::{output, session};
    use super::*;

    #[test]
    fn test_menu_option_lookup() {
        assert_eq!(MenuOption::from_index(0), Some(MenuOption::Exit));
        assert_eq!(MenuOption::from_index(9), Some(MenuOption::Redo));
        assert_eq!(MenuOption::from_index(10), None);
        assert_eq!(MenuOption::from_index(-1), None);

        for (n, option) in MenuOption::ALL.iter().enumerate() {
            assert!(option.label().starts_with(&format!("{n}. ")));
        }
    }

    #[test]
    fn test_menu_exits() {
        let mut s = session(InventoryService::new(), "0\n");
        run_menu(&mut s).unwrap();

        let out = output(s);
        assert!(out.starts_with("Welcome to the Admin Panel"));
        assert!(out.contains("9. Redo the previously undone operation\n"));
        assert!(out.contains("INFO: Quitting.\n"));
    }

    #[test]
    fn test_menu_rejects_unknown_option() {
        let mut s = session(InventoryService::new(), "42\n0\n");
        run_menu(&mut s).unwrap();
        assert!(output(s).contains("ERROR: Invalid menu option!"));
    }

    #[test]
    fn test_menu_stops_at_end_of_input() {
        let mut s = session(InventoryService::new(), "3\nmilk\n");
        run_menu(&mut s).unwrap();

        assert_eq!(s.state.with_service(|svc| svc.collection().len()), 0);
    }

    #[test]
    fn test_menu_add_then_undo_then_redo() {
        let script = "3\nmilk\n1\n2\n2022\n3\n15\n1\n8\n1\n9\n0\n";
        let mut s = session(InventoryService::new(), script);
        run_menu(&mut s).unwrap();

        assert_eq!(s.state.with_service(|svc| svc.collection().len()), 1);

        let out = output(s);
        assert!(out.contains("INFO: Product added successfully."));
        assert!(out.contains("INFO: Successfully undone previous operation."));
        assert!(out.contains("INFO: There are no products in the fridge."));
        assert!(out.contains("INFO: Successfully redone previous operation."));
    }
}
