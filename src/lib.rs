//! A growable array list with positional insertion and removal
//!
//! [`ArrayList`] keeps its elements in a contiguous buffer of presence-tagged
//! slots that doubles when full. Failed operations return a [`ListError`]
//! and leave the list untouched.
//!
//! ```
//! use arrlist::{ArrayList, ListError};
//!
//! let mut list: ArrayList<i32> = ArrayList::new();
//! list.insert_back(1).unwrap();
//! list.insert_back(3).unwrap();
//! list.insert_at(1, 2).unwrap();
//!
//! assert_eq!(list.get(1), Ok(&2));
//! assert_eq!(list.remove_front(), Ok(1));
//! assert_eq!(list.insert_back(None), Err(ListError::InvalidArgument));
//! ```
//!
//! The rest of the crate backs the `arrlist` binary, which replays textual
//! operation scripts against an `ArrayList<BString>`.

pub mod cli;
pub mod config;
pub mod debug;
pub mod error;
pub mod exec;
pub mod input;
pub mod list;
pub mod output;
pub mod script;

pub use error::ListError;
pub use list::{ArrayList, INITIAL_CAPACITY};
