//! CLI command handlers. Each command is in its own file.

mod add;
mod completions;
mod copy;
mod links;
mod list;
mod remove;

pub use add::run_add;
pub use completions::run_completions;
pub use copy::{run_copy, select_link};
pub use links::run_links;
pub use list::{list_lines, run_list};
pub use remove::run_remove;
