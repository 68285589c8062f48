//! UI Components
//!
//! Reusable Leptos components.

mod option_box;
mod search_bar;
mod section_column;
mod task_card;

pub use option_box::{Loader, OptionBox};
pub use search_bar::SearchBar;
pub use section_column::SectionColumn;
pub use task_card::TaskCard;
