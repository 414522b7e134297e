//! Zoon view of a [`TaskList`](tasklist::TaskList).
//!
//! `view` draws the input row and one row per displayed task; `events` turns
//! clicks and key presses into controller calls.

pub use zoon;

mod events;
mod view;

pub use view::root;
