//! Session lifecycle, read-only views, and key bindings.

mod input;
mod state;
mod view;

pub use input::{Command, Key};
pub use state::{Mode, Session};
pub use view::{SessionView, Swatch};
