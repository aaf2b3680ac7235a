#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
pub mod driver;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use driver::{NullRenderer, Renderer, SessionDriver};
#[cfg(feature = "std")]
pub use input::{ChannelSource, InputEvent, InputSource, LineSource};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with_default};
#[cfg(feature = "std")]
pub use store::{JsonFileStore, MemoryStore, StoredRecord};
#[cfg(feature = "std")]
pub use ui::{render_board, render_history, render_record, render_session, TextRenderer};
