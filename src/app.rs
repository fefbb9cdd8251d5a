//! Application module: the player that ties the playlist store, the
//! reconciler and the playback driver together.
//!
//! `App` lives in `app::model`; both the controller's directives and the
//! local user's commands go through it.

mod model;

pub use model::*;
