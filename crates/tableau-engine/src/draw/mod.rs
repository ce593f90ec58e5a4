//! Draw stream types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in submission order
//! - bracket the camera-transformed world pass (`BeginWorld` / `EndWorld`)
//! - keep shape-specific helpers isolated per shape file under `draw::shapes`
//!
//! Scenes composite by *when* they record: whatever is pushed first is
//! painted first, so a backend replays `items()` front to back.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawList, DrawStats};
pub use shapes::Border;
pub use shapes::outline::OutlineParams;
pub use shapes::rect::{RectCmd, RectLinesCmd};
pub use shapes::text::TextCmd;
pub use shapes::texture::TextureCmd;
