//! verse-story renders vertical "story" images: a randomly drawn passage and its citation,
//! wrapped and centered over a fixed background, and serves them over HTTP.
//!
//! # Pipeline overview
//!
//! 1. **Select**: `Corpus + Rng64 -> Passage` (uniform book, then chapter, then verse)
//! 2. **Format**: wrap the passage at a fixed character width; build the citation string
//! 3. **Shape & lay out**: parley measures every line; [`compose_story_layout`] places the
//!    verse block, citation and backdrop box on the canvas
//! 4. **Composite**: the backdrop and shadowed text are drawn on a transparent overlay with
//!    `vello_cpu`, composited over the stretched background, flattened to RGB
//! 5. **Output**: JPEG written as `story_<YYYYMMDD_HHMMSS>.jpg` under the output directory
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit configuration**: all constants live in [`StoryConfig`] / [`StoryPaths`] and
//!   are passed in; there is no process-wide mutable state.
//! - **Fail fast**: a missing corpus, background or font fails the request; the font is
//!   fetched and registered before the server starts.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod corpus;
mod foundation;
mod layout;
mod render;
mod server;
mod text;

pub use assets::decode::{PreparedImage, decode_background, load_background};
pub use assets::font::{FontStatus, ensure_font, fetch_font};
pub use config::{DEFAULT_FONT_URL, StoryConfig, StoryPaths};
pub use corpus::model::{Book, Chapter, Corpus, Verse};
pub use corpus::select::{Passage, PassageSelector, select_passage};
pub use foundation::core::{Canvas, Point, Rect, Rgba8, RoundedRect, Size};
pub use foundation::error::{StoryError, StoryResult};
pub use foundation::math::Rng64;
pub use layout::block::BlockMetrics;
pub use layout::story::{StoryLayout, base_line_y, compose_story_layout};
pub use render::composite::{FrameRgb8, flatten_to_rgb, over, over_in_place};
pub use render::compositor::{OverlayPainter, composite_story, paint_story_overlay};
pub use render::output::{encode_jpeg, save_story, story_file_name};
pub use render::pipeline::{RenderedStory, StoryFrame, StoryRenderer, render_story_frame};
pub use server::routes::{Route, StoryServer, route};
pub use text::citation::{BookNames, format_citation};
pub use text::shaping::{FontFace, ShapedBlock, ShapedLine, TextBrushRgba8, TextLayoutEngine};
pub use text::wrap::{wrap_text, wrap_text_joined};
