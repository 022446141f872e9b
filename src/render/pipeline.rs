use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDateTime;

use crate::assets::decode::{PreparedImage, load_background};
use crate::config::{StoryConfig, StoryPaths};
use crate::corpus::model::Corpus;
use crate::corpus::select::{Passage, PassageSelector};
use crate::foundation::error::StoryResult;
use crate::layout::story::{StoryLayout, compose_story_layout};
use crate::render::composite::FrameRgb8;
use crate::render::compositor::{composite_story, paint_story_overlay};
use crate::render::output::save_story;
use crate::text::citation::format_citation;
use crate::text::shaping::{FontFace, TextLayoutEngine};
use crate::text::wrap::wrap_text;

/// A story frame before it is written to disk.
#[derive(Clone, Debug)]
pub struct StoryFrame {
    pub frame: FrameRgb8,
    pub layout: StoryLayout,
    pub citation: String,
}

/// A story written to the output directory.
#[derive(Clone, Debug)]
pub struct RenderedStory {
    pub path: PathBuf,
    pub passage: Passage,
    pub citation: String,
    pub layout: StoryLayout,
}

impl RenderedStory {
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Lay out and composite one passage onto `background`.
pub fn render_story_frame(
    config: &StoryConfig,
    engine: &mut TextLayoutEngine,
    face: &FontFace,
    background: &PreparedImage,
    passage: &Passage,
) -> StoryResult<StoryFrame> {
    let lines = wrap_text(&passage.text, config.wrap_width);
    let citation = format_citation(
        &config.book_names,
        &passage.book,
        passage.chapter,
        passage.verse,
    );

    let verse_block = engine.shape_block(
        &lines,
        face,
        config.font_size,
        config.line_spacing(),
        config.verse_color.into(),
    )?;
    let citation_block = engine.shape_block(
        std::slice::from_ref(&citation),
        face,
        config.citation_font_size(),
        0.0,
        config.citation_color.into(),
    )?;

    let layout = compose_story_layout(
        config,
        verse_block.metrics().size(),
        citation_block.metrics().size(),
    );
    tracing::debug!(
        lines = lines.len(),
        backdrop = ?layout.backdrop,
        "story layout"
    );

    let overlay = paint_story_overlay(config, &layout, &verse_block, &citation_block, face)?;
    let frame = composite_story(background, &overlay)?;
    Ok(StoryFrame {
        frame,
        layout,
        citation,
    })
}

/// Full select -> layout -> composite -> save pipeline.
///
/// The font is registered once (see [`StoryRenderer::prepare_font`]); the corpus and
/// background are read fresh on every render.
pub struct StoryRenderer {
    config: StoryConfig,
    paths: StoryPaths,
    engine: TextLayoutEngine,
    face: Option<FontFace>,
    selector: PassageSelector,
}

impl StoryRenderer {
    pub fn new(
        config: StoryConfig,
        paths: StoryPaths,
        selector: PassageSelector,
    ) -> StoryResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            paths,
            engine: TextLayoutEngine::new(),
            face: None,
            selector,
        })
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    pub fn paths(&self) -> &StoryPaths {
        &self.paths
    }

    /// Read and register the font file, surfacing a missing or corrupt font now.
    #[tracing::instrument(skip(self), fields(font = %self.paths.font.display()))]
    pub fn prepare_font(&mut self) -> StoryResult<&FontFace> {
        let face = match self.face.take() {
            Some(face) => face,
            None => {
                let bytes = std::fs::read(&self.paths.font)
                    .with_context(|| format!("read font '{}'", self.paths.font.display()))?;
                let face = self.engine.load_font(bytes)?;
                tracing::info!(family = face.family(), "font registered");
                face
            }
        };
        Ok(self.face.insert(face))
    }

    /// Draw a random passage and render it.
    #[tracing::instrument(skip(self))]
    pub fn render_next(&mut self, now: NaiveDateTime) -> StoryResult<RenderedStory> {
        let corpus = Corpus::from_path(&self.paths.corpus)?;
        let passage = self.selector.select(&corpus);
        self.render_passage(passage, now)
    }

    pub fn render_passage(
        &mut self,
        passage: Passage,
        now: NaiveDateTime,
    ) -> StoryResult<RenderedStory> {
        let background = load_background(&self.paths.background, self.config.canvas)?;
        let face = self.prepare_font()?.clone();

        let story = render_story_frame(
            &self.config,
            &mut self.engine,
            &face,
            &background,
            &passage,
        )?;
        let path = save_story(
            &story.frame,
            &self.paths.output_dir,
            now,
            self.config.jpeg_quality,
        )?;
        tracing::info!(
            path = %path.display(),
            citation = %story.citation,
            "story rendered"
        );

        Ok(RenderedStory {
            path,
            passage,
            citation: story.citation,
            layout: story.layout,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
