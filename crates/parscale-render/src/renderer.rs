//! Plotters-backed [`ChartRenderer`].

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use parscale_report::charts::Figure;
use parscale_report::interfaces::{ChartRenderer, RenderError};

use crate::draw::draw_figure;
use crate::format::ImageFormat;
use crate::profile::RenderProfile;

/// Renders figures to SVG, or PNG when built with the `png` feature.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    profile: RenderProfile,
}

impl PlottersRenderer {
    /// Create a renderer, failing if the profile's format is not compiled in.
    pub fn new(profile: RenderProfile) -> Result<Self, RenderError> {
        if !profile.format.is_available() {
            return Err(RenderError::UnsupportedFormat(format!(
                "{} (rebuild with the `png` feature)",
                profile.format
            )));
        }
        Ok(Self { profile })
    }

    #[must_use]
    pub fn profile(&self) -> &RenderProfile {
        &self.profile
    }

    fn output_path(&self, figure: &Figure, out_dir: &Path) -> PathBuf {
        out_dir.join(format!("{}.{}", figure.stem, self.extension()))
    }

    #[cfg(feature = "png")]
    fn render_png(&self, figure: &Figure, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_figure(&root, figure, self.profile.annotate)
    }

    #[cfg(not(feature = "png"))]
    fn render_png(&self, _figure: &Figure, _path: &Path, _size: (u32, u32)) -> Result<(), RenderError> {
        Err(RenderError::UnsupportedFormat(ImageFormat::Png.to_string()))
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, figure: &Figure, out_dir: &Path) -> Result<PathBuf, RenderError> {
        if figure.panels.is_empty() {
            return Err(RenderError::EmptyFigure(figure.stem.clone()));
        }
        std::fs::create_dir_all(out_dir)?;

        let path = self.output_path(figure, out_dir);
        let size = self.profile.figure_size(figure.rows, figure.cols);
        tracing::debug!(stem = %figure.stem, width = size.0, height = size.1, "rendering figure");

        match self.profile.format {
            ImageFormat::Svg => {
                let root = SVGBackend::new(&path, size).into_drawing_area();
                draw_figure(&root, figure, self.profile.annotate)?;
            }
            ImageFormat::Png => self.render_png(figure, &path, size)?,
        }
        Ok(path)
    }

    fn extension(&self) -> &str {
        self.profile.format.extension()
    }
}
