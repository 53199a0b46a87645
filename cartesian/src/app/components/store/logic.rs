use std::path::{Path, PathBuf};

use egui::Color32;

use crate::{
    app::i18n::{Language, TextId},
    data::points_from_path,
};

use super::{ColorPool, PointSetStore, RenderMode, Source, PALETTE};

impl ColorPool {
    /// Hands out the first free palette color, or a random color once the
    /// palette is exhausted.
    pub fn acquire(&mut self) -> Color32 {
        match self.in_use.iter().position(|used| !used) {
            Some(i) => {
                self.in_use[i] = true;
                PALETTE[i]
            }
            None => random_color(),
        }
    }

    pub fn release(&mut self, color: Color32) {
        if let Some(i) = PALETTE.iter().position(|c| *c == color) {
            self.in_use[i] = false;
        }
    }

    pub fn release_all(&mut self) {
        self.in_use = Default::default();
    }

    #[cfg(test)]
    pub fn in_use(&self) -> usize {
        self.in_use.iter().filter(|used| **used).count()
    }
}

fn random_color() -> Color32 {
    // Random colors never collide with the palette, otherwise releasing
    // them would free a palette slot that is still taken.
    loop {
        let [r, g, b] = rand::random::<[u8; 3]>();
        let color = Color32::from_rgb(r, g, b);
        if !PALETTE.contains(&color) {
            return color;
        }
    }
}

impl PointSetStore {
    /// Loads every file in `paths`, one result per file.
    ///
    /// A file that fails to load is skipped; the others are still loaded.
    pub fn load(&mut self, paths: &[PathBuf]) -> Vec<Result<usize, String>> {
        paths.iter().map(|path| self.load_file(path)).collect()
    }

    /// Loads a single file and returns the number of points read.
    ///
    /// Loading a path that is already present replaces that source in place.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, String> {
        let points = points_from_path(path).map_err(|err| format!("{path:?}: {err}"))?;
        if points.is_empty() {
            return Err(format!("{path:?}: file contains no points"));
        }
        let n_points = points.len();

        if let Some(existing) = self.sources.iter_mut().find(|src| src.path == path) {
            self.colors.release(existing.color);
            existing.points = points;
            existing.color = self.colors.acquire();
            existing.mode = RenderMode::Points;
            log::debug!("reloaded {:?}", path);
        } else {
            let color = self.colors.acquire();
            self.sources.push(Source {
                path: path.to_owned(),
                points,
                color,
                mode: RenderMode::Points,
            });
        }
        Ok(n_points)
    }

    pub fn set_mode(&mut self, index: usize, mode: RenderMode) -> Result<(), String> {
        let n = self.len();
        let source = index
            .checked_sub(1)
            .and_then(|i| self.sources.get_mut(i))
            .ok_or_else(|| invalid_index(index, n))?;
        log::debug!("display {} as {:?}", source.file_name(), mode);
        source.mode = mode;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Source, String> {
        if index == 0 || index > self.len() {
            return Err(invalid_index(index, self.len()));
        }
        let source = self.sources.remove(index - 1);
        self.colors.release(source.color);
        log::debug!("removed file '{}'", source.file_name());
        Ok(source)
    }

    pub fn clear_all(&mut self) {
        self.sources.clear();
        self.colors.release_all();
    }

    /// Source at 1-based position `index`.
    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&Source> {
        index.checked_sub(1).and_then(|i| self.sources.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    #[cfg(test)]
    pub fn colors(&self) -> &ColorPool {
        &self.colors
    }

    /// Numbered "name (mode)" lines for the file list readout.
    pub fn file_list_text(&self, language: Language) -> String {
        if self.is_empty() {
            return language.t(TextId::NoFiles).to_owned();
        }
        self.sources
            .iter()
            .enumerate()
            .map(|(i, src)| {
                format!(
                    "{}. {} ({})",
                    i + 1,
                    src.file_name(),
                    language.t(src.mode.tag())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn invalid_index(index: usize, n: usize) -> String {
    format!("invalid index {index}, {n} file(s) loaded")
}
