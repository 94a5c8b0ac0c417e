// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::{BTreeMap, HashMap};

use macroquad::prelude::*;
use thiserror::Error;

const MANIFEST_PATH: &str = "assets/images/dungeon/manifest.json";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: String,
        source: macroquad::Error,
    },
}

/// Flat keyed texture library: category -> item key -> texture. Loaded once
/// before the corridor view is constructed; lookups afterwards are
/// synchronous and infallible at the happy path.
pub struct AssetLibrary {
    categories: HashMap<String, BTreeMap<String, Texture2D>>,
}

impl AssetLibrary {
    /// Loads every texture named by the manifest. The manifest replaces the
    /// build-time directory glob of the original asset pipeline; keys map
    /// to `assets/images/dungeon/<category>/<key>.png`.
    pub async fn load() -> Result<Self, AssetError> {
        let manifest_text = std::fs::read_to_string(MANIFEST_PATH)?;
        let manifest: BTreeMap<String, Vec<String>> = serde_json::from_str(&manifest_text)?;

        let mut categories: HashMap<String, BTreeMap<String, Texture2D>> = HashMap::new();
        let mut count = 0usize;
        for (category, keys) in manifest {
            let entry = categories.entry(category.clone()).or_default();
            for key in keys {
                let path = format!("assets/images/dungeon/{}/{}.png", category, key);
                let texture =
                    load_texture(&path)
                        .await
                        .map_err(|source| AssetError::Texture {
                            path: path.clone(),
                            source,
                        })?;
                texture.set_filter(FilterMode::Nearest);
                entry.insert(key, texture);
                count += 1;
            }
        }

        info!("loaded {} dungeon textures", count);
        Ok(Self { categories })
    }

    pub fn get(&self, category: &str, key: &str) -> Option<&Texture2D> {
        self.categories.get(category)?.get(key)
    }

    /// Keys come back in sorted order, which is what frame assembly relies
    /// on.
    pub fn category(&self, category: &str) -> Option<&BTreeMap<String, Texture2D>> {
        self.categories.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &String> {
        self.categories.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::slices::EMITTABLE_SLICES;
    use std::path::Path;

    fn manifest() -> BTreeMap<String, Vec<String>> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(MANIFEST_PATH);
        let text = std::fs::read_to_string(path).expect("manifest readable");
        serde_json::from_str(&text).expect("manifest parses")
    }

    #[test]
    fn manifest_covers_every_emittable_slice() {
        let manifest = manifest();
        for (category, sequence, depth) in EMITTABLE_SLICES {
            let keys = manifest
                .get(category.asset_key())
                .unwrap_or_else(|| panic!("missing category {}", category.asset_key()));
            let suffix = format!("_{}_{}", sequence.asset_key(), depth);
            assert!(
                keys.iter().any(|key| key.ends_with(&suffix)),
                "no frames for {} {} depth {}",
                category.asset_key(),
                sequence.asset_key(),
                depth
            );
        }
    }

    #[test]
    fn manifest_covers_full_screen_sprites() {
        let manifest = manifest();
        let dungeon = manifest.get("dungeon").expect("dungeon category");
        for key in [
            "wall",
            "stairs-up",
            "stairs-down",
            "door",
            "magic-door",
            "dungeon-door",
            "no-signal",
        ] {
            assert!(dungeon.contains(&key.to_string()), "missing dungeon/{}", key);
        }
    }

    #[test]
    fn manifest_has_turn_transition_animations() {
        let manifest = manifest();
        for category in [
            "cross-passage-turn",
            "wall-to-passage-turn",
            "wall-to-wall-turn",
        ] {
            let keys = manifest.get(category).expect("turn category");
            assert!(!keys.is_empty());
        }
    }
}
