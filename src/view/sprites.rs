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

use crate::view::images::AssetLibrary;

/// Categories whose frames form one root animation instead of the
/// sequence/depth layout.
const ROOT_ANIMATION_CATEGORIES: &[&str] = &[
    "cross-passage-turn",
    "wall-to-passage-turn",
    "wall-to-wall-turn",
];

/// Categories consumed directly as static sprites elsewhere.
const STATIC_CATEGORIES: &[&str] = &["dungeon", "selection", "map-elements"];

/// An animation-capable slice handle. Mirroring is a draw-time horizontal
/// flip over the same textures, so the left and right sets share texture
/// memory.
#[derive(Clone)]
pub struct SliceSprite {
    frames: Vec<Texture2D>,
    mirrored: bool,
}

impl SliceSprite {
    fn new(frames: Vec<Texture2D>, mirrored: bool) -> Self {
        Self { frames, mirrored }
    }

    pub fn draw(&self, x: f32, y: f32, frame: usize) {
        let frame = frame.min(self.frames.len().saturating_sub(1));
        let Some(texture) = self.frames.get(frame) else {
            return;
        };
        draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                flip_x: self.mirrored,
                ..Default::default()
            },
        );
    }
}

/// One orientation's worth of assembled sprites: root animations keyed by
/// category, sliced sprites keyed by category / sequence / depth.
pub struct SpriteSet {
    root: HashMap<String, SliceSprite>,
    sliced: HashMap<String, HashMap<String, HashMap<u8, SliceSprite>>>,
}

impl SpriteSet {
    pub fn slice(&self, category: &str, sequence: &str, depth: u8) -> Option<&SliceSprite> {
        self.sliced.get(category)?.get(sequence)?.get(&depth)
    }

    pub fn root_animation(&self, category: &str) -> Option<&SliceSprite> {
        self.root.get(category)
    }
}

/// Splits `<frame>_<sequence>_<depth>` into its parts; keys that do not
/// match the layout are skipped by assembly.
fn parse_slice_key(key: &str) -> Option<(u32, &str, u8)> {
    let (frame_part, rest) = key.split_once('_')?;
    let (sequence, depth_part) = rest.rsplit_once('_')?;
    let frame = frame_part.parse().ok()?;
    let depth = depth_part.parse().ok()?;
    if sequence.is_empty() {
        return None;
    }
    Some((frame, sequence, depth))
}

/// Groups a category's keys into sequence/depth frame lists, frames in
/// frame-number order.
fn group_slice_keys<'a>(
    keys: impl Iterator<Item = &'a str>,
) -> BTreeMap<(String, u8), Vec<(u32, &'a str)>> {
    let mut grouped: BTreeMap<(String, u8), Vec<(u32, &'a str)>> = BTreeMap::new();
    for key in keys {
        if let Some((frame, sequence, depth)) = parse_slice_key(key) {
            grouped
                .entry((sequence.to_string(), depth))
                .or_default()
                .push((frame, key));
        }
    }
    for frames in grouped.values_mut() {
        frames.sort_by_key(|(frame, _)| *frame);
    }
    grouped
}

/// Builds one orientation of the sprite library. Call twice, once
/// unmirrored for left placements and once mirrored for right placements.
pub fn assemble_sprites(library: &AssetLibrary, mirrored: bool) -> SpriteSet {
    let mut root = HashMap::new();
    let mut sliced: HashMap<String, HashMap<String, HashMap<u8, SliceSprite>>> = HashMap::new();

    for category in ROOT_ANIMATION_CATEGORIES {
        if let Some(entries) = library.category(category) {
            let frames: Vec<Texture2D> = entries.values().cloned().collect();
            root.insert(category.to_string(), SliceSprite::new(frames, mirrored));
        }
    }

    for category in library.categories() {
        if ROOT_ANIMATION_CATEGORIES.contains(&category.as_str())
            || STATIC_CATEGORIES.contains(&category.as_str())
        {
            continue;
        }
        let Some(entries) = library.category(category) else {
            continue;
        };

        let by_sequence = sliced.entry(category.clone()).or_default();
        for ((sequence, depth), frames) in group_slice_keys(entries.keys().map(String::as_str)) {
            let textures: Vec<Texture2D> = frames
                .iter()
                .filter_map(|(_, key)| entries.get(*key).cloned())
                .collect();
            by_sequence
                .entry(sequence)
                .or_default()
                .insert(depth, SliceSprite::new(textures, mirrored));
        }
    }

    SpriteSet { root, sliced }
}
