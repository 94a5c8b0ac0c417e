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

//! Translates slice selections into on-screen sprite placements. Slice
//! x-positions are a fixed lookup keyed by depth and side, matching the
//! hand-authored perspective art; nothing here computes geometry.

use macroquad::prelude::*;

use crate::graphics::graphics_manager::GraphicsManager;
use crate::state::AppState;
use crate::view::images::AssetLibrary;
use crate::view::pattern::sample_pattern;
use crate::view::slices::{Side, SliceSelection, select_slices};
use crate::view::sprites::{SliceSprite, SpriteSet, assemble_sprites};

pub const VIEW_WIDTH: f32 = 288.0;
pub const VIEW_HEIGHT: f32 = 224.0;

const ANIMATION_INTERVAL: u32 = 4;
const ANIMATION_LAST_FRAME: u32 = 5;

pub fn left_slice_x(depth: u8) -> f32 {
    match depth {
        1 => 0.0,
        2 => 64.0,
        3 => 88.0,
        _ => 104.0,
    }
}

pub fn right_slice_x(depth: u8) -> f32 {
    match depth {
        1 => 256.0,
        2 => 192.0,
        3 => 168.0,
        _ => 152.0,
    }
}

/// Which transition animation a turn plays, keyed by what the camera faced
/// before and after.
pub fn turn_transition(faced_wall_before: bool, faces_wall_after: bool) -> &'static str {
    match (faced_wall_before, faces_wall_after) {
        (true, true) => "wall-to-wall-turn",
        (false, false) => "cross-passage-turn",
        _ => "wall-to-passage-turn",
    }
}

enum Placed {
    Static(Texture2D),
    Slice { sprite: SliceSprite, x: f32 },
}

pub struct DungeonView {
    sprites_left: SpriteSet,
    sprites_right: SpriteSet,
    placed: Vec<Placed>,
    graphics: GraphicsManager,
    pub offset: Vec2,

    animating: bool,
    animation_frame: u32,
    animation_tick: u32,
}

impl DungeonView {
    pub fn new(library: &AssetLibrary, offset: Vec2) -> Self {
        Self {
            sprites_left: assemble_sprites(library, false),
            sprites_right: assemble_sprites(library, true),
            placed: Vec::new(),
            graphics: GraphicsManager::new(),
            offset,
            animating: false,
            animation_frame: 0,
            animation_tick: 0,
        }
    }

    /// Recomputes the full placement list from current state. Clears
    /// whatever was shown before; calling twice with unchanged state places
    /// the same sprites again.
    pub fn update_view(&mut self, state: &AppState, library: &AssetLibrary) {
        self.dump_sprites();

        if !state.selected_cell.is_placed() || !state.current_map_valid {
            self.place_static(library, "no-signal");
            return;
        }

        let pattern = sample_pattern(state.map(), state.selected_cell, state.camera_direction);
        match select_slices(&pattern) {
            SliceSelection::Blocked(tag) => self.place_static(library, tag.asset_key()),
            SliceSelection::Corridor(directives) => {
                for d in directives {
                    let category = d.category.asset_key();
                    let sequence = d.sequence.asset_key();
                    match d.side {
                        Side::Left => self.place_slice(category, sequence, d.depth, false),
                        Side::Right => self.place_slice(category, sequence, d.depth, true),
                        Side::Full => {
                            self.place_slice(category, sequence, d.depth, false);
                            self.place_slice(category, sequence, d.depth, true);
                        }
                    }
                }
            }
        }
    }

    /// Applies the current dungeon's palette pair to the replacement
    /// material. The tier crossing (walls entry supplying floor tiers and
    /// vice versa) matches the original renderer.
    pub fn update_palette(&mut self, state: &AppState) {
        let palettes = state.dungeon().palettes;
        let floors = palettes.walls.colors().floors;
        let walls = palettes.floors.colors().walls;
        self.graphics.set_palette_targets(walls, floors);
    }

    /// Plays one of the turn transition animations, replacing the static
    /// view until the animation runs out.
    pub fn play_transition(&mut self, category: &str) {
        let Some(sprite) = self.sprites_left.root_animation(category) else {
            warn!("no transition animation for {}", category);
            return;
        };
        let sprite = sprite.clone();
        self.dump_sprites();
        self.placed.push(Placed::Slice { sprite, x: 0.0 });
        self.animating = true;
    }

    /// One cooperative animation step per render frame. Returns true on the
    /// tick the transition finishes so the caller can recomposite.
    pub fn tick(&mut self) -> bool {
        if !self.animating {
            return false;
        }

        self.animation_tick += 1;
        if self.animation_tick >= ANIMATION_INTERVAL {
            self.animation_tick = 0;
            self.animation_frame += 1;
            if self.animation_frame == ANIMATION_LAST_FRAME {
                self.stop_animation();
                return true;
            }
        }
        false
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn draw(&self) {
        draw_rectangle(self.offset.x, self.offset.y, VIEW_WIDTH, VIEW_HEIGHT, BLACK);

        gl_use_material(self.graphics.get_color_replace_material());

        for placed in &self.placed {
            match placed {
                Placed::Static(texture) => {
                    draw_texture(texture, self.offset.x, self.offset.y, WHITE);
                }
                Placed::Slice { sprite, x } => {
                    let frame = if self.animating {
                        self.animation_frame as usize
                    } else {
                        0
                    };
                    sprite.draw(self.offset.x + x, self.offset.y, frame);
                }
            }
        }

        gl_use_default_material();
    }

    fn place_static(&mut self, library: &AssetLibrary, key: &str) {
        let texture = library
            .get("dungeon", key)
            .unwrap_or_else(|| panic!("asset library missing dungeon/{}", key));
        self.placed.push(Placed::Static(texture.clone()));
    }

    fn place_slice(&mut self, category: &str, sequence: &str, depth: u8, right: bool) {
        let (set, x) = if right {
            (&self.sprites_right, right_slice_x(depth))
        } else {
            (&self.sprites_left, left_slice_x(depth))
        };
        let sprite = set.slice(category, sequence, depth).unwrap_or_else(|| {
            panic!(
                "sprite library missing {}/{} depth {}",
                category, sequence, depth
            )
        });
        self.placed.push(Placed::Slice {
            sprite: sprite.clone(),
            x,
        });
    }

    fn dump_sprites(&mut self) {
        self.placed.clear();
        self.stop_animation();
    }

    fn stop_animation(&mut self) {
        self.animating = false;
        self.animation_frame = 0;
        self.animation_tick = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_offsets_match_the_authored_positions() {
        assert_eq!(left_slice_x(1), 0.0);
        assert_eq!(left_slice_x(2), 64.0);
        assert_eq!(left_slice_x(3), 88.0);
        assert_eq!(left_slice_x(4), 104.0);
        assert_eq!(left_slice_x(6), 104.0);
    }

    #[test]
    fn right_offsets_match_the_authored_positions() {
        assert_eq!(right_slice_x(1), 256.0);
        assert_eq!(right_slice_x(2), 192.0);
        assert_eq!(right_slice_x(3), 168.0);
        assert_eq!(right_slice_x(4), 152.0);
        assert_eq!(right_slice_x(5), 152.0);
    }

    #[test]
    fn turn_transitions_cover_all_facings() {
        assert_eq!(turn_transition(true, true), "wall-to-wall-turn");
        assert_eq!(turn_transition(false, false), "cross-passage-turn");
        assert_eq!(turn_transition(true, false), "wall-to-passage-turn");
        assert_eq!(turn_transition(false, true), "wall-to-passage-turn");
    }
}
