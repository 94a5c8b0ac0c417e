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

use macroquad::prelude::*;

use crate::grid_view::GridView;
use crate::input::{Input, KeyboardAction};
use crate::map::{ChestTrapType, DoorType, MapCell, NpcType, StairsType};
use crate::position::Turn;
use crate::state::{AppState, Move};
use crate::view::dungeon_view::{DungeonView, turn_transition};
use crate::view::images::AssetLibrary;
use crate::view::pattern::sample_pattern;
use crate::view::slices::{SliceSelection, select_slices};

/// Cell values the editor can paint, cycled with Tab.
struct Brush {
    index: usize,
}

impl Brush {
    const COUNT: usize = 8;

    fn new() -> Self {
        Self { index: 0 }
    }

    fn cycle(&mut self) {
        self.index = (self.index + 1) % Self::COUNT;
    }

    fn cell(&self) -> MapCell {
        match self.index {
            0 => MapCell::Open,
            1 => MapCell::Wall,
            2 => MapCell::Door {
                door_type: DoorType::Normal,
                destination: String::new(),
            },
            3 => MapCell::Stairs {
                stairs_type: StairsType::Up,
                destination: String::new(),
            },
            4 => MapCell::Stairs {
                stairs_type: StairsType::Down,
                destination: String::new(),
            },
            5 => MapCell::Chest {
                trap_type: ChestTrapType::None,
                reward: String::new(),
            },
            6 => MapCell::Trap,
            _ => MapCell::Npc {
                npc_type: NpcType::Normal,
                name: String::new(),
                notes: String::new(),
            },
        }
    }

    fn label(&self) -> &'static str {
        match self.index {
            0 => "open",
            1 => "wall",
            2 => "door",
            3 => "stairs up",
            4 => "stairs down",
            5 => "chest",
            6 => "trap",
            _ => "npc",
        }
    }
}

fn facing_blocked_view(state: &AppState) -> bool {
    if !state.selected_cell.is_placed() || !state.current_map_valid {
        return false;
    }
    let pattern = sample_pattern(state.map(), state.selected_cell, state.camera_direction);
    matches!(select_slices(&pattern), SliceSelection::Blocked(_))
}

pub async fn run() {
    let library = AssetLibrary::load()
        .await
        .expect("Failed to load dungeon asset library");

    let mut state = AppState::new();
    let mut brush = Brush::new();
    let grid_view = GridView::new(vec2(10.0, 10.0));
    let mut dungeon_view = DungeonView::new(&library, vec2(478.0, 10.0));
    dungeon_view.update_palette(&state);

    loop {
        clear_background(BLACK);

        let input = Input::poll();

        if !dungeon_view.is_animating() {
            match input.keyboard_action {
                KeyboardAction::MoveForward => state.move_camera(Move::Forward),
                KeyboardAction::MoveBackward => state.move_camera(Move::Backward),
                KeyboardAction::TurnLeft | KeyboardAction::TurnRight => {
                    let turn = if input.keyboard_action == KeyboardAction::TurnLeft {
                        Turn::Left
                    } else {
                        Turn::Right
                    };
                    let blocked_before = facing_blocked_view(&state);
                    state.turn_camera(turn);
                    let blocked_after = facing_blocked_view(&state);
                    if state.selected_cell.is_placed() && state.current_map_valid {
                        dungeon_view
                            .play_transition(turn_transition(blocked_before, blocked_after));
                    }
                }
                KeyboardAction::CycleBrush => brush.cycle(),
                KeyboardAction::None => {}
            }

            if let Some(click) = input.click {
                if let Some(pos) = grid_view.cell_at_screen(click) {
                    state.paint_cell(pos, brush.cell());
                }
            }
        }

        if dungeon_view.tick() {
            // Transition finished: recomposite the static view.
            state.view_dirty = true;
        }

        if state.view_dirty && !dungeon_view.is_animating() {
            dungeon_view.update_view(&state, &library);
            state.view_dirty = false;
        }

        grid_view.draw(&state);
        dungeon_view.draw();
        draw_text(
            &format!("brush: {} (Tab cycles, click paints)", brush.label()),
            10.0,
            480.0,
            20.0,
            WHITE,
        );

        next_frame().await;
    }
}
