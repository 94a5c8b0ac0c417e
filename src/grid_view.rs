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

use bitflags::bitflags;
use macroquad::prelude::*;

use crate::map::{GRID_HEIGHT, GRID_WIDTH, MapCell, StairsType};
use crate::position::{Direction, Position};
use crate::state::AppState;

pub const CELL_SIZE: f32 = 32.0;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BorderFlags: u32 {
        const NONE   = 0;
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

/// Edges of a wall cell that butt against something passable; only those
/// get an outline so corridors read as rooms on the grid.
pub fn wall_borders(state: &AppState, pos: Position) -> BorderFlags {
    let mut borders = BorderFlags::NONE;
    let passable = |p: Position| {
        state
            .cell_at(p)
            .map(|cell| !matches!(cell, MapCell::Wall))
            .unwrap_or(false)
    };
    if passable(pos.offset(0, -1)) {
        borders |= BorderFlags::TOP;
    }
    if passable(pos.offset(0, 1)) {
        borders |= BorderFlags::BOTTOM;
    }
    if passable(pos.offset(-1, 0)) {
        borders |= BorderFlags::LEFT;
    }
    if passable(pos.offset(1, 0)) {
        borders |= BorderFlags::RIGHT;
    }
    borders
}

fn cell_color(cell: &MapCell) -> Color {
    match cell {
        MapCell::Wall => Color::from_rgba(28, 28, 48, 255),
        MapCell::Open => Color::from_rgba(90, 90, 120, 255),
        MapCell::Door { .. } => Color::from_rgba(170, 120, 40, 255),
        MapCell::Stairs {
            stairs_type: StairsType::Up,
            ..
        } => Color::from_rgba(80, 170, 80, 255),
        MapCell::Stairs {
            stairs_type: StairsType::Down,
            ..
        } => Color::from_rgba(40, 120, 40, 255),
        MapCell::Chest { .. } => Color::from_rgba(200, 180, 60, 255),
        MapCell::Trap => Color::from_rgba(150, 60, 60, 255),
        MapCell::Enemy { .. } => Color::from_rgba(190, 60, 120, 255),
        MapCell::Npc { .. } => Color::from_rgba(70, 140, 190, 255),
    }
}

pub struct GridView {
    pub offset: Vec2,
}

impl GridView {
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    pub fn cell_at_screen(&self, point: Vec2) -> Option<Position> {
        let x = ((point.x - self.offset.x) / CELL_SIZE).floor() as i32;
        let y = ((point.y - self.offset.y) / CELL_SIZE).floor() as i32;
        let pos = Position::new(x, y);
        crate::map::FloorMap::in_bounds(pos).then_some(pos)
    }

    pub fn draw(&self, state: &AppState) {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let pos = Position::new(x, y);
                let Some(cell) = state.cell_at(pos) else {
                    continue;
                };

                let px = self.offset.x + x as f32 * CELL_SIZE;
                let py = self.offset.y + y as f32 * CELL_SIZE;
                draw_rectangle(px, py, CELL_SIZE - 1.0, CELL_SIZE - 1.0, cell_color(cell));

                if matches!(cell, MapCell::Wall) {
                    self.draw_borders(px, py, wall_borders(state, pos));
                }
            }
        }

        for wall in &state.floor().illusory_walls {
            let px = self.offset.x + wall.cell1.x as f32 * CELL_SIZE;
            let py = self.offset.y + wall.cell1.y as f32 * CELL_SIZE;
            draw_rectangle_lines(px, py, CELL_SIZE, CELL_SIZE, 2.0, SKYBLUE);
        }

        if state.selected_cell.is_placed() {
            self.draw_camera_marker(state.selected_cell, state.camera_direction);
        }
    }

    fn draw_borders(&self, px: f32, py: f32, borders: BorderFlags) {
        let line = 2.0;
        let edge = CELL_SIZE - 1.0;
        if borders.contains(BorderFlags::TOP) {
            draw_line(px, py, px + edge, py, line, LIGHTGRAY);
        }
        if borders.contains(BorderFlags::BOTTOM) {
            draw_line(px, py + edge, px + edge, py + edge, line, LIGHTGRAY);
        }
        if borders.contains(BorderFlags::LEFT) {
            draw_line(px, py, px, py + edge, line, LIGHTGRAY);
        }
        if borders.contains(BorderFlags::RIGHT) {
            draw_line(px + edge, py, px + edge, py + edge, line, LIGHTGRAY);
        }
    }

    fn draw_camera_marker(&self, pos: Position, facing: Direction) {
        let cx = self.offset.x + pos.x as f32 * CELL_SIZE + CELL_SIZE / 2.0;
        let cy = self.offset.y + pos.y as f32 * CELL_SIZE + CELL_SIZE / 2.0;
        let half = CELL_SIZE / 3.0;

        let (tip, base_a, base_b) = match facing {
            Direction::North => (
                vec2(cx, cy - half),
                vec2(cx - half, cy + half),
                vec2(cx + half, cy + half),
            ),
            Direction::South => (
                vec2(cx, cy + half),
                vec2(cx - half, cy - half),
                vec2(cx + half, cy - half),
            ),
            Direction::East => (
                vec2(cx + half, cy),
                vec2(cx - half, cy - half),
                vec2(cx - half, cy + half),
            ),
            Direction::West => (
                vec2(cx - half, cy),
                vec2(cx + half, cy - half),
                vec2(cx + half, cy + half),
            ),
        };
        draw_triangle(tip, base_a, base_b, YELLOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_next_to_corridor_gets_an_edge() {
        let state = AppState::new();
        // (4, 8) is the wall west of the starting camera cell (5, 8).
        let borders = wall_borders(&state, Position::new(4, 8));
        assert!(borders.contains(BorderFlags::RIGHT));
        assert!(!borders.contains(BorderFlags::LEFT));
    }

    #[test]
    fn screen_to_cell_round_trips_inside_the_grid() {
        let view = GridView::new(vec2(10.0, 20.0));
        assert_eq!(
            view.cell_at_screen(vec2(10.0, 20.0)),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            view.cell_at_screen(vec2(10.0 + 13.5 * CELL_SIZE, 20.0 + 13.5 * CELL_SIZE)),
            Some(Position::new(13, 13))
        );
        assert_eq!(view.cell_at_screen(vec2(0.0, 0.0)), None);
    }
}
