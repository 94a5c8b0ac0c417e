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

use crate::dungeon::{Dungeon, IllusoryWall, MapFloor};
use crate::map::{FloorMap, GRID_HEIGHT, GRID_WIDTH, MapCell};
use crate::position::{Direction, Position, Turn};
use crate::view::pattern::{CellClass, classify};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    Forward,
    Backward,
}

/// Single owner of everything the editor and the corridor viewer share.
/// The editor mutates it through the paint API, the viewer through the
/// camera API; the rendering path itself only reads. Mutations raise
/// `view_dirty` instead of triggering redraws implicitly.
pub struct AppState {
    pub dungeons: Vec<Dungeon>,
    pub current_dungeon: usize,
    pub current_floor: usize,
    pub selected_cell: Position,
    pub camera_direction: Direction,
    pub current_map_valid: bool,
    pub view_dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self {
            dungeons: vec![Dungeon::starting("My First Dungeon")],
            current_dungeon: 0,
            current_floor: 0,
            selected_cell: Position::new(5, 8),
            camera_direction: Direction::North,
            current_map_valid: true,
            view_dirty: true,
        };
        state.revalidate_map();
        state
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeons[self.current_dungeon]
    }

    pub fn floor(&self) -> &MapFloor {
        &self.dungeon().floors[self.current_floor]
    }

    pub fn map(&self) -> &FloorMap {
        &self.floor().map
    }

    fn map_mut(&mut self) -> &mut FloorMap {
        let dungeon = self.current_dungeon;
        let floor = self.current_floor;
        &mut self.dungeons[dungeon].floors[floor].map
    }

    pub fn cell_at(&self, pos: Position) -> Option<&MapCell> {
        self.map().cell(pos)
    }

    // ---- editor surface -------------------------------------------------

    pub fn paint_cell(&mut self, pos: Position, cell: MapCell) -> bool {
        let painted = self.map_mut().set_cell(pos, cell);
        if painted {
            self.revalidate_map();
            self.view_dirty = true;
        }
        painted
    }

    pub fn add_illusory_wall(&mut self, wall: IllusoryWall) {
        let dungeon = self.current_dungeon;
        let floor = self.current_floor;
        self.dungeons[dungeon].floors[floor].illusory_walls.push(wall);
    }

    pub fn remove_illusory_wall(&mut self, at: Position) {
        let dungeon = self.current_dungeon;
        let floor = self.current_floor;
        self.dungeons[dungeon].floors[floor]
            .illusory_walls
            .retain(|wall| wall.cell1 != at && wall.cell2 != at);
    }

    /// Structural check behind the no-signal state: a map authored with
    /// three or more open corner cells is treated as broken.
    fn revalidate_map(&mut self) {
        let corners = [
            Position::new(0, 0),
            Position::new(GRID_WIDTH - 1, 0),
            Position::new(0, GRID_HEIGHT - 1),
            Position::new(GRID_WIDTH - 1, GRID_HEIGHT - 1),
        ];
        let open_corners = corners
            .iter()
            .filter(|pos| {
                self.cell_at(**pos)
                    .map(|cell| classify(cell) == CellClass::Open)
                    .unwrap_or(false)
            })
            .count();
        self.current_map_valid = open_corners < 3;
    }

    // ---- camera surface -------------------------------------------------

    pub fn turn_camera(&mut self, turn: Turn) {
        self.camera_direction = self.camera_direction.turned(turn);
        self.view_dirty = true;
    }

    /// Steps the camera one cell along (or against) its facing. Doors are
    /// only passable when the cell two steps out, past the door, is open;
    /// entering one lands past it. Illegal moves are dropped silently.
    pub fn move_camera(&mut self, movement: Move) {
        if !self.selected_cell.is_placed() {
            return;
        }

        let sign = match movement {
            Move::Forward => 1,
            Move::Backward => -1,
        };
        let (dx, dy) = self.camera_direction.forward();
        let next = self.selected_cell.offset(dx * sign, dy * sign);
        let past_door = self.selected_cell.offset(dx * 2 * sign, dy * 2 * sign);

        let target = match self.cell_at(next) {
            Some(cell) if cell.is_walkable() => next,
            Some(MapCell::Door { .. }) => {
                match self.cell_at(past_door) {
                    Some(MapCell::Open) => past_door,
                    _ => return,
                }
            }
            _ => return,
        };

        self.selected_cell = target;
        self.view_dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::DoorType;

    fn door() -> MapCell {
        MapCell::Door {
            door_type: DoorType::Normal,
            destination: String::new(),
        }
    }

    fn state_with_column(cells: &[(i32, MapCell)]) -> AppState {
        // Camera at (5, 8) facing north; callers lay out the column ahead.
        let mut state = AppState::new();
        for (y, cell) in cells {
            state.paint_cell(Position::new(5, *y), cell.clone());
        }
        state
    }

    #[test]
    fn moves_forward_into_open_cell() {
        let mut state = AppState::new();
        state.move_camera(Move::Forward);
        assert_eq!(state.selected_cell, Position::new(5, 7));
    }

    #[test]
    fn rejects_move_into_wall() {
        let mut state = state_with_column(&[(7, MapCell::Wall)]);
        state.move_camera(Move::Forward);
        assert_eq!(state.selected_cell, Position::new(5, 8));
    }

    #[test]
    fn door_with_open_far_side_advances_two_cells() {
        let mut state = state_with_column(&[(7, door()), (6, MapCell::Open)]);
        state.move_camera(Move::Forward);
        assert_eq!(state.selected_cell, Position::new(5, 6));
    }

    #[test]
    fn door_backed_by_wall_blocks_movement() {
        let mut state = state_with_column(&[(7, door()), (6, MapCell::Wall)]);
        state.move_camera(Move::Forward);
        assert_eq!(state.selected_cell, Position::new(5, 8));
    }

    #[test]
    fn backward_movement_respects_door_rule() {
        let mut state = AppState::new();
        state.paint_cell(Position::new(5, 9), door());
        state.paint_cell(Position::new(5, 10), MapCell::Open);
        state.move_camera(Move::Backward);
        assert_eq!(state.selected_cell, Position::new(5, 10));
    }

    #[test]
    fn off_grid_target_counts_as_wall() {
        let mut state = AppState::new();
        state.selected_cell = Position::new(5, 0);
        state.paint_cell(Position::new(5, 0), MapCell::Open);
        state.move_camera(Move::Forward);
        assert_eq!(state.selected_cell, Position::new(5, 0));
    }

    #[test]
    fn unplaced_camera_never_moves() {
        let mut state = AppState::new();
        state.selected_cell = crate::position::POSITION_UNPLACED;
        state.move_camera(Move::Forward);
        assert!(!state.selected_cell.is_placed());
    }

    #[test]
    fn turning_cycles_directions() {
        let mut state = AppState::new();
        state.turn_camera(Turn::Right);
        assert_eq!(state.camera_direction, Direction::East);
        state.turn_camera(Turn::Left);
        assert_eq!(state.camera_direction, Direction::North);
    }

    #[test]
    fn three_open_corners_invalidate_map() {
        let mut state = AppState::new();
        state.paint_cell(Position::new(0, 0), MapCell::Open);
        state.paint_cell(Position::new(13, 0), MapCell::Open);
        assert!(state.current_map_valid);
        state.paint_cell(Position::new(0, 13), MapCell::Open);
        assert!(!state.current_map_valid);
    }

    #[test]
    fn paint_round_trip_restores_walkability() {
        let mut state = AppState::new();
        let pos = Position::new(2, 2);
        let before = state.cell_at(pos).cloned();
        state.paint_cell(pos, MapCell::Open);
        state.paint_cell(pos, MapCell::Wall);
        assert_eq!(state.cell_at(pos).cloned(), before);
    }
}
