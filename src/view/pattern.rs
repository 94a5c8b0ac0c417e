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

use crate::map::{DoorType, FloorMap, MapCell, NpcType, StairsType};
use crate::position::{Direction, Position};

/// Coarse structural class a map cell reduces to for corridor matching.
/// Derived fresh per render, never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellClass {
    Wall,
    Open,
    Door,
    DungeonDoor,
    MagicDoor,
    StairsUp,
    StairsDown,
    NpcRoom,
}

/// Total over every cell variant; off-grid coordinates are folded to wall
/// at the sampling site.
pub fn classify(cell: &MapCell) -> CellClass {
    match cell {
        MapCell::Open | MapCell::Chest { .. } | MapCell::Enemy { .. } | MapCell::Trap => {
            CellClass::Open
        }
        MapCell::Npc { npc_type, .. } => match npc_type {
            NpcType::Room => CellClass::NpcRoom,
            NpcType::Normal => CellClass::Open,
        },
        MapCell::Stairs { stairs_type, .. } => match stairs_type {
            StairsType::Up => CellClass::StairsUp,
            StairsType::Down => CellClass::StairsDown,
        },
        MapCell::Door { door_type, .. } => match door_type {
            DoorType::Normal => CellClass::Door,
            DoorType::MagicDoor => CellClass::MagicDoor,
            DoorType::DungeonDoor => CellClass::DungeonDoor,
        },
        MapCell::Wall => CellClass::Wall,
    }
}

/// The 4x3 window of classes ahead of the camera. Row 3 is depth 1 (the
/// cell directly ahead), row 0 is depth 4; columns are screen left,
/// center, screen right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pattern(pub [[CellClass; 3]; 4]);

impl Pattern {
    pub fn at(&self, row: usize, col: usize) -> CellClass {
        self.0[row][col]
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.0[row][col] == CellClass::Open
    }
}

fn class_at(map: &FloorMap, pos: Position) -> CellClass {
    map.cell(pos).map(classify).unwrap_or(CellClass::Wall)
}

/// Reads the bounded forward window: four steps out from the camera, three
/// cells per step. Edge reads beyond the grid classify as wall so the
/// window is always fully populated.
pub fn sample_pattern(map: &FloorMap, camera: Position, facing: Direction) -> Pattern {
    let (fx, fy) = facing.forward();
    let (lx, ly) = facing.left();
    let (rx, ry) = facing.right();

    let mut rows = [[CellClass::Wall; 3]; 4];
    for depth in 1..=4i32 {
        let center = camera.offset(fx * depth, fy * depth);
        let row = &mut rows[(4 - depth) as usize];
        row[0] = class_at(map, center.offset(lx, ly));
        row[1] = class_at(map, center);
        row[2] = class_at(map, center.offset(rx, ry));
    }

    Pattern(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{ChestTrapType, GRID_HEIGHT, GRID_WIDTH};

    fn all_cell_variants() -> Vec<MapCell> {
        let mut cells = vec![MapCell::Open, MapCell::Wall, MapCell::Trap];
        for door_type in [DoorType::Normal, DoorType::DungeonDoor, DoorType::MagicDoor] {
            cells.push(MapCell::Door {
                door_type,
                destination: "B1".to_string(),
            });
        }
        for stairs_type in [StairsType::Up, StairsType::Down] {
            cells.push(MapCell::Stairs {
                stairs_type,
                destination: "B2".to_string(),
            });
        }
        for trap_type in [ChestTrapType::None, ChestTrapType::Spear, ChestTrapType::Bomb] {
            cells.push(MapCell::Chest {
                trap_type,
                reward: "Laconian Pot".to_string(),
            });
        }
        cells.push(MapCell::Enemy {
            enemy_type: "Blue Slime".to_string(),
            reward: String::new(),
        });
        for npc_type in [NpcType::Normal, NpcType::Room] {
            cells.push(MapCell::Npc {
                npc_type,
                name: "Hermit".to_string(),
                notes: String::new(),
            });
        }
        cells
    }

    #[test]
    fn classify_covers_every_variant() {
        for cell in all_cell_variants() {
            // Total: no variant may panic, and each lands on one class.
            let _ = classify(&cell);
        }
    }

    #[test]
    fn classify_maps_walkover_cells_to_open() {
        assert_eq!(classify(&MapCell::Open), CellClass::Open);
        assert_eq!(classify(&MapCell::Trap), CellClass::Open);
        assert_eq!(
            classify(&MapCell::Chest {
                trap_type: ChestTrapType::Bomb,
                reward: String::new()
            }),
            CellClass::Open
        );
        assert_eq!(
            classify(&MapCell::Enemy {
                enemy_type: "Sworm".to_string(),
                reward: String::new()
            }),
            CellClass::Open
        );
        assert_eq!(
            classify(&MapCell::Npc {
                npc_type: NpcType::Normal,
                name: String::new(),
                notes: String::new()
            }),
            CellClass::Open
        );
        assert_eq!(
            classify(&MapCell::Npc {
                npc_type: NpcType::Room,
                name: String::new(),
                notes: String::new()
            }),
            CellClass::NpcRoom
        );
    }

    #[test]
    fn out_of_bounds_classifies_as_wall() {
        let map = FloorMap::new();
        for pos in [
            Position::new(-1, -1),
            Position::new(GRID_WIDTH, 0),
            Position::new(0, GRID_HEIGHT),
            Position::new(100, 100),
        ] {
            assert_eq!(class_at(&map, pos), CellClass::Wall);
        }
    }

    #[test]
    fn sampler_rows_run_far_to_near() {
        // Open corridor straight ahead with a door at depth 3.
        let mut map = FloorMap::new();
        map.set_cell(Position::new(5, 7), MapCell::Open);
        map.set_cell(Position::new(5, 6), MapCell::Open);
        map.set_cell(
            Position::new(5, 5),
            MapCell::Door {
                door_type: DoorType::Normal,
                destination: String::new(),
            },
        );

        let pattern = sample_pattern(&map, Position::new(5, 8), Direction::North);
        assert_eq!(pattern.at(3, 1), CellClass::Open); // depth 1
        assert_eq!(pattern.at(2, 1), CellClass::Open); // depth 2
        assert_eq!(pattern.at(1, 1), CellClass::Door); // depth 3
        assert_eq!(pattern.at(0, 1), CellClass::Wall); // depth 4
    }

    #[test]
    fn sampler_keeps_screen_left_on_the_cameras_left() {
        // One open cell west of the forward cell. Facing north it must land
        // in the left column, facing south in the right column.
        let mut map = FloorMap::new();
        map.set_cell(Position::new(4, 7), MapCell::Open);

        let north = sample_pattern(&map, Position::new(5, 8), Direction::North);
        assert_eq!(north.at(3, 0), CellClass::Open);
        assert_eq!(north.at(3, 2), CellClass::Wall);

        let south = sample_pattern(&map, Position::new(5, 6), Direction::South);
        assert_eq!(south.at(3, 0), CellClass::Wall);
        assert_eq!(south.at(3, 2), CellClass::Open);
    }

    #[test]
    fn sampler_near_map_edge_fills_with_wall() {
        let map = FloorMap::new();
        let pattern = sample_pattern(&map, Position::new(0, 0), Direction::North);
        assert_eq!(pattern, Pattern([[CellClass::Wall; 3]; 4]));
    }

    #[test]
    fn sampling_is_deterministic() {
        let map = crate::map::starting_map();
        let a = sample_pattern(&map, Position::new(5, 8), Direction::North);
        let b = sample_pattern(&map, Position::new(5, 8), Direction::North);
        assert_eq!(a, b);
    }
}
