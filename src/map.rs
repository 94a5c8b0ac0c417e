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

use serde::{Deserialize, Serialize};

use crate::position::Position;

pub const GRID_WIDTH: i32 = 14;
pub const GRID_HEIGHT: i32 = 14;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoorType {
    Normal,
    DungeonDoor,
    MagicDoor,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StairsType {
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChestTrapType {
    None,
    Spear,
    Bomb,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NpcType {
    Normal,
    Room,
}

/// One cell of a dungeon floor. Exactly one variant per cell; the payload
/// fields only exist for their variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MapCell {
    Open,
    Wall,
    Door {
        door_type: DoorType,
        destination: String,
    },
    Stairs {
        stairs_type: StairsType,
        destination: String,
    },
    Chest {
        trap_type: ChestTrapType,
        reward: String,
    },
    Trap,
    Enemy {
        enemy_type: String,
        reward: String,
    },
    Npc {
        npc_type: NpcType,
        name: String,
        notes: String,
    },
}

impl MapCell {
    /// Cells the camera may stand on. Doors are handled separately since
    /// passing one depends on the cell beyond it.
    pub fn is_walkable(&self) -> bool {
        match self {
            MapCell::Open | MapCell::Chest { .. } | MapCell::Enemy { .. } => true,
            MapCell::Npc { npc_type, .. } => *npc_type == NpcType::Normal,
            _ => false,
        }
    }
}

/// Fixed 14x14 grid, row-major (row = y, column = x). A fresh map is all
/// wall; corridors are carved by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorMap {
    rows: Vec<Vec<MapCell>>,
}

impl FloorMap {
    pub fn new() -> Self {
        let rows = (0..GRID_HEIGHT)
            .map(|_| (0..GRID_WIDTH).map(|_| MapCell::Wall).collect())
            .collect();
        Self { rows }
    }

    pub fn cell(&self, pos: Position) -> Option<&MapCell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.rows
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
    }

    pub fn set_cell(&mut self, pos: Position, cell: MapCell) -> bool {
        if pos.x < 0 || pos.y < 0 || pos.x >= GRID_WIDTH || pos.y >= GRID_HEIGHT {
            return false;
        }
        self.rows[pos.y as usize][pos.x as usize] = cell;
        true
    }

    pub fn in_bounds(pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < GRID_WIDTH && pos.y < GRID_HEIGHT
    }
}

impl Default for FloorMap {
    fn default() -> Self {
        Self::new()
    }
}

/// The demo floor the application boots with: two parallel north-south
/// corridors at columns 5 and 8, bridged at rows 5 and 8.
pub fn starting_map() -> FloorMap {
    let mut map = FloorMap::new();
    let open = [
        (5, 8),
        (5, 7),
        (5, 6),
        (5, 5),
        (6, 5),
        (7, 5),
        (6, 8),
        (7, 8),
        (8, 8),
        (8, 7),
        (8, 6),
        (8, 5),
    ];
    for (x, y) in open {
        map.set_cell(Position::new(x, y), MapCell::Open);
    }
    map
}
