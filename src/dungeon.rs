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

use crate::map::{FloorMap, starting_map};
use crate::position::Position;

/// Four shade tiers, darkest first, as packed 0xRRGGBB.
pub type ColorTiers = [u32; 4];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Green,
    DarkBlue,
    Blue,
    Purple,
    Yellow,
    Golden,
    BlackBlue,
    LightBlue,
    Red,
    Orange,
    DarkGreen,
}

pub struct PaletteColors {
    pub walls: ColorTiers,
    pub floors: ColorTiers,
}

impl Palette {
    pub fn colors(&self) -> PaletteColors {
        match self {
            Palette::Green => PaletteColors {
                walls: [0x005554, 0x00AA55, 0x00FF55, 0xAAFFA9],
                floors: [0x005554, 0x55AA54, 0x55FF54, 0xAAFFA9],
            },
            Palette::DarkBlue => PaletteColors {
                walls: [0x000055, 0x0000FF, 0x0055FE, 0x00AAFE],
                floors: [0x000055, 0x000055, 0x0000A9, 0x0000FF],
            },
            Palette::Blue => PaletteColors {
                walls: [0x0000A9, 0x0055FE, 0x00AAFE, 0x00FFFE],
                floors: [0x0000A9, 0x0000FF, 0x0055FE, 0x00AAFE],
            },
            Palette::Purple => PaletteColors {
                walls: [0x000055, 0x5555AA, 0xAAAAAA, 0xFFFFFF],
                floors: [0x000055, 0x0000A9, 0x5555AA, 0xAAAAAA],
            },
            Palette::Yellow => PaletteColors {
                walls: [0xAA5500, 0xFFAA00, 0xFFFF00, 0xFFFFFF],
                floors: [0xAA5500, 0xFFAA00, 0xFFFF00, 0xFFFFFF],
            },
            Palette::Golden => PaletteColors {
                walls: [0xAA5500, 0xFFAA55, 0xFFFF55, 0xFFFFFF],
                floors: [0xAA5500, 0xFF5555, 0xFFAA55, 0xFFFF55],
            },
            Palette::BlackBlue => PaletteColors {
                walls: [0x000000, 0x00AAFE, 0x00FFFE, 0xFFFFFF],
                floors: [0x000000, 0x000000, 0x000000, 0x000000],
            },
            Palette::LightBlue => PaletteColors {
                walls: [0x0000FF, 0x00AAFE, 0x00FFFE, 0xFFFFFF],
                floors: [0x0000FF, 0x0055FE, 0x00AAFE, 0x00FFFE],
            },
            Palette::Red => PaletteColors {
                walls: [0x550000, 0xAA0000, 0xFF0000, 0xFF5500],
                floors: [0x550000, 0x550000, 0xAA0000, 0xFF0000],
            },
            Palette::Orange => PaletteColors {
                walls: [0xAA0000, 0xFF5500, 0xFFAA00, 0xFFFF55],
                floors: [0xAA0000, 0xFF0000, 0xFF5500, 0xFFAA00],
            },
            Palette::DarkGreen => PaletteColors {
                walls: [0x005500, 0x00AA00, 0x00FF00, 0xFFFFFF],
                floors: [0x005500, 0x005500, 0x00AA00, 0x00FF00],
            },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonPalettes {
    pub walls: Palette,
    pub floors: Palette,
}

/// A wall cell that is secretly passable, linked to its visual-origin cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllusoryWall {
    pub cell1: Position,
    pub cell2: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFloor {
    pub enemy_list: Vec<String>,
    pub illusory_walls: Vec<IllusoryWall>,
    pub map: FloorMap,
}

impl MapFloor {
    pub fn blank() -> Self {
        Self {
            enemy_list: Vec::new(),
            illusory_walls: Vec::new(),
            map: FloorMap::new(),
        }
    }
}

/// Floors are ordered top to bottom; index 0 is the topmost floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub name: String,
    pub palettes: DungeonPalettes,
    pub floors: Vec<MapFloor>,
}

impl Dungeon {
    pub fn blank(name: &str) -> Self {
        Self {
            name: name.to_string(),
            palettes: DungeonPalettes {
                walls: Palette::Green,
                floors: Palette::Green,
            },
            floors: vec![MapFloor::blank()],
        }
    }

    pub fn starting(name: &str) -> Self {
        let mut dungeon = Self::blank(name);
        dungeon.floors[0].map = starting_map();
        dungeon
    }
}
