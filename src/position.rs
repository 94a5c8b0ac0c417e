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

/// Grid coordinate. Signed so the "camera unplaced" sentinel (-1, -1) and
/// off-grid probes are representable without wrapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_placed(&self) -> bool {
        *self != POSITION_UNPLACED
    }
}

pub static POSITION_UNPLACED: Position = Position { x: -1, y: -1 };

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Direction {
    pub fn forward(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    // Screen-relative, not map-relative: "left" is always the camera's
    // visual left regardless of facing.
    pub fn left(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, -1),
            Direction::West => (0, 1),
        }
    }

    pub fn right(&self) -> (i32, i32) {
        let (dx, dy) = self.left();
        (-dx, -dy)
    }

    pub fn turned(&self, turn: Turn) -> Direction {
        match self {
            Direction::North => match turn {
                Turn::Left => Direction::West,
                Turn::Right => Direction::East,
            },
            Direction::East => match turn {
                Turn::Left => Direction::North,
                Turn::Right => Direction::South,
            },
            Direction::South => match turn {
                Turn::Left => Direction::East,
                Turn::Right => Direction::West,
            },
            Direction::West => match turn {
                Turn::Left => Direction::South,
                Turn::Right => Direction::North,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_right_are_screen_relative() {
        assert_eq!(Direction::North.left(), (-1, 0));
        assert_eq!(Direction::North.right(), (1, 0));
        assert_eq!(Direction::South.left(), (1, 0));
        assert_eq!(Direction::South.right(), (-1, 0));
        assert_eq!(Direction::East.left(), (0, -1));
        assert_eq!(Direction::East.right(), (0, 1));
        assert_eq!(Direction::West.left(), (0, 1));
        assert_eq!(Direction::West.right(), (0, -1));
    }

    #[test]
    fn four_left_turns_come_back_around() {
        let mut dir = Direction::North;
        for _ in 0..4 {
            dir = dir.turned(Turn::Left);
        }
        assert_eq!(dir, Direction::North);
    }
}
