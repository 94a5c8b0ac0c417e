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

//! Turns a sampled corridor pattern into the list of sprite slices to
//! composite. The depth/sequence pairings mirror the hand-authored sprite
//! library one to one, so this is a fixed decision table rather than a
//! general recursive rule; several entries carry legacy tags from the
//! source game's renderer that the sprite set depends on.

use crate::view::pattern::{CellClass, Pattern};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Full,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SliceCategory {
    StraightStep,
    SideExit,
    TSideExit,
    DeadEnd,
    DeadEndDoor,
}

impl SliceCategory {
    pub fn asset_key(&self) -> &'static str {
        match self {
            SliceCategory::StraightStep => "straight-step",
            SliceCategory::SideExit => "side-exit",
            SliceCategory::TSideExit => "t-side-exit",
            SliceCategory::DeadEnd => "dead-end",
            SliceCategory::DeadEndDoor => "dead-end-door",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sequence {
    TwoToOne,
    ThreeToTwo,
    FourToThree,
}

impl Sequence {
    pub fn asset_key(&self) -> &'static str {
        match self {
            Sequence::TwoToOne => "2_to_1",
            Sequence::ThreeToTwo => "3_to_2",
            Sequence::FourToThree => "4_to_3",
        }
    }
}

/// Full-screen sprite picked when the cell directly ahead blocks the view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WallTag {
    Wall,
    StairsUp,
    StairsDown,
    Door,
    MagicDoor,
    DungeonDoor,
}

impl WallTag {
    pub fn asset_key(&self) -> &'static str {
        match self {
            WallTag::Wall => "wall",
            WallTag::StairsUp => "stairs-up",
            WallTag::StairsDown => "stairs-down",
            WallTag::Door => "door",
            WallTag::MagicDoor => "magic-door",
            WallTag::DungeonDoor => "dungeon-door",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SliceDirective {
    pub side: Side,
    pub category: SliceCategory,
    pub sequence: Sequence,
    pub depth: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceSelection {
    Blocked(WallTag),
    Corridor(Vec<SliceDirective>),
}

fn directive(side: Side, category: SliceCategory, sequence: Sequence, depth: u8) -> SliceDirective {
    SliceDirective {
        side,
        category,
        sequence,
        depth,
    }
}

/// Every (category, sequence, depth) triple `select_slices` can emit. The
/// sprite library must provide exactly these; the manifest coverage test
/// holds the two sides of the contract together.
pub const EMITTABLE_SLICES: &[(SliceCategory, Sequence, u8)] = &[
    (SliceCategory::StraightStep, Sequence::TwoToOne, 1),
    (SliceCategory::StraightStep, Sequence::TwoToOne, 2),
    (SliceCategory::StraightStep, Sequence::TwoToOne, 3),
    (SliceCategory::StraightStep, Sequence::TwoToOne, 5),
    (SliceCategory::StraightStep, Sequence::TwoToOne, 6),
    (SliceCategory::SideExit, Sequence::TwoToOne, 2),
    (SliceCategory::SideExit, Sequence::ThreeToTwo, 3),
    (SliceCategory::SideExit, Sequence::FourToThree, 4),
    (SliceCategory::TSideExit, Sequence::TwoToOne, 2),
    (SliceCategory::TSideExit, Sequence::ThreeToTwo, 3),
    (SliceCategory::TSideExit, Sequence::FourToThree, 5),
    (SliceCategory::TSideExit, Sequence::FourToThree, 6),
    (SliceCategory::DeadEnd, Sequence::TwoToOne, 2),
    (SliceCategory::DeadEnd, Sequence::TwoToOne, 3),
    (SliceCategory::DeadEnd, Sequence::TwoToOne, 4),
    (SliceCategory::DeadEnd, Sequence::ThreeToTwo, 3),
    (SliceCategory::DeadEnd, Sequence::ThreeToTwo, 4),
    (SliceCategory::DeadEnd, Sequence::FourToThree, 5),
    (SliceCategory::DeadEnd, Sequence::FourToThree, 6),
    (SliceCategory::DeadEndDoor, Sequence::TwoToOne, 3),
    (SliceCategory::DeadEndDoor, Sequence::TwoToOne, 4),
    (SliceCategory::DeadEndDoor, Sequence::ThreeToTwo, 4),
];

/// Resolves a pattern window to either a single full-screen wall tag or the
/// ordered slice list for an open corridor. Pure and deterministic.
pub fn select_slices(pattern: &Pattern) -> SliceSelection {
    use SliceCategory::*;
    use Sequence::*;

    // Immediate blocker: the cell directly ahead fills the whole view.
    // Open and NPC-room cells fall through to corridor composition.
    match pattern.at(3, 1) {
        CellClass::Wall => return SliceSelection::Blocked(WallTag::Wall),
        CellClass::StairsUp => return SliceSelection::Blocked(WallTag::StairsUp),
        CellClass::StairsDown => return SliceSelection::Blocked(WallTag::StairsDown),
        CellClass::Door => return SliceSelection::Blocked(WallTag::Door),
        CellClass::MagicDoor => return SliceSelection::Blocked(WallTag::MagicDoor),
        CellClass::DungeonDoor => return SliceSelection::Blocked(WallTag::DungeonDoor),
        CellClass::Open | CellClass::NpcRoom => {}
    }

    let mut out = vec![directive(Side::Full, StraightStep, TwoToOne, 1)];

    // Corridor ends one cell ahead. The side walls at depth 1 read from the
    // nearest row again, with the terminal tag set instead of the
    // continuing one.
    if !pattern.is_open(2, 1) {
        let end = if pattern.at(2, 1) == CellClass::Wall {
            DeadEnd
        } else {
            DeadEndDoor
        };
        out.push(directive(Side::Full, end, TwoToOne, 3));
        out.push(directive(Side::Full, end, TwoToOne, 4));

        if pattern.is_open(3, 0) {
            out.push(directive(Side::Left, TSideExit, TwoToOne, 2));
        } else {
            out.push(directive(Side::Left, DeadEnd, TwoToOne, 2));
        }
        if pattern.is_open(3, 2) {
            out.push(directive(Side::Right, TSideExit, TwoToOne, 2));
        } else {
            out.push(directive(Side::Right, DeadEnd, TwoToOne, 2));
        }
        return SliceSelection::Corridor(out);
    }

    // Depth 1 side walls of a continuing corridor.
    if pattern.is_open(3, 0) {
        out.push(directive(Side::Left, SideExit, TwoToOne, 2));
    } else {
        out.push(directive(Side::Left, StraightStep, TwoToOne, 2));
    }
    if pattern.is_open(3, 2) {
        out.push(directive(Side::Right, SideExit, TwoToOne, 2));
    } else {
        out.push(directive(Side::Right, StraightStep, TwoToOne, 2));
    }

    // Corridor ends two cells ahead.
    if !pattern.is_open(1, 1) {
        if pattern.is_open(2, 0) {
            out.push(directive(Side::Left, TSideExit, ThreeToTwo, 3));
        } else {
            out.push(directive(Side::Left, DeadEnd, ThreeToTwo, 3));
        }
        if pattern.is_open(2, 2) {
            out.push(directive(Side::Right, TSideExit, ThreeToTwo, 3));
        } else {
            out.push(directive(Side::Right, DeadEnd, ThreeToTwo, 3));
        }

        let end = if pattern.at(1, 1) == CellClass::Wall {
            DeadEnd
        } else {
            DeadEndDoor
        };
        out.push(directive(Side::Full, end, ThreeToTwo, 4));
        return SliceSelection::Corridor(out);
    }

    // Depth 2 side walls. A continuing wall at this depth reuses the 2_to_1
    // art; only the openings have dedicated 3_to_2 slices.
    if pattern.is_open(2, 0) {
        out.push(directive(Side::Left, SideExit, ThreeToTwo, 3));
    } else {
        out.push(directive(Side::Left, StraightStep, TwoToOne, 3));
    }
    if pattern.is_open(2, 2) {
        out.push(directive(Side::Right, SideExit, ThreeToTwo, 3));
    } else {
        out.push(directive(Side::Right, StraightStep, TwoToOne, 3));
    }

    // Corridor ends three cells ahead. Both terminal slices carry the LEFT
    // tag; the 4_to_3 art is only published under that tag and the far
    // right slice mirrors it. Legacy behavior, kept as-is.
    if !pattern.is_open(0, 1) {
        if pattern.is_open(1, 0) {
            out.push(directive(Side::Left, TSideExit, FourToThree, 5));
        } else {
            out.push(directive(Side::Left, DeadEnd, FourToThree, 5));
        }
        if pattern.is_open(1, 2) {
            out.push(directive(Side::Left, TSideExit, FourToThree, 6));
        } else {
            out.push(directive(Side::Left, DeadEnd, FourToThree, 6));
        }
        return SliceSelection::Corridor(out);
    }

    // Depth 3/4 side walls of a corridor running the full window. The
    // closed-right slice keeps the LEFT tag for the same legacy reason as
    // above.
    if pattern.is_open(1, 0) {
        out.push(directive(Side::Left, SideExit, FourToThree, 4));
    } else {
        out.push(directive(Side::Left, StraightStep, TwoToOne, 5));
    }
    if pattern.is_open(1, 2) {
        out.push(directive(Side::Right, SideExit, FourToThree, 4));
    } else {
        out.push(directive(Side::Left, StraightStep, TwoToOne, 6));
    }

    SliceSelection::Corridor(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rows are written farthest first to match the pattern layout: row 0 is
    // depth 4, row 3 is depth 1.
    fn pattern(rows: [[CellClass; 3]; 4]) -> Pattern {
        Pattern(rows)
    }

    const W: CellClass = CellClass::Wall;
    const O: CellClass = CellClass::Open;

    #[test]
    fn wall_ahead_returns_the_blocking_tag_only() {
        let result = select_slices(&pattern([[W, W, W], [W, W, W], [W, W, W], [W, W, W]]));
        assert_eq!(result, SliceSelection::Blocked(WallTag::Wall));
    }

    #[test]
    fn every_blocking_class_maps_to_its_tag() {
        let cases = [
            (CellClass::Wall, WallTag::Wall),
            (CellClass::StairsUp, WallTag::StairsUp),
            (CellClass::StairsDown, WallTag::StairsDown),
            (CellClass::Door, WallTag::Door),
            (CellClass::MagicDoor, WallTag::MagicDoor),
            (CellClass::DungeonDoor, WallTag::DungeonDoor),
        ];
        for (class, tag) in cases {
            let result = select_slices(&pattern([[W, W, W], [W, W, W], [W, W, W], [W, class, W]]));
            assert_eq!(result, SliceSelection::Blocked(tag));
        }
    }

    #[test]
    fn npc_room_ahead_still_composes_a_corridor() {
        let result = select_slices(&pattern([
            [W, W, W],
            [W, W, W],
            [W, W, W],
            [W, CellClass::NpcRoom, W],
        ]));
        assert!(matches!(result, SliceSelection::Corridor(_)));
    }

    #[test]
    fn two_cell_corridor_ending_in_wall_with_left_exit() {
        // Scenario: open ahead, open at depth 2, wall at depth 3, closed
        // sides at depth 1, open left at depth 2.
        let result = select_slices(&pattern([
            [W, W, W],
            [W, W, W],
            [O, O, W],
            [W, O, W],
        ]));

        use SliceCategory::*;
        use Sequence::*;
        let expected = vec![
            directive(Side::Full, StraightStep, TwoToOne, 1),
            directive(Side::Left, StraightStep, TwoToOne, 2),
            directive(Side::Right, StraightStep, TwoToOne, 2),
            directive(Side::Left, TSideExit, ThreeToTwo, 3),
            directive(Side::Right, DeadEnd, ThreeToTwo, 3),
            directive(Side::Full, DeadEnd, ThreeToTwo, 4),
        ];
        assert_eq!(result, SliceSelection::Corridor(expected));
    }

    #[test]
    fn immediate_dead_end_renders_terminal_walls() {
        let result = select_slices(&pattern([
            [W, W, W],
            [W, W, W],
            [W, W, W],
            [O, O, W],
        ]));

        use SliceCategory::*;
        use Sequence::*;
        let expected = vec![
            directive(Side::Full, StraightStep, TwoToOne, 1),
            directive(Side::Full, DeadEnd, TwoToOne, 3),
            directive(Side::Full, DeadEnd, TwoToOne, 4),
            directive(Side::Left, TSideExit, TwoToOne, 2),
            directive(Side::Right, DeadEnd, TwoToOne, 2),
        ];
        assert_eq!(result, SliceSelection::Corridor(expected));
    }

    #[test]
    fn immediate_dead_end_fronted_by_door_uses_door_art() {
        let result = select_slices(&pattern([
            [W, W, W],
            [W, W, W],
            [W, CellClass::Door, W],
            [W, O, W],
        ]));

        match result {
            SliceSelection::Corridor(directives) => {
                assert!(directives.iter().any(|d| d.category == SliceCategory::DeadEndDoor
                    && d.side == Side::Full
                    && d.depth == 3));
                assert!(directives.iter().any(|d| d.category == SliceCategory::DeadEndDoor
                    && d.side == Side::Full
                    && d.depth == 4));
            }
            SliceSelection::Blocked(_) => panic!("door one cell out must not block the view"),
        }
    }

    #[test]
    fn full_length_corridor_stops_silently_at_depth_four() {
        let result = select_slices(&pattern([
            [W, O, W],
            [W, O, W],
            [W, O, W],
            [W, O, W],
        ]));

        use SliceCategory::*;
        use Sequence::*;
        let expected = vec![
            directive(Side::Full, StraightStep, TwoToOne, 1),
            directive(Side::Left, StraightStep, TwoToOne, 2),
            directive(Side::Right, StraightStep, TwoToOne, 2),
            directive(Side::Left, StraightStep, TwoToOne, 3),
            directive(Side::Right, StraightStep, TwoToOne, 3),
            directive(Side::Left, StraightStep, TwoToOne, 5),
            directive(Side::Left, StraightStep, TwoToOne, 6),
        ];
        assert_eq!(result, SliceSelection::Corridor(expected));
    }

    // Open question from the source renderer, kept rather than normalized:
    // at the two farthest evaluation rows the right-hand slices are tagged
    // LEFT (most likely an old copy-paste that the shipped sprite set now
    // relies on).
    #[test]
    fn right_side_slices_keep_legacy_left_tag() {
        // Blocked at depth 4, both sides open at depth 3.
        let result = select_slices(&pattern([
            [W, W, W],
            [O, O, O],
            [W, O, W],
            [W, O, W],
        ]));
        match result {
            SliceSelection::Corridor(directives) => {
                let far = &directives[directives.len() - 2..];
                assert_eq!(far[0].side, Side::Left);
                assert_eq!(far[0].depth, 5);
                assert_eq!(far[1].side, Side::Left);
                assert_eq!(far[1].depth, 6);
                assert_eq!(far[1].category, SliceCategory::TSideExit);
            }
            SliceSelection::Blocked(_) => panic!("corridor expected"),
        }
    }

    #[test]
    fn mirror_symmetric_pattern_pairs_left_and_right() {
        // Open side exits at depths 1 and 2, terminated at depth 3.
        let result = select_slices(&pattern([
            [W, W, W],
            [W, W, W],
            [O, O, O],
            [O, O, O],
        ]));
        let directives = match result {
            SliceSelection::Corridor(d) => d,
            SliceSelection::Blocked(_) => panic!("corridor expected"),
        };

        let lefts: Vec<_> = directives
            .iter()
            .filter(|d| d.side == Side::Left)
            .map(|d| (d.category, d.sequence, d.depth))
            .collect();
        let rights: Vec<_> = directives
            .iter()
            .filter(|d| d.side == Side::Right)
            .map(|d| (d.category, d.sequence, d.depth))
            .collect();
        assert_eq!(lefts, rights);
    }

    #[test]
    fn selection_is_idempotent() {
        let p = pattern([[W, O, W], [O, O, W], [W, O, O], [W, O, W]]);
        assert_eq!(select_slices(&p), select_slices(&p));
    }

    #[test]
    fn emittable_table_matches_exhaustive_enumeration() {
        // Brute-force the window over wall/open/door cells and check the
        // published contract table both ways.
        let classes = [CellClass::Wall, CellClass::Open, CellClass::Door];
        let mut seen = std::collections::HashSet::new();

        for index in 0..3usize.pow(12) {
            let mut rows = [[CellClass::Wall; 3]; 4];
            let mut rest = index;
            for row in 0..4 {
                for col in 0..3 {
                    rows[row][col] = classes[rest % 3];
                    rest /= 3;
                }
            }
            if let SliceSelection::Corridor(directives) = select_slices(&Pattern(rows)) {
                for d in directives {
                    seen.insert((d.category, d.sequence, d.depth));
                }
            }
        }

        for triple in &seen {
            assert!(
                EMITTABLE_SLICES.contains(triple),
                "selector emitted unlisted slice {:?}",
                triple
            );
        }
        for triple in EMITTABLE_SLICES {
            assert!(
                seen.contains(triple),
                "table lists unreachable slice {:?}",
                triple
            );
        }
    }
}
