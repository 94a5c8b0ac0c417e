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
use once_cell::sync::Lazy;
use std::sync::Mutex;

#[derive(Clone, PartialEq)]
pub enum KeyboardAction {
    None,
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    CycleBrush,
}

pub struct Input {
    keyboard_action: KeyboardAction,
    mouse_position: Vec2,
    clicked_position: Option<Vec2>,

    mouse_press_position: Option<Vec2>,
}

pub struct InputSnapshot {
    pub keyboard_action: KeyboardAction,
    pub click: Option<Vec2>,
    pub mouse: Vec2,
}

impl Input {
    fn handle_keyboard_input(&mut self) {
        let mut keyboard_action = KeyboardAction::None;

        if is_key_pressed(KeyCode::Up) {
            keyboard_action = KeyboardAction::MoveForward;
        }
        if is_key_pressed(KeyCode::Down) {
            keyboard_action = KeyboardAction::MoveBackward;
        }
        if is_key_pressed(KeyCode::Left) {
            keyboard_action = KeyboardAction::TurnLeft;
        }
        if is_key_pressed(KeyCode::Right) {
            keyboard_action = KeyboardAction::TurnRight;
        }
        if is_key_pressed(KeyCode::Tab) {
            keyboard_action = KeyboardAction::CycleBrush;
        }

        self.keyboard_action = keyboard_action;
    }

    fn handle_mouse_input(&mut self) {
        let mouse_pos_tuple = mouse_position();
        self.mouse_position = vec2(mouse_pos_tuple.0, mouse_pos_tuple.1);
        if is_mouse_button_pressed(MouseButton::Left) {
            self.mouse_press_position = Some(self.mouse_position);
        }
        if is_mouse_button_released(MouseButton::Left) {
            if let Some(press_pos) = self.mouse_press_position.take() {
                if (self.mouse_position.x - press_pos.x).abs() < 5.0
                    && (self.mouse_position.y - press_pos.y).abs() < 5.0
                {
                    self.clicked_position = Some(press_pos);
                } else {
                    self.clicked_position = None;
                }
            }
        }
    }

    pub fn poll() -> InputSnapshot {
        let mut input = INPUT.lock().unwrap();
        input.handle_keyboard_input();
        input.handle_mouse_input();
        InputSnapshot {
            keyboard_action: input.keyboard_action.clone(),
            click: input.clicked_position.take(), // consumes click for this frame
            mouse: input.mouse_position,
        }
    }
}

static INPUT: Lazy<Mutex<Input>> = Lazy::new(|| {
    Mutex::new(Input {
        keyboard_action: KeyboardAction::None,
        mouse_position: vec2(0.0, 0.0),
        clicked_position: None,
        mouse_press_position: None,
    })
});
