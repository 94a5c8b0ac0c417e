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

use macroquad::material::{MaterialParams, load_material};
use macroquad::miniquad::{BlendFactor, BlendState, BlendValue, Equation};
use macroquad::prelude::*;

/// The neutral colors the corridor sprites are authored in. The fragment
/// shader swaps each of them for the current dungeon palette tier.
pub const SAMPLE_WALL_COLORS: [u32; 4] = [0x0000AA, 0x0055FF, 0x00AAFF, 0x00FFFF];
pub const SAMPLE_FLOOR_COLORS: [u32; 4] = [0x005555, 0x55AA55, 0x55FF55, 0xAAFFAA];

pub fn hex_to_vec4(color: u32) -> Vec4 {
    Vec4::new(
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
        1.0,
    )
}

fn setup_color_replacement_material() -> Result<Material, macroquad::Error> {
    let pipeline_params = PipelineParams {
        // out = src * src_alpha + dst * (1 - src_alpha)
        color_blend: Some(BlendState::new(
            Equation::Add,
            BlendFactor::Value(BlendValue::SourceAlpha),
            BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
        )),
        depth_write: false,
        ..Default::default()
    };

    let mut uniforms = Vec::new();
    for tier in 0..4 {
        uniforms.push(UniformDesc::new(
            &format!("WallSource{}", tier),
            UniformType::Float4,
        ));
        uniforms.push(UniformDesc::new(
            &format!("WallTarget{}", tier),
            UniformType::Float4,
        ));
        uniforms.push(UniformDesc::new(
            &format!("FloorSource{}", tier),
            UniformType::Float4,
        ));
        uniforms.push(UniformDesc::new(
            &format!("FloorTarget{}", tier),
            UniformType::Float4,
        ));
    }

    let palette_material = load_material(
        ShaderSource::Glsl {
            vertex: include_str!("../../assets/shaders/default.vert"),
            fragment: include_str!("../../assets/shaders/color_replace.frag"),
        },
        MaterialParams {
            pipeline_params,
            uniforms,
            ..Default::default()
        },
    )?;

    Ok(palette_material)
}

pub struct GraphicsManager {
    color_replace_material: Material,
}

impl GraphicsManager {
    pub fn new() -> Self {
        let color_replace_material =
            setup_color_replacement_material().expect("Failed to load color replacement material");

        let mut manager = Self {
            color_replace_material,
        };
        manager.set_palette_targets(SAMPLE_WALL_COLORS, SAMPLE_FLOOR_COLORS);
        manager
    }

    /// Points each sample tier at its replacement color.
    pub fn set_palette_targets(&mut self, walls: [u32; 4], floors: [u32; 4]) {
        for tier in 0..4 {
            self.color_replace_material.set_uniform(
                &format!("WallSource{}", tier),
                hex_to_vec4(SAMPLE_WALL_COLORS[tier]),
            );
            self.color_replace_material
                .set_uniform(&format!("WallTarget{}", tier), hex_to_vec4(walls[tier]));
            self.color_replace_material.set_uniform(
                &format!("FloorSource{}", tier),
                hex_to_vec4(SAMPLE_FLOOR_COLORS[tier]),
            );
            self.color_replace_material
                .set_uniform(&format!("FloorTarget{}", tier), hex_to_vec4(floors[tier]));
        }
    }

    pub fn get_color_replace_material(&self) -> &Material {
        &self.color_replace_material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_to_unit_channels() {
        let v = hex_to_vec4(0x00AAFE);
        assert!((v.x - 0.0).abs() < f32::EPSILON);
        assert!((v.y - 170.0 / 255.0).abs() < 1e-6);
        assert!((v.z - 254.0 / 255.0).abs() < 1e-6);
        assert!((v.w - 1.0).abs() < f32::EPSILON);
    }
}
