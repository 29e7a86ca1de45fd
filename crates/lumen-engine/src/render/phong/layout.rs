//! Name → byte-offset reflection of the uniform blocks in `phong.wgsl`.

use crate::render::{UniformLocation, UniformType};
use crate::scene::MAX_LIGHTS;

/// Size of the per-frame block (`Frame` in the shader).
pub const FRAME_BLOCK_SIZE: usize = 800;
/// Size of the per-draw block (`Object` in the shader).
pub const OBJECT_BLOCK_SIZE: usize = 128;

const LIGHTS_OFFSET: usize = 160;
const LIGHT_STRIDE: usize = 80;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UniformBlock {
    Frame,
    Object,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformSlot {
    pub name: String,
    pub block: UniformBlock,
    pub offset: usize,
    pub ty: UniformType,
}

impl UniformSlot {
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.ty.size()
    }
}

/// Uniforms of the Phong program, addressed by [`UniformLocation`] index.
#[derive(Debug, Clone)]
pub struct ProgramLayout {
    slots: Vec<UniformSlot>,
}

impl ProgramLayout {
    pub fn phong() -> Self {
        use UniformBlock::{Frame, Object};
        use UniformType as T;

        let mut layout = Self { slots: Vec::new() };
        layout.push("view_matrix", Frame, 0, T::Mat4);
        layout.push("projection_matrix", Frame, 64, T::Mat4);
        layout.push("camera_pos", Frame, 128, T::Vec4);
        layout.push("num_lights", Frame, 144, T::Int);

        for i in 0..MAX_LIGHTS {
            let base = LIGHTS_OFFSET + i * LIGHT_STRIDE;
            layout.push(format!("lights[{i}].position"), Frame, base, T::Vec4);
            layout.push(format!("lights[{i}].direction"), Frame, base + 16, T::Vec4);
            layout.push(format!("lights[{i}].lightColor"), Frame, base + 32, T::Vec4);
            layout.push(format!("lights[{i}].function"), Frame, base + 48, T::Vec3);
            layout.push(format!("lights[{i}].type"), Frame, base + 60, T::Int);
            layout.push(format!("lights[{i}].penumbra"), Frame, base + 64, T::Float);
            layout.push(format!("lights[{i}].angle"), Frame, base + 68, T::Float);
        }

        layout.push("model_matrix", Object, 0, T::Mat4);
        layout.push("ambient", Object, 64, T::Vec4);
        layout.push("diffuse", Object, 80, T::Vec4);
        layout.push("specular", Object, 96, T::Vec4);
        layout.push("m_shininess", Object, 112, T::Float);

        layout
    }

    fn push(&mut self, name: impl Into<String>, block: UniformBlock, offset: usize, ty: UniformType) {
        self.slots.push(UniformSlot {
            name: name.into(),
            block,
            offset,
            ty,
        });
    }

    pub fn find(&self, name: &str) -> Option<UniformLocation> {
        self.slots
            .iter()
            .position(|s| s.name == name)
            .map(|i| UniformLocation(i as u32))
    }

    #[inline]
    pub fn slot(&self, location: UniformLocation) -> Option<&UniformSlot> {
        self.slots.get(location.0 as usize)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_size(block: UniformBlock) -> usize {
        match block {
            UniformBlock::Frame => FRAME_BLOCK_SIZE,
            UniformBlock::Object => OBJECT_BLOCK_SIZE,
        }
    }

    #[test]
    fn slots_fit_their_blocks_without_overlap() {
        let layout = ProgramLayout::phong();
        for block in [UniformBlock::Frame, UniformBlock::Object] {
            let mut ranges: Vec<_> = layout
                .slots
                .iter()
                .filter(|s| s.block == block)
                .map(UniformSlot::range)
                .collect();
            ranges.sort_by_key(|r| r.start);
            for pair in ranges.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
            }
            assert!(ranges.last().is_some_and(|r| r.end <= block_size(block)));
        }
    }

    #[test]
    fn last_light_ends_the_frame_block() {
        let layout = ProgramLayout::phong();
        let loc = layout.find(&format!("lights[{}].angle", MAX_LIGHTS - 1)).expect("last light");
        let slot = layout.slot(loc).expect("slot");
        // 8 trailing pad bytes round the Light struct up to 80.
        assert_eq!(slot.range().end + 8, FRAME_BLOCK_SIZE);
    }

    #[test]
    fn lookups_are_exact() {
        let layout = ProgramLayout::phong();
        assert_eq!(layout.find("view_matrix"), Some(UniformLocation(0)));
        assert!(layout.find("lights[8].type").is_none());
        assert!(layout.find("shininess").is_none());
        let loc = layout.find("lights[1].type").expect("light 1");
        assert_eq!(layout.slot(loc).map(|s| s.offset), Some(160 + 80 + 60));
    }

    #[test]
    fn shader_light_array_matches_capacity() {
        let src = include_str!("shaders/phong.wgsl");
        assert!(src.contains(&format!("array<Light, {MAX_LIGHTS}>")));
    }
}
