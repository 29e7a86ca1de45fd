use crate::render::{UniformLocation, UniformValue};

use super::layout::{FRAME_BLOCK_SIZE, OBJECT_BLOCK_SIZE, ProgramLayout, UniformBlock};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct RecordedDraw {
    pub first: u32,
    pub count: u32,
    /// Index into [`FrameRecorder::object_blocks`].
    pub object: usize,
}

/// CPU-side image of one frame: uniform block bytes plus the draw list.
///
/// Object uniforms behave like program state: the values current at a draw
/// are snapshotted for it and stay in effect for later draws.
pub(super) struct FrameRecorder {
    layout: ProgramLayout,
    frame_block: Vec<u8>,
    current_object: [u8; OBJECT_BLOCK_SIZE],
    object_blocks: Vec<[u8; OBJECT_BLOCK_SIZE]>,
    draws: Vec<RecordedDraw>,
    clear: bool,
    bound: bool,
    warned_unbound: bool,
    warned_mismatch: bool,
}

impl FrameRecorder {
    pub fn new(layout: ProgramLayout) -> Self {
        Self {
            layout,
            frame_block: vec![0; FRAME_BLOCK_SIZE],
            current_object: [0; OBJECT_BLOCK_SIZE],
            object_blocks: Vec::new(),
            draws: Vec::new(),
            clear: false,
            bound: false,
            warned_unbound: false,
            warned_mismatch: false,
        }
    }

    #[inline]
    pub fn layout(&self) -> &ProgramLayout {
        &self.layout
    }

    pub fn clear(&mut self) {
        self.clear = true;
    }

    pub fn bind(&mut self) {
        self.bound = true;
    }

    pub fn unbind(&mut self) {
        self.bound = false;
    }

    pub fn set(&mut self, location: UniformLocation, value: UniformValue) {
        if !self.bound {
            if !self.warned_unbound {
                log::warn!("uniform write with no program bound; ignored");
                self.warned_unbound = true;
            }
            return;
        }
        let Some(slot) = self.layout.slot(location) else { return };
        if slot.ty != value.ty() {
            if !self.warned_mismatch {
                log::warn!(
                    "uniform `{}` is {:?}, got {:?}; ignored",
                    slot.name,
                    slot.ty,
                    value.ty()
                );
                self.warned_mismatch = true;
            }
            return;
        }

        let range = slot.range();
        let block: &mut [u8] = match slot.block {
            UniformBlock::Frame => &mut self.frame_block,
            UniformBlock::Object => &mut self.current_object,
        };
        if let Some(dst) = block.get_mut(range) {
            dst.copy_from_slice(value.as_bytes());
        }
    }

    pub fn draw(&mut self, first: u32, count: u32) {
        if !self.bound || count == 0 {
            return;
        }
        self.object_blocks.push(self.current_object);
        self.draws.push(RecordedDraw {
            first,
            count,
            object: self.object_blocks.len() - 1,
        });
    }

    #[inline]
    pub fn frame_block(&self) -> &[u8] {
        &self.frame_block
    }

    #[inline]
    pub fn object_blocks(&self) -> &[[u8; OBJECT_BLOCK_SIZE]] {
        &self.object_blocks
    }

    #[inline]
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    #[inline]
    pub fn wants_clear(&self) -> bool {
        self.clear
    }

    /// Forgets the recorded draws. Uniform state carries over.
    pub fn reset(&mut self) {
        self.object_blocks.clear();
        self.draws.clear();
        self.clear = false;
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3, Vec4};

    use super::*;

    fn recorder() -> FrameRecorder {
        let mut r = FrameRecorder::new(ProgramLayout::phong());
        r.bind();
        r
    }

    fn loc(r: &FrameRecorder, name: &str) -> UniformLocation {
        r.layout().find(name).expect(name)
    }

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        bytemuck::pod_read_unaligned(&bytes[offset..offset + 4])
    }

    // ── uniform writes ─────────────────────────────────────────────────────

    #[test]
    fn frame_uniforms_land_at_their_offsets() {
        let mut r = recorder();
        r.set(loc(&r, "num_lights"), UniformValue::Int(3));
        r.set(loc(&r, "lights[2].type"), UniformValue::Int(2));
        r.set(loc(&r, "camera_pos"), UniformValue::Vec4(Vec4::new(1.0, 2.0, 3.0, 1.0)));

        let block = r.frame_block();
        assert_eq!(bytemuck::pod_read_unaligned::<i32>(&block[144..148]), 3);
        assert_eq!(bytemuck::pod_read_unaligned::<i32>(&block[380..384]), 2);
        assert_eq!(read_f32(block, 136), 3.0);
    }

    #[test]
    fn vec3_write_leaves_neighbour_intact() {
        let mut r = recorder();
        r.set(loc(&r, "lights[0].type"), UniformValue::Int(1));
        r.set(loc(&r, "lights[0].function"), UniformValue::Vec3(Vec3::new(1.0, 0.5, 0.25)));

        let block = r.frame_block();
        assert_eq!(read_f32(block, 160 + 56), 0.25);
        assert_eq!(bytemuck::pod_read_unaligned::<i32>(&block[220..224]), 1);
    }

    #[test]
    fn mismatched_type_is_ignored() {
        let mut r = recorder();
        r.set(loc(&r, "m_shininess"), UniformValue::Int(7));
        r.draw(0, 3);
        assert_eq!(read_f32(&r.object_blocks()[0], 112), 0.0);
    }

    #[test]
    fn writes_need_a_bound_program() {
        let mut r = FrameRecorder::new(ProgramLayout::phong());
        r.set(UniformLocation(3), UniformValue::Int(1));
        r.draw(0, 3);
        assert!(r.frame_block().iter().all(|&b| b == 0));
        assert!(r.draws().is_empty());
    }

    // ── draws ──────────────────────────────────────────────────────────────

    #[test]
    fn each_draw_snapshots_object_state() {
        let mut r = recorder();
        let model = loc(&r, "model_matrix");
        let shininess = loc(&r, "m_shininess");

        r.set(model, UniformValue::Mat4(Mat4::from_translation(Vec3::X)));
        r.set(shininess, UniformValue::Float(4.0));
        r.draw(0, 36);
        r.set(model, UniformValue::Mat4(Mat4::from_translation(Vec3::Y)));
        r.draw(36, 12);

        let blocks = r.object_blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(read_f32(&blocks[0], 48), 1.0);
        assert_eq!(read_f32(&blocks[1], 52), 1.0);
        // Shininess persists into the second draw.
        assert_eq!(read_f32(&blocks[1], 112), 4.0);
        assert_eq!(
            r.draws(),
            &[
                RecordedDraw { first: 0, count: 36, object: 0 },
                RecordedDraw { first: 36, count: 12, object: 1 },
            ]
        );
    }

    #[test]
    fn empty_draws_are_dropped() {
        let mut r = recorder();
        r.draw(10, 0);
        assert!(r.draws().is_empty());
    }

    #[test]
    fn reset_keeps_uniform_state() {
        let mut r = recorder();
        r.clear();
        r.set(loc(&r, "num_lights"), UniformValue::Int(1));
        r.draw(0, 3);
        r.reset();

        assert!(r.draws().is_empty());
        assert!(!r.wants_clear());
        assert_eq!(bytemuck::pod_read_unaligned::<i32>(&r.frame_block()[144..148]), 1);
    }
}
