use wgpu::util::DeviceExt;

use crate::mesh::FLOATS_PER_VERTEX;

/// GPU vertex buffer holding the batched geometry.
///
/// Released at most once; [`GeometryBuffer::release`] and `Drop` share the
/// same `Option::take` guard.
#[derive(Default)]
pub struct GeometryBuffer {
    buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl GeometryBuffer {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Replaces the buffer contents. Empty input leaves no buffer behind.
    pub fn upload(&mut self, device: &wgpu::Device, vertices: &[f32]) {
        self.release();
        if vertices.is_empty() {
            return;
        }

        self.buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lumen geometry vbo"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.vertex_count = (vertices.len() / FLOATS_PER_VERTEX) as u32;
        log::debug!(
            "geometry buffer: {} vertices ({} bytes)",
            self.vertex_count,
            std::mem::size_of_val(vertices)
        );
    }

    #[inline]
    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn release(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            buffer.destroy();
        }
        self.vertex_count = 0;
    }
}

impl Drop for GeometryBuffer {
    fn drop(&mut self) {
        self.release();
    }
}
