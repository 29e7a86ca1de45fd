use glam::{Mat4, Vec3, Vec4};

/// Handle to one named uniform of the bound program.
///
/// Only meaningful for the context that handed it out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Uniform payload. Shapes mirror the shader-side types.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

/// Shader-side type of a uniform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UniformType {
    Int,
    Float,
    Vec3,
    Vec4,
    Mat4,
}

impl UniformType {
    /// Payload size in bytes (without trailing padding).
    pub const fn size(self) -> usize {
        match self {
            UniformType::Int | UniformType::Float => 4,
            UniformType::Vec3 => 12,
            UniformType::Vec4 => 16,
            UniformType::Mat4 => 64,
        }
    }
}

impl UniformValue {
    pub const fn ty(&self) -> UniformType {
        match self {
            UniformValue::Int(_) => UniformType::Int,
            UniformValue::Float(_) => UniformType::Float,
            UniformValue::Vec3(_) => UniformType::Vec3,
            UniformValue::Vec4(_) => UniformType::Vec4,
            UniformValue::Mat4(_) => UniformType::Mat4,
        }
    }

    /// Native-endian bytes as laid out in a uniform block.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            UniformValue::Int(v) => bytemuck::bytes_of(v),
            UniformValue::Float(v) => bytemuck::bytes_of(v),
            UniformValue::Vec3(v) => bytemuck::bytes_of(v),
            UniformValue::Vec4(v) => bytemuck::bytes_of(v),
            UniformValue::Mat4(v) => bytemuck::bytes_of(v),
        }
    }
}

/// The graphics context a frame is recorded against.
///
/// Calls mirror an immediate-mode program API: uniforms set after
/// [`use_program`](GraphicsContext::use_program) stay in effect for every
/// later draw until overwritten. All calls happen on the thread that owns
/// the context.
pub trait GraphicsContext {
    /// Looks up a uniform of the program by name.
    fn uniform_location(&self, name: &str) -> Option<UniformLocation>;

    /// Replaces the vertex buffer with interleaved position/normal data.
    fn upload_vertices(&mut self, vertices: &[f32]);

    /// Clears color and depth.
    fn clear(&mut self);

    fn use_program(&mut self);

    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue);

    /// Draws `count` vertices starting at vertex `first` as a triangle list.
    fn draw_arrays(&mut self, first: u32, count: u32);

    fn release_program(&mut self);
}
