//! In-memory [`GraphicsContext`] that records every call.

use super::{GraphicsContext, UniformLocation, UniformValue};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Clear,
    UseProgram,
    Uniform(String, UniformValue),
    Draw { first: u32, count: u32 },
    ReleaseProgram,
    UploadVertices(usize),
}

/// Exposes a fixed set of uniform names; everything else is "missing".
pub(crate) struct RecordingContext {
    names: Vec<String>,
    pub calls: Vec<Call>,
}

impl RecordingContext {
    pub fn with_uniforms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            calls: Vec::new(),
        }
    }

    /// Every uniform the Phong program declares.
    pub fn phong() -> Self {
        Self::with_uniforms(super::phong::ProgramLayout::phong().names())
    }

    pub fn uniforms_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a UniformValue> + 'a {
        self.calls.iter().filter_map(move |c| match c {
            Call::Uniform(n, v) if n == name => Some(v),
            _ => None,
        })
    }

    pub fn draws(&self) -> Vec<(u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                Call::Draw { first, count } => Some((first, count)),
                _ => None,
            })
            .collect()
    }
}

impl GraphicsContext for RecordingContext {
    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| UniformLocation(i as u32))
    }

    fn upload_vertices(&mut self, vertices: &[f32]) {
        self.calls.push(Call::UploadVertices(vertices.len()));
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn use_program(&mut self) {
        self.calls.push(Call::UseProgram);
    }

    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue) {
        let name = self.names[location.0 as usize].clone();
        self.calls.push(Call::Uniform(name, value));
    }

    fn draw_arrays(&mut self, first: u32, count: u32) {
        self.calls.push(Call::Draw { first, count });
    }

    fn release_program(&mut self) {
        self.calls.push(Call::ReleaseProgram);
    }
}
