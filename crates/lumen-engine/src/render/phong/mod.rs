//! wgpu implementation of [`GraphicsContext`] running the Phong program.
//!
//! Calls made through the trait only record state on the CPU. [`PhongPipeline::encode`]
//! then turns the recorded frame into a single render pass:
//! - the frame block is written once to a static uniform buffer
//! - each draw gets its own slot in a dynamic-offset object buffer
//! - draws are issued in record order

mod buffer;
mod layout;
mod recorder;

pub use buffer::GeometryBuffer;
pub use layout::{FRAME_BLOCK_SIZE, OBJECT_BLOCK_SIZE, ProgramLayout, UniformBlock, UniformSlot};

use std::num::NonZeroU64;

use crate::render::{GraphicsContext, RenderCtx, RenderTarget, UniformLocation, UniformValue};

use recorder::FrameRecorder;

/// GPU objects owned by the pipeline. Dropped as a unit on release.
struct PipelineResources {
    pipeline: wgpu::RenderPipeline,
    frame_ubo: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    object_ubo: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    /// Object slots the buffer can hold.
    object_capacity: usize,
}

pub struct PhongPipeline {
    device: wgpu::Device,
    queue: wgpu::Queue,
    recorder: FrameRecorder,
    geometry: GeometryBuffer,
    resources: Option<PipelineResources>,
    /// Object block size rounded up to the uniform offset alignment.
    object_stride: usize,
    staging: Vec<u8>,
    clear_color: wgpu::Color,
}

impl PhongPipeline {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let align = ctx.device.limits().min_uniform_buffer_offset_alignment as usize;
        let object_stride = OBJECT_BLOCK_SIZE.next_multiple_of(align.max(1));

        let resources = create_resources(ctx, object_stride, 64);
        log::debug!(
            "phong pipeline created (color {:?}, depth {:?}, object stride {object_stride})",
            ctx.surface_format,
            ctx.depth_format
        );

        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            recorder: FrameRecorder::new(ProgramLayout::phong()),
            geometry: GeometryBuffer::default(),
            resources: Some(resources),
            object_stride,
            staging: Vec::new(),
            clear_color: wgpu::Color::BLACK,
        }
    }

    pub fn with_clear_color(mut self, color: wgpu::Color) -> Self {
        self.clear_color = color;
        self
    }

    #[inline]
    pub fn geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }

    /// Submits the recorded frame as one render pass into `target`.
    ///
    /// Recorded draws are consumed; uniform values carry over.
    pub fn encode(&mut self, target: &mut RenderTarget<'_>) {
        let draw_count = self.recorder.draws().len();
        self.ensure_object_capacity(draw_count);

        let Some(res) = self.resources.as_ref() else {
            self.recorder.reset();
            return;
        };

        self.queue.write_buffer(&res.frame_ubo, 0, self.recorder.frame_block());

        if draw_count > 0 {
            self.staging.clear();
            self.staging.resize(draw_count * self.object_stride, 0);
            for (i, block) in self.recorder.object_blocks().iter().enumerate() {
                let at = i * self.object_stride;
                self.staging[at..at + OBJECT_BLOCK_SIZE].copy_from_slice(block);
            }
            self.queue.write_buffer(&res.object_ubo, 0, &self.staging);
        }

        let (color_load, depth_load) = if self.recorder.wants_clear() {
            (wgpu::LoadOp::Clear(self.clear_color), wgpu::LoadOp::Clear(1.0))
        } else {
            (wgpu::LoadOp::Load, wgpu::LoadOp::Load)
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lumen phong pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: color_load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: depth_load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if let Some(vbo) = self.geometry.buffer() {
            rpass.set_pipeline(&res.pipeline);
            rpass.set_bind_group(0, &res.frame_bind_group, &[]);
            rpass.set_vertex_buffer(0, vbo.slice(..));

            let available = self.geometry.vertex_count();
            for draw in self.recorder.draws() {
                let end = draw.first.saturating_add(draw.count);
                if end > available {
                    log::debug!("draw {}..{end} past buffer end {available}; skipped", draw.first);
                    continue;
                }
                let offset = (draw.object * self.object_stride) as u32;
                rpass.set_bind_group(1, &res.object_bind_group, &[offset]);
                rpass.draw(draw.first..end, 0..1);
            }
        }
        drop(rpass);

        self.recorder.reset();
    }

    fn ensure_object_capacity(&mut self, required: usize) {
        let stride = self.object_stride;
        let Some(res) = self.resources.as_mut() else { return };
        if required <= res.object_capacity {
            return;
        }

        let capacity = required.next_power_of_two();
        let (object_ubo, object_bind_group) =
            create_object_binding(&self.device, &res.object_bgl, stride, capacity);
        res.object_ubo.destroy();
        res.object_ubo = object_ubo;
        res.object_bind_group = object_bind_group;
        res.object_capacity = capacity;
        log::debug!("object uniform buffer grown to {capacity} slots");
    }

    /// Frees the GPU resources. Later calls are no-ops.
    pub fn release(&mut self) {
        if let Some(res) = self.resources.take() {
            res.frame_ubo.destroy();
            res.object_ubo.destroy();
            log::debug!("phong pipeline released");
        }
        self.geometry.release();
    }
}

impl Drop for PhongPipeline {
    fn drop(&mut self) {
        self.release();
    }
}

impl GraphicsContext for PhongPipeline {
    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.recorder.layout().find(name)
    }

    fn upload_vertices(&mut self, vertices: &[f32]) {
        self.geometry.upload(&self.device, vertices);
    }

    fn clear(&mut self) {
        self.recorder.clear();
    }

    fn use_program(&mut self) {
        self.recorder.bind();
    }

    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue) {
        self.recorder.set(location, value);
    }

    fn draw_arrays(&mut self, first: u32, count: u32) {
        self.recorder.draw(first, count);
    }

    fn release_program(&mut self) {
        self.recorder.unbind();
    }
}

fn uniform_entry(has_dynamic_offset: bool, size: usize) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset,
            min_binding_size: NonZeroU64::new(size as u64),
        },
        count: None,
    }
}

fn create_object_binding(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: usize,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("lumen object ubo"),
        size: (stride * capacity) as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("lumen object bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: NonZeroU64::new(OBJECT_BLOCK_SIZE as u64),
            }),
        }],
    });
    (buffer, bind_group)
}

fn create_resources(ctx: &RenderCtx<'_>, object_stride: usize, object_capacity: usize) -> PipelineResources {
    let device = ctx.device;

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lumen phong shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/phong.wgsl").into()),
    });

    let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("lumen frame bgl"),
        entries: &[uniform_entry(false, FRAME_BLOCK_SIZE)],
    });
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("lumen object bgl"),
        entries: &[uniform_entry(true, OBJECT_BLOCK_SIZE)],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("lumen phong pipeline layout"),
        bind_group_layouts: &[&frame_bgl, &object_bgl],
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("lumen phong pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[GeometryBuffer::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: Some(wgpu::DepthStencilState {
            format: ctx.depth_format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    let frame_ubo = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("lumen frame ubo"),
        size: FRAME_BLOCK_SIZE as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("lumen frame bind group"),
        layout: &frame_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: frame_ubo.as_entire_binding(),
        }],
    });

    let (object_ubo, object_bind_group) =
        create_object_binding(device, &object_bgl, object_stride, object_capacity);

    PipelineResources {
        pipeline,
        frame_ubo,
        frame_bind_group,
        object_bgl,
        object_ubo,
        object_bind_group,
        object_capacity,
    }
}
