//! Geometry pass into the HDR target: stars as points, rings/trails/waves as
//! lines, bodies as camera-facing instanced quads.

use super::helpers::{self, GrowBuffer};
use crate::camera::billboard_axes;
use glam::Vec4;
use orbit_core::geometry::{BodyInstance, LineVertex};
use orbit_core::Camera;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    fog_color: [f32; 4],
    fog: [f32; 4],
}

impl SceneUniforms {
    /// `fog_color` must already be linear.
    pub(crate) fn new(camera: &Camera, fog_color: Vec4, fog: Option<(f32, f32)>) -> Self {
        let (right, up) = billboard_axes(camera.view_matrix());
        let fog = match fog {
            Some((near, far)) => [near, far, 1.0, 0.0],
            None => [0.0, 0.0, 0.0, 0.0],
        };
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            fog_color: fog_color.to_array(),
            fog,
        }
    }
}

const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

const LINE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4];
const QUAD_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const BODY_ATTRS: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32, 3 => Float32x4, 4 => Float32x4];

fn line_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &LINE_ATTRS,
    }
}

pub(crate) struct ScenePass {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    point_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    body_pipeline: wgpu::RenderPipeline,
    quad: wgpu::Buffer,
    points: GrowBuffer,
    lines: GrowBuffer,
    bodies: GrowBuffer,
    counts: [u32; 3],
}

impl ScenePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let point_pipeline = helpers::make_scene_pipeline(
            device,
            &layout,
            shader,
            "stars_pipeline",
            ("vs_line", "fs_point"),
            &[line_layout()],
            wgpu::PrimitiveTopology::PointList,
            color_format,
        );
        let line_pipeline = helpers::make_scene_pipeline(
            device,
            &layout,
            shader,
            "lines_pipeline",
            ("vs_line", "fs_line"),
            &[line_layout()],
            wgpu::PrimitiveTopology::LineList,
            color_format,
        );
        let body_pipeline = helpers::make_scene_pipeline(
            device,
            &layout,
            shader,
            "bodies_pipeline",
            ("vs_body", "fs_body"),
            &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &QUAD_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<BodyInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &BODY_ATTRS,
                },
            ],
            wgpu::PrimitiveTopology::TriangleList,
            color_format,
        );

        let quad = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("body_quad"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let vertex = wgpu::BufferUsages::VERTEX;
        let line_size = std::mem::size_of::<LineVertex>() as u64;
        Self {
            uniform_buffer,
            bind_group,
            point_pipeline,
            line_pipeline,
            body_pipeline,
            quad,
            points: GrowBuffer::new(device, "star_points", vertex, 8192 * line_size),
            lines: GrowBuffer::new(device, "line_vertices", vertex, 8192 * line_size),
            bodies: GrowBuffer::new(device, "body_instances", vertex, 16 * std::mem::size_of::<BodyInstance>() as u64),
            counts: [0; 3],
        }
    }

    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        uniforms: &SceneUniforms,
        points: &[LineVertex],
        lines: &[LineVertex],
        bodies: &[BodyInstance],
    ) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        self.points.write(device, queue, bytemuck::cast_slice(points));
        self.lines.write(device, queue, bytemuck::cast_slice(lines));
        self.bodies.write(device, queue, bytemuck::cast_slice(bodies));
        self.counts = [points.len() as u32, lines.len() as u32, bodies.len() as u32];
    }

    /// Stars first, then lines, then bodies on top.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let [n_points, n_lines, n_bodies] = self.counts;
        rpass.set_bind_group(0, &self.bind_group, &[]);
        if n_points > 0 && !self.points.is_empty() {
            rpass.set_pipeline(&self.point_pipeline);
            rpass.set_vertex_buffer(0, self.points.slice());
            rpass.draw(0..n_points, 0..1);
        }
        if n_lines > 0 && !self.lines.is_empty() {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.lines.slice());
            rpass.draw(0..n_lines, 0..1);
        }
        if n_bodies > 0 && !self.bodies.is_empty() {
            rpass.set_pipeline(&self.body_pipeline);
            rpass.set_vertex_buffer(0, self.quad.slice(..));
            rpass.set_vertex_buffer(1, self.bodies.slice());
            rpass.draw(0..QUAD_CORNERS.len() as u32, 0..n_bodies);
        }
    }
}
