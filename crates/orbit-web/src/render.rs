mod helpers;
mod post;
mod scene;
mod targets;

use crate::shaders;
use glam::Vec4;
use orbit_core::geometry::{BodyInstance, LineVertex};
use orbit_core::Camera;
use post::{PostBindGroups, PostResources};
use scene::{ScenePass, SceneUniforms};
use targets::{RenderTargets, HDR_FORMAT};
use web_sys as web;

/// Everything one frame draws. Colours are sRGB as authored.
pub struct FrameData<'f> {
    pub camera: &'f Camera,
    pub background: Vec4,
    pub fog: Option<(f32, f32)>,
    pub points: &'f [LineVertex],
    pub lines: &'f [LineVertex],
    pub bodies: &'f [BodyInstance],
}

#[inline]
fn srgb_to_linear(c: Vec4) -> Vec4 {
    Vec4::new(c.x.powf(2.2), c.y.powf(2.2), c.z.powf(2.2), c.w)
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,
    scene: ScenePass,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Browsers usually only offer bgra8unorm; render through an sRGB view.
        let view_format = format.add_srgb_suffix();
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[render] surface {:?} (view {:?}) {}x{}", format, view_format, width, height);

        let targets = RenderTargets::new(&device, width, height);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SCENE_WGSL.into()),
        });
        let scene = ScenePass::new(&device, &scene_shader, HDR_FORMAT);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, view_format);
        let post_groups = post.bind_groups(&device, &targets);
        post.write_uniforms(&queue, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            targets,
            post,
            post_groups,
            scene,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and rebuild size-dependent targets.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
        self.post_groups = self.post.bind_groups(&self.device, &self.targets);
        self.post.write_uniforms(&self.queue, self.width, self.height);
    }

    pub fn render(&mut self, frame_data: &FrameData) -> Result<(), wgpu::SurfaceError> {
        let background = srgb_to_linear(frame_data.background);
        let uniforms = SceneUniforms::new(frame_data.camera, background, frame_data.fog);
        self.scene.upload(
            &self.device,
            &self.queue,
            &uniforms,
            frame_data.points,
            frame_data.lines,
            frame_data.bodies,
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: background.x as f64,
                            g: background.y as f64,
                            b: background.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene.draw(&mut rpass);
        }

        self.post
            .run(&mut encoder, &self.post_groups, &self.targets, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
