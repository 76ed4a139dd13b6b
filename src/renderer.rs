use std::sync::Arc;

use anyhow::{bail, Result};
use rand::Rng;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::scene::Scene;
use crate::shape::{ShapeGeometry, Vertex};

/// Per-shape GPU resources: one vertex buffer and one mvp uniform slot,
/// created at initialization and immutable afterwards (the uniform contents
/// are rewritten each frame, the buffers themselves never change).
struct GpuShape {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    mvp_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Owns the wgpu device, the shared shape pipeline, and the uploaded shapes,
/// and drives the render-then-advance frame loop over the scene.
pub struct ChainRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    depth_view: wgpu::TextureView,
    shapes: Vec<GpuShape>,
    scene: Scene,
}

impl ChainRenderer {
    /// Fails on adapter/device/surface setup or a shader diagnostic; shapes
    /// are only generated once the pipeline is in place.
    pub async fn new<R: Rng>(
        window: Arc<Window>,
        segments: &[u32],
        shape_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &config);

        let shader = Self::compile_shader(&device).await?;
        let (pipeline, bind_group_layout) = Self::create_pipeline(&device, &shader, config.format);
        let depth_view = Self::create_depth_texture(&device, size.width, size.height);

        let mut scene = Scene::new(size.width, size.height);
        let geometries = scene.populate(segments, shape_count, rng);
        let shapes = geometries
            .iter()
            .map(|g| Self::upload_shape(&device, &bind_group_layout, g))
            .collect();

        log::info!(
            "renderer initialized: {} shapes, {} cubes each, {}x{} surface",
            shape_count,
            segments.iter().sum::<u32>(),
            size.width,
            size.height
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
            pipeline,
            depth_view,
            shapes,
            scene,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| anyhow::anyhow!("Failed to find appropriate adapter"))
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| e.into())
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    /// Compiles the shared WGSL module under a validation error scope so a
    /// bad shader surfaces as a failed initialization carrying the
    /// diagnostic text, instead of a late device error.
    async fn compile_shader(device: &wgpu::Device) -> Result<wgpu::ShaderModule> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shape Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shape.wgsl").into()),
        });
        if let Some(error) = device.pop_error_scope().await {
            bail!("Failed to compile shape shader: {error}");
        }
        Ok(shader)
    }

    fn create_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroupLayout) {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("shape_bind_group_layout"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shape Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shape Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
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
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group_layout)
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn upload_shape(
        device: &wgpu::Device,
        bind_group_layout: &wgpu::BindGroupLayout,
        geometry: &ShapeGeometry,
    ) -> GpuShape {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let mvp_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape MVP Buffer"),
            contents: bytemuck::cast_slice(&glam::Mat4::IDENTITY.to_cols_array()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: mvp_buffer.as_entire_binding(),
            }],
            label: Some("shape_bind_group"),
        });

        GpuShape {
            vertex_buffer,
            vertex_count: geometry.vertex_count(),
            mvp_buffer,
            bind_group,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_texture(&self.device, new_size.width, new_size.height);
        self.scene.resize(new_size.width, new_size.height);
    }

    /// Renders the current frame, then advances the scene clock, so the
    /// drawn transforms always reflect time before this tick. The clock
    /// advances even when the surface rejects the frame (e.g. `Outdated`
    /// mid-resize), so a dropped frame does not freeze the animation.
    pub fn advance_and_render(&mut self, dt: f32) -> std::result::Result<(), wgpu::SurfaceError> {
        let rendered = self.render();
        self.scene.advance(dt);
        rendered
    }

    fn render(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        let draws = self.scene.frame();
        for draw in &draws {
            self.queue.write_buffer(
                &self.shapes[draw.shape_index].mvp_buffer,
                0,
                bytemuck::cast_slice(&draw.mvp.to_cols_array()),
            );
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shapes Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            for draw in &draws {
                let shape = &self.shapes[draw.shape_index];
                let vp = draw.viewport;
                render_pass.set_viewport(
                    vp.x as f32,
                    vp.y as f32,
                    vp.width as f32,
                    vp.height as f32,
                    0.0,
                    1.0,
                );
                render_pass.set_bind_group(0, &shape.bind_group, &[]);
                render_pass.set_vertex_buffer(0, shape.vertex_buffer.slice(..));
                render_pass.draw(0..shape.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
