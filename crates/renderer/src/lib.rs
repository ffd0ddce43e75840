//! Renderer: wgpu init + wireframe mesh pipeline.
//! wgpu = 26.x, winit = 0.30.x

use std::num::NonZeroU64;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::{
    util::DeviceExt,
    Backends, BindGroup, BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingType,
    BlendState, Buffer, BufferBindingType, BufferUsages, ColorTargetState, ColorWrites,
    CommandEncoderDescriptor, Device, DeviceDescriptor, Features, FragmentState, Instance,
    InstanceDescriptor, Limits, LoadOp, Operations, PipelineLayoutDescriptor, PolygonMode,
    PowerPreference, PresentMode, PrimitiveState, Queue, RenderPassColorAttachment,
    RenderPassDescriptor, RenderPipeline, RenderPipelineDescriptor, ShaderModuleDescriptor,
    ShaderSource, ShaderStages, StoreOp, Surface, SurfaceConfiguration, SurfaceError,
    TextureUsages, VertexBufferLayout, VertexState, VertexStepMode,
};

use winit::{dpi::PhysicalSize, window::Window};

use asset::mesh::FlatMesh;
use corelib::error::ViewerError;

/// Vertex: position only, matching the flat coordinate stream.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
}
impl Vertex {
    pub const LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
    };
}

/// Transform UBO (16-byte aligned).
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct TransformUniform {
    transform: [[f32; 4]; 4],
}

/// Fixed dark-grey background.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

/// The model transform feeds clip space in OpenGL conventions (z in [-1, 1]);
/// wgpu clips z to [0, 1]. Left-multiplying by this matrix remaps the depth
/// range so the same geometry stays visible.
#[rustfmt::skip]
const OPENGL_TO_WGPU: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
]);

pub struct GpuState {
    // Surface
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,

    // Device/queue
    device: Device,
    queue: Queue,

    // Pipeline & geometry (uploaded once, never invalidated)
    pipeline: RenderPipeline,
    vertex_buf: Buffer,
    vertex_count: u32,

    // Transform uniform (bind group cached; only the contents change)
    transform_bg: BindGroup,
    transform_buf: Buffer,

    // Size cache
    width: u32,
    height: u32,
}

impl GpuState {
    /// Create GPU state bound to an `Arc<Window>` and upload the mesh.
    /// Runs exactly once, before the first frame.
    pub async fn new(
        window: Arc<Window>,
        backends: Backends,
        mesh: &FlatMesh,
    ) -> Result<Self, ViewerError> {
        debug_assert!(!mesh.is_empty());

        let PhysicalSize { width, height } = window.inner_size();
        let width = width.max(1);
        let height = height.max(1);

        // Instance & surface
        let instance = Instance::new(&InstanceDescriptor {
            backends,
            ..Default::default()
        });
        let surface: Surface<'static> = instance
            .create_surface(window.clone())
            .map_err(|e| ViewerError::Gpu(format!("create_surface failed: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| ViewerError::Gpu(format!("no suitable GPU adapter: {e}")))?;
        log::info!("Adapter: {:?}", adapter.get_info());

        // Wireframe rendering uses the line polygon mode, set once for the
        // whole pipeline.
        let (device, queue) = adapter
            .request_device(&DeviceDescriptor {
                label: Some("wireview Device"),
                required_features: Features::POLYGON_MODE_LINE,
                required_limits: Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| ViewerError::Gpu(format!("request_device failed: {e}")))?;

        // Surface format (prefer sRGB)
        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        // Configure surface
        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // ==== Shaders & pipeline, under a validation scope ====
        // A validation message here is a fatal configuration error, surfaced
        // the same way a mesh-load failure is.
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Wireframe WGSL"),
            source: ShaderSource::Wgsl(include_str!("shaders/wireframe.wgsl").into()),
        });

        // ==== Transform BGL/BG ====
        let transform_bgl = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Transform BGL"),
            entries: &[BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::VERTEX,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(
                        NonZeroU64::new(std::mem::size_of::<TransformUniform>() as u64).unwrap(),
                    ),
                },
                count: None,
            }],
        });

        // Identity model transform; render() rewrites this every frame.
        let transform_init = TransformUniform {
            transform: OPENGL_TO_WGPU.to_cols_array_2d(),
        };
        let transform_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Transform UBO"),
            contents: bytemuck::bytes_of(&transform_init),
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        });
        let transform_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Transform BG"),
            layout: &transform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buf.as_entire_binding(),
            }],
        });

        // ==== Pipeline ====
        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Wireframe PipelineLayout"),
            bind_group_layouts: &[&transform_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Wireframe Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: surface_format,
                    blend: Some(BlendState::REPLACE),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: PrimitiveState {
                polygon_mode: PolygonMode::Line,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(err) = device.pop_error_scope().await {
            return Err(ViewerError::Shader(err.to_string()));
        }

        // ==== Geometry: one-time static upload of the flat stream ====
        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh VB"),
            contents: bytemuck::cast_slice(mesh.coords()),
            usage: BufferUsages::VERTEX,
        });
        let vertex_count = mesh.vertex_count();
        log::info!("Uploaded mesh: {} vertices", vertex_count);

        Ok(Self {
            surface,
            surface_config,
            device,
            queue,
            pipeline,
            vertex_buf,
            vertex_count,
            transform_bg,
            transform_buf,
            width,
            height,
        })
    }

    /// Resize: reconfigure the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.surface_config.width = self.width;
        self.surface_config.height = self.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Render one frame: upload the current transform + clear + draw.
    pub fn render(&mut self, transform: Mat4) -> Result<(), SurfaceError> {
        let uniform = TransformUniform {
            transform: (OPENGL_TO_WGPU * transform).to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.transform_buf, 0, bytemuck::bytes_of(&uniform));

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&Default::default());

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("MainEncoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("MainPass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(CLEAR_COLOR),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.transform_bg, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
            rpass.draw(0..self.vertex_count, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    pub fn is_surface_lost(err: &SurfaceError) -> bool {
        matches!(err, SurfaceError::Lost | SurfaceError::Outdated)
    }

    pub fn recreate_surface(&mut self) {
        self.resize(self.width, self.height);
    }
}
