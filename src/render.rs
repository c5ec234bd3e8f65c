use crate::constants::*;
use crate::core::{AppState, SurfaceSize};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod color;
mod helpers;
mod mesh;
mod targets;
use mesh::{MeshData, Vertex};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    light: [f32; 4],
    ambient: [f32; 4],
    output: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// A mesh's slice of the shared vertex/index buffers plus its own uniforms.
struct DrawItem {
    index_range: std::ops::Range<u32>,
    base_vertex: i32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
    material: [f32; 4],
}

impl DrawItem {
    fn write(&self, queue: &wgpu::Queue, model: Mat4) {
        let u = ModelUniforms {
            model: model.to_cols_array_2d(),
            color: self.color,
            material: self.material,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    targets: RenderTargets,

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    cube: DrawItem,
    floor: DrawItem,

    clear_color: wgpu::Color,
    encode_srgb: bool,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let size = SurfaceSize::new(canvas.width().max(1), canvas.height().max(1));

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
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Without an sRGB swapchain the shader encodes its output itself.
        let encode_srgb = !format.is_srgb();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} msaa={}",
            size.width,
            size.height,
            format,
            MSAA_SAMPLES
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let globals_bgl = helpers::uniform_bind_group_layout(&device, "globals_bgl");
        let model_bgl = helpers::uniform_bind_group_layout(&device, "model_bgl");
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &model_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(
            &device,
            &layout,
            &shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            },
            format,
            MSAA_SAMPLES,
        );
        let targets = RenderTargets::new(&device, size, format, MSAA_SAMPLES);

        // Both meshes share one vertex and one index buffer.
        let cube_mesh = mesh::cube(CUBE_SIZE);
        let floor_mesh = mesh::floor_plane(FLOOR_SIZE);
        let mut combined = MeshData::default();
        combined.vertices.extend_from_slice(&cube_mesh.vertices);
        combined.vertices.extend_from_slice(&floor_mesh.vertices);
        combined.indices.extend_from_slice(&cube_mesh.indices);
        combined.indices.extend_from_slice(&floor_mesh.indices);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vb"),
            contents: bytemuck::cast_slice(&combined.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_ib"),
            contents: bytemuck::cast_slice(&combined.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let globals_buffer = helpers::uniform_buffer(
            &device,
            "globals_uniforms",
            std::mem::size_of::<GlobalUniforms>(),
        );
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let cube_index_count = cube_mesh.indices.len() as u32;
        let floor_index_count = floor_mesh.indices.len() as u32;
        let cube = make_draw_item(
            &device,
            &model_bgl,
            "cube",
            0..cube_index_count,
            0,
            CUBE_HEX,
            CUBE_METALNESS,
            CUBE_ROUGHNESS,
        );
        let floor = make_draw_item(
            &device,
            &model_bgl,
            "floor",
            cube_index_count..cube_index_count + floor_index_count,
            cube_mesh.vertices.len() as i32,
            FLOOR_HEX,
            FLOOR_METALNESS,
            FLOOR_ROUGHNESS,
        );

        let background = if encode_srgb {
            color::hex_to_srgb(BACKGROUND_HEX)
        } else {
            color::hex_to_linear(BACKGROUND_HEX)
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            targets,
            vertex_buffer,
            index_buffer,
            globals_buffer,
            globals_bind_group,
            cube,
            floor,
            clear_color: wgpu::Color {
                r: background[0] as f64,
                g: background[1] as f64,
                b: background[2] as f64,
                a: 1.0,
            },
            encode_srgb,
        })
    }

    /// Reconfigure the swapchain and attachments for a new backing size.
    pub fn resize(&mut self, size: SurfaceSize) {
        if size.is_empty() {
            return;
        }
        if size.width == self.config.width && size.height == self.config.height {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, size);
    }

    pub fn render(&mut self, state: &AppState) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_globals(state);
        self.cube.write(&self.queue, state.subject.model_matrix());
        self.floor
            .write(&self.queue, Mat4::from_translation(Vec3::new(0.0, FLOOR_Y, 0.0)));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let (color_view, resolve_target) = match &self.targets.msaa_view {
                Some(msaa) => (msaa, Some(&view)),
                None => (&view, None),
            };
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            for item in [&self.floor, &self.cube] {
                rpass.set_bind_group(1, &item.bind_group, &[]);
                rpass.draw_indexed(item.index_range.clone(), item.base_vertex, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl GpuState {
    fn write_globals(&self, state: &AppState) {
        let eye = state.viewpoint.position;
        let light_dir = Vec3::from_array(KEY_LIGHT_POSITION).normalize_or_zero();
        let g = GlobalUniforms {
            view_proj: state.viewpoint.view_projection().to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            light: [light_dir.x, light_dir.y, light_dir.z, KEY_LIGHT_INTENSITY],
            ambient: [AMBIENT_INTENSITY, 0.0, 0.0, 0.0],
            output: [if self.encode_srgb { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }
}

#[allow(clippy::too_many_arguments)]
fn make_draw_item(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    label: &str,
    index_range: std::ops::Range<u32>,
    base_vertex: i32,
    hex: u32,
    metalness: f32,
    roughness: f32,
) -> DrawItem {
    let uniform_buffer = helpers::uniform_buffer(
        device,
        &format!("{}_uniforms", label),
        std::mem::size_of::<ModelUniforms>(),
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let [r, g, b] = color::hex_to_linear(hex);
    DrawItem {
        index_range,
        base_vertex,
        uniform_buffer,
        bind_group,
        color: [r, g, b, 1.0],
        material: [metalness, roughness, 0.0, 0.0],
    }
}
