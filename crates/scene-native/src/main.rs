use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use glam::Vec3;
use scene_core::{
    cone_mesh, prism_mesh, Camera, ExpandingBeamVisual, FrameState, LabelGroup, MeshData,
    MeshVertex, SceneParams, BEAM_RADIAL_SEGMENTS,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct VolumeUniform {
    // rgb = wavelength color, a = this frame's opacity
    color: [f32; 4],
    // x = axis height offset, y = emissive intensity factor
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MarkerInstance {
    pos: [f32; 3],
    scale: f32,
    color: [f32; 4],
}

const MARKER_COUNT: usize = 3;
const MARKER_COLOR: [f32; 3] = [0.9, 0.92, 1.0];

/// The two scene components, driven once per rendered frame.
struct Scene {
    labels: LabelGroup,
    beam: ExpandingBeamVisual,
    was_visible: [bool; MARKER_COUNT],
}

impl Scene {
    fn new(params: &SceneParams) -> Self {
        Self {
            labels: LabelGroup::new(&params.landmarks(), params.wavelength_nm),
            beam: ExpandingBeamVisual::new(params.beam_spec()),
            was_visible: [false; MARKER_COUNT],
        }
    }

    fn update(&mut self, frame: &FrameState) {
        self.labels.update(frame);
        self.beam.update(frame);
        for (i, label) in self.labels.labels.iter().enumerate() {
            let visible = label.is_visible();
            if visible != self.was_visible[i] {
                log::debug!(
                    "label {:?} now {}",
                    label.spec().content.lines().next().unwrap_or(""),
                    if visible { "visible" } else { "hidden" }
                );
                self.was_visible[i] = visible;
            }
        }
    }
}

/// Slow orbit with a breathing radius so both the label window and the beam
/// solidity range get exercised.
fn orbit_camera(elapsed: f32, aspect: f32) -> Camera {
    let angle = 0.12 * elapsed;
    let radius = 18.0 + 8.0 * (0.05 * elapsed).sin();
    Camera {
        eye: Vec3::new(radius * angle.cos(), 6.0, radius * angle.sin()),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect,
        fovy_radians: std::f32::consts::FRAC_PI_4,
        znear: 0.1,
        zfar: 200.0,
    }
}

struct VolumeDraw {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    beam_pipeline: wgpu::RenderPipeline,
    marker_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    // painter's order: outer fog, inner cone, core line
    volumes: [VolumeDraw; 3],
    marker_quad_vb: wgpu::Buffer,
    marker_instance_vb: wgpu::Buffer,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, scene: &Scene) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(scene_core::SCENE_WGSL.into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals bgl"),
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
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let volume_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("volume bgl"),
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

        let geometry = scene.beam.geometry();
        let outer = cone_mesh(&geometry.outer, BEAM_RADIAL_SEGMENTS);
        let inner = cone_mesh(&geometry.inner, BEAM_RADIAL_SEGMENTS);
        let core = prism_mesh(&geometry.core);
        let volumes = [
            Self::volume_draw(&device, &volume_layout, &outer, "outer"),
            Self::volume_draw(&device, &volume_layout, &inner, "inner"),
            Self::volume_draw(&device, &volume_layout, &core, "core"),
        ];

        // Quad corners for two triangles, in billboard space
        let quad_corners: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let marker_quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marker quad vb"),
            contents: bytemuck::cast_slice(&quad_corners),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let marker_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker instance vb"),
            size: (std::mem::size_of::<MarkerInstance>() * MARKER_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let beam_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("beam pl"),
                bind_group_layouts: &[&globals_layout, &volume_layout],
                push_constant_ranges: &[],
            });
        let beam_vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };
        let beam_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("beam pipeline"),
            layout: Some(&beam_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("beam_vs"),
                buffers: &[beam_vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // both cone faces stay visible through the fog
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..wgpu::PrimitiveState::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("beam_fs"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let marker_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("marker pl"),
                bind_group_layouts: &[&globals_layout],
                push_constant_ranges: &[],
            });
        let marker_vertex_layouts = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];
        let marker_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("marker pipeline"),
            layout: Some(&marker_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("marker_vs"),
                buffers: &marker_vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("marker_fs"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            beam_pipeline,
            marker_pipeline,
            globals_buffer,
            globals_bind_group,
            volumes,
            marker_quad_vb,
            marker_instance_vb,
            width: size.width,
            height: size.height,
        })
    }

    fn volume_draw(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        mesh: &MeshData,
        name: &str,
    ) -> VolumeDraw {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(name),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(name),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(name),
            size: std::mem::size_of::<VolumeUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(name),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        VolumeDraw {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_matrix = camera.view_matrix();
        let view_proj = camera.projection_matrix() * view_matrix;
        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals {
                view_proj: view_proj.to_cols_array_2d(),
                camera_right: view_matrix.row(0).to_array(),
                camera_up: view_matrix.row(1).to_array(),
            }),
        );

        let geometry = scene.beam.geometry();
        let opacity = scene.beam.opacity();
        let axis_y = scene.beam.spec().axis_y;
        let volume_uniforms = [
            VolumeUniform {
                color: [geometry.color[0], geometry.color[1], geometry.color[2], opacity.outer],
                params: [axis_y, 1.0, 0.0, 0.0],
            },
            VolumeUniform {
                color: [geometry.color[0], geometry.color[1], geometry.color[2], opacity.inner],
                params: [axis_y, 1.0, 0.0, 0.0],
            },
            VolumeUniform {
                color: [geometry.color[0], geometry.color[1], geometry.color[2], opacity.core],
                params: [axis_y, scene.beam.intensity_factor(), 0.0, 0.0],
            },
        ];
        for (volume, uniform) in self.volumes.iter().zip(volume_uniforms.iter()) {
            self.queue
                .write_buffer(&volume.uniform_buffer, 0, bytemuck::bytes_of(uniform));
        }

        // Only visible labels are instanced this frame
        let mut instances: Vec<MarkerInstance> = Vec::with_capacity(MARKER_COUNT);
        for label in &scene.labels.labels {
            if !label.is_visible() {
                continue;
            }
            instances.push(MarkerInstance {
                pos: label.spec().anchor.to_array(),
                scale: label.scale(),
                color: [MARKER_COLOR[0], MARKER_COLOR[1], MARKER_COLOR[2], 0.9],
            });
        }
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.marker_instance_vb, 0, bytemuck::cast_slice(&instances));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.01,
                            g: 0.01,
                            b: 0.03,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.beam_pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for volume in &self.volumes {
                rpass.set_bind_group(1, &volume.bind_group, &[]);
                rpass.set_vertex_buffer(0, volume.vertex_buffer.slice(..));
                rpass.set_index_buffer(volume.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..volume.index_count, 0, 0..1);
            }
            if !instances.is_empty() {
                rpass.set_pipeline(&self.marker_pipeline);
                rpass.set_bind_group(0, &self.globals_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.marker_quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.marker_instance_vb.slice(..));
                rpass.draw(0..6, 0..instances.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn load_params() -> anyhow::Result<SceneParams> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            let params: SceneParams = serde_json::from_str(&text)?;
            log::info!("loaded scene preset from {path}");
            Ok(params)
        }
        None => Ok(SceneParams::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let params = load_params()?;
    let mut scene = Scene::new(&params);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Double-Slit Scene")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &scene))?;
    let start = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => {
            let elapsed = start.elapsed().as_secs_f32();
            let aspect = state.width as f32 / state.height.max(1) as f32;
            let camera = orbit_camera(elapsed, aspect);
            scene.update(&FrameState::new(camera.eye, elapsed));
            match state.render(&scene, &camera) {
                Ok(()) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
