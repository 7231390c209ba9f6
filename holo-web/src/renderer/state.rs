//! GPU state - WebGPU device, surface and the single colored-triangle pipeline
//!
//! The canvas follows its CSS layout size; `GpuState::sync_size` is checked
//! every frame and reconfigures the surface when the page resizes.

use std::cell::RefCell;
use std::fmt;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::shapes::Vertex;

/// Canvas the globe is drawn into
pub const CANVAS_ID: &str = "holo-canvas";

/// Used when the canvas has no layout size yet
const FALLBACK_SIZE: (u32, u32) = (800, 600);

/// Upper bound on vertices per frame
pub const MAX_VERTICES: usize = 32 * 1024;

/// Errors that can occur during GPU initialization
#[derive(Debug)]
pub enum GpuStateError {
    NoWindow,
    NoDocument,
    NoCanvas,
    SurfaceCreationFailed(String),
    NoAdapter,
    DeviceCreationFailed(String),
    NoSurfaceFormat,
}

impl fmt::Display for GpuStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuStateError::NoWindow => write!(f, "No window found"),
            GpuStateError::NoDocument => write!(f, "No document found"),
            GpuStateError::NoCanvas => write!(f, "No canvas with id '{}' found", CANVAS_ID),
            GpuStateError::SurfaceCreationFailed(e) => write!(f, "Surface creation failed: {}", e),
            GpuStateError::NoAdapter => write!(f, "WebGPU adapter unavailable"),
            GpuStateError::DeviceCreationFailed(e) => write!(f, "Device creation failed: {}", e),
            GpuStateError::NoSurfaceFormat => write!(f, "Surface reports no supported formats"),
        }
    }
}

impl From<GpuStateError> for JsValue {
    fn from(err: GpuStateError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Everything needed to draw a frame
pub(crate) struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub render_pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    canvas: HtmlCanvasElement,
    config: wgpu::SurfaceConfiguration,
}

impl GpuState {
    /// Width over height, for keeping the globe round
    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    /// Match the surface to the canvas' current layout size
    pub fn sync_size(&mut self) {
        let (width, height) = layout_size(&self.canvas);
        if (width, height) == (self.config.width, self.config.height) {
            return;
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }
}

thread_local! {
    pub(crate) static GPU_STATE: RefCell<Option<GpuState>> = RefCell::new(None);
}

fn find_canvas() -> Result<HtmlCanvasElement, GpuStateError> {
    web_sys::window()
        .ok_or(GpuStateError::NoWindow)?
        .document()
        .ok_or(GpuStateError::NoDocument)?
        .get_element_by_id(CANVAS_ID)
        .ok_or(GpuStateError::NoCanvas)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GpuStateError::NoCanvas)
}

fn layout_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    match (canvas.client_width(), canvas.client_height()) {
        (w, h) if w > 0 && h > 0 => (w as u32, h as u32),
        _ => FALLBACK_SIZE,
    }
}

/// sRGB if offered, else whatever the surface lists first
fn surface_config(
    caps: &wgpu::SurfaceCapabilities,
    (width, height): (u32, u32),
) -> Result<wgpu::SurfaceConfiguration, GpuStateError> {
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .ok_or(GpuStateError::NoSurfaceFormat)?;

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}

/// Pass-through pipeline: clip-space triangles, alpha blended
fn globe_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Globe Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Globe Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    let blended = [Some(wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
    })];

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Globe Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &blended,
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Set up WebGPU on `#holo-canvas` and store it for `render_frame`
pub async fn initialize_gpu() -> Result<(), GpuStateError> {
    let canvas = find_canvas()?;
    let size = layout_size(&canvas);
    canvas.set_width(size.0);
    canvas.set_height(size.1);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| GpuStateError::SurfaceCreationFailed(e.to_string()))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        })
        .await
        .ok_or(GpuStateError::NoAdapter)?;

    let descriptor = wgpu::DeviceDescriptor {
        label: Some("Holo Globe Device"),
        required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
        ..Default::default()
    };
    let (device, queue) = adapter
        .request_device(&descriptor, None)
        .await
        .map_err(|e| GpuStateError::DeviceCreationFailed(e.to_string()))?;

    let config = surface_config(&surface.get_capabilities(&adapter), size)?;
    surface.configure(&device, &config);

    let render_pipeline = globe_pipeline(&device, config.format);
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Globe Vertices"),
        size: (MAX_VERTICES * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let state = GpuState {
        device,
        queue,
        surface,
        render_pipeline,
        vertex_buffer,
        canvas,
        config,
    };
    GPU_STATE.with(|cell| *cell.borrow_mut() = Some(state));

    Ok(())
}
