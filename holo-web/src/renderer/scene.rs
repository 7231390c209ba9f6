//! Scene rendering - globe wireframe, halo, POI markers, hand overlay

use nalgebra::{Rotation3, Vector3};

use super::shapes::{create_circle_vertices, create_line_vertices, create_ring_vertices, Vertex};
use super::state::{GPU_STATE, MAX_VERTICES};
use crate::bridge::with_session;
use crate::gesture::{HandLandmarks, HAND_SKELETON};
use crate::globe::{lat_lon_to_vector3, world_rotation, Poi};
use crate::interaction::{HandStatus, InteractionMode};

/// Globe radius in clip units at scale 1.0
const GLOBE_RADIUS: f32 = 0.55;
const RING_SEGMENTS: usize = 48;
const PARALLELS: [f32; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
const MERIDIAN_STEP_DEG: usize = 30;

mod colors {
    /// Wireframe facing the viewer
    pub const GRID_FRONT: [f32; 4] = [0.0, 0.85, 1.0, 0.75];
    /// Wireframe on the far side
    pub const GRID_BACK: [f32; 4] = [0.0, 0.85, 1.0, 0.15];
    pub const HALO: [f32; 4] = [0.0, 0.6, 1.0, 0.25];
    pub const POI: [f32; 4] = [0.4, 1.0, 0.9, 0.9];
    pub const POI_ACTIVE: [f32; 4] = [1.0, 0.85, 0.3, 1.0];
    pub const CURSOR: [f32; 4] = [0.2, 0.9, 0.9, 0.9];
    pub const CURSOR_PINCH: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
    pub const HAND: [f32; 4] = [0.2, 0.9, 0.9, 0.35];
    pub const BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.0, g: 0.02, b: 0.05, a: 1.0
    };
}

/// Everything one frame needs, copied out of the session
struct SceneSnapshot {
    world: Rotation3<f32>,
    scale: f32,
    glow: f32,
    mode: InteractionMode,
    status: HandStatus,
    hand: Option<HandLandmarks>,
    pois: &'static [Poi],
    active: Option<&'static str>,
}

fn snapshot() -> SceneSnapshot {
    with_session(|session| SceneSnapshot {
        world: world_rotation(session.state().rotation),
        scale: session.state().scale,
        glow: session.glow(),
        mode: session.mode(),
        status: session.status(),
        hand: session.hand().copied(),
        pois: session.pois(),
        active: session.active_poi().map(|p| p.id),
    })
}

/// Rotated, scaled sphere point to clip space plus depth (+ toward viewer)
struct Projector {
    world: Rotation3<f32>,
    radius: f32,
    aspect: f32,
}

impl Projector {
    fn project(&self, p: &Vector3<f32>) -> (f32, f32, f32) {
        let v = self.world * p * self.radius;
        (v.x / self.aspect, v.y, v.z)
    }

    fn polyline(&self, points: &[Vector3<f32>], out: &mut Vec<Vertex>) {
        for pair in points.windows(2) {
            let (x1, y1, z1) = self.project(&pair[0]);
            let (x2, y2, z2) = self.project(&pair[1]);
            let color = if z1 + z2 >= 0.0 { colors::GRID_FRONT } else { colors::GRID_BACK };
            out.extend(create_line_vertices(x1, y1, x2, y2, 0.0025, color));
        }
    }
}

/// Normalized video coordinates (0-1, mirrored) to clip space, flip Y
fn to_clip_space(x: f32, y: f32) -> (f32, f32) {
    (x * 2.0 - 1.0, -(y * 2.0 - 1.0))
}

fn build_globe_vertices(projector: &Projector) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for &lat in PARALLELS.iter() {
        let ring: Vec<_> = (0..=RING_SEGMENTS)
            .map(|i| {
                let lon = -180.0 + 360.0 * i as f32 / RING_SEGMENTS as f32;
                lat_lon_to_vector3(lat, lon, 1.0)
            })
            .collect();
        projector.polyline(&ring, &mut vertices);
    }

    for lon in (0..360).step_by(MERIDIAN_STEP_DEG) {
        let meridian: Vec<_> = (0..=RING_SEGMENTS / 2)
            .map(|i| {
                let lat = -90.0 + 180.0 * i as f32 / (RING_SEGMENTS / 2) as f32;
                lat_lon_to_vector3(lat, lon as f32 - 180.0, 1.0)
            })
            .collect();
        projector.polyline(&meridian, &mut vertices);
    }

    vertices
}

/// Markers on the near hemisphere only; the active one is larger
fn build_poi_vertices(projector: &Projector, pois: &[Poi], active: Option<&str>) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for poi in pois {
        let (x, y, z) = projector.project(&lat_lon_to_vector3(poi.lat, poi.lon, 1.0));
        if z < 0.0 {
            continue;
        }
        if active == Some(poi.id) {
            vertices.extend(create_circle_vertices(x, y, 0.022, projector.aspect, colors::POI_ACTIVE, 16));
            vertices.extend(create_ring_vertices(x, y, 0.04, projector.aspect, 0.003, colors::POI_ACTIVE, 24));
        } else {
            vertices.extend(create_circle_vertices(x, y, 0.011, projector.aspect, colors::POI, 12));
        }
    }

    vertices
}

fn build_hand_vertices(hand: &HandLandmarks) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for &(start, end) in HAND_SKELETON.iter() {
        let (a, b) = (hand.get(start), hand.get(end));
        let (x1, y1) = to_clip_space(1.0 - a.x, a.y);
        let (x2, y2) = to_clip_space(1.0 - b.x, b.y);
        vertices.extend(create_line_vertices(x1, y1, x2, y2, 0.003, colors::HAND));
    }

    vertices
}

fn build_cursor_vertices(status: &HandStatus, aspect: f32) -> Vec<Vertex> {
    let (x, y) = to_clip_space(status.cursor_x, status.cursor_y);
    let color = if status.is_pinching { colors::CURSOR_PINCH } else { colors::CURSOR };

    let mut vertices = create_ring_vertices(x, y, 0.035, aspect, 0.004, color, 32);
    vertices.extend(create_circle_vertices(x, y, 0.008, aspect, color, 12));
    vertices
}

fn build_scene(scene: &SceneSnapshot, aspect: f32) -> Vec<Vertex> {
    let projector = Projector {
        world: scene.world,
        radius: GLOBE_RADIUS * scene.scale,
        aspect,
    };

    let mut vertices = create_ring_vertices(
        0.0, 0.0, projector.radius * scene.glow, aspect, 0.012, colors::HALO, 64,
    );
    vertices.extend(build_globe_vertices(&projector));
    vertices.extend(build_poi_vertices(&projector, scene.pois, scene.active));

    if scene.mode == InteractionMode::Gesture {
        if let Some(hand) = &scene.hand {
            vertices.extend(build_hand_vertices(hand));
        }
        if scene.status.is_detected {
            vertices.extend(build_cursor_vertices(&scene.status, aspect));
        }
    }

    vertices.truncate(MAX_VERTICES);
    vertices
}

/// Draw the current session state
pub fn render_frame() {
    let scene = snapshot();

    GPU_STATE.with(|state_cell| {
        let mut state_ref = state_cell.borrow_mut();
        let state = match state_ref.as_mut() {
            Some(s) => s,
            None => return,
        };

        state.sync_size();
        let vertices = build_scene(&scene, state.aspect());

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") }
        );

        if !vertices.is_empty() {
            state.queue.write_buffer(
                &state.vertex_buffer,
                0,
                bytemuck::cast_slice(&vertices),
            );
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Globe Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colors::BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
