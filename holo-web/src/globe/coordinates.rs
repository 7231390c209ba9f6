//! Sphere projection and view-angle helpers
//!
//! Axes follow the scene: +Y up, +Z toward the viewer, globe at the origin.

use nalgebra::{Rotation3, Unit, Vector3};

use crate::interaction::Vec2;

/// Unit vector from the globe centre toward the viewer
pub fn view_direction() -> Unit<Vector3<f32>> {
    Vector3::z_axis()
}

/// Latitude/longitude (degrees) to a point on a sphere of `radius`
///
/// ```text
/// phi   = 90° - lat   (polar angle from +Y)
/// theta = lon + 180°
/// x = -r sin(phi) cos(theta)
/// y =  r cos(phi)
/// z =  r sin(phi) sin(theta)
/// ```
pub fn lat_lon_to_vector3(lat: f32, lon: f32, radius: f32) -> Vector3<f32> {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();

    Vector3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Globe orientation for a (pitch, yaw) rotation, X applied after Y
pub fn world_rotation(rotation: Vec2) -> Rotation3<f32> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
    rx * ry
}

/// Angle (radians) between `position` (origin-relative) and the viewer.
///
/// Zero-length input is treated as facing directly away.
pub fn angle_to_viewer(position: &Vector3<f32>) -> f32 {
    if position.norm() < 1.0e-6 {
        return std::f32::consts::PI;
    }
    // atan2 keeps precision near 0 where acos(dot) does not
    let view = view_direction().into_inner();
    position.cross(&view).norm().atan2(position.dot(&view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).norm() < EPS
    }

    #[test]
    fn test_poles() {
        assert!(close(lat_lon_to_vector3(90.0, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0)));
        assert!(close(lat_lon_to_vector3(-90.0, 45.0, 2.0), Vector3::new(0.0, -2.0, 0.0)));
    }

    #[test]
    fn test_equator_points() {
        // lon 0 -> theta 180 -> x = 1, z = 0
        assert!(close(lat_lon_to_vector3(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 0.0)));
        // lon -90 -> theta 90 -> z = 1 (faces viewer)
        assert!(close(lat_lon_to_vector3(0.0, -90.0, 1.0), Vector3::new(0.0, 0.0, 1.0)));
        // lon 90 -> theta 270 -> z = -1
        assert!(close(lat_lon_to_vector3(0.0, 90.0, 1.0), Vector3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_projection_radius() {
        let p = lat_lon_to_vector3(39.9042, 116.4074, 2.0);
        assert!((p.norm() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_yaw_brings_point_to_front() {
        // lon 0 sits at +X; a -90° yaw about Y swings +X to +Z
        let p = lat_lon_to_vector3(0.0, 0.0, 1.0);
        let rotated = world_rotation(Vec2::new(0.0, -FRAC_PI_2)) * p;
        assert!(close(rotated, Vector3::new(0.0, 0.0, 1.0)));
        assert!(angle_to_viewer(&rotated) < EPS);
    }

    #[test]
    fn test_angle_to_viewer() {
        assert!((angle_to_viewer(&Vector3::new(0.0, 0.0, 5.0))).abs() < EPS);
        assert!((angle_to_viewer(&Vector3::new(3.0, 0.0, 0.0)) - FRAC_PI_2).abs() < EPS);
        assert!((angle_to_viewer(&Vector3::new(0.0, 0.0, -1.0)) - PI).abs() < EPS);
        assert!((angle_to_viewer(&Vector3::zeros()) - PI).abs() < EPS);
    }
}
