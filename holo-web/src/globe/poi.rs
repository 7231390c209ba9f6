//! Points of interest and the "facing the viewer" selector

use nalgebra::Rotation3;

use super::coordinates::{angle_to_viewer, lat_lon_to_vector3};

/// A labelled geographic marker
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Poi {
    pub id: &'static str,
    pub label: &'static str,
    /// Degrees, -90 to 90
    pub lat: f32,
    /// Degrees, -180 to 180
    pub lon: f32,
    pub url: &'static str,
    pub description: Option<&'static str>,
}

/// Built-in catalog, in selection priority order for ties
pub static POIS: [Poi; 10] = [
    Poi {
        id: "beijing",
        label: "Beijing",
        lat: 39.9042,
        lon: 116.4074,
        url: "https://en.wikipedia.org/wiki/Beijing",
        description: Some("Capital of China"),
    },
    Poi {
        id: "newyork",
        label: "New York",
        lat: 40.7128,
        lon: -74.0060,
        url: "https://en.wikipedia.org/wiki/New_York_City",
        description: Some("The Big Apple"),
    },
    Poi {
        id: "london",
        label: "London",
        lat: 51.5074,
        lon: -0.1278,
        url: "https://en.wikipedia.org/wiki/London",
        description: Some("Capital of UK"),
    },
    Poi {
        id: "tokyo",
        label: "Tokyo",
        lat: 35.6762,
        lon: 139.6503,
        url: "https://en.wikipedia.org/wiki/Tokyo",
        description: Some("Capital of Japan"),
    },
    Poi {
        id: "paris",
        label: "Paris",
        lat: 48.8566,
        lon: 2.3522,
        url: "https://en.wikipedia.org/wiki/Paris",
        description: Some("City of Light"),
    },
    Poi {
        id: "sydney",
        label: "Sydney",
        lat: -33.8688,
        lon: 151.2093,
        url: "https://en.wikipedia.org/wiki/Sydney",
        description: Some("Largest city in Australia"),
    },
    Poi {
        id: "rio",
        label: "Rio de Janeiro",
        lat: -22.9068,
        lon: -43.1729,
        url: "https://en.wikipedia.org/wiki/Rio_de_Janeiro",
        description: Some("Marvelous City"),
    },
    Poi {
        id: "cairo",
        label: "Cairo",
        lat: 30.0444,
        lon: 31.2357,
        url: "https://en.wikipedia.org/wiki/Cairo",
        description: Some("City of a Thousand Minarets"),
    },
    Poi {
        id: "mumbai",
        label: "Mumbai",
        lat: 19.0760,
        lon: 72.8777,
        url: "https://en.wikipedia.org/wiki/Mumbai",
        description: Some("Financial capital of India"),
    },
    Poi {
        id: "moscow",
        label: "Moscow",
        lat: 55.7558,
        lon: 37.6173,
        url: "https://en.wikipedia.org/wiki/Moscow",
        description: Some("Capital of Russia"),
    },
];

/// Index of the POI whose rotated position is nearest the view direction.
///
/// Ties keep the earlier entry. None for an empty slice.
pub fn closest_to_view(pois: &[Poi], world: &Rotation3<f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (i, poi) in pois.iter().enumerate() {
        let position = world * lat_lon_to_vector3(poi.lat, poi.lon, 1.0);
        let angle = angle_to_viewer(&position);

        match best {
            Some((_, best_angle)) if angle >= best_angle => {}
            _ => best = Some((i, angle)),
        }
    }

    best.map(|(i, _)| i)
}

/// Tracks the active POI across frames and reports changes once
#[derive(Clone, Debug, Default)]
pub struct PoiSelector {
    active: Option<usize>,
}

impl PoiSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Re-evaluate for this frame. Returns the new index only when it changed.
    pub fn update(&mut self, pois: &[Poi], world: &Rotation3<f32>) -> Option<usize> {
        let closest = closest_to_view(pois, world);
        if closest == self.active {
            return None;
        }
        self.active = closest;
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::world_rotation;
    use crate::interaction::Vec2;

    fn poi(id: &'static str, lat: f32, lon: f32) -> Poi {
        Poi { id, label: id, lat, lon, url: "", description: None }
    }

    #[test]
    fn test_front_facing_poi_wins() {
        // lon -90 faces the viewer with no rotation
        let pois = [poi("back", 0.0, 90.0), poi("front", 0.0, -90.0), poi("side", 0.0, 0.0)];
        let world = world_rotation(Vec2::ZERO);
        assert_eq!(closest_to_view(&pois, &world), Some(1));
    }

    #[test]
    fn test_rotation_changes_winner() {
        let pois = [poi("front", 0.0, -90.0), poi("side", 0.0, 0.0)];
        let world = world_rotation(Vec2::new(0.0, -std::f32::consts::FRAC_PI_2));
        assert_eq!(closest_to_view(&pois, &world), Some(1));
    }

    #[test]
    fn test_ties_resolve_to_first() {
        let pois = [poi("a", 10.0, -90.0), poi("b", 10.0, -90.0)];
        let world = world_rotation(Vec2::ZERO);
        assert_eq!(closest_to_view(&pois, &world), Some(0));
    }

    #[test]
    fn test_empty_catalog() {
        let world = world_rotation(Vec2::ZERO);
        assert_eq!(closest_to_view(&[], &world), None);
        let mut selector = PoiSelector::new();
        assert_eq!(selector.update(&[], &world), None);
        assert_eq!(selector.active(), None);
    }

    #[test]
    fn test_selector_notifies_once() {
        let pois = [poi("front", 0.0, -90.0), poi("side", 0.0, 0.0)];
        let mut selector = PoiSelector::new();
        let world = world_rotation(Vec2::ZERO);

        assert_eq!(selector.update(&pois, &world), Some(0));
        assert_eq!(selector.update(&pois, &world), None);
        assert_eq!(selector.update(&pois, &world), None);

        let turned = world_rotation(Vec2::new(0.0, -std::f32::consts::FRAC_PI_2));
        assert_eq!(selector.update(&pois, &turned), Some(1));
        assert_eq!(selector.active(), Some(1));
        assert_eq!(selector.update(&pois, &turned), None);
    }

    #[test]
    fn test_catalog_is_in_range() {
        for p in POIS.iter() {
            assert!((-90.0..=90.0).contains(&p.lat), "{}", p.id);
            assert!((-180.0..=180.0).contains(&p.lon), "{}", p.id);
            assert!(p.url.starts_with("https://"));
        }
    }
}
