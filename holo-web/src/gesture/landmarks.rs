//! MediaPipe hand landmark set (21 points, normalized image space)
//!
//! One set is produced per detection cycle, classified, then dropped.

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand
pub const LANDMARK_COUNT: usize = 21;

/// Floats per hand in the flat buffer handed over from JS
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

/// Hand skeleton connections for the debug overlay
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP), (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// Non-thumb fingertips paired with their PIP joints
pub const FINGER_TIPS_AND_PIPS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth, provider's sign convention
}

impl HandLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the image plane (z ignored)
    pub fn distance_2d(&self, other: &HandLandmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One detected hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse the `hand`-th hand out of a flat `[x, y, z, x, y, z, ...]` buffer.
    ///
    /// Returns None when the buffer is too short to hold that hand.
    pub fn from_flat(flat_data: &[f32], hand: usize) -> Option<Self> {
        let start = hand * FLOATS_PER_HAND;
        let chunk = flat_data.get(start..start + FLOATS_PER_HAND)?;

        let mut points = [HandLandmark::default(); LANDMARK_COUNT];
        for (point, xyz) in points.iter_mut().zip(chunk.chunks_exact(3)) {
            *point = HandLandmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Some(Self { points })
    }

    pub fn get(&self, index: usize) -> HandLandmark {
        self.points[index]
    }

    pub fn points(&self) -> &[HandLandmark; LANDMARK_COUNT] {
        &self.points
    }

    /// 2D distance between two landmarks by index
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.points[a].distance_2d(&self.points[b])
    }
}
