#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisReading {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl AxisReading {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Axis values in canonical x, y, z order.
    pub fn axes(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}
