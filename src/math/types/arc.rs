// src/math/types/arc.rs
use super::Point2;
use serde::{Deserialize, Serialize};

/// Achsenparalleler elliptischer Bogen. Die Winkel sind parametrische
/// Winkel (nicht die wahren Polarwinkel); `lambda2` muss von `lambda1`
/// aus vorwärts erreichbar sein.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point2,
    pub rx: f64,
    pub ry: f64,
    pub lambda1: f64,
    pub lambda2: f64,
}

impl Arc {
    pub fn new(center: Point2, rx: f64, ry: f64, lambda1: f64, lambda2: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            lambda1,
            lambda2,
        }
    }

    /// Punkt auf dem Bogen beim parametrischen Winkel `lambda`.
    pub fn point_at(&self, lambda: f64) -> Point2 {
        Point2::new(
            self.rx * lambda.cos() + self.center.x,
            self.ry * lambda.sin() + self.center.y,
        )
    }
}
