// src/path/component.rs
use crate::math::types::Point2;
use serde::{Deserialize, Serialize};

/// Pfad-Primitive als geschlossene Summe. Backends müssen genau diese
/// fünf Operationen unterstützen, mehr wird nie emittiert. `class_name`
/// ist ein Style-Schlüssel für die Backends; der Kern reicht ihn nur
/// durch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathComponent {
    /// Stift bewegen
    Move { point: Point2 },

    /// Linie zur Zielposition
    Line { point: Point2 },

    /// kubische Bezier-Kurve ab der aktuellen Stiftposition
    Bezier3 { q1: Point2, q2: Point2, p2: Point2 },

    /// Kreis
    Circle {
        center: Point2,
        r: f64,
        class_name: Option<String>,
    },

    /// Gruppe; die Reihenfolge der Komponenten ist die Zeichenreihenfolge,
    /// beliebig tiefe Verschachtelung ist erlaubt.
    Group {
        class_name: Option<String>,
        components: Vec<PathComponent>,
    },
}

impl PathComponent {
    /// Style-Schlüssel, falls die Variante einen trägt.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            PathComponent::Circle { class_name, .. } | PathComponent::Group { class_name, .. } => {
                class_name.as_deref()
            }
            PathComponent::Move { .. } | PathComponent::Line { .. } | PathComponent::Bezier3 { .. } => {
                None
            }
        }
    }
}
