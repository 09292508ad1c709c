use serde::{Deserialize, Serialize};

use latticeview_core::{BBox, Color, Solid};

use crate::drawer::Scene;

/// A solid plus its optional outline, ready for a frontend to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSolid {
    #[serde(flatten)]
    pub solid: Solid,
    /// Outline color when an edge overlay was requested.
    pub edge_overlay: Option<Color>,
}

/// Complete frame data, serializable for a frontend that consumes JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub solids: Vec<RenderSolid>,
    pub bounds: Option<BBox>,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Scene for RenderFrame {
    fn add_solid(&mut self, solid: &Solid) {
        let bb = solid.bbox();
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union(&bb),
            None => bb,
        });
        self.solids.push(RenderSolid {
            solid: solid.clone(),
            edge_overlay: None,
        });
    }

    fn add_edge_overlay(&mut self, solid: &Solid, color: Color) {
        // Overlays are always requested right after their solid.
        if let Some(last) = self.solids.last_mut().filter(|last| &last.solid == solid) {
            last.edge_overlay = Some(color);
        } else {
            log::warn!("Edge overlay requested for a solid that was not added last");
        }
    }
}
