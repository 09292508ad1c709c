use latticeview_core::{Circuit, Color, Meshable, Settings, Solid};

/// The rendering backend. Receives solids in draw order and decides how to
/// display them.
pub trait Scene {
    fn add_solid(&mut self, solid: &Solid);

    /// Request a wireframe outline of `solid` drawn in `color`.
    fn add_edge_overlay(&mut self, solid: &Solid, color: Color);
}

/// Walks a circuit's solids and hands each one to a [`Scene`].
pub struct CircuitDrawer;

impl CircuitDrawer {
    /// Returns the number of solids drawn.
    pub fn draw<S: Scene + ?Sized>(circuit: &Circuit, scene: &mut S, settings: &Settings) -> usize {
        let solids = circuit.create_meshes(settings);
        for solid in &solids {
            scene.add_solid(solid);
            if settings.display_edges {
                scene.add_edge_overlay(solid, settings.edge_color);
            }
        }
        log::debug!(
            "Drew {} solids (edge overlay {})",
            solids.len(),
            if settings.display_edges { "on" } else { "off" }
        );
        solids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latticeview_core::{Edge, LogicalQubit, Pos};

    #[derive(Default)]
    struct RecordingScene {
        calls: Vec<&'static str>,
    }

    impl Scene for RecordingScene {
        fn add_solid(&mut self, _solid: &Solid) {
            self.calls.push("solid");
        }

        fn add_edge_overlay(&mut self, _solid: &Solid, color: Color) {
            assert_eq!(color, Color::BLACK);
            self.calls.push("overlay");
        }
    }

    fn one_block(settings: &Settings) -> Circuit {
        let block = Edge::block(Pos::new(0.0, 0.0, 0.0), Pos::new(0.0, 1.0, 0.0), settings).unwrap();
        Circuit::new(vec![LogicalQubit::rough(vec![block], settings)], Vec::new())
    }

    #[test]
    fn test_overlay_follows_each_solid() {
        let settings = Settings::default();
        let mut scene = RecordingScene::default();
        let drawn = CircuitDrawer::draw(&one_block(&settings), &mut scene, &settings);
        assert_eq!(drawn, 3);
        assert_eq!(
            scene.calls,
            vec!["solid", "overlay", "solid", "overlay", "solid", "overlay"]
        );
    }

    #[test]
    fn test_overlay_disabled() {
        let settings = Settings {
            display_edges: false,
            ..Settings::default()
        };
        let mut scene = RecordingScene::default();
        CircuitDrawer::draw(&one_block(&settings), &mut scene, &settings);
        assert_eq!(scene.calls, vec!["solid"; 3]);
    }
}
