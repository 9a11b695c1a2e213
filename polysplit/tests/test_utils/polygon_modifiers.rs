use polysplit::geometry::{Polygon, Ring};

/// Cycles all the vertex index positions forward by `n`, e.g. vertex 0 becomes vertex 1.
pub fn cycle_start_index_forward(input: &Ring<f64>, n: usize) -> Ring<f64> {
    let count = input.vertex_count();
    assert!(n > 0, "cycling forward by 0 just returns the same ring");
    assert!(
        n < count,
        "cycling forward by more than the ring length is unnecessary"
    );
    Ring::new(input.arc(count - n, count).collect())
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedRingState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedRingState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Every variation of `input` with the first ring direction inverted and/or its start vertex
/// cycled, all other rings are left as is.
#[derive(Debug, Clone)]
pub struct ModifiedPolygonSet<'a> {
    pub input: &'a Polygon<f64>,
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedPolygonSet<'a> {
    pub fn new(
        input: &'a Polygon<f64>,
        invert_direction: bool,
        cycle_index_positions: bool,
    ) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    fn with_first_ring(&self, ring: Ring<f64>) -> Polygon<f64> {
        let mut rings = self.input.rings().to_vec();
        rings[0] = ring;
        Polygon::new(rings)
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Polygon<f64>, ModifiedRingState),
    {
        let first = &self.input.rings()[0];
        visitor(self.input.clone(), ModifiedRingState::new(false, 0));

        if self.invert_direction {
            visitor(
                self.with_first_ring(first.reversed()),
                ModifiedRingState::new(true, 0),
            );
        }

        if self.cycle_index_positions {
            for i in 1..first.vertex_count() {
                let cycled = cycle_start_index_forward(first, i);
                visitor(
                    self.with_first_ring(cycled),
                    ModifiedRingState::new(false, i),
                );

                if self.invert_direction {
                    let cycled = cycle_start_index_forward(&first.reversed(), i);
                    visitor(
                        self.with_first_ring(cycled),
                        ModifiedRingState::new(true, i),
                    );
                }
            }
        }
    }
}
