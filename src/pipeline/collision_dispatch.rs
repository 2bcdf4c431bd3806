use super::Body;

/// Handler of the confirmed collisions between two bodies.
///
/// Closures taking two bodies implement this trait.
pub trait CollisionDispatch {
    /// Called exactly once per pair of bodies whose exact collision volumes intersect.
    ///
    /// For pair tests, `body1` belongs to the first group and `body2` to the second one.
    fn process_callbacks(&mut self, body1: &Body, body2: &Body);
}

impl<F: FnMut(&Body, &Body)> CollisionDispatch for F {
    #[inline]
    fn process_callbacks(&mut self, body1: &Body, body2: &Body) {
        self(body1, body2)
    }
}

/// Tests bodies against a static terrain.
///
/// The terrain representation is entirely up to the implementor. Closures taking one body
/// implement this trait.
pub trait TerrainCollisionTest {
    /// Tests `body` against the terrain, handling any collision found.
    fn test_body(&mut self, body: &Body);
}

impl<F: FnMut(&Body)> TerrainCollisionTest for F {
    #[inline]
    fn test_body(&mut self, body: &Body) {
        self(body)
    }
}
