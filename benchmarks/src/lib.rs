//! Scene builders shared by the physics benchmarks.

use glam::{Affine2, Vec2};
use rein_physics2d::physics::broadphase::Broadphase;
use rein_physics2d::{
    BodyMode, ObjectRid, PhysicsServer, PhysicsSettings, Rect2, ShapeData, SpaceRid,
};

/// Deterministic xorshift generator so every run builds the same scene.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }

    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }
}

/// Broadphase holding `n` boxes of 8-40 px scattered over `extent` px.
pub fn scattered_broadphase(n: usize, extent: f32) -> Broadphase {
    let mut rng = Lcg::new(0x5eed);
    let mut broadphase = Broadphase::new(128.0, 512);
    let owner = ObjectRid::default();
    for i in 0..n {
        let center = Vec2::new(rng.range(0.0, extent), rng.range(0.0, extent));
        let half = Vec2::new(rng.range(4.0, 20.0), rng.range(4.0, 20.0));
        broadphase.insert(owner, i, Rect2::from_center_half_extents(center, half));
    }
    broadphase
}

/// Server with a static floor and `n` mixed circles and boxes stacked above it.
pub fn pile_server(n: usize) -> (PhysicsServer, SpaceRid, Vec<ObjectRid>) {
    let mut server = PhysicsServer::new();
    server.init(PhysicsSettings::default());
    let space = server.space_create();
    let _ = server.space_set_active(space, true);

    let floor_shape = server.shape_create(ShapeData::rectangle(Vec2::new(2000.0, 20.0)));
    let circle = server.shape_create(ShapeData::circle(8.0));
    let square = server.shape_create(ShapeData::rectangle(Vec2::splat(8.0)));

    let floor = server.body_create(BodyMode::Static, false);
    let _ = server.body_add_shape(floor, floor_shape, Affine2::IDENTITY, false);
    let _ = server.body_set_state(
        floor,
        rein_physics2d::BodyState::Transform(Affine2::from_translation(Vec2::new(0.0, 500.0))),
    );
    let _ = server.body_set_space(floor, Some(space));

    let columns = 40;
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let shape = if i % 2 == 0 { circle } else { square };
        let position = Vec2::new(
            (i % columns) as f32 * 20.0 - 400.0,
            460.0 - (i / columns) as f32 * 20.0,
        );
        let body = server.body_create(BodyMode::Rigid, false);
        let _ = server.body_add_shape(body, shape, Affine2::IDENTITY, false);
        let _ = server.body_set_state(
            body,
            rein_physics2d::BodyState::Transform(Affine2::from_translation(position)),
        );
        let _ = server.body_set_space(body, Some(space));
        bodies.push(body);
    }
    (server, space, bodies)
}
