//! Mass-spring soft bodies for small interactive scenes.
//!
//! `squish` models deformable "balls" and soft meshes as point masses tied
//! together by a complete graph of position-based distance constraints.
//! Every frame a [`World`] integrates the masses, resolves collisions with
//! static boxes and with other bodies, then relaxes the springs. Rendering
//! is left to the caller, who reads positions back once a step completes.
//!
//! # Features
//!
//! - **Point masses**: semi-implicit Euler with damping, contact friction and a speed cap
//! - **Springs**: single-sweep position correction, optional crossing avoidance
//! - **Bodies**: rings, cuboids or any vertex set, with circle broad/narrow-phase collision
//! - **Static scene**: solid box obstacles and container bounds
//! - **Observable**: stage hooks via `StepObserver`, `tracing` events from the world
//! - **`no_std` compatible**: only needs `alloc`
//!
//! ```
//! use squish::{Body, BoxObstacle, NoOpStepObserver, SimConfig, Vec2, World};
//!
//! let mut world = World::new(SimConfig::<Vec2<f32>>::new());
//! world.add_body(Body::ring(Vec2::new(100.0, 100.0), 8, 50.0));
//! world.add_obstacle(BoxObstacle::new(0.0, 300.0, 400.0, 50.0));
//!
//! for _ in 0..60 {
//!     world.step(0.1, &mut NoOpStepObserver);
//! }
//! for body in world.bodies() {
//!     let _points = body.positions();
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod mass;
pub mod spring;
pub mod collision;
pub mod body;
pub mod world;
pub mod mesh;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Planar, Vec2, Vec3};
pub use mass::Mass;
pub use spring::Spring;
pub use collision::{BoxObstacle, Bounds, Silhouette};
pub use body::{Body, BodyId};
pub use world::World;
pub use mesh::{compute_vertex_normals, CUBE_INDICES};
pub use config::SimConfig;
pub use observer::{StepObserver, NoOpStepObserver, TracingObserver};
pub use error::SimError;
