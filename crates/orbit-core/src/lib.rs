//! Platform-neutral core of the orbit portfolio: static catalog, orbital
//! animation, camera follow, scene state, routing and worker fetch state.

pub mod backdrop;
pub mod camera;
pub mod catalog;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod orbit;
pub mod router;
pub mod scene;
pub mod trail;
pub mod worker;

pub use camera::{Camera, CameraRig, FollowMode, OrbitControls};
pub use catalog::{get_project_by_slug, Category, CategoryId, Project, ProjectRef, CATEGORIES};
pub use constants::*;
pub use orbit::{BodyId, OrbitPath, OrbitingBody};
pub use router::Route;
pub use scene::{advance, Label, SceneEvent, SceneState, Theme, UiHint};
pub use worker::{FetchError, FetchStatus, WorkerMessage, WorkerState};
