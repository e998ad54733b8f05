use crate::geometry::{push_polyline, LineVertex};
use glam::{Vec3, Vec4};
use std::collections::VecDeque;

/// Fixed-length history of world positions, newest last.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, p: Vec3) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }

    /// Fade for the point at `index`: 0 at the tail, 1 at the head, squared.
    #[inline]
    pub fn attenuation(&self, index: usize) -> f32 {
        let n = self.points.len();
        if n <= 1 {
            return 1.0;
        }
        let t = index as f32 / (n - 1) as f32;
        t * t
    }

    pub fn push_lines(&self, out: &mut Vec<LineVertex>, color: Vec4) {
        if self.is_empty() {
            return;
        }
        let pts: Vec<Vec3> = self.points().copied().collect();
        let colors: Vec<Vec4> = (0..self.len())
            .map(|i| color * Vec4::new(1.0, 1.0, 1.0, self.attenuation(i)))
            .collect();
        push_polyline(out, &pts, &colors);
    }
}
