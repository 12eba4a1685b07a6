use std::collections::VecDeque;

use super::state::Position;

/// One body cell of the snake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub pos: Position,
    /// Dissolve intensity in (0, 1]; `None` for a solid segment
    pub glitch: Option<f32>,
}

impl Segment {
    pub fn new(pos: Position) -> Self {
        Self { pos, glitch: None }
    }

    /// Glitched segments are visual only and never collide
    pub fn is_live(&self) -> bool {
        self.glitch.is_none()
    }
}

/// The snake, stored tail first so the head is the last segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snake {
    pub segments: VecDeque<Segment>,
}

impl Snake {
    /// Create a horizontal snake whose head sits at `head`, body extending left
    pub fn horizontal(head: Position, length: usize) -> Self {
        let segments = (0..length)
            .rev()
            .map(|i| Segment::new(head.moved_by(-(i as i32), 0)))
            .collect();

        Self { segments }
    }

    /// Get the head position
    pub fn head(&self) -> Option<Position> {
        self.segments.back().map(|segment| segment.pos)
    }

    /// Get the tail position
    pub fn tail(&self) -> Option<Position> {
        self.segments.front().map(|segment| segment.pos)
    }

    pub fn push_head(&mut self, pos: Position) {
        self.segments.push_back(Segment::new(pos));
    }

    pub fn drop_tail(&mut self) -> Option<Segment> {
        self.segments.pop_front()
    }

    /// Check if a live (non-glitched) segment occupies the position
    pub fn collides_with(&self, pos: Position) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.is_live() && segment.pos == pos)
    }

    /// Advance the dissolving-tail animation by one frame
    ///
    /// Up to `max_glitched` tail segments fade with increasing intensity. Once
    /// the fade is fully grown (or covers the whole snake) the tail segment is
    /// dropped, so the snake shrinks by one each frame. `limit` keeps segments
    /// at or beyond that index solid.
    pub fn glitch_tail(
        &mut self,
        glitched_length: &mut usize,
        max_glitched: usize,
        limit: Option<usize>,
    ) {
        let step = 1.0 / (max_glitched as f32 + 1.0);

        if *glitched_length == max_glitched || *glitched_length >= self.segments.len() {
            self.segments.pop_front();
        }

        for (i, segment) in self
            .segments
            .iter_mut()
            .enumerate()
            .take(*glitched_length + 1)
        {
            if limit.is_none_or(|limit| i < limit) {
                segment.glitch = Some(step * (i as f32 + 1.0));
            }
        }

        if *glitched_length < max_glitched {
            *glitched_length += 1;
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}
