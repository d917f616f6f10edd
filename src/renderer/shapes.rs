//! Shape generation for 2D primitives
//!
//! Everything is built from flat-colored triangles in game coordinates
//! (800x600, y down). Later vertices overdraw earlier ones, so each
//! composite shape lists its layers back to front.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{colors, Vertex};
use crate::consts::{BASKET_WIDTH, GAME_HEIGHT, GAME_WIDTH};
use crate::sim::{GameState, ObjectKind};

const GROUND_HEIGHT: f32 = 16.0;
const BASKET_HEIGHT: f32 = 32.0;
const BASKET_LIFT: f32 = 16.0;
const GRAPE_RADIUS: f32 = 12.0;
const STONE_HALF: f32 = 12.0;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Two triangles covering a convex quad given in winding order
pub fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(a.x, a.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let h = size / 2.0;
    quad(
        Vec2::new(center.x - h.x, center.y - h.y),
        Vec2::new(center.x + h.x, center.y - h.y),
        Vec2::new(center.x + h.x, center.y + h.y),
        Vec2::new(center.x - h.x, center.y + h.y),
        color,
    )
}

/// Generate vertices for a square rotated 45 degrees
pub fn diamond(center: Vec2, half: f32, color: [f32; 4]) -> Vec<Vertex> {
    quad(
        Vec2::new(center.x, center.y - half),
        Vec2::new(center.x + half, center.y),
        Vec2::new(center.x, center.y + half),
        Vec2::new(center.x - half, center.y),
        color,
    )
}

/// A grape: purple body with a stem and a highlight
pub fn grape(center: Vec2) -> Vec<Vertex> {
    let mut vertices = circle(center, GRAPE_RADIUS, colors::GRAPE, 20);
    vertices.extend(rect(
        Vec2::new(center.x, center.y - GRAPE_RADIUS - 3.0),
        Vec2::new(3.0, 8.0),
        colors::GRAPE_STEM,
    ));
    vertices.extend(circle(
        center + Vec2::new(-4.0, -4.0),
        4.0,
        colors::GRAPE_HIGHLIGHT,
        12,
    ));
    vertices
}

/// A stone: gray diamond with a darker core
pub fn stone(center: Vec2) -> Vec<Vertex> {
    let mut vertices = diamond(center, STONE_HALF, colors::STONE);
    vertices.extend(diamond(center, STONE_HALF * 0.55, colors::STONE_CORE));
    vertices
}

/// The basket: tapered body hanging from a wide rim
pub fn basket(basket_x: f32) -> Vec<Vertex> {
    let top = GAME_HEIGHT - BASKET_LIFT - BASKET_HEIGHT;
    let bottom = GAME_HEIGHT - BASKET_LIFT;
    let half = BASKET_WIDTH / 2.0;

    let mut vertices = quad(
        Vec2::new(basket_x - half, top + 4.0),
        Vec2::new(basket_x + half, top + 4.0),
        Vec2::new(basket_x + half * 0.62, bottom),
        Vec2::new(basket_x - half * 0.62, bottom),
        colors::BASKET,
    );
    vertices.extend(rect(
        Vec2::new(basket_x, top + 2.0),
        Vec2::new(BASKET_WIDTH + 6.0, 5.0),
        colors::BASKET_RIM,
    ));
    vertices
}

/// Grass strip along the bottom edge
pub fn ground() -> Vec<Vertex> {
    rect(
        Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT - GROUND_HEIGHT / 2.0),
        Vec2::new(GAME_WIDTH, GROUND_HEIGHT),
        colors::GROUND,
    )
}

/// Build the full scene for one frame
pub fn game_scene(state: &GameState) -> Vec<Vertex> {
    // Sky backdrop marks the playfield against the letterbox bars
    let mut vertices = rect(
        Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0),
        Vec2::new(GAME_WIDTH, GAME_HEIGHT),
        colors::BACKGROUND,
    );
    vertices.extend(ground());
    vertices.extend(basket(state.basket_x));
    for obj in &state.objects {
        match obj.kind {
            ObjectKind::Grape => vertices.extend(grape(obj.pos)),
            ObjectKind::Stone => vertices.extend(stone(obj.pos)),
        }
    }
    vertices
}
