//! Circle vs axis-aligned rectangle collision
//!
//! The player is a circle; every piece of level geometry is an AABB. Contact
//! is found from the closest point of the rectangle to the circle centre and
//! resolved by pushing the circle back out along the contact normal.

use glam::Vec2;

use super::player::Player;
use super::region::Region;
use crate::consts::CONTACT_NORMAL_Y;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the shapes overlap (touching exactly does not count)
    pub hit: bool,
    /// Contact point on the rectangle
    pub point: Vec2,
    /// Unit normal pointing from the contact toward the circle centre
    pub normal: Vec2,
    /// Distance the circle must move along `normal` to separate
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Position correction that separates the circle from the rectangle
    #[inline]
    pub fn resolution(&self) -> Vec2 {
        self.normal * self.penetration
    }
}

/// Which face of a collider the player touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Pushed upward: standing on top
    Floor,
    /// Pushed downward: head hit the underside
    Ceiling,
    Side,
}

impl Contact {
    /// Classify by the vertical component of the resolution direction (y down)
    pub fn classify(normal: Vec2) -> Self {
        if normal.y <= -CONTACT_NORMAL_Y {
            Contact::Floor
        } else if normal.y >= CONTACT_NORMAL_Y {
            Contact::Ceiling
        } else {
            Contact::Side
        }
    }
}

/// Pure overlap test, used for triggers
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Region) -> bool {
    center.distance_squared(rect.closest_point(center)) < radius * radius
}

/// Check collision between a circle and a rectangle
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Region) -> CollisionResult {
    if rect.contains_point(center) {
        return deep_collision(center, radius, rect);
    }

    let point = rect.closest_point(center);
    let offset = center - point;
    let dist = offset.length();
    if dist >= radius {
        return CollisionResult::miss();
    }
    // Centre exactly on an edge has no direction to push along
    if dist == 0.0 {
        return deep_collision(center, radius, rect);
    }

    CollisionResult {
        hit: true,
        point,
        normal: offset.normalize_or_zero(),
        penetration: radius - dist,
    }
}

/// Centre inside the rectangle: push out through the nearest edge
fn deep_collision(center: Vec2, radius: f32, rect: &Region) -> CollisionResult {
    let (min, max) = (rect.min(), rect.max());
    let candidates = [
        (center.x - min.x, Vec2::NEG_X, Vec2::new(min.x, center.y)),
        (max.x - center.x, Vec2::X, Vec2::new(max.x, center.y)),
        (center.y - min.y, Vec2::NEG_Y, Vec2::new(center.x, min.y)),
        (max.y - center.y, Vec2::Y, Vec2::new(center.x, max.y)),
    ];

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.0 < best.0 {
            best = *candidate;
        }
    }
    let (depth, normal, point) = best;

    CollisionResult {
        hit: true,
        point,
        normal,
        penetration: radius + depth,
    }
}

/// Push the player out of every static collider it overlaps.
///
/// Landing on top zeroes vertical velocity and grounds the player; hitting a
/// ceiling only zeroes vertical velocity. Returns the contacts in collider order.
pub fn resolve_colliders(player: &mut Player, colliders: &[Region]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    player.grounded = false;

    for collider in colliders {
        let result = circle_rect_collision(player.pos, player.radius, collider);
        if !result.hit {
            continue;
        }

        player.pos += result.resolution();

        let contact = Contact::classify(result.normal);
        match contact {
            Contact::Floor => {
                player.vel.y = 0.0;
                player.grounded = true;
            }
            Contact::Ceiling => player.vel.y = 0.0,
            Contact::Side => {}
        }
        contacts.push(contact);
    }

    contacts
}
