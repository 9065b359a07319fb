//! Shapes with validated dimensions.
//!
//! Equations:
//!   circle:     A = π r²,  P = 2 π r
//!   rectangle:  A = w h,   P = 2 (w + h)
//!   triangle:   s = (a + b + c) / 2,  A = √(s (s-a) (s-b) (s-c))   (Heron)
//!               valid iff every pair of sides sums to more than the third

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::{AlgoError, Result};

pub trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

fn positive(what: &str, v: f64) -> Result<f64> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(AlgoError::InvalidArgument(format!("{what} must be positive, got {v}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self { radius: positive("radius", radius)? })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }
    fn area(&self) -> f64 {
        self.width * self.height
    }
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    sides: [f64; 3],
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let sides = [positive("side", a)?, positive("side", b)?, positive("side", c)?];
        if a + b <= c || a + c <= b || b + c <= a {
            return Err(AlgoError::InvalidArgument(format!(
                "sides {a}, {b}, {c} violate the triangle inequality"
            )));
        }
        Ok(Self { sides })
    }

    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }
    fn area(&self) -> f64 {
        let [a, b, c] = self.sides;
        let s = (a + b + c) / 2.0;
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }
    fn perimeter(&self) -> f64 {
        self.sides.iter().sum()
    }
}

/// Sum of areas over any mix of shapes.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}
