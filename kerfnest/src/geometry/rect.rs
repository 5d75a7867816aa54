use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Creates a rectangle from its bottom-left corner and its dimensions.
    /// Returns `None` if either dimension is not strictly positive.
    pub fn try_from_origin(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        match width > 0.0 && height > 0.0 {
            true => Some(Rect {
                x_min: x,
                y_min: y,
                x_max: x + width,
                y_max: y + height,
            }),
            false => None,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the area shared by `self` and `other`.
    /// Rectangles which only touch along an edge or in a corner share no area.
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let dx = f64::min(self.x_max, other.x_max) - f64::max(self.x_min, other.x_min);
        let dy = f64::min(self.y_max, other.y_max) - f64::max(self.y_min, other.y_min);
        match dx > 0.0 && dy > 0.0 {
            true => dx * dy,
            false => 0.0,
        }
    }

    /// Checks whether `self` and `other` share a non-zero area, with a tolerance for floating point precision.
    pub fn almost_overlaps(&self, other: &Rect) -> bool {
        FPA(self.overlap_area(other)) > FPA(0.0)
    }

    /// Checks whether `other` lies entirely within `self`, with a tolerance for floating point precision.
    pub fn almost_contains(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }
}
