use crate::Point;

/// Axis aligned extents of a set of points.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    pub x_min: T,
    pub y_min: T,
    pub x_max: T,
    pub y_max: T,
}

impl<T> BoundingBox<T>
where
    T: PartialOrd + Copy,
{
    /// Returns the smallest box containing all of the given points, or
    /// `None` if there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Point<T>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
        };
        for point in points {
            bounds.include(point);
        }
        Some(bounds)
    }

    /// Grows the box to contain the given point.
    pub fn include(&mut self, point: Point<T>) {
        if point.x < self.x_min {
            self.x_min = point.x;
        }
        if point.x > self.x_max {
            self.x_max = point.x;
        }
        if point.y < self.y_min {
            self.y_min = point.y;
        }
        if point.y > self.y_max {
            self.y_max = point.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_points() {
        let bounds =
            BoundingBox::from_points([Point::new(3, -1), Point::new(-2, 5), Point::new(0, 0)])
                .unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                x_min: -2,
                y_min: -1,
                x_max: 3,
                y_max: 5
            }
        );
        assert_eq!(BoundingBox::<i32>::from_points([]), None);
    }
}
