use crate::data::{parse_coordinate, Point};

/// Points typed in by the user. Only ever appended to or cleared as a whole.
#[derive(Clone, Debug, Default)]
pub struct CustomPoints {
    points: Vec<Point>,
}

impl CustomPoints {
    /// Parses `text` as `(x,y)` or `x,y` and appends the point.
    ///
    /// On failure the list is left untouched.
    pub fn add_point(&mut self, text: &str) -> Result<Point, String> {
        let point = parse_coordinate(text)?;
        self.points.push(point);
        Ok(point)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_point() {
        let mut custom = CustomPoints::default();
        assert_eq!(custom.add_point("3.5,-2.1"), Ok([3.5, -2.1]));
        assert_eq!(custom.add_point("(0,1)"), Ok([0.0, 1.0]));
        assert_eq!(custom.as_slice(), &[[3.5, -2.1], [0.0, 1.0]]);

        assert!(custom.add_point("not-a-point").is_err());
        assert_eq!(custom.len(), 2);

        custom.clear();
        assert!(custom.is_empty());
    }
}
