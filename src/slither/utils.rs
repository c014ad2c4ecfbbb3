use crate::slither::types::Coord;

#[must_use]
pub const fn manhattan_distance(a: Coord, b: Coord) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = Coord { x: 5, y: 5 };
        let b = Coord { x: 8, y: 7 };
        assert_eq!(manhattan_distance(a, b), 5);
        assert_eq!(manhattan_distance(b, a), 5);
        assert_eq!(manhattan_distance(a, a), 0);
    }
}
