/// Grid rasterization: Bresenham lines and scanline quad fill
use crate::geometry::ScreenPoint;

/// All grid points on the line from `a` to `b`, both endpoints included.
///
/// Standard Bresenham error accumulation: err starts at |dx| - |dy| and
/// 2*err decides which axis steps. Consecutive points never differ by
/// more than one per axis, so the path has no gaps.
pub fn line_points(a: ScreenPoint, b: ScreenPoint) -> Vec<ScreenPoint> {
    let dx = (b.col - a.col).abs();
    let dy = (b.row - a.row).abs();
    let sx = if a.col < b.col { 1 } else { -1 };
    let sy = if a.row < b.row { 1 } else { -1 };
    let mut err = dx - dy;

    let mut col = a.col;
    let mut row = a.row;
    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);

    while col != b.col || row != b.row {
        points.push(ScreenPoint::new(col, row));
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            col += sx;
        }
        if e2 < dx {
            err += dx;
            row += sy;
        }
    }
    points.push(b);

    points
}

/// All cells covered by a quad given its corners in face order,
/// boundary included.
///
/// The boundary comes from Bresenham runs over the 4 connecting edges,
/// sorted and deduplicated so scanline extraction is deterministic. Each
/// row between the extreme corner rows is then filled from its leftmost
/// to its rightmost boundary column. Only valid for convex quads with at
/// most two boundary crossings per row; a concave or self-intersecting
/// projection will visibly misfill.
pub fn fill_quad(corners: [ScreenPoint; 4]) -> Vec<ScreenPoint> {
    let mut boundary = Vec::new();
    for i in 0..4 {
        boundary.extend(line_points(corners[i], corners[(i + 1) % 4]));
    }
    boundary.sort_unstable_by_key(|p| (p.row, p.col));
    boundary.dedup();

    let (row_min, row_max) = corners
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), p| {
            (lo.min(p.row), hi.max(p.row))
        });

    let mut cells = Vec::new();
    for row in row_min..=row_max {
        let cols: Vec<i32> = boundary
            .iter()
            .filter(|p| p.row == row)
            .map(|p| p.col)
            .collect();
        // Fewer than two distinct crossings on a row leaves nothing to span
        if cols.len() < 2 {
            continue;
        }
        for col in cols[0]..=cols[cols.len() - 1] {
            cells.push(ScreenPoint::new(col, row));
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(col: i32, row: i32) -> ScreenPoint {
        ScreenPoint::new(col, row)
    }

    #[test]
    fn test_horizontal_line() {
        let points = line_points(p(0, 0), p(5, 0));
        let expected: Vec<ScreenPoint> = (0..=5).map(|col| p(col, 0)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_steep_line_is_connected() {
        let points = line_points(p(0, 0), p(3, 4));
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], p(0, 0));
        assert_eq!(points[4], p(3, 4));
        for pair in points.windows(2) {
            assert!((pair[1].col - pair[0].col).abs() <= 1);
            assert!((pair[1].row - pair[0].row).abs() <= 1);
        }
    }

    #[test]
    fn test_single_point_line() {
        assert_eq!(line_points(p(7, 7), p(7, 7)), vec![p(7, 7)]);
    }

    #[test]
    fn test_endpoints_always_included() {
        let cases = [
            (p(0, 0), p(5, 0)),
            (p(9, 6), p(-2, 1)),
            (p(3, 4), p(0, 0)),
            (p(-5, 5), p(5, -5)),
        ];
        for (a, b) in cases {
            let points = line_points(a, b);
            assert_eq!(points.first(), Some(&a));
            assert_eq!(points.last(), Some(&b));
        }
    }

    #[test]
    fn test_fill_square_covers_block() {
        let cells = fill_quad([p(2, 2), p(6, 2), p(6, 6), p(2, 6)]);
        assert_eq!(cells.len(), 25);
        for row in 2..=6 {
            for col in 2..=6 {
                assert!(cells.contains(&p(col, row)), "missing ({}, {})", col, row);
            }
        }
    }

    #[test]
    fn test_fill_is_idempotent() {
        let corners = [p(0, 0), p(9, 2), p(8, 9), p(1, 7)];
        assert_eq!(fill_quad(corners), fill_quad(corners));
    }

    #[test]
    fn test_fill_degenerate_row_quad() {
        // All four corners on one row: the fill collapses to that row's span
        let cells = fill_quad([p(0, 5), p(4, 5), p(4, 5), p(0, 5)]);
        let expected: Vec<ScreenPoint> = (0..=4).map(|col| p(col, 5)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_fill_includes_boundary() {
        let corners = [p(2, 2), p(6, 2), p(6, 6), p(2, 6)];
        let cells = fill_quad(corners);
        for i in 0..4 {
            for point in line_points(corners[i], corners[(i + 1) % 4]) {
                assert!(cells.contains(&point), "boundary cell {:?} missing", point);
            }
        }
    }
}
