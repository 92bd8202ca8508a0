use lattice2d::na::{Point2, Vector2};
use lattice2d::partitioning::{BroadPhaseGrid, ShapeHandle};
use lattice2d::query::Ray;
use lattice2d::shape::{Ball, Cuboid, Shape};

const A: ShapeHandle = ShapeHandle(1);
const B: ShapeHandle = ShapeHandle(2);
const C: ShapeHandle = ShapeHandle(3);

#[test]
fn candidates_come_from_nearby_cells_only() {
    let mut grid = BroadPhaseGrid::new(1.0, 1.0);

    grid.update(A, &Ball::new(Point2::origin(), 1.0).into());
    grid.update(B, &Ball::new(Point2::new(1.5, 0.0), 1.0).into());
    grid.update(C, &Ball::new(Point2::new(5.0, 0.0), 1.0).into());

    assert_eq!(grid.candidates(A), vec![B]);
    assert_eq!(grid.candidates(C), Vec::<ShapeHandle>::new());
}

#[test]
fn moving_and_removing_shapes_keeps_the_grid_clean() {
    let mut grid = BroadPhaseGrid::new(1.0, 1.0);

    grid.update(A, &Ball::new(Point2::origin(), 1.0).into());
    grid.update(A, &Ball::new(Point2::new(12.0, -3.0), 1.0).into());
    assert!(grid.cell_count() > 0);

    let probe: Shape = Ball::new(Point2::new(12.0, -3.0), 0.5).into();
    assert_eq!(grid.candidates_with_shape(&probe), vec![A]);

    grid.remove(A);
    assert_eq!(grid.cell_count(), 0);
}

#[test]
fn update_all_rebuilds_the_same_index() {
    let mut grid = BroadPhaseGrid::new(2.0, 1.5);

    for i in 0..5 {
        grid.update(
            ShapeHandle(i),
            &Cuboid::new(Point2::new(i as f32, 0.5), Vector2::new(0.75, 0.75)).into(),
        );
    }

    let before: Vec<_> = (0..5).map(|i| grid.candidates(ShapeHandle(i))).collect();
    grid.update_all();
    let after: Vec<_> = (0..5).map(|i| grid.candidates(ShapeHandle(i))).collect();

    assert_eq!(before, after);
}

#[test]
fn ray_candidates_respect_the_distance_limit() {
    let mut grid = BroadPhaseGrid::new(1.0, 1.0);

    grid.update(A, &Cuboid::new(Point2::new(6.0, 0.0), Vector2::new(2.0, 1.0)).into());
    grid.update(B, &Cuboid::new(Point2::new(6.0, 0.0), Vector2::new(1.0, 1.0)).into());
    grid.update(C, &Cuboid::new(Point2::new(7.5, 0.0), Vector2::new(1.0, 1.0)).into());

    let ray = Ray::new(Point2::origin(), Vector2::x());
    let candidates = grid.candidates_along_ray(&ray, 5.0);

    assert!(candidates.contains(&A));
    assert!(candidates.contains(&B));
    assert!(!candidates.contains(&C));
}

#[test]
fn diagonal_rays_walk_both_axes() {
    let mut grid = BroadPhaseGrid::new(1.0, 1.0);

    grid.update(A, &Ball::new(Point2::new(4.0, 4.0), 0.5).into());
    grid.update(B, &Ball::new(Point2::new(4.0, 0.0), 0.5).into());

    let ray = Ray::new(Point2::new(0.5, 0.5), Vector2::new(1.0, 1.0));
    let candidates = grid.candidates_along_ray(&ray, 10.0);

    assert_eq!(candidates, vec![A]);
}
