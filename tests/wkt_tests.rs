mod test_utils;

use rect_kdtree::from_wkt::envelopes_from_wkt;
use rect_kdtree::utils::rectangles_from_coordinates;
use rect_kdtree::{build_index, Coordinate, LinearFilter, Rectangle, SampleFilter};
use test_utils::{get_random_points, read_test_case};

#[test]
fn test_wkt_regions() {
    let rectangles = read_test_case("regions");
    assert_eq!(rectangles.len(), 7);
    assert!(rectangles.contains(&Rectangle::try_new(1., 2., 2., 3.).unwrap()));
    assert!(rectangles.contains(&Rectangle::try_new(6., 6., 6., 6.).unwrap()));

    let tree = build_index(&rectangles).unwrap();
    let linear = LinearFilter::new(&rectangles);
    assert_eq!(tree.len(), linear.len());

    assert!(!tree.is_normal((0.4, 1.).into()));
    assert!(tree.is_normal((1., 1.).into()));
    // Holes do not shrink the envelope.
    assert!(tree.is_normal((1.5, 2.5).into()));
    assert!(tree.is_normal((6., 6.).into()));
    assert!(!tree.is_normal((5., 5.).into()));

    let universe = Rectangle::of(&rectangles);
    let points = get_random_points(universe, 2000, 192);
    assert_eq!(tree.filter_normal(&points), linear.filter_normal(&points));
}

#[test]
fn test_wkt_segments() {
    let envelopes = envelopes_from_wkt("POLYGON ((0 0, 4 1, 5 5, 1 4, 0 0))").unwrap();
    assert_eq!(envelopes, vec![Rectangle::try_new(0., 5., 0., 5.).unwrap()]);

    let shell = vec![
        Coordinate::new(0., 0.),
        Coordinate::new(4., 1.),
        Coordinate::new(5., 5.),
        Coordinate::new(1., 4.),
        Coordinate::new(0., 0.),
    ];
    let segments = rectangles_from_coordinates(&shell);
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[2], Rectangle::try_new(1., 5., 4., 5.).unwrap());

    // Segment boxes overlap across x splits.
    let tree = build_index(&segments).unwrap();
    let linear = LinearFilter::new(&segments);
    for point in get_random_points(Rectangle::of(&segments), 500, 7) {
        assert_eq!(
            tree.contains_with(point, rect_kdtree::SearchMode::Exact),
            linear.is_normal(point),
            "segment boxes disagree at {:?}",
            point
        );
    }
}
