extern crate polyraster;

use polyraster::{draw_line, draw_polygon, edges, Framebuffer, Point, Rgb8};

fn poly(v: &[(f32,f32)]) -> Vec<Point> {
    v.iter().map(|&p| p.into()).collect()
}

#[test]
fn draws_n_edges_including_closing_edge() {
    let pts = poly(&[(1.,1.), (7.,1.), (7.,5.), (3.,8.), (1.,5.)]);
    let e : Vec<_> = edges(&pts).collect();
    assert_eq!(e.len(), 5);
    assert_eq!(e[4], (&pts[4], &pts[0]));
    for (i, (a, b)) in e.iter().enumerate() {
        assert_eq!(*a, &pts[i]);
        assert_eq!(*b, &pts[(i + 1) % 5]);
    }

    // Same pixels as drawing each edge by hand
    let c = Rgb8::white();
    let mut fb = Framebuffer::new(10, 10);
    draw_polygon(&mut fb, &pts, c);
    let mut by_hand = Framebuffer::new(10, 10);
    for i in 0 .. pts.len() {
        draw_line(&mut by_hand, &pts[i], &pts[(i + 1) % pts.len()], c);
    }
    assert_eq!(fb, by_hand);
}

#[test]
fn fewer_than_two_points_is_noop() {
    let mut fb = Framebuffer::new(5, 5);
    draw_polygon(&mut fb, &[], Rgb8::white());
    draw_polygon(&mut fb, &poly(&[(2.,2.)]), Rgb8::white());
    assert_eq!(fb.count_not(Rgb8::black()), 0);
    assert_eq!(edges(&poly(&[(2.,2.)])).count(), 0);
}

#[test]
fn two_points_draw_a_segment() {
    let pts = poly(&[(0.,2.), (4.,2.)]);
    assert_eq!(edges(&pts).count(), 2);
    let mut fb = Framebuffer::new(5, 5);
    draw_polygon(&mut fb, &pts, Rgb8::white());
    assert_eq!(fb.count_not(Rgb8::black()), 5);
    assert!(fb.row(2).iter().all(|&c| c == Rgb8::white()));
}

#[test]
fn square_boundary() {
    let mut fb = Framebuffer::new(8, 8);
    let sq = poly(&[(1.,1.), (1.,6.), (6.,6.), (6.,1.)]);
    draw_polygon(&mut fb, &sq, Rgb8::white());
    for y in 0 .. 8 {
        for x in 0 .. 8 {
            let on_edge = (x == 1 || x == 6) && (1 ..= 6).contains(&y)
                || (y == 1 || y == 6) && (1 ..= 6).contains(&x);
            assert_eq!(fb.get(x, y) == Some(Rgb8::white()), on_edge, "({},{})", x, y);
        }
    }
}
