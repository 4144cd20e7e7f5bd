//! The built-in patterns.
//!
//! Composite patterns are assembled from smaller ones here; at runtime every
//! pattern is a flat list of coordinates.

use super::CatalogBuilder;
use crate::cells::Coord;

/// Gosper's glider gun.
#[rustfmt::skip]
static GLIDER_GUN: [Coord; 36] = [
    (0, 4), (0, 5), (1, 4), (1, 5), (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
    (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5), (16, 6), (17, 5), (20, 2),
    (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5),
    (24, 6), (34, 2), (34, 3), (35, 2), (35, 3),
];

#[rustfmt::skip]
static GLIDER_EATER: [Coord; 8] = [
    (0, 0), (1, 0), (0, 1), (2, 1), (2, 2), (3, 2), (1, 3), (2, 3),
];

/// Moves the cells by `(dx, dy)`.
fn translate(cells: &[Coord], dx: i64, dy: i64) -> impl Iterator<Item = Coord> + '_ {
    cells.iter().map(move |&(x, y)| (x + dx, y + dy))
}

/// A 2x2 block with its top left cell at `(x, y)`.
fn block(x: i64, y: i64) -> [Coord; 4] {
    [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]
}

/// All the built-in patterns and their categories.
#[rustfmt::skip]
pub(super) fn catalog() -> CatalogBuilder {
    CatalogBuilder::new()
        .pattern("Block", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
        .pattern("Beehive", vec![(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)])
        .pattern("Loaf", vec![(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (3, 2)])
        .pattern("Boat", vec![(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)])
        .pattern("Tub", vec![(0, 1), (1, 0), (1, 2), (2, 1)])
        .pattern("Blinker", vec![(0, 0), (0, 1), (0, 2)])
        .pattern("Toad", vec![(0, 0), (1, 0), (2, 0), (-1, 1), (0, 1), (1, 1)])
        .pattern("Beacon", vec![(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)])
        .pattern("Glider", vec![(0, 0), (1, 1), (1, 2), (0, 2), (-1, 2)])
        .pattern(
            "Pulsar",
            vec![
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0), (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3), (0, 4), (5, 4), (7, 4), (12, 4), (2, 5), (3, 5),
                (4, 5), (8, 5), (9, 5), (10, 5), (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                (0, 8), (5, 8), (7, 8), (12, 8), (0, 9), (5, 9), (7, 9), (12, 9), (0, 10), (5, 10),
                (7, 10), (12, 10), (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
        .pattern(
            "Pentadecathlon",
            vec![
                (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (-1, 1), (1, 1),
                (-1, 6), (1, 6),
            ],
        )
        .pattern("Clock", vec![(1, 0), (0, 1), (2, 1), (1, 2)])
        .pattern(
            "Figure 8",
            vec![
                (0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 3), (1, 3), (2, 3), (0, 4),
                (1, 4), (2, 4),
            ],
        )
        .pattern(
            "LWSS",
            vec![
                (0, 0), (3, 0), (4, 1), (0, 2), (4, 2), (1, 3), (2, 3), (3, 3), (4, 3),
            ],
        )
        .pattern(
            "MWSS",
            vec![
                (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (0, 1), (5, 1), (-1, 2), (5, 2), (5, 3),
                (-1, 4), (0, 4), (4, 4),
            ],
        )
        .pattern(
            "HWSS",
            vec![
                (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (1, 1), (6, 1), (0, 2), (6, 2), (0, 3),
                (5, 3), (0, 4), (1, 4), (2, 4), (3, 4),
            ],
        )
        .pattern(
            "Weekender",
            vec![
                (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (0, 1), (7, 1),
                (2, 2), (5, 2), (0, 3), (3, 3), (4, 3), (7, 3), (0, 5), (3, 5), (4, 5), (7, 5),
                (2, 6), (5, 6), (0, 7), (7, 7), (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8),
                (6, 8), (7, 8),
            ],
        )
        .pattern(
            "Copperhead",
            vec![
                (4, 0), (5, 0), (6, 0), (7, 0), (3, 1), (8, 1), (2, 2), (9, 2), (1, 3), (3, 3),
                (8, 3), (10, 3), (1, 4), (4, 4), (7, 4), (10, 4), (0, 5), (3, 5), (8, 5), (11, 5),
                (0, 6), (2, 6), (9, 6), (11, 6), (0, 7), (5, 7), (6, 7), (11, 7), (0, 8), (3, 8),
                (8, 8), (11, 8), (1, 9), (10, 9), (2, 10), (9, 10), (3, 11), (8, 11), (4, 12),
                (7, 12), (5, 13), (6, 13),
            ],
        )
        .pattern("Glider Gun", GLIDER_GUN.to_vec())
        .pattern(
            "Simkin Glider Gun",
            vec![
                (0, 0), (1, 0), (7, 0), (8, 0), (0, 1), (1, 1), (7, 1), (8, 1), (4, 2), (5, 2),
                (4, 3), (5, 3), (12, 5), (13, 5), (11, 6), (13, 6), (21, 6), (22, 6), (10, 7),
                (11, 7), (13, 7), (14, 7), (21, 7), (22, 7), (1, 8), (2, 8), (10, 8), (15, 8),
                (1, 9), (2, 9), (10, 9), (11, 9), (13, 9), (14, 9), (11, 10), (13, 10), (12, 11),
                (13, 11),
            ],
        )
        .pattern("B-heptomino Puffer", vec![(1, 0), (2, 0), (3, 0), (0, 1), (3, 1), (0, 2), (2, 2)])
        .pattern(
            "Spacefiller",
            vec![
                (3, 0), (4, 0), (5, 0), (7, 0), (8, 0), (9, 0), (2, 1), (6, 1), (10, 1), (1, 2),
                (2, 2), (6, 2), (10, 2), (11, 2), (0, 3), (2, 3), (6, 3), (10, 3), (12, 3), (0, 4),
                (4, 4), (8, 4), (12, 4), (0, 5), (12, 5), (0, 6), (1, 6), (5, 6), (7, 6), (11, 6),
                (12, 6), (1, 7), (5, 7), (7, 7), (11, 7), (2, 8), (3, 8), (4, 8), (8, 8), (9, 8),
                (10, 8),
            ],
        )
        .pattern("R-pentomino", vec![(0, 0), (1, 0), (-1, 1), (0, 1), (0, 2)])
        .pattern("Diehard", vec![(0, 0), (1, 0), (1, 1), (5, 1), (6, 1), (7, 1), (6, -1)])
        .pattern("Acorn", vec![(0, 0), (1, 0), (1, 2), (3, 1), (4, 0), (5, 0), (6, 0)])
        .pattern("Brain", vec![(1, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)])
        .pattern("Pi-heptomino", vec![(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2)])
        .pattern("Thunderbird", vec![(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)])
        .pattern("Switch Engine", vec![(0, 0), (2, 0), (1, 1), (2, 1), (-1, 2), (0, 2)])
        .pattern(
            "Garden of Eden",
            vec![
                (1, 0), (2, 0), (3, 0), (5, 0), (6, 0), (7, 0), (0, 1), (4, 1), (8, 1), (0, 2),
                (2, 2), (6, 2), (8, 2), (0, 3), (4, 3), (8, 3), (1, 4), (2, 4), (3, 4), (5, 4),
                (6, 4), (7, 4),
            ],
        )
        .pattern(
            "Cross",
            vec![
                (1, 0), (2, 0), (4, 0), (5, 0), (0, 1), (3, 1), (6, 1), (0, 2), (6, 2), (1, 3),
                (2, 3), (4, 3), (5, 3),
            ],
        )
        .pattern(
            "Queen Bee Shuttle",
            vec![
                (1, 0), (2, 1), (0, 2), (4, 2), (1, 3), (2, 3), (3, 3), (-4, 1), (-4, 2), (-3, 1),
                (-3, 2), (8, 1), (8, 2), (7, 1), (7, 2),
            ],
        )
        .pattern(
            "Max",
            vec![
                (2, 0), (3, 0), (5, 0), (6, 0), (0, 1), (1, 1), (3, 1), (5, 1), (7, 1), (8, 1),
                (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2), (7, 2), (2, 3), (6, 3),
            ],
        )
        .pattern(
            "Star",
            vec![
                (3, 0), (2, 1), (4, 1), (1, 2), (2, 2), (4, 2), (5, 2), (2, 3), (4, 3), (3, 4),
            ],
        )
        .pattern(
            "HWSS Factory",
            vec![
                (0, 4), (0, 5), (1, 4), (1, 5), (10, 4), (10, 5), (10, 6), (11, 3), (11, 7),
                (12, 2), (12, 8), (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
                (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
                (22, 5), (24, 0), (24, 1), (24, 5), (24, 6), (34, 2), (34, 3), (35, 2), (35, 3),
                (41, 7), (42, 7), (41, 8), (43, 8), (43, 9), (42, 10), (43, 10),
            ],
        )
        .pattern("Glider Eater", GLIDER_EATER.to_vec())
        .pattern(
            "Pufferfish",
            vec![
                (5, 0), (6, 0), (7, 0), (9, 0), (10, 0), (11, 0), (4, 1), (8, 1), (12, 1), (3, 2),
                (4, 2), (8, 2), (12, 2), (13, 2), (2, 3), (4, 3), (8, 3), (12, 3), (14, 3), (2, 4),
                (6, 4), (10, 4), (14, 4), (2, 5), (14, 5), (2, 6), (3, 6), (7, 6), (9, 6), (13, 6),
                (14, 6), (3, 7), (7, 7), (9, 7), (13, 7), (4, 8), (5, 8), (6, 8), (10, 8), (11, 8),
                (12, 8),
            ],
        )
        .pattern("Breeder 1", breeder_1())
        .pattern("Multi-Engine Spaceship Factory", spaceship_factory())
        .pattern(
            "Simple Computer Memory",
            vec![
                (0, 0), (1, 0), (0, 1), (1, 1), (10, 0), (11, 0), (10, 1), (11, 1), (20, 0),
                (21, 0), (20, 1), (21, 1), (30, 0), (31, 0), (30, 1), (31, 1), (5, 10), (6, 10),
                (7, 10), (7, 9), (6, 8), (15, 10), (16, 10), (17, 10), (15, 9), (16, 8),
            ],
        )
        .pattern(
            "AND Gate",
            vec![
                (0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (10, 10), (11, 10), (12, 10), (10, 11),
                (12, 11), (20, 20), (21, 20), (22, 20), (20, 21), (22, 21), (15, 15), (16, 15),
                (15, 16), (16, 16), (13, 13), (14, 13), (12, 14), (15, 14), (12, 15), (12, 16),
                (13, 17), (14, 17),
            ],
        )
        .pattern("Turing Machine", turing_machine())
        .pattern("Prime Number Generator", prime_number_generator())
        .pattern("Quad-Gun", quad_gun())
        .pattern(
            "3D Illusion",
            vec![
                (30, 25), (31, 25), (30, 26), (28, 28), (29, 28), (28, 29), (25, 29), (26, 29),
                (25, 30), (22, 28), (23, 28), (22, 29), (21, 25), (22, 25), (21, 26), (22, 22),
                (23, 22), (22, 23), (25, 21), (26, 21), (25, 22), (28, 22), (29, 22), (28, 23),
                (35, 25), (36, 25), (35, 26), (32, 32), (33, 32), (32, 33), (25, 34), (26, 34),
                (25, 35), (18, 32), (19, 32), (18, 33), (16, 25), (17, 25), (16, 26), (18, 18),
                (19, 18), (18, 19), (25, 16), (26, 16), (25, 17), (32, 18), (33, 18), (32, 19),
                (40, 25), (41, 25), (40, 26), (35, 35), (36, 35), (35, 36), (25, 39), (26, 39),
                (25, 40), (15, 35), (16, 35), (15, 36), (11, 25), (12, 25), (11, 26), (15, 15),
                (16, 15), (15, 16), (25, 11), (26, 11), (25, 12), (35, 15), (36, 15), (35, 16),
                (45, 25), (46, 25), (45, 26), (39, 39), (40, 39), (39, 40), (25, 44), (26, 44),
                (25, 45), (11, 39), (12, 39), (11, 40), (6, 25), (7, 25), (6, 26), (11, 11),
                (12, 11), (11, 12), (25, 6), (26, 6), (25, 7), (39, 11), (40, 11), (39, 12),
                (50, 25), (51, 25), (50, 26), (42, 42), (43, 42), (42, 43), (25, 49), (26, 49),
                (25, 50), (8, 42), (9, 42), (8, 43), (1, 25), (2, 25), (1, 26), (8, 8), (9, 8),
                (8, 9), (25, 1), (26, 1), (25, 2), (42, 8), (43, 8), (42, 9),
            ],
        )
        .pattern("Replicator", replicator())
        .pattern("Mega Gun Array", mega_gun_array())
        .pattern("Universal Computer", universal_computer())
        .pattern(
            "Running Glider Team",
            vec![
                (45, 25), (46, 25), (47, 25), (47, 24), (46, 23), (39, 39), (40, 40), (41, 39),
                (39, 41), (41, 41), (25, 44), (25, 45), (25, 46), (24, 46), (23, 45), (11, 39),
                (10, 40), (9, 39), (11, 41), (9, 41), (6, 25), (5, 25), (4, 25), (4, 26), (5, 27),
                (11, 11), (10, 10), (9, 11), (11, 9), (9, 9), (25, 6), (25, 5), (25, 4), (26, 4),
                (27, 5), (39, 11), (40, 10), (41, 11), (39, 9), (41, 9),
            ],
        )
        .category("Still Lifes", &["Block", "Beehive", "Loaf", "Boat", "Tub"])
        .category(
            "Oscillators",
            &[
                "Blinker", "Toad", "Beacon", "Pulsar", "Pentadecathlon", "Clock", "Figure 8",
                "Queen Bee Shuttle", "Max",
            ],
        )
        .category(
            "Spaceships",
            &["Glider", "LWSS", "MWSS", "HWSS", "Weekender", "Copperhead"],
        )
        .category(
            "Guns & Puffers",
            &[
                "Glider Gun", "Simkin Glider Gun", "B-heptomino Puffer", "HWSS Factory",
                "Pufferfish", "Spacefiller", "Quad-Gun", "Mega Gun Array",
            ],
        )
        .category(
            "Methuselahs",
            &[
                "R-pentomino", "Diehard", "Acorn", "Brain", "Pi-heptomino", "Thunderbird",
                "Switch Engine", "3D Illusion",
            ],
        )
        .category(
            "Special",
            &[
                "Garden of Eden", "Cross", "Star", "Glider Eater", "Running Glider Team",
                "Replicator",
            ],
        )
        .category("Complex Growth", &["Breeder 1", "Multi-Engine Spaceship Factory"])
        .category(
            "Computational",
            &[
                "Simple Computer Memory", "AND Gate", "Turing Machine", "Prime Number Generator",
                "Universal Computer",
            ],
        )
}

/// Five puffer engines in a column, and three guns beside them.
#[rustfmt::skip]
fn breeder_1() -> Vec<Coord> {
    static PUFFER: [Coord; 11] = [
        (0, 0), (1, 0), (2, 0), (0, 1), (3, 1), (0, 2), (4, 2), (0, 3), (4, 3), (1, 4), (3, 4),
    ];
    static GUN: [Coord; 18] = [
        (10, 0), (11, 0), (10, 1), (11, 1),
        (20, 2), (21, 2), (19, 3), (23, 3), (18, 4), (24, 4),
        (18, 5), (24, 5), (21, 5), (19, 6), (23, 6), (20, 7), (21, 7), (22, 7),
    ];
    let puffers = (0..5).flat_map(|i| translate(&PUFFER, 0, i * 20));
    let guns = (0..3).flat_map(|i| translate(&GUN, 0, i * 25));
    puffers.chain(guns).collect()
}

/// Three glider guns, with a reflector and a converter for each.
#[rustfmt::skip]
fn spaceship_factory() -> Vec<Coord> {
    static REFLECTOR: [Coord; 9] = [
        (0, 0), (1, 0), (2, 0), (0, 1), (3, 1), (0, 2), (3, 2), (1, 3), (2, 3),
    ];
    static CONVERTER: [Coord; 11] = [
        (0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (4, 2), (0, 3), (3, 3), (1, 4), (2, 4),
    ];
    let mut cells: Vec<Coord> = [(0, 0), (50, 20), (25, 40)]
        .iter()
        .flat_map(|&(dx, dy)| translate(&GLIDER_GUN, dx, dy))
        .collect();
    for &(x, y) in &[(40, 10), (90, 30), (65, 50)] {
        cells.extend(translate(&REFLECTOR, x, y));
        cells.extend(translate(&CONVERTER, x + 15, y + 5));
    }
    cells
}

/// Ten tape blocks, a head, and a program stream.
#[rustfmt::skip]
fn turing_machine() -> Vec<Coord> {
    let mut cells: Vec<Coord> = (0..10).flat_map(|i| block(i * 5, 0)).collect();
    cells.extend_from_slice(&[
        (20, 10), (21, 10), (22, 10),
        (20, 11), (22, 11),
        (20, 12), (21, 12), (22, 12),
    ]);
    for i in 0..5 {
        cells.extend_from_slice(&[(30 + i, 20), (31 + i, 21), (30 + i, 22)]);
    }
    cells
}

/// A row of counter blocks with connecting cells, and a control unit.
#[rustfmt::skip]
fn prime_number_generator() -> Vec<Coord> {
    let mut cells: Vec<Coord> = (0..5)
        .flat_map(|i| {
            let x = i * 10;
            let [a, b, c, d] = block(x, 0);
            [a, b, c, d, (x + 5, 5), (x + 6, 6), (x + 4, 6)]
        })
        .collect();
    cells.extend_from_slice(&[
        (0, 20), (1, 20), (2, 20),
        (0, 21), (2, 21),
        (0, 22), (1, 22), (2, 22),
        (10, 25), (11, 25), (10, 26), (11, 26),
        (20, 25), (21, 25), (22, 25),
        (20, 26), (22, 26),
        (20, 27), (21, 27), (22, 27),
    ]);
    cells
}

/// Four glider guns, rotated by 0, 90, 180 and 270 degrees.
fn quad_gun() -> Vec<Coord> {
    let rotations: [fn(Coord) -> Coord; 4] = [
        |(x, y)| (x, y),
        |(x, y)| (y, 40 - x),
        |(x, y)| (40 - x, 40 - y),
        |(x, y)| (40 - y, x),
    ];
    rotations
        .iter()
        .flat_map(|rotate| GLIDER_GUN.iter().map(move |&cell| rotate(cell)))
        .collect()
}

/// Two copies of the same shape.
#[rustfmt::skip]
fn replicator() -> Vec<Coord> {
    static BASE: [Coord; 12] = [
        (0, 0), (1, 0), (0, 1), (2, 1), (2, 2), (3, 2),
        (1, 3), (2, 3), (3, 3), (4, 3), (0, 4), (4, 4),
    ];
    translate(&BASE, 0, 0).chain(translate(&BASE, 10, 10)).collect()
}

/// A 3x3 array of glider guns, and eight eaters.
#[rustfmt::skip]
fn mega_gun_array() -> Vec<Coord> {
    let mut cells: Vec<Coord> = (0..3)
        .flat_map(|i| (0..3).map(move |j| (i * 50, j * 50)))
        .flat_map(|(dx, dy)| translate(&GLIDER_GUN, dx, dy))
        .collect();
    for &(x, y) in &[
        (45, 15), (95, 15), (145, 15),
        (45, 65), (145, 65),
        (45, 115), (95, 115), (145, 115),
    ] {
        cells.extend(translate(&GLIDER_EATER, x, y));
    }
    cells
}

/// Memory blocks, a processing unit, a dotted pathway and an output register.
#[rustfmt::skip]
fn universal_computer() -> Vec<Coord> {
    let mut cells: Vec<Coord> = (0..10).flat_map(|i| block(i * 5, 0)).collect();
    cells.extend_from_slice(&[
        (20, 20), (21, 20), (22, 20),
        (20, 21), (22, 21),
        (20, 22), (21, 22), (22, 22),
        (25, 20), (26, 20), (27, 20),
        (25, 21), (27, 21),
        (25, 22), (26, 22), (27, 22),
    ]);
    cells.extend((0..15).filter(|i| i % 3 != 0).map(|i| (i + 5, 10)));
    cells.extend_from_slice(&[
        (40, 40), (41, 40), (42, 40), (40, 41), (42, 41), (40, 42), (41, 42), (42, 42),
    ]);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(name: &str) -> Vec<Coord> {
        let catalog = catalog().build().unwrap();
        catalog.get(name).unwrap().cells().to_vec()
    }

    #[test]
    fn composite_sizes() {
        assert_eq!(cells("Breeder 1").len(), 109);
        assert_eq!(cells("Multi-Engine Spaceship Factory").len(), 168);
        assert_eq!(cells("Turing Machine").len(), 63);
        assert_eq!(cells("Prime Number Generator").len(), 55);
        assert_eq!(cells("Quad-Gun").len(), 144);
        assert_eq!(cells("Replicator").len(), 24);
        assert_eq!(cells("Mega Gun Array").len(), 388);
        assert_eq!(cells("Universal Computer").len(), 74);
    }

    #[test]
    fn quad_gun_rotations() {
        let cells = cells("Quad-Gun");
        assert_eq!(&cells[..36], &GLIDER_GUN[..]);
        // The first cell of the gun, (0, 4), in each rotation.
        assert_eq!(cells[36], (4, 40));
        assert_eq!(cells[72], (40, 36));
        assert_eq!(cells[108], (36, 0));
    }

    #[test]
    fn flattened_patterns() {
        let illusion = cells("3D Illusion");
        assert_eq!(illusion.len(), 120);
        assert_eq!(&illusion[..3], &[(30, 25), (31, 25), (30, 26)]);
        assert!(illusion.contains(&(21, 25)));
        let team = cells("Running Glider Team");
        assert_eq!(team.len(), 40);
        assert_eq!(&team[..5], &[(45, 25), (46, 25), (47, 25), (47, 24), (46, 23)]);
    }

    #[test]
    fn every_pattern_has_cells() {
        let catalog = catalog().build().unwrap();
        assert!(catalog.patterns().all(|p| !p.is_empty()));
    }
}
