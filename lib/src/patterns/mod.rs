//! Named patterns used to seed the lattice.

mod builtin;

use crate::{
    cells::{BoundingBox, Coord},
    error::Error,
};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// A named shape, as coordinates relative to an arbitrary origin.
///
/// Placing a pattern always creates newborn cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<Coord>,
}

impl Pattern {
    /// Creates a new pattern.
    pub fn new<S: ToString>(name: S, cells: Vec<Coord>) -> Self {
        Pattern {
            name: name.to_string(),
            cells,
        }
    }

    /// The name, which identifies the pattern in a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The relative coordinates of the cells.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pattern has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding box of the relative coordinates.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(self.cells.iter().copied())
    }

    /// Number of columns of the bounding box.
    pub fn width(&self) -> u64 {
        self.bounding_box().map_or(0, |bbox| bbox.width())
    }

    /// Number of rows of the bounding box.
    pub fn height(&self) -> u64 {
        self.bounding_box().map_or(0, |bbox| bbox.height())
    }

    /// The cells of the pattern, moved so that the
    /// [center](BoundingBox::center) of its bounding box lands on `(cx, cy)`.
    ///
    /// Cells that would leave the lattice are dropped.
    pub fn placed(&self, cx: i64, cy: i64) -> impl Iterator<Item = Coord> + '_ {
        let offset = self.bounding_box().map(|bbox| {
            let (mx, my) = bbox.center();
            (i128::from(cx) - i128::from(mx), i128::from(cy) - i128::from(my))
        });
        self.cells.iter().filter_map(move |&(x, y)| {
            let (dx, dy) = offset?;
            let x = i64::try_from(i128::from(x) + dx).ok()?;
            let y = i64::try_from(i128::from(y) + dy).ok()?;
            Some((x, y))
        })
    }
}

/// A named list of pattern names, for browsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    name: String,
    patterns: Vec<String>,
}

impl Category {
    /// The name of the category.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the patterns in this category.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// A read-only collection of patterns, grouped into categories.
#[derive(Clone, Debug, Default)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
    index: HashMap<String, usize>,
    categories: Vec<Category>,
}

static BUILTIN: Lazy<PatternCatalog> = Lazy::new(|| {
    builtin::catalog()
        .build()
        .expect("the built-in pattern catalog is consistent")
});

impl PatternCatalog {
    /// The built-in catalog.
    ///
    /// It is built on first use, and shared by the whole process.
    pub fn builtin() -> &'static PatternCatalog {
        &BUILTIN
    }

    /// Finds a pattern by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.index.get(name).map(|&i| &self.patterns[i])
    }

    /// Whether there is a pattern with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All patterns, in the order they were added.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether there are no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The categories, in order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category a pattern is listed in first.
    pub fn category_of(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.patterns.iter().any(|p| p == name))
    }

    /// The cells of a pattern centered at `(cx, cy)`.
    ///
    /// See [`Pattern::placed`].
    pub fn place(&self, name: &str, cx: i64, cy: i64) -> Result<Vec<Coord>, Error> {
        match self.get(name) {
            Some(pattern) => Ok(pattern.placed(cx, cy).collect()),
            None => {
                debug!("Unknown pattern {:?}", name);
                Err(Error::PatternNotFound(name.to_string()))
            }
        }
    }
}

/// Assembles a [`PatternCatalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    patterns: Vec<Pattern>,
    categories: Vec<Category>,
}

impl CatalogBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern.
    pub fn pattern<S: ToString>(mut self, name: S, cells: Vec<Coord>) -> Self {
        self.patterns.push(Pattern::new(name, cells));
        self
    }

    /// Adds a category listing the given patterns.
    pub fn category<S: ToString>(mut self, name: S, patterns: &[&str]) -> Self {
        self.categories.push(Category {
            name: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    /// Checks the catalog and builds it.
    ///
    /// Every pattern name must be unique, every category must only list
    /// known patterns, and every pattern must be listed somewhere.
    pub fn build(self) -> Result<PatternCatalog, Error> {
        let mut index = HashMap::with_capacity(self.patterns.len());
        for (i, pattern) in self.patterns.iter().enumerate() {
            if index.insert(pattern.name.clone(), i).is_some() {
                return Err(Error::DuplicatePattern(pattern.name.clone()));
            }
        }
        let mut listed = HashSet::new();
        for category in &self.categories {
            for name in &category.patterns {
                if !index.contains_key(name) {
                    return Err(Error::UnknownCategoryMember(
                        category.name.clone(),
                        name.clone(),
                    ));
                }
                listed.insert(name.as_str());
            }
        }
        if let Some(pattern) = self
            .patterns
            .iter()
            .find(|p| !listed.contains(p.name.as_str()))
        {
            return Err(Error::UncategorizedPattern(pattern.name.clone()));
        }
        Ok(PatternCatalog {
            patterns: self.patterns,
            index,
            categories: self.categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builtin_catalog() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.len(), 49);
        let names: Vec<_> = catalog.categories().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Still Lifes",
                "Oscillators",
                "Spaceships",
                "Guns & Puffers",
                "Methuselahs",
                "Special",
                "Complex Growth",
                "Computational",
            ]
        );
        assert_eq!(
            catalog.categories()[0].patterns(),
            &["Block", "Beehive", "Loaf", "Boat", "Tub"]
        );
        assert_eq!(
            catalog.category_of("Glider").map(Category::name),
            Some("Spaceships")
        );
    }

    #[test]
    fn place_unknown_pattern() {
        assert_eq!(
            PatternCatalog::builtin().place("Unicorn", 0, 0),
            Err(Error::PatternNotFound(String::from("Unicorn")))
        );
    }

    #[test]
    fn placement_rounds_toward_the_lower_cell() {
        let catalog = PatternCatalog::builtin();
        // The block spans 0..=1 on both axes, so its center is (0, 0).
        let mut cells = catalog.place("Block", 10, 10).unwrap();
        cells.sort_unstable();
        assert_eq!(cells, vec![(10, 10), (10, 11), (11, 10), (11, 11)]);
        // The glider spans -1..=1 and 0..=2, so its center is (0, 1).
        let mut cells = catalog.place("Glider", 0, 0).unwrap();
        cells.sort_unstable();
        assert_eq!(cells, vec![(-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn empty_pattern_places_nothing() {
        let pattern = Pattern::new("Nothing", Vec::new());
        assert_eq!(pattern.placed(3, 4).count(), 0);
        assert_eq!(pattern.width(), 0);
    }

    #[test]
    fn builder_checks_names() {
        let duplicate = CatalogBuilder::new()
            .pattern("Dot", vec![(0, 0)])
            .pattern("Dot", vec![(1, 1)])
            .category("Dots", &["Dot"])
            .build();
        assert_eq!(
            duplicate.err(),
            Some(Error::DuplicatePattern(String::from("Dot")))
        );

        let unknown = CatalogBuilder::new()
            .pattern("Dot", vec![(0, 0)])
            .category("Dots", &["Dot", "Dash"])
            .build();
        assert_eq!(
            unknown.err(),
            Some(Error::UnknownCategoryMember(
                String::from("Dots"),
                String::from("Dash")
            ))
        );

        let uncategorized = CatalogBuilder::new()
            .pattern("Dot", vec![(0, 0)])
            .pattern("Dash", vec![(0, 0), (1, 0)])
            .category("Dots", &["Dot"])
            .build();
        assert_eq!(
            uncategorized.err(),
            Some(Error::UncategorizedPattern(String::from("Dash")))
        );
    }

    proptest! {
        /// The floor-midpoint of the placed pattern is the requested center.
        #[test]
        fn placement_is_centered(
            cx in -1000..1000_i64,
            cy in -1000..1000_i64,
            index in 0..49_usize,
        ) {
            let catalog = PatternCatalog::builtin();
            let pattern = catalog.patterns().nth(index).unwrap();
            let placed = BoundingBox::of(pattern.placed(cx, cy)).unwrap();
            prop_assert_eq!(placed.center(), (cx, cy));
            prop_assert_eq!(placed.width(), pattern.width());
            prop_assert_eq!(placed.height(), pattern.height());
        }
    }
}
