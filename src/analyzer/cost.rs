/*!
# Cost-class algebra

Symbolic growth rates and the three operations every composition rule is
expressed with: [`dominant`], [`multiply`] and [`add`].

Known classes are totally ordered by their position in [`LATTICE`]. Products
that do not simplify to a lattice member stay symbolic (`"A * B"`) and sort
above every known class.
*/

use std::fmt;

/// Symbolic cost class
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CostClass {
    /// `1`
    Constant,
    /// `log n`
    Logarithmic,
    /// `n`
    Linear,
    /// `n log n`
    Linearithmic,
    /// `n^2`
    Quadratic,
    /// `n^3`
    Cubic,
    /// `2^n`
    Exponential,
    /// Unsimplified product, rendered `A * B`
    Product(Box<CostClass>, Box<CostClass>),
}

/// Known classes from cheapest to most expensive
pub const LATTICE: [CostClass; 7] = [
    CostClass::Constant,
    CostClass::Logarithmic,
    CostClass::Linear,
    CostClass::Linearithmic,
    CostClass::Quadratic,
    CostClass::Cubic,
    CostClass::Exponential,
];

impl CostClass {
    /// Position in [`LATTICE`]; products rank after every known class
    pub fn rank(&self) -> usize {
        match self {
            CostClass::Constant => 0,
            CostClass::Logarithmic => 1,
            CostClass::Linear => 2,
            CostClass::Linearithmic => 3,
            CostClass::Quadratic => 4,
            CostClass::Cubic => 5,
            CostClass::Exponential => 6,
            CostClass::Product(..) => LATTICE.len(),
        }
    }

    /// Looks up a known class by its rendered name
    pub fn from_name(name: &str) -> Option<Self> {
        LATTICE.iter().find(|class| class.to_string() == name.trim()).cloned()
    }

    // Products of equal rank are told apart by their rendering
    fn sort_key(&self) -> (usize, String) {
        match self {
            CostClass::Product(..) => (self.rank(), self.to_string()),
            known => (known.rank(), String::new()),
        }
    }
}

impl fmt::Display for CostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostClass::Constant => write!(f, "1"),
            CostClass::Logarithmic => write!(f, "log n"),
            CostClass::Linear => write!(f, "n"),
            CostClass::Linearithmic => write!(f, "n log n"),
            CostClass::Quadratic => write!(f, "n^2"),
            CostClass::Cubic => write!(f, "n^3"),
            CostClass::Exponential => write!(f, "2^n"),
            CostClass::Product(a, b) => write!(f, "{} * {}", a, b),
        }
    }
}

impl Default for CostClass {
    fn default() -> Self {
        CostClass::Constant
    }
}

/// Most expensive class among the inputs; `1` for an empty input
pub fn dominant<'a, I>(classes: I) -> CostClass
where
    I: IntoIterator<Item = &'a CostClass>,
{
    let mut best: Option<(&CostClass, (usize, String))> = None;
    for class in classes {
        let key = class.sort_key();
        let replace = match &best {
            Some((_, current)) => key > *current,
            None => true,
        };
        if replace {
            best = Some((class, key));
        }
    }
    best.map(|(class, _)| class.clone())
        .unwrap_or(CostClass::Constant)
}

/// Symbolic product of two classes
pub fn multiply(a: &CostClass, b: &CostClass) -> CostClass {
    use CostClass::*;

    match (a, b) {
        (Constant, other) | (other, Constant) => other.clone(),
        (Linear, Logarithmic) | (Logarithmic, Linear) => Linearithmic,
        (Linear, Linear) => Quadratic,
        (Quadratic, Linear) | (Linear, Quadratic) => Cubic,
        _ => Product(Box::new(a.clone()), Box::new(b.clone())),
    }
}

/// Sum of two costs, dominated by the larger term
pub fn add(a: &CostClass, b: &CostClass) -> CostClass {
    dominant([a, b])
}
