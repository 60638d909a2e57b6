/*!
# Per-node complexity result
*/

use super::cost::CostClass;

/// Best/worst/average cost of one subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityResult {
    best: CostClass,
    worst: CostClass,
    avg: CostClass,
    has_early_exit: bool,
}

impl ComplexityResult {
    /// `best ≤ worst` must hold in lattice order
    pub fn bounded(best: CostClass, worst: CostClass) -> Self {
        debug_assert!(
            best.rank() <= worst.rank(),
            "best case {} exceeds worst case {}",
            best,
            worst
        );
        Self {
            avg: worst.clone(),
            best,
            worst,
            has_early_exit: false,
        }
    }

    /// Same class for best and worst case
    pub fn uniform(class: CostClass) -> Self {
        Self::bounded(class.clone(), class)
    }

    /// `O(1)` without any exit signal
    pub fn identity() -> Self {
        Self::uniform(CostClass::Constant)
    }

    /// `return` / `break`: constant cost, leaves the enclosing construct
    pub fn terminal() -> Self {
        Self::identity().with_early_exit(true)
    }

    pub fn with_early_exit(mut self, has_early_exit: bool) -> Self {
        self.has_early_exit = has_early_exit;
        self
    }

    pub fn best(&self) -> &CostClass {
        &self.best
    }

    pub fn worst(&self) -> &CostClass {
        &self.worst
    }

    pub fn avg(&self) -> &CostClass {
        &self.avg
    }

    pub fn has_early_exit(&self) -> bool {
        self.has_early_exit
    }

    /// Best and worst case coincide, so Θ exists
    pub fn is_tight(&self) -> bool {
        self.best == self.worst
    }
}

impl Default for ComplexityResult {
    fn default() -> Self {
        Self::identity()
    }
}
