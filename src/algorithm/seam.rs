//! Minimal cut path through an overlap strip

/// Chosen cut offset for every position along the strip
///
/// Consecutive offsets differ by at most one, so the cut is a connected
/// boundary rather than an independent per-position minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    cuts: Vec<usize>,
    width: usize,
    cost: f64,
}

impl Seam {
    /// Create a zero-cost seam cutting at offset 0 for `length` positions
    pub fn new(length: usize, width: usize) -> Self {
        Self {
            cuts: vec![0; length],
            width,
            cost: 0.0,
        }
    }

    /// Build a seam from explicit cut offsets
    ///
    /// Returns `None` if any offset is outside `0..width` or the path jumps
    /// by more than one offset between neighbouring positions.
    pub fn from_cuts(cuts: Vec<usize>, width: usize, cost: f64) -> Option<Self> {
        let seam = Self { cuts, width, cost };
        (seam.cuts.iter().all(|&cut| cut < width) && seam.is_continuous()).then_some(seam)
    }

    /// Cut offset at every position, indexed by position
    pub fn cuts(&self) -> &[usize] {
        &self.cuts
    }

    /// Cut offset at `position`
    pub fn cut(&self, position: usize) -> Option<usize> {
        self.cuts.get(position).copied()
    }

    /// Number of positions along the seam
    pub const fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Whether the seam has no positions
    pub const fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Number of candidate offsets the seam was chosen from
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total local error along the path
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether every step moves by at most one offset
    pub fn is_continuous(&self) -> bool {
        self.cuts.windows(2).all(|pair| match pair {
            [previous, next] => previous.abs_diff(*next) <= 1,
            _ => true,
        })
    }

    pub(crate) fn cuts_mut(&mut self) -> &mut [usize] {
        &mut self.cuts
    }

    pub(crate) const fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }
}
