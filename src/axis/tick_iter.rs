/// A grid point of an axis together with its normalized display position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<T> {
    /// Real-world value at the tick.
    pub value: T,
    /// Normalized position in `[0, 1]` across the zoomed view.
    pub position: T,
}

/// Iterator over the ticks of an axis map.
pub struct TickIter<T> {
    inner: Box<dyn Iterator<Item = Tick<T>> + 'static>,
}

impl<T: 'static> TickIter<T> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Tick<T>> + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// Creates a `TickIter` from a vector of ticks.
    ///
    /// # Examples
    ///
    /// ```
    /// use specgrid::{Tick, TickIter};
    ///
    /// let ticks = vec![
    ///     Tick { value: 0.0, position: 0.0 },
    ///     Tick { value: 50.0, position: 0.5 },
    ///     Tick { value: 100.0, position: 1.0 },
    /// ];
    ///
    /// let iter = TickIter::from_vec(ticks);
    /// assert_eq!(iter.count(), 3);
    /// ```
    pub fn from_vec(vec: Vec<Tick<T>>) -> Self {
        Self::new(vec.into_iter())
    }

    /// Creates a `TickIter` that produces no ticks.
    ///
    /// ```
    /// use specgrid::TickIter;
    ///
    /// assert_eq!(TickIter::<f64>::empty().count(), 0);
    /// ```
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<T> Iterator for TickIter<T> {
    type Item = Tick<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
